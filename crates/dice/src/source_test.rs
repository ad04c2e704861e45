use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::source::{DiceSource, ScriptedDice};

#[test]
fn seeded_rng_is_reproducible() {
    let mut a = ChaChaRng::seed_from_u64(99);
    let mut b = ChaChaRng::seed_from_u64(99);

    let rolls_a: Vec<u32> = (0..20).map(|_| a.roll_die(6)).collect();
    let rolls_b: Vec<u32> = (0..20).map(|_| b.roll_die(6)).collect();

    assert_eq!(rolls_a, rolls_b);
}

#[test]
fn rng_faces_stay_on_die() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    for _ in 0..1000 {
        let face = rng.roll_die(10);
        assert!((1..=10).contains(&face));
        let u = rng.unit();
        assert!((0.0..1.0).contains(&u));
    }
}

#[test]
fn scripted_dice_replays_in_order() {
    let mut dice = ScriptedDice::new([2, 4, 6]).with_units([0.25]);

    assert_eq!(dice.roll_die(6), 2);
    assert_eq!(dice.roll_die(6), 4);
    assert_eq!(dice.remaining(), 1);
    assert_eq!(dice.unit(), 0.25);
    assert_eq!(dice.unit(), 0.5);
}

#[test]
#[should_panic(expected = "exhausted")]
fn scripted_dice_panics_when_exhausted() {
    let mut dice = ScriptedDice::new([]);
    dice.roll_die(6);
}

#[test]
#[should_panic(expected = "not valid")]
fn scripted_dice_rejects_impossible_face() {
    let mut dice = ScriptedDice::new([7]);
    dice.roll_die(6);
}
