use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::d66::{D66Code, roll_d66};
use crate::error::DiceError;
use crate::source::ScriptedDice;

#[test]
fn d66_reads_tens_then_ones() {
    let mut dice = ScriptedDice::new([3, 5]);
    let code = roll_d66(&mut dice);

    assert_eq!(code.tens(), 3);
    assert_eq!(code.ones(), 5);
    assert_eq!(code.to_string(), "3-5");
}

#[test]
fn d66_index_covers_table() {
    let codes: Vec<D66Code> = D66Code::all().collect();

    assert_eq!(codes.len(), 36);
    for (i, code) in codes.iter().enumerate() {
        assert_eq!(code.index(), i);
        assert_eq!(D66Code::from_index(i).unwrap(), *code);
    }
    assert!(D66Code::from_index(36).is_err());
}

#[test]
fn d66_parses_both_notations() {
    assert_eq!("4-2".parse::<D66Code>().unwrap(), D66Code::new(4, 2).unwrap());
    assert_eq!("42".parse::<D66Code>().unwrap(), D66Code::new(4, 2).unwrap());
}

#[test]
fn d66_rejects_out_of_range_digits() {
    assert!(matches!(
        "7-1".parse::<D66Code>(),
        Err(DiceError::InvalidD66Code(_))
    ));
    assert!("0-3".parse::<D66Code>().is_err());
    assert!("123".parse::<D66Code>().is_err());
    assert!("x-1".parse::<D66Code>().is_err());
}

#[test]
fn d66_rolls_stay_in_domain() {
    let mut rng = ChaChaRng::seed_from_u64(11);
    for _ in 0..500 {
        let code = roll_d66(&mut rng);
        assert!(code.index() < 36);
    }
}

#[test]
fn d66_serializes_as_string() {
    let code = D66Code::new(6, 1).unwrap();
    let json = serde_json::to_string(&code).unwrap();
    assert_eq!(json, "\"6-1\"");

    let back: D66Code = serde_json::from_str(&json).unwrap();
    assert_eq!(back, code);
    assert!(serde_json::from_str::<D66Code>("\"9-9\"").is_err());
}
