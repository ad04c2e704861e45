//! Dice pools with an advantage/disadvantage mechanic.
//!
//! Advantage rolls extra dice and keeps the highest; disadvantage rolls extra
//! dice and keeps the lowest. The two cancel one-for-one before any dice are
//! rolled, so `advantage = 2, disadvantage = 1` behaves exactly like a single
//! point of advantage.

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, Result};
use crate::source::DiceSource;

/// Advantage and disadvantage applied to a roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Advantage {
    pub advantage: u32,
    pub disadvantage: u32,
}

impl Advantage {
    pub const NONE: Self = Self {
        advantage: 0,
        disadvantage: 0,
    };

    pub fn new(advantage: u32, disadvantage: u32) -> Self {
        Self {
            advantage,
            disadvantage,
        }
    }

    /// Net advantage after cancellation (negative means disadvantage)
    pub fn net(&self) -> i64 {
        i64::from(self.advantage) - i64::from(self.disadvantage)
    }
}

/// The outcome of one pool roll.
///
/// `dice` holds every die rolled, in the order rolled, including any that were
/// dropped by advantage or disadvantage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    pub total: u32,
    pub dice: Vec<u32>,
    /// Extra dice dropped from the bottom after cancellation
    pub advantage_used: u32,
    /// Extra dice dropped from the top after cancellation
    pub disadvantage_used: u32,
}

impl DiceRollResult {
    /// Number of dice that contributed to the total
    pub fn kept_count(&self) -> usize {
        self.dice.len() - (self.advantage_used + self.disadvantage_used) as usize
    }

    /// Whether every kept die shows its highest face
    pub fn is_maximum(&self, sides: u32) -> bool {
        self.total == sides * self.kept_count() as u32
    }
}

/// Roll `count` independent dice with `sides` faces each.
///
/// # Errors
/// Returns [`DiceError`] when `count` or `sides` is zero.
pub fn roll_pool<D: DiceSource>(dice: &mut D, count: u32, sides: u32) -> Result<Vec<u32>> {
    validate(count, sides)?;
    Ok(raw_pool(dice, count, sides))
}

/// Roll a single die with `sides` faces.
///
/// # Errors
/// Returns [`DiceError::InvalidSides`] when `sides` is zero.
pub fn roll_die<D: DiceSource>(dice: &mut D, sides: u32) -> Result<u32> {
    validate(1, sides)?;
    Ok(dice.roll_die(sides))
}

/// Roll a pool with advantage/disadvantage.
///
/// With net advantage `n > 0`, `count + n` dice are rolled and the lowest `n`
/// dropped. With net disadvantage, `count + |n|` dice are rolled and the
/// highest `|n|` dropped. The total always lies in `[count, count × sides]`.
///
/// # Errors
/// Returns [`DiceError`] when `count` or `sides` is zero.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use dice::roll_with_advantage;
///
/// let mut rng = ChaChaRng::seed_from_u64(7);
/// let roll = roll_with_advantage(&mut rng, 2, 6, 1, 0).unwrap();
/// assert_eq!(roll.dice.len(), 3);
/// assert!((2..=12).contains(&roll.total));
/// ```
pub fn roll_with_advantage<D: DiceSource>(
    dice: &mut D,
    count: u32,
    sides: u32,
    advantage: u32,
    disadvantage: u32,
) -> Result<DiceRollResult> {
    validate(count, sides)?;
    Ok(resolve(
        dice,
        count,
        sides,
        Advantage::new(advantage, disadvantage),
    ))
}

/// Roll 2D6
pub fn roll_2d6<D: DiceSource>(dice: &mut D, edge: Advantage) -> DiceRollResult {
    resolve(dice, 2, 6, edge)
}

/// Roll 3D6
pub fn roll_3d6<D: DiceSource>(dice: &mut D, edge: Advantage) -> DiceRollResult {
    resolve(dice, 3, 6, edge)
}

/// Roll 5D6
pub fn roll_5d6<D: DiceSource>(dice: &mut D, edge: Advantage) -> DiceRollResult {
    resolve(dice, 5, 6, edge)
}

fn validate(count: u32, sides: u32) -> Result<()> {
    if count == 0 {
        return Err(DiceError::InvalidDiceCount(count));
    }
    if sides == 0 {
        return Err(DiceError::InvalidSides(sides));
    }
    Ok(())
}

fn raw_pool<D: DiceSource>(dice: &mut D, count: u32, sides: u32) -> Vec<u32> {
    (0..count).map(|_| dice.roll_die(sides)).collect()
}

/// Roll and resolve a pool whose shape has already been validated.
fn resolve<D: DiceSource>(
    dice: &mut D,
    count: u32,
    sides: u32,
    edge: Advantage,
) -> DiceRollResult {
    let net = edge.net();
    let extra = net.unsigned_abs() as u32;
    let rolled = raw_pool(dice, count + extra, sides);

    let mut sorted = rolled.clone();
    if net >= 0 {
        // Ascending: the lowest `extra` dice sit at the front
        sorted.sort_unstable();
    } else {
        // Descending: the highest `extra` dice sit at the front
        sorted.sort_unstable_by(|a, b| b.cmp(a));
    }
    let total = sorted[extra as usize..].iter().sum();

    DiceRollResult {
        total,
        dice: rolled,
        advantage_used: if net > 0 { extra } else { 0 },
        disadvantage_used: if net < 0 { extra } else { 0 },
    }
}
