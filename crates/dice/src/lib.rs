//! Dice mechanics for table-driven procedural generation.
//!
//! Every random decision in the generators is expressed as a dice roll so that
//! results can be recorded, replayed and compared against the lookup tables
//! they feed.

pub mod d66;
pub mod error;
pub mod provenance;
pub mod roll;
pub mod source;

#[cfg(test)]
mod d66_test;
#[cfg(test)]
mod source_test;

pub use d66::{D66Code, roll_d66};
pub use error::{DiceError, Result};
pub use provenance::{Provenance, RollRecord, RollValue};
pub use roll::{
    Advantage, DiceRollResult, roll_2d6, roll_3d6, roll_5d6, roll_die, roll_pool,
    roll_with_advantage,
};
pub use source::{DiceSource, ScriptedDice};
