//! d66 codes: two six-sided dice read as a tens digit and a ones digit.
//!
//! A d66 roll is a table key with 36 possible values, never a sum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DiceError, Result};
use crate::source::DiceSource;

/// A two-digit d66 code such as `3-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct D66Code {
    tens: u8,
    ones: u8,
}

impl D66Code {
    /// Build a code from its digits.
    ///
    /// # Errors
    /// Returns [`DiceError::InvalidD66Code`] when either digit is outside 1-6.
    pub fn new(tens: u8, ones: u8) -> Result<Self> {
        if !(1..=6).contains(&tens) || !(1..=6).contains(&ones) {
            return Err(DiceError::InvalidD66Code(format!("{tens}-{ones}")));
        }
        Ok(Self { tens, ones })
    }

    pub fn tens(&self) -> u8 {
        self.tens
    }

    pub fn ones(&self) -> u8 {
        self.ones
    }

    /// Position of this code in a 36-entry table (`1-1` is 0, `6-6` is 35)
    pub fn index(&self) -> usize {
        (self.tens as usize - 1) * 6 + (self.ones as usize - 1)
    }

    /// Inverse of [`D66Code::index`]
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= 36 {
            return Err(DiceError::InvalidD66Code(format!("index {index}")));
        }
        Self::new((index / 6) as u8 + 1, (index % 6) as u8 + 1)
    }

    /// All 36 codes in table order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=6u8).flat_map(|tens| (1..=6u8).map(move |ones| Self { tens, ones }))
    }
}

/// Roll a d66 code.
pub fn roll_d66<D: DiceSource>(dice: &mut D) -> D66Code {
    let tens = dice.roll_die(6) as u8;
    let ones = dice.roll_die(6) as u8;
    D66Code { tens, ones }
}

impl fmt::Display for D66Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.tens, self.ones)
    }
}

impl FromStr for D66Code {
    type Err = DiceError;

    /// Accepts `"3-5"` or `"35"`.
    fn from_str(s: &str) -> Result<Self> {
        let digits: Vec<u8> = s
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<_>>()
            .ok_or_else(|| DiceError::InvalidD66Code(s.to_string()))?;

        match digits.as_slice() {
            [tens, ones] => Self::new(*tens, *ones),
            _ => Err(DiceError::InvalidD66Code(s.to_string())),
        }
    }
}

impl TryFrom<String> for D66Code {
    type Error = DiceError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<D66Code> for String {
    fn from(code: D66Code) -> Self {
        code.to_string()
    }
}
