//! Random sources for dice rolls.

use std::collections::VecDeque;

use rand::Rng;

/// Anything that can roll a single die and draw a uniform sample.
///
/// Implemented for every [`rand::Rng`], so a seeded `ChaChaRng` gives
/// reproducible generation. [`ScriptedDice`] replays fixed values for tests
/// and for callers that want to force specific outcomes.
pub trait DiceSource {
    /// Roll one die, returning a face in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Draw a uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: Rng> DiceSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides)
    }

    fn unit(&mut self) -> f64 {
        self.random()
    }
}

/// A dice source that replays a fixed sequence of faces.
///
/// Uniform samples come from a separate queue and default to `0.5` once it is
/// empty, so tests only need to script the values they care about.
///
/// # Example
/// ```
/// use dice::{Advantage, ScriptedDice, roll_2d6};
///
/// let mut dice = ScriptedDice::new([6, 6]);
/// let roll = roll_2d6(&mut dice, Advantage::NONE);
/// assert_eq!(roll.total, 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u32>,
    units: VecDeque<f64>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            units: VecDeque::new(),
        }
    }

    /// Queue uniform samples returned by [`DiceSource::unit`] (builder pattern)
    pub fn with_units(mut self, units: impl IntoIterator<Item = f64>) -> Self {
        self.units.extend(units);
        self
    }

    /// Faces not yet consumed
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    /// # Panics
    /// Panics if the script is exhausted or the scripted face does not fit the die.
    fn roll_die(&mut self, sides: u32) -> u32 {
        let face = self
            .faces
            .pop_front()
            .unwrap_or_else(|| panic!("scripted dice exhausted while rolling a d{sides}"));
        assert!(
            (1..=sides).contains(&face),
            "scripted face {face} is not valid on a d{sides}"
        );
        face
    }

    fn unit(&mut self) -> f64 {
        self.units.pop_front().unwrap_or(0.5)
    }
}
