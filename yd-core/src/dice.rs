//! Dice configuration: five validated face values.
//!
//! A `Dice` can only be built through the validating constructors below, so every
//! scorer downstream is total and never needs to re-check the input.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Number of dice in a hand.
pub const NUM_DICE: usize = 5;
/// Lowest face on a six-sided die.
pub const MIN_FACE: u8 = 1;
/// Highest face on a six-sided die.
pub const MAX_FACE: u8 = 6;

/// Invalid dice configuration handed in by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceError {
    #[error("expected {expected} dice, got {got}")]
    WrongLength { expected: usize, got: usize },
    #[error("die {index} shows {face}; faces must be in {}..={}", MIN_FACE, MAX_FACE)]
    FaceOutOfRange { index: usize, face: i64 },
}

/// A hand of five six-sided dice. Order is kept as given but no rule depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Dice([u8; NUM_DICE]);

impl Dice {
    /// Validate five faces.
    pub fn new(faces: [u8; NUM_DICE]) -> Result<Self, DiceError> {
        for (index, &face) in faces.iter().enumerate() {
            if !(MIN_FACE..=MAX_FACE).contains(&face) {
                return Err(DiceError::FaceOutOfRange {
                    index,
                    face: face as i64,
                });
            }
        }
        Ok(Self(faces))
    }

    /// Wrap faces already known to be in range.
    pub(crate) fn from_valid(faces: [u8; NUM_DICE]) -> Self {
        debug_assert!(faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)));
        Self(faces)
    }

    /// Validate a slice of parsed integers (e.g. command-line values).
    pub fn from_faces(faces: &[i64]) -> Result<Self, DiceError> {
        if faces.len() != NUM_DICE {
            return Err(DiceError::WrongLength {
                expected: NUM_DICE,
                got: faces.len(),
            });
        }
        let mut out = [0u8; NUM_DICE];
        for (index, (&face, slot)) in faces.iter().zip(out.iter_mut()).enumerate() {
            if face < MIN_FACE as i64 || face > MAX_FACE as i64 {
                return Err(DiceError::FaceOutOfRange { index, face });
            }
            *slot = face as u8;
        }
        Ok(Self(out))
    }

    /// Faces in the order they were given.
    pub fn faces(&self) -> [u8; NUM_DICE] {
        self.0
    }

    /// Faces sorted ascending.
    pub fn sorted(&self) -> [u8; NUM_DICE] {
        let mut d = self.0;
        d.sort_unstable();
        d
    }

    /// Sum of all five faces.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&d| d as u32).sum()
    }

    /// Number of dice showing `face`.
    pub fn count(&self, face: u8) -> u8 {
        self.0.iter().filter(|&&d| d == face).count() as u8
    }
}

impl TryFrom<&[u8]> for Dice {
    type Error = DiceError;

    fn try_from(faces: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; NUM_DICE] = faces.try_into().map_err(|_| DiceError::WrongLength {
            expected: NUM_DICE,
            got: faces.len(),
        })?;
        Self::new(arr)
    }
}

impl TryFrom<[u8; NUM_DICE]> for Dice {
    type Error = DiceError;

    fn try_from(faces: [u8; NUM_DICE]) -> Result<Self, Self::Error> {
        Self::new(faces)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}, {e}]")
    }
}
