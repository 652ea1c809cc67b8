//! Face tally: how many dice show each face 1..=6.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::dice::{Dice, MAX_FACE, MIN_FACE};

/// Per-face occurrence counts for one hand. Counts always sum to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceTally {
    /// counts[f - 1] = number of dice showing face f.
    counts: [u8; 6],
}

impl FaceTally {
    pub fn of(dice: &Dice) -> Self {
        let mut counts = [0u8; 6];
        for d in dice.faces() {
            counts[(d - 1) as usize] += 1;
        }
        Self { counts }
    }

    /// Count for `face`; 0 for anything outside 1..=6.
    pub fn count(&self, face: u8) -> u8 {
        if (MIN_FACE..=MAX_FACE).contains(&face) {
            self.counts[(face - 1) as usize]
        } else {
            0
        }
    }

    /// Largest count over all faces.
    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// True if some face occurs exactly `n` times.
    pub fn has_count(&self, n: u8) -> bool {
        self.counts.contains(&n)
    }

    /// Number of faces that occur at least once.
    pub fn distinct_faces(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Raw counts; index `f - 1` holds the count for face `f`.
    pub fn counts(&self) -> [u8; 6] {
        self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    /// `(face, count)` for faces 1..=6, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as u8 + 1, c))
    }
}

/// Tally the faces of `dice`.
pub fn tally_faces(dice: &Dice) -> FaceTally {
    FaceTally::of(dice)
}

// Serialized as {"1": n1, ..., "6": n6}.
impl Serialize for FaceTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (face, count) in self.iter() {
            map.serialize_entry(&face.to_string(), &count)?;
        }
        map.end()
    }
}
