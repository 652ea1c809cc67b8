//! Score sheet: every category's score for one roll.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::category::{Category, NUM_CATS};
use crate::dice::Dice;

/// Scores for all 13 categories, indexed by [`Category::index`].
///
/// Backed by a fixed array, so a sheet never has missing or extra categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreSheet {
    scores: [u32; NUM_CATS],
}

impl ScoreSheet {
    pub fn get(&self, category: Category) -> u32 {
        self.scores[category.index()]
    }

    /// Always [`NUM_CATS`].
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(category, score)` in score-card order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Raw scores in score-card order.
    pub fn as_array(&self) -> [u32; NUM_CATS] {
        self.scores
    }

    /// Sum of the six upper-section scores (no bonus).
    pub fn total_upper(&self) -> u32 {
        self.iter()
            .filter(|(c, _)| c.upper_face().is_some())
            .map(|(_, s)| s)
            .sum()
    }

    /// Highest-scoring category; ties go to the earlier category on the card.
    pub fn best(&self) -> (Category, u32) {
        let mut best = (Category::ALL[0], self.scores[0]);
        for (c, s) in self.iter().skip(1) {
            if s > best.1 {
                best = (c, s);
            }
        }
        best
    }
}

/// Score `dice` in every category. Each scorer runs exactly once.
pub fn evaluate(dice: &Dice) -> ScoreSheet {
    let mut scores = [0u32; NUM_CATS];
    for c in Category::ALL {
        scores[c.index()] = (c.scorer())(dice);
    }
    ScoreSheet { scores }
}

// Serialized as an ordered {key: score} map.
impl Serialize for ScoreSheet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_CATS))?;
        for (c, s) in self.iter() {
            map.serialize_entry(c.key(), &s)?;
        }
        map.end()
    }
}
