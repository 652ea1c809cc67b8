//! The thirteen Yahtzee scoring categories.
//!
//! The category set is closed: it is an enum, indexed 0..13 in score-card order.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::dice::Dice;
use crate::scoring;

pub const NUM_CATS: usize = 13;

pub const FULL_HOUSE_SCORE: u32 = 25;
pub const SMALL_STRAIGHT_SCORE: u32 = 30;
pub const LARGE_STRAIGHT_SCORE: u32 = 40;
pub const YAHTZEE_SCORE: u32 = 50;

/// One scoring category, in score-card order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    #[serde(rename = "three_kind")]
    ThreeOfAKind,
    #[serde(rename = "four_kind")]
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

/// Scorer signature shared by every category.
pub type Scorer = fn(&Dice) -> u32;

/// Name that matched no category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0:?}")]
pub struct UnknownCategory(pub String);

impl Category {
    pub const ALL: [Category; NUM_CATS] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yahtzee,
        Category::Chance,
    ];

    /// Position in score-card order (0..13).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Score-card label.
    pub fn name(self) -> &'static str {
        match self {
            Category::Aces => "Aces",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "3 of a Kind",
            Category::FourOfAKind => "4 of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "SM Straight",
            Category::LargeStraight => "LG Straight",
            Category::Yahtzee => "YAHTZEE",
            Category::Chance => "Chance",
        }
    }

    /// Stable machine key, used in JSON output and event logs.
    pub fn key(self) -> &'static str {
        match self {
            Category::Aces => "aces",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::ThreeOfAKind => "three_kind",
            Category::FourOfAKind => "four_kind",
            Category::FullHouse => "full_house",
            Category::SmallStraight => "small_straight",
            Category::LargeStraight => "large_straight",
            Category::Yahtzee => "yahtzee",
            Category::Chance => "chance",
        }
    }

    /// Face counted by an upper-section category.
    pub fn upper_face(self) -> Option<u8> {
        match self {
            Category::Aces => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    pub fn scorer(self) -> Scorer {
        match self {
            Category::Aces => scoring::aces_score,
            Category::Twos => scoring::twos_score,
            Category::Threes => scoring::threes_score,
            Category::Fours => scoring::fours_score,
            Category::Fives => scoring::fives_score,
            Category::Sixes => scoring::sixes_score,
            Category::ThreeOfAKind => scoring::three_of_a_kind_score,
            Category::FourOfAKind => scoring::four_of_a_kind_score,
            Category::FullHouse => scoring::full_house_score,
            Category::SmallStraight => scoring::small_straight_score,
            Category::LargeStraight => scoring::large_straight_score,
            Category::Yahtzee => scoring::yahtzee_score,
            Category::Chance => scoring::chance_score,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts either the key or the label, ignoring case, spaces, `-` and `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = normalize(s);
        if want.is_empty() {
            return Err(UnknownCategory(s.to_string()));
        }
        Category::ALL
            .into_iter()
            .find(|c| normalize(c.key()) == want || normalize(c.name()) == want)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
