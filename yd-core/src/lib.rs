//! yd-core: Yahtzee dice scoring.
//!
//! A [`Dice`] hand is classified into the 13 Yahtzee [`Category`] scores, either one
//! category at a time ([`score`]) or all at once ([`evaluate`] -> [`ScoreSheet`]).
//! All scoring functions are pure and safe to call from any number of threads.

pub mod category;
pub mod chance;
pub mod config;
pub mod dice;
pub mod scoring;
pub mod sheet;
pub mod tally;

pub use category::{
    Category, Scorer, UnknownCategory, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, NUM_CATS,
    SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};
pub use chance::{roll_dice, Roller};
pub use config::{Config, ConfigError, LoggingConfig, OutputConfig, OutputFormat, RollConfig};
pub use dice::{Dice, DiceError, MAX_FACE, MIN_FACE, NUM_DICE};
pub use scoring::*;
pub use sheet::{evaluate, ScoreSheet};
pub use tally::{tally_faces, FaceTally};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifies the scoring rules in logs and JSON output.
pub const RULESET_ID: &str = "yahtzee_standard_v1";

#[cfg(test)]
mod sheet_tests;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_nonempty() {
        assert!(!VERSION.is_empty());
    }
}
