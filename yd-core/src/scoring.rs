//! Category scorers.
//!
//! Every scorer is a pure function of the dice and is invariant under reordering.
//! Input dice are validated by construction (see [`Dice`]), so none of them can fail.

use crate::category::{
    Category, FULL_HOUSE_SCORE, LARGE_STRAIGHT_SCORE, SMALL_STRAIGHT_SCORE, YAHTZEE_SCORE,
};
use crate::dice::Dice;
use crate::tally::FaceTally;

/// Four-long runs that make a small straight.
const SMALL_STRAIGHT_WINDOWS: [[u8; 4]; 3] = [[1, 2, 3, 4], [2, 3, 4, 5], [3, 4, 5, 6]];

/// Score `dice` in `category`.
pub fn score(dice: &Dice, category: Category) -> u32 {
    (category.scorer())(dice)
}

/// Upper section: count of `face` times `face`.
pub fn upper_score(dice: &Dice, face: u8) -> u32 {
    dice.count(face) as u32 * face as u32
}

pub fn aces_score(dice: &Dice) -> u32 {
    upper_score(dice, 1)
}

pub fn twos_score(dice: &Dice) -> u32 {
    upper_score(dice, 2)
}

pub fn threes_score(dice: &Dice) -> u32 {
    upper_score(dice, 3)
}

pub fn fours_score(dice: &Dice) -> u32 {
    upper_score(dice, 4)
}

pub fn fives_score(dice: &Dice) -> u32 {
    upper_score(dice, 5)
}

pub fn sixes_score(dice: &Dice) -> u32 {
    upper_score(dice, 6)
}

/// Sum of all dice if some face occurs at least `n` times, else 0.
///
/// Five of a kind qualifies for every `n <= 5`.
pub fn n_of_a_kind_score(dice: &Dice, n: u8) -> u32 {
    if FaceTally::of(dice).max_count() >= n {
        dice.sum()
    } else {
        0
    }
}

pub fn three_of_a_kind_score(dice: &Dice) -> u32 {
    n_of_a_kind_score(dice, 3)
}

pub fn four_of_a_kind_score(dice: &Dice) -> u32 {
    n_of_a_kind_score(dice, 4)
}

/// 25 for a triple plus a pair of a different face.
///
/// The largest count must be exactly 3, which rules out five of a kind.
pub fn full_house_score(dice: &Dice) -> u32 {
    let tally = FaceTally::of(dice);
    if tally.max_count() == 3 && tally.has_count(2) {
        FULL_HOUSE_SCORE
    } else {
        0
    }
}

/// A window qualifies when each of its four faces shows at least once and at most twice.
fn window_is_run(tally: &FaceTally, window: &[u8; 4]) -> bool {
    let present = window.iter().filter(|&&f| tally.count(f) >= 1).count();
    let covered: u32 = window.iter().map(|&f| tally.count(f) as u32).sum();
    let max_in_window = window.iter().map(|&f| tally.count(f)).max().unwrap_or(0);
    present == window.len() && max_in_window <= 2 && covered >= 4
}

/// 30 if any of 1-2-3-4, 2-3-4-5 or 3-4-5-6 is fully present.
pub fn small_straight_score(dice: &Dice) -> u32 {
    let tally = FaceTally::of(dice);
    if SMALL_STRAIGHT_WINDOWS.iter().any(|w| window_is_run(&tally, w)) {
        SMALL_STRAIGHT_SCORE
    } else {
        0
    }
}

/// 40 if the sorted dice are five consecutive faces (1-5 or 2-6).
pub fn large_straight_score(dice: &Dice) -> u32 {
    let sorted = dice.sorted();
    if sorted.windows(2).all(|w| w[1] == w[0] + 1) {
        LARGE_STRAIGHT_SCORE
    } else {
        0
    }
}

/// 50 if all five dice match.
pub fn yahtzee_score(dice: &Dice) -> u32 {
    let f = dice.faces();
    if f.iter().all(|&d| d == f[0]) {
        YAHTZEE_SCORE
    } else {
        0
    }
}

/// Sum of all dice, unconditionally.
pub fn chance_score(dice: &Dice) -> u32 {
    dice.sum()
}
