//! Property-based tests for the scoring rules.

use proptest::prelude::*;

use yd_core::{
    chance_score, evaluate, full_house_score, large_straight_score, score, tally_faces,
    yahtzee_score, Category, Dice, NUM_CATS,
};

/// Strategy: a valid hand (each die 1-6).
fn dice_strategy() -> impl Strategy<Value = Dice> {
    prop::array::uniform5(1..=6u8).prop_map(|f| Dice::new(f).unwrap())
}

/// Strategy: any category.
fn category_strategy() -> impl Strategy<Value = Category> {
    (0..NUM_CATS).prop_map(|i| Category::ALL[i])
}

/// Strategy: a hand plus a shuffled copy of it.
fn dice_and_permutation() -> impl Strategy<Value = (Dice, Dice)> {
    prop::array::uniform5(1..=6u8).prop_flat_map(|f| {
        let original = Dice::new(f).unwrap();
        Just(f.to_vec()).prop_shuffle().prop_map(move |v| {
            let shuffled = Dice::try_from(v.as_slice()).unwrap();
            (original, shuffled)
        })
    })
}

proptest! {
    // 1. Scores never exceed the 50-point maximum
    #[test]
    fn score_bounded(dice in dice_strategy(), cat in category_strategy()) {
        let s = score(&dice, cat);
        prop_assert!(s <= 50, "score={s} for dice={dice} cat={cat}");
    }

    // 2. Scoring is deterministic
    #[test]
    fn score_deterministic(dice in dice_strategy(), cat in category_strategy()) {
        prop_assert_eq!(score(&dice, cat), score(&dice, cat));
    }

    // 3. Chance is the sum of the dice
    #[test]
    fn chance_is_sum(dice in dice_strategy()) {
        let sum: u32 = dice.faces().iter().map(|&d| d as u32).sum();
        prop_assert_eq!(chance_score(&dice), sum);
    }

    // 4. Yahtzee iff all five faces match
    #[test]
    fn yahtzee_iff_all_equal(dice in dice_strategy()) {
        let f = dice.faces();
        let all_equal = f.iter().all(|&x| x == f[0]);
        prop_assert_eq!(yahtzee_score(&dice) == 50, all_equal);
        prop_assert!(yahtzee_score(&dice) == 0 || yahtzee_score(&dice) == 50);
    }

    // 5. Five of a kind is never a full house
    #[test]
    fn five_of_a_kind_not_full_house(face in 1..=6u8) {
        let dice = Dice::new([face; 5]).unwrap();
        prop_assert_eq!(full_house_score(&dice), 0);
    }

    // 6. Tally sums to 5 and matches per-face counts
    #[test]
    fn tally_sums_to_five(dice in dice_strategy()) {
        let t = tally_faces(&dice);
        prop_assert_eq!(t.total(), 5);
        for face in 1..=6u8 {
            let n = dice.faces().iter().filter(|&&x| x == face).count() as u8;
            prop_assert_eq!(t.count(face), n);
        }
    }

    // 7. Every scorer is invariant under reordering
    #[test]
    fn permutation_invariant((a, b) in dice_and_permutation()) {
        for cat in Category::ALL {
            prop_assert_eq!(score(&a, cat), score(&b, cat), "cat={}", cat);
        }
    }

    // 8. Sheet has all 13 categories and matches per-category scoring
    #[test]
    fn sheet_complete(dice in dice_strategy()) {
        let sheet = evaluate(&dice);
        prop_assert_eq!(sheet.len(), NUM_CATS);
        for (cat, s) in sheet.iter() {
            prop_assert_eq!(s, score(&dice, cat));
        }
    }

    // 9. A large straight always contains a small straight
    #[test]
    fn large_implies_small(dice in dice_strategy()) {
        if large_straight_score(&dice) > 0 {
            prop_assert_eq!(score(&dice, Category::SmallStraight), 30);
        }
    }

    // 10. Four of a kind implies three of a kind, with the same score
    #[test]
    fn four_kind_implies_three_kind(dice in dice_strategy()) {
        let four = score(&dice, Category::FourOfAKind);
        if four > 0 {
            prop_assert_eq!(score(&dice, Category::ThreeOfAKind), four);
        }
    }
}
