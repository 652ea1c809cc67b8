#[cfg(test)]
mod tests {
    use crate::{evaluate, score, Category, Dice, NUM_CATS};

    fn d(faces: [u8; 5]) -> Dice {
        Dice::new(faces).unwrap()
    }

    #[test]
    fn full_house_sheet() {
        let sheet = evaluate(&d([2, 2, 2, 3, 3]));
        let expected = [0, 6, 6, 0, 0, 0, 12, 0, 25, 0, 0, 0, 12];
        assert_eq!(sheet.as_array(), expected);
        assert_eq!(sheet.get(Category::FullHouse), 25);
        assert_eq!(sheet.get(Category::Chance), 12);
    }

    #[test]
    fn yahtzee_sheet() {
        let sheet = evaluate(&d([5, 5, 5, 5, 5]));
        assert_eq!(sheet.get(Category::Fives), 25);
        assert_eq!(sheet.get(Category::ThreeOfAKind), 25);
        assert_eq!(sheet.get(Category::FourOfAKind), 25);
        assert_eq!(sheet.get(Category::FullHouse), 0);
        assert_eq!(sheet.get(Category::SmallStraight), 0);
        assert_eq!(sheet.get(Category::LargeStraight), 0);
        assert_eq!(sheet.get(Category::Yahtzee), 50);
        assert_eq!(sheet.best(), (Category::Yahtzee, 50));
    }

    #[test]
    fn straight_sheet() {
        let sheet = evaluate(&d([5, 3, 1, 4, 2]));
        assert_eq!(sheet.get(Category::SmallStraight), 30);
        assert_eq!(sheet.get(Category::LargeStraight), 40);
        assert_eq!(sheet.get(Category::Chance), 15);
        assert_eq!(sheet.total_upper(), 15);
        assert_eq!(sheet.best(), (Category::LargeStraight, 40));
    }

    #[test]
    fn sheet_always_has_every_category() {
        for dice in [d([1, 1, 1, 1, 1]), d([1, 2, 4, 5, 6]), d([6, 6, 6, 1, 1])] {
            let sheet = evaluate(&dice);
            assert_eq!(sheet.len(), NUM_CATS);
            let cats: Vec<Category> = sheet.iter().map(|(c, _)| c).collect();
            assert_eq!(cats, Category::ALL.to_vec());
        }
    }

    #[test]
    fn sheet_agrees_with_single_category_dispatch() {
        let dice = d([6, 4, 3, 5, 1]);
        let sheet = evaluate(&dice);
        for c in Category::ALL {
            assert_eq!(sheet.get(c), score(&dice, c), "{c}");
        }
    }

    #[test]
    fn best_breaks_ties_by_card_order() {
        let sheet = evaluate(&d([1, 2, 3, 6, 1]));
        assert_eq!(sheet.best(), (Category::Chance, 13));

        let sheet = evaluate(&d([6, 6, 6, 6, 6]));
        assert_eq!(sheet.best(), (Category::Yahtzee, 50));
        // 3 of a Kind, 4 of a Kind and Chance all score 29.
        let sheet = evaluate(&d([6, 6, 6, 6, 5]));
        assert_eq!(sheet.best(), (Category::ThreeOfAKind, 29));
    }

    #[test]
    fn serializes_as_ordered_key_map() {
        let sheet = evaluate(&d([2, 2, 2, 3, 3]));
        let y = serde_yaml::to_string(&sheet).unwrap();
        let first = y.lines().next().unwrap();
        assert_eq!(first, "aces: 0");
        let map: std::collections::BTreeMap<String, u32> = serde_yaml::from_str(&y).unwrap();
        assert_eq!(map.len(), NUM_CATS);
        assert_eq!(map["full_house"], 25);
        assert_eq!(map["three_kind"], 12);
        assert_eq!(map["chance"], 12);
    }
}
