//! Text and JSON rendering of scoring results.

use std::io::{self, Write};

use serde::Serialize;

use yd_core::{Category, Dice, FaceTally, ScoreSheet};
use yd_logging::DiceSource;

/// A roll together with where it came from.
#[derive(Debug, Clone, Copy)]
pub struct Roll {
    pub dice: Dice,
    pub source: DiceSource,
    /// Seed of the random roll; None for literal dice.
    pub seed: Option<u64>,
}

/// Width of the right-aligned label column.
const LABEL_WIDTH: usize = 16;

fn tally_text(tally: &FaceTally) -> String {
    tally
        .iter()
        .map(|(face, count)| format!("{face}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Random-roll banner, printed before text output.
pub fn write_roll_banner<W: Write>(out: &mut W, roll: &Roll) -> io::Result<()> {
    if roll.source == DiceSource::Random {
        match roll.seed {
            Some(seed) => writeln!(
                out,
                "No command line arguments provided so using a random roll (seed {seed})"
            )?,
            None => writeln!(out, "No command line arguments provided so using a random roll")?,
        }
        writeln!(out, "{:>w$} -> {}", "roll_dice", roll.dice, w = LABEL_WIDTH)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_tally_text<W: Write>(out: &mut W, dice: &Dice, tally: &FaceTally) -> io::Result<()> {
    writeln!(
        out,
        "{:>w$}({}) -> {}",
        "Tally",
        dice,
        tally_text(tally),
        w = LABEL_WIDTH
    )
}

pub fn write_score_text<W: Write>(
    out: &mut W,
    dice: &Dice,
    category: Category,
    score: u32,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>w$}({}) -> {}",
        category.name(),
        dice,
        score,
        w = LABEL_WIDTH
    )
}

pub fn write_sheet_text<W: Write>(out: &mut W, dice: &Dice, sheet: &ScoreSheet) -> io::Result<()> {
    for (c, s) in sheet.iter() {
        write_score_text(out, dice, c, s)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct SheetJson<'a> {
    dice: &'a Dice,
    source: DiceSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tally: Option<&'a FaceTally>,
    scores: &'a ScoreSheet,
}

#[derive(Serialize)]
struct CategoryJson<'a> {
    dice: &'a Dice,
    source: DiceSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tally: Option<&'a FaceTally>,
    category: &'static str,
    score: u32,
}

pub fn write_sheet_json<W: Write>(
    out: &mut W,
    roll: &Roll,
    tally: Option<&FaceTally>,
    sheet: &ScoreSheet,
) -> io::Result<()> {
    let doc = SheetJson {
        dice: &roll.dice,
        source: roll.source,
        seed: roll.seed,
        tally,
        scores: sheet,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

pub fn write_category_json<W: Write>(
    out: &mut W,
    roll: &Roll,
    tally: Option<&FaceTally>,
    category: Category,
    score: u32,
) -> io::Result<()> {
    let doc = CategoryJson {
        dice: &roll.dice,
        source: roll.source,
        seed: roll.seed,
        tally,
        category: category.key(),
        score,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use yd_core::evaluate;

    fn literal(faces: [u8; 5]) -> Roll {
        Roll {
            dice: Dice::new(faces).unwrap(),
            source: DiceSource::Args,
            seed: None,
        }
    }

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn sheet_text_has_one_line_per_category() {
        let roll = literal([2, 2, 2, 3, 3]);
        let sheet = evaluate(&roll.dice);
        let s = render(|b| write_sheet_text(b, &roll.dice, &sheet));
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "            Aces([2, 2, 2, 3, 3]) -> 0");
        assert_eq!(lines[8], "      Full House([2, 2, 2, 3, 3]) -> 25");
        assert_eq!(lines[12], "          Chance([2, 2, 2, 3, 3]) -> 12");
    }

    #[test]
    fn tally_text_lists_every_face() {
        let roll = literal([6, 6, 1, 2, 3]);
        let tally = FaceTally::of(&roll.dice);
        let s = render(|b| write_tally_text(b, &roll.dice, &tally));
        assert_eq!(s, "           Tally([6, 6, 1, 2, 3]) -> 1:1 2:1 3:1 4:0 5:0 6:2\n");
    }

    #[test]
    fn banner_only_for_random_rolls() {
        let lit = literal([1, 2, 3, 4, 5]);
        assert_eq!(render(|b| write_roll_banner(b, &lit)), "");

        let random = Roll {
            source: DiceSource::Random,
            seed: Some(7),
            ..lit
        };
        let s = render(|b| write_roll_banner(b, &random));
        let banner = "No command line arguments provided so using a random roll (seed 7)";
        assert!(s.starts_with(banner));
        assert!(s.contains("roll_dice -> [1, 2, 3, 4, 5]"));
    }

    #[test]
    fn sheet_json_shape() {
        let roll = literal([5, 3, 1, 4, 2]);
        let sheet = evaluate(&roll.dice);
        let tally = FaceTally::of(&roll.dice);
        let s = render(|b| write_sheet_json(b, &roll, Some(&tally), &sheet));
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["dice"], serde_json::json!([5, 3, 1, 4, 2]));
        assert_eq!(v["source"], "args");
        assert!(v.get("seed").is_none());
        assert_eq!(v["tally"]["6"], 0);
        assert_eq!(v["scores"]["large_straight"], 40);
        assert_eq!(v["scores"].as_object().unwrap().len(), 13);
    }

    #[test]
    fn category_json_shape() {
        let roll = literal([3, 3, 3, 3, 5]);
        let s = render(|b| write_category_json(b, &roll, None, Category::FourOfAKind, 17));
        let v: serde_json::Value = serde_json::from_str(&s).unwrap();
        assert_eq!(v["category"], "four_kind");
        assert_eq!(v["score"], 17);
        assert!(v.get("tally").is_none());
    }
}
