//! yd: score a roll of five dice in every Yahtzee category.
//!
//! With no face arguments a random roll is used; with exactly five, those faces are
//! scored. Exit codes: 0 ok, 1 usage error, 2 invalid dice, 3 config/log/output failure.

mod args;
mod error;
mod render;

use std::env;
use std::io::{self, Write};
use std::process;

use yd_core::{evaluate, score, Config, FaceTally, OutputFormat, Roller, NUM_CATS, RULESET_ID};
use yd_logging::{
    hash_config_bytes, now_ms, DiceSource, EvaluationEventV1, InvocationEventV1, NdjsonWriter,
    VersionInfoV1,
};

use crate::args::{parse_args, parse_dice, Command, Opts, USAGE};
use crate::error::CliError;
use crate::render::Roll;

fn print_help() {
    println!(
        r#"yd - Yahtzee dice scorer

{USAGE}

With no faces, a random roll is scored. With exactly five faces (integers 1-6),
that roll is scored.

OPTIONS:
    --config PATH      YAML config file
    --seed S           Seed for the random roll
    --category NAME    Print only this category's score (e.g. full_house, "SM Straight")
    --json             Emit JSON instead of text
    --events PATH      Append NDJSON events to PATH
    --no-tally         Do not print the face tally
    -h, --help         Print this help message
    -V, --version      Print version
"#
    );
}

fn print_version() {
    println!("yd {}", env!("CARGO_PKG_VERSION"));
}

fn version_info() -> VersionInfoV1 {
    VersionInfoV1 {
        ruleset_id: RULESET_ID,
        category_count: NUM_CATS as u32,
    }
}

/// Load the config file (if any) and its blake3 hash.
fn load_config(path: Option<&str>) -> Result<(Config, Option<String>), CliError> {
    match path {
        Some(p) => {
            let (cfg, bytes) = Config::load_with_bytes(p)?;
            Ok((cfg, Some(hash_config_bytes(&bytes))))
        }
        None => Ok((Config::default(), None)),
    }
}

fn run(opts: &Opts) -> Result<(), CliError> {
    // Literal faces are checked before anything else touches the filesystem.
    let literal = if opts.faces.is_empty() {
        None
    } else {
        Some(parse_dice(&opts.faces)?)
    };

    let (mut cfg, config_hash) = load_config(opts.config_path.as_deref())?;
    opts.apply_to(&mut cfg);

    let roll = match literal {
        Some(dice) => Roll {
            dice,
            source: DiceSource::Args,
            seed: None,
        },
        None => {
            let mut roller = match cfg.roll.seed {
                Some(seed) => Roller::from_seed(seed),
                None => Roller::from_entropy(),
            };
            Roll {
                dice: roller.roll(),
                source: DiceSource::Random,
                seed: Some(roller.seed()),
            }
        }
    };

    let mut events = match &cfg.logging.events_path {
        Some(p) => Some(NdjsonWriter::open_append_with_flush(
            p,
            cfg.logging.flush_every_lines,
        )?),
        None => None,
    };
    if let Some(w) = events.as_mut() {
        w.write_event(&InvocationEventV1 {
            event: "invocation",
            ts_ms: now_ms(),
            v: version_info(),
            source: roll.source,
            seed: roll.seed,
            config_hash,
        })?;
    }

    let dice = roll.dice;
    let tally = FaceTally::of(&dice);
    let shown_tally = cfg.output.show_tally.then_some(&tally);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let scores = match opts.category {
        Some(cat) => {
            let s = score(&dice, cat);
            match cfg.output.format {
                OutputFormat::Text => {
                    render::write_roll_banner(&mut out, &roll)?;
                    if let Some(t) = shown_tally {
                        render::write_tally_text(&mut out, &dice, t)?;
                    }
                    render::write_score_text(&mut out, &dice, cat, s)?;
                }
                OutputFormat::Json => {
                    render::write_category_json(&mut out, &roll, shown_tally, cat, s)?;
                }
            }
            vec![(cat, s)]
        }
        None => {
            let sheet = evaluate(&dice);
            match cfg.output.format {
                OutputFormat::Text => {
                    render::write_roll_banner(&mut out, &roll)?;
                    if let Some(t) = shown_tally {
                        render::write_tally_text(&mut out, &dice, t)?;
                    }
                    render::write_sheet_text(&mut out, &dice, &sheet)?;
                }
                OutputFormat::Json => {
                    render::write_sheet_json(&mut out, &roll, shown_tally, &sheet)?;
                }
            }
            sheet.iter().collect()
        }
    };
    out.flush()?;

    if let Some(mut w) = events {
        w.write_event(&EvaluationEventV1 {
            event: "evaluation",
            ts_ms: now_ms(),
            v: version_info(),
            dice: dice.faces(),
            tally: tally.counts(),
            scores: scores
                .iter()
                .map(|(c, s)| (c.key().to_string(), *s))
                .collect(),
            category: opts.category.map(|c| c.key().to_string()),
        })?;
        w.flush()?;
    }

    Ok(())
}

fn report(e: &CliError) -> i32 {
    eprintln!("{e}");
    if e.is_usage() {
        eprintln!("{USAGE}");
        eprintln!("Run `yd --help` for usage.");
    }
    e.exit_code()
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let code = match parse_args(&args) {
        Ok(Command::Help) => {
            print_help();
            0
        }
        Ok(Command::Version) => {
            print_version();
            0
        }
        Ok(Command::Score(opts)) => match run(&opts) {
            Ok(()) => 0,
            Err(e) => report(&e),
        },
        Err(e) => report(&e),
    };

    process::exit(code);
}
