//! Command-line parsing for `yd`.

use yd_core::{Category, Config, Dice, OutputFormat, NUM_DICE};

use crate::error::CliError;

pub const USAGE: &str = "Usage: yd [OPTIONS] [FACE1 FACE2 FACE3 FACE4 FACE5]";

/// Parsed options for a scoring run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Opts {
    pub config_path: Option<String>,
    pub seed: Option<u64>,
    pub category: Option<Category>,
    pub json: bool,
    pub events_path: Option<String>,
    pub no_tally: bool,
    /// Positional face arguments, unparsed. Either empty or exactly five.
    pub faces: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Version,
    Score(Opts),
}

fn take_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, CliError> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| CliError::Usage(format!("Missing value for {flag}")))
}

/// Negative integers are faces (rejected later as out of range), not options.
fn looks_like_option(arg: &str) -> bool {
    arg.starts_with('-') && arg.len() > 1 && arg.parse::<i64>().is_err()
}

/// Parse arguments (program name excluded).
pub fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let mut opts = Opts::default();

    let mut i = 0usize;
    while i < args.len() {
        let arg = args[i].as_str();
        if !looks_like_option(arg) {
            opts.faces.push(arg.to_string());
            i += 1;
            continue;
        }
        match arg {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--config" => {
                opts.config_path = Some(take_value(args, i, arg)?.to_string());
                i += 2;
            }
            "--seed" => {
                let v = take_value(args, i, arg)?;
                opts.seed = Some(
                    v.parse::<u64>()
                        .map_err(|_| CliError::Usage(format!("Invalid --seed value: {v}")))?,
                );
                i += 2;
            }
            "--category" => {
                let v = take_value(args, i, arg)?;
                let cat = v
                    .parse::<Category>()
                    .map_err(|e| CliError::Usage(e.to_string()))?;
                opts.category = Some(cat);
                i += 2;
            }
            "--events" => {
                opts.events_path = Some(take_value(args, i, arg)?.to_string());
                i += 2;
            }
            "--json" => {
                opts.json = true;
                i += 1;
            }
            "--no-tally" => {
                opts.no_tally = true;
                i += 1;
            }
            other => {
                return Err(CliError::Usage(format!("Unknown option: {other}")));
            }
        }
    }

    if !opts.faces.is_empty() && opts.faces.len() != NUM_DICE {
        return Err(CliError::Usage(format!(
            "Provide exactly {NUM_DICE} face values on the command line (got {})",
            opts.faces.len()
        )));
    }

    Ok(Command::Score(opts))
}

/// Parse the five positional faces into validated dice.
pub fn parse_dice(faces: &[String]) -> Result<Dice, CliError> {
    let mut values = Vec::with_capacity(faces.len());
    for f in faces {
        let v: i64 = f
            .trim()
            .parse()
            .map_err(|_| CliError::BadFace { arg: f.clone() })?;
        values.push(v);
    }
    Ok(Dice::from_faces(&values)?)
}

impl Opts {
    /// Apply command-line overrides on top of a loaded config.
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(seed) = self.seed {
            cfg.roll.seed = Some(seed);
        }
        if self.json {
            cfg.output.format = OutputFormat::Json;
        }
        if self.no_tally {
            cfg.output.show_tally = false;
        }
        if let Some(p) = &self.events_path {
            cfg.logging.events_path = Some(p.clone());
        }
    }
}
