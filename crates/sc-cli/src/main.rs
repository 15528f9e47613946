//! Seedcast command-line front end
//!
//! Usage:
//!   seedcast generate --digits 6 --seed 42
//!   seedcast range 1 100 --seed brian
//!   seedcast dice 2d6+3 --json
//!   seedcast random-seed

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

use sc_core::{DigitFacts, RawSeed, SeedOptions, DEFAULT_DIGITS};
use sc_sim::{DEFAULT_DECIMALS, DEFAULT_SIDES};

#[derive(Parser)]
#[command(name = "seedcast", about = "Deterministic seeded values", version)]
struct Cli {
    /// Seed: integer, float or text (default 814)
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Number with an exact digit count
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_DIGITS, allow_negative_numbers = true)]
        digits: i64,
    },
    /// Digit facts of the normalized seed
    Facts,
    /// Seed filled to a digit count, as an exact decimal string
    Fill {
        #[arg(short, long, allow_negative_numbers = true)]
        digits: i64,
    },
    /// Value in [MIN, MAX]
    Range {
        #[arg(allow_negative_numbers = true)]
        min: i64,
        #[arg(allow_negative_numbers = true)]
        max: i64,
    },
    /// Fraction in [0, 1)
    Float {
        #[arg(short, long, default_value_t = DEFAULT_DECIMALS)]
        decimals: i64,
    },
    /// Batch of numbers
    Array {
        len: usize,
        #[arg(short, long, default_value_t = DEFAULT_DIGITS)]
        digits: i64,
    },
    /// UUID-shaped identifier
    Uuid,
    /// Hex color (or RGB with --rgb)
    Color {
        #[arg(long)]
        rgb: bool,
    },
    /// Single die
    Roll {
        #[arg(long, default_value_t = DEFAULT_SIDES)]
        sides: u32,
    },
    /// Dice expression such as 2d6+3
    Dice { notation: String },
    /// Heads or tails
    Coin,
    /// true or false
    Bool,
    /// Pick one of the given items
    Choice {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Playing card
    Card,
    /// Major arcana card
    Tarot,
    /// Zodiac sign
    Zodiac,
    /// Fortune cookie
    Fortune,
    /// Magic 8-ball answer
    EightBall,
    /// Bingo call
    Bingo,
    /// Roulette spin
    Roulette,
    /// Fresh seed from OS entropy (not deterministic)
    RandomSeed,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let opts = SeedOptions::default().with_seed(parse_seed(cli.seed.as_deref()));
    log::debug!("options: {:?}", opts);

    let out = Output { json: cli.json };
    match cli.command {
        Commands::Generate { digits } => out.emit(&sc_core::generate(digits, &opts)?),
        Commands::Facts => {
            let facts = DigitFacts::of(opts.seed()?);
            let text = format!(
                "seed {}: {} digits, sum {}, product {}, first {}, last {}",
                facts.seed, facts.count, facts.sum, facts.product, facts.first, facts.last
            );
            out.emit_display(&facts, &text)
        }
        Commands::Fill { digits } => out.emit(&sc_core::fill_digits(opts.seed()?, digits)?),
        Commands::Range { min, max } => out.emit(
            &sc_core::range(min, max, &opts)
                .with_context(|| format!("cannot pick from [{}, {}]", min, max))?,
        ),
        Commands::Float { decimals } => out.emit(&sc_sim::float(decimals, &opts)?),
        Commands::Array { len, digits } => {
            let values = sc_sim::array(len, digits, &opts)?;
            let text = values.iter().map(u64::to_string).collect::<Vec<_>>().join(" ");
            out.emit_display(&values, &text)
        }
        Commands::Uuid => out.emit(&sc_sim::uuid(&opts)?),
        Commands::Color { rgb } => {
            if rgb {
                let color = sc_sim::rgb(&opts)?;
                out.emit_display(&color, &color)
            } else {
                out.emit(&sc_sim::hex_color(&opts)?)
            }
        }
        Commands::Roll { sides } => out.emit(&sc_sim::roll(sides, &opts)?),
        Commands::Dice { notation } => {
            let roll = sc_sim::dice(&notation, &opts)
                .with_context(|| format!("cannot roll {:?}", notation))?;
            let text = format!("{} = {:?} -> {}", roll.spec, roll.rolls, roll.total);
            out.emit_display(&roll, &text)
        }
        Commands::Coin => {
            let coin = sc_sim::coin(&opts)?;
            out.emit_display(&coin, &coin)
        }
        Commands::Bool => out.emit(&sc_sim::boolean(&opts)?),
        Commands::Choice { items } => out.emit(sc_sim::choice(&items, &opts)?),
        Commands::Card => {
            let card = sc_sim::card(&opts)?;
            out.emit_display(&card, &format!("{} ({})", card, card.name()))
        }
        Commands::Tarot => out.emit(&sc_sim::tarot(&opts)?),
        Commands::Zodiac => out.emit(&sc_sim::zodiac(&opts)?),
        Commands::Fortune => out.emit(&sc_sim::fortune(&opts)?),
        Commands::EightBall => out.emit(&sc_sim::magic_eight_ball(&opts)?),
        Commands::Bingo => {
            let call = sc_sim::bingo(&opts)?;
            out.emit_display(&call, &call)
        }
        Commands::Roulette => {
            let spin = sc_sim::roulette(&opts)?;
            out.emit_display(&spin, &spin)
        }
        Commands::RandomSeed => out.emit(&sc_core::random_seed()),
    }
}

/// Integer if it parses as one, then float, otherwise text
fn parse_seed(seed: Option<&str>) -> RawSeed {
    match seed {
        None => RawSeed::Absent,
        Some(s) => {
            if let Ok(i) = s.parse::<i64>() {
                RawSeed::Integer(i)
            } else if let Ok(u) = s.parse::<u64>() {
                RawSeed::Unsigned(u)
            } else if let Ok(f) = s.parse::<f64>() {
                RawSeed::Float(f)
            } else {
                RawSeed::Text(s.to_string())
            }
        }
    }
}

struct Output {
    json: bool,
}

impl Output {
    /// Value printed as JSON, or with its Display form
    fn emit<T: Serialize + std::fmt::Display + ?Sized>(&self, value: &T) -> Result<()> {
        self.emit_display(value, value)
    }

    fn emit_display<T, D>(&self, value: &T, text: &D) -> Result<()>
    where
        T: Serialize + ?Sized,
        D: std::fmt::Display + ?Sized,
    {
        if self.json {
            println!("{}", serde_json::to_string(value).context("Failed to encode JSON")?);
        } else {
            println!("{}", text);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(None), RawSeed::Absent);
        assert_eq!(parse_seed(Some("-42")), RawSeed::Integer(-42));
        assert_eq!(parse_seed(Some("814.9")), RawSeed::Float(814.9));
        assert_eq!(
            parse_seed(Some("18446744073709551614")),
            RawSeed::Unsigned(u64::MAX - 1)
        );
        assert_eq!(parse_seed(Some("brian")), RawSeed::Text("brian".into()));
        // "NaN" parses as a float and is rejected later by normalization
        assert!(matches!(parse_seed(Some("NaN")), RawSeed::Float(f) if f.is_nan()));
    }

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["seedcast", "range", "-5", "5", "--seed", "brian"]).unwrap();
        assert_eq!(cli.seed.as_deref(), Some("brian"));
        assert!(matches!(cli.command, Commands::Range { min: -5, max: 5 }));

        let cli = Cli::try_parse_from(["seedcast", "--json", "generate", "-d", "6"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Generate { digits: 6 }));

        assert!(Cli::try_parse_from(["seedcast", "choice"]).is_err());
    }
}
