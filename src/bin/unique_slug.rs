use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::event;
use tracing_subscriber::EnvFilter;
use unique_slug::core::ConfigError;
use unique_slug::{Precision, Slug, SlugConfig, SlugError, SlugGenerator};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "unique-slug")]
#[command(about = "Generate and inspect timestamp based slugs")]
struct Cli {
    /// More logging on stderr (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print JSON instead of plain lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new slugs
    Generate {
        /// Digits in the slug: 10=seconds, 13=milliseconds, 16=microseconds, 19=nanoseconds
        #[arg(short, long, env = "UNIQUE_SLUG_LENGTH", allow_negative_numbers = true)]
        length: Option<i64>,
        /// How many slugs to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// JSON file with a `length` field, used when no length is given
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show which timestamp digits a slug encodes
    Decode {
        /// Slugs to decode
        #[arg(required = true)]
        slugs: Vec<String>,
    },
}

#[derive(Serialize)]
struct Decoded {
    slug: Slug,
    precision: Precision,
    unit: &'static str,
    digits: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let res = match cli.command {
        Commands::Generate {
            length,
            count,
            config,
        } => generate(length, count, config, cli.json),
        Commands::Decode { slugs } => decode(&slugs, cli.json),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Flag (or env var) first, then the config file, then 16.
fn resolve_length(length: Option<i64>, config: Option<PathBuf>) -> Result<Option<i64>, SlugError> {
    if length.is_some() {
        return Ok(length);
    }
    match config {
        Some(path) => {
            event!(tracing::Level::DEBUG, path = %path.display(), "Loading config");
            Ok(SlugConfig::from_path(path)?.length)
        }
        None => Ok(None),
    }
}

fn generate(
    length: Option<i64>,
    count: usize,
    config: Option<PathBuf>,
    json: bool,
) -> Result<(), SlugError> {
    let builder = SlugGenerator::builder();
    let builder = match resolve_length(length, config)? {
        Some(length) => builder.length(length),
        None => builder,
    };
    let mut generator = builder.build()?;

    let slugs = (0..count)
        .map(|_| generator.generate())
        .collect::<Result<Vec<Slug>, SlugError>>()?;

    if json {
        println!("{}", to_json(&slugs)?);
    } else {
        for slug in slugs {
            println!("{slug}");
        }
    }
    Ok(())
}

fn decode(slugs: &[String], json: bool) -> Result<(), SlugError> {
    let decoded = slugs
        .iter()
        .map(|s| {
            let slug = Slug::parse(s)?;
            Ok(Decoded {
                precision: slug.precision(),
                unit: slug.precision().unit_name(),
                digits: slug.digits().to_string(),
                slug,
            })
        })
        .collect::<Result<Vec<Decoded>, SlugError>>()?;

    if json {
        println!("{}", to_json(&decoded)?);
    } else {
        for d in decoded {
            println!("{}\t{}\t{}", d.slug, d.unit, d.digits);
        }
    }
    Ok(())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, SlugError> {
    serde_json::to_string_pretty(value).map_err(|e| ConfigError::Json(e).into())
}
