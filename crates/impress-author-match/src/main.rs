//! Command-line author-list comparison.
//!
//! Exits 0 when the lists match and 1 when they do not.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use impress_author_match::{align_author_lists, MatchConfig, NameOrder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "impress-author-match", version, about = "Compare two citation author lists")]
struct Cli {
    /// First author list, semicolon-delimited
    a: String,

    /// Second author list, semicolon-delimited
    b: String,

    /// Accept "First Last" names when no comma is present
    #[arg(long)]
    first_last: bool,

    /// TOML file with a match configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Inclusive whole-author edit-distance tolerance
    #[arg(long, value_name = "N")]
    author_tolerance: Option<u32>,

    /// Inclusive per-token edit-distance tolerance
    #[arg(long, value_name = "N")]
    token_tolerance: Option<u32>,

    /// Print the full alignment result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            MatchConfig::from_toml(&content)?
        }
        None => MatchConfig::default(),
    };
    if cli.first_last {
        config.name_order = NameOrder::FirstLast;
    }
    if let Some(tolerance) = cli.author_tolerance {
        config.author_tolerance = Some(tolerance);
    }
    if let Some(tolerance) = cli.token_tolerance {
        config.token_tolerance = tolerance;
    }
    config.validate()?;
    tracing::debug!("Using config {:?}", config);

    let result = align_author_lists(cli.a.as_str(), cli.b.as_str(), &config);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_match {
        println!("match ({})", result.reason);
    } else {
        println!("no match ({})", result.reason);
    }

    Ok(if result.is_match {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
