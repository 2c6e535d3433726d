//! Score a meal from a nutrient data JSON file
//!
//! Usage: analyze_meal <nutrient_data.json> [--catalog PATH] [--top-n N]
//!
//! The JSON maps ingredient → nutrient → amount, where an amount is either a
//! bare number (reference-table unit) or `{"amount": 2.5, "unit": "mg"}`.
//! Prints the meal report as JSON on stdout.

use anyhow::{bail, Context, Result};
use nutrient_scorer_rust::{NutrientData, NutrientScorer, ScorerConfig};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: analyze_meal <nutrient_data.json> [--catalog PATH] [--top-n N]";

/// Apply command-line overrides to `config` and return the input path
fn parse_args<I>(args: I, config: &mut ScorerConfig) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut input: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--catalog" => {
                let value = args.next().context("--catalog needs a path")?;
                config.catalog_path = PathBuf::from(value);
            }
            "--top-n" => {
                let value = args.next().context("--top-n needs a number")?;
                config.top_n = value
                    .parse()
                    .with_context(|| format!("Invalid --top-n value: {}", value))?;
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            _ => bail!("Unexpected argument: {}", arg),
        }
    }

    input.context(USAGE)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nutrient_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = ScorerConfig::from_env();
    let input = parse_args(std::env::args().skip(1), &mut config)?;

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_PATH: {:?}", config.catalog_path);
    tracing::info!("  TOP_N: {}", config.top_n);

    let contents = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read nutrient data: {:?}", input))?;
    let nutrient_data: NutrientData = serde_json::from_str(&contents)
        .with_context(|| "Failed to parse nutrient data JSON")?;

    let scorer = NutrientScorer::from_config(&config)?;
    let report = scorer.score_meal(&nutrient_data)?;

    for rec in &report.recommendations {
        tracing::info!("  {:.4}  {}", rec.similarity, rec.description);
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
