use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

/// Command-line surface. Every flag overrides the matching environment
/// variable, which overrides the built-in default.
#[derive(Debug, Default, Parser)]
#[command(
    name = "labeler",
    version,
    about = "Auto-labels scraped job postings with suggested courses and \
             merges them with the seed dataset"
)]
pub struct Cli {
    /// Base directory for default input/output locations
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Course catalog CSV
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Seed labeled dataset CSV
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Scraped job CSV, processed in the given order (repeatable)
    #[arg(long = "scraped")]
    pub scraped: Vec<PathBuf>,

    /// Minimum combined score for the high-confidence subset
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Merged dataset output path
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub seed_path: PathBuf,
    /// Scraped sources, in processing order.
    pub scraped_paths: Vec<PathBuf>,
    pub min_score: f64,
    pub out_path: PathBuf,
    /// Derived from `out_path`: `<stem>_highconf.csv`.
    pub high_confidence_path: PathBuf,
    pub rust_log: String,
}

/// Default scraped sources, in processing order.
const DEFAULT_SCRAPED: &[&str] = &["scraped_linkedin_jobs.csv", "scraped_jobs_aggregated.csv"];

const DEFAULT_MIN_SCORE: f64 = 0.5;

impl Config {
    /// Resolves configuration from CLI flags, environment variables (a
    /// `.env` file is honored if present), and defaults, in that order.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| path_env("DATA_DIR"))
            .unwrap_or_else(|| PathBuf::from("."));

        let catalog_path = cli
            .catalog
            .clone()
            .or_else(|| path_env("CATALOG_PATH"))
            .unwrap_or_else(|| data_dir.join("mock_courses.csv"));

        let seed_path = cli
            .seed
            .clone()
            .or_else(|| path_env("SEED_PATH"))
            .unwrap_or_else(|| data_dir.join("mock_data.csv"));

        let scraped_paths = if !cli.scraped.is_empty() {
            cli.scraped.clone()
        } else if let Ok(raw) = std::env::var("SCRAPED_PATHS") {
            raw.split(',')
                .map(str::trim)
                .filter(|piece| !piece.is_empty())
                .map(PathBuf::from)
                .collect()
        } else {
            DEFAULT_SCRAPED.iter().map(|name| data_dir.join(name)).collect()
        };

        let min_score = match cli.min_score {
            Some(value) => value,
            None => match std::env::var("MIN_SCORE") {
                Ok(raw) => raw
                    .parse::<f64>()
                    .context("MIN_SCORE must be a valid number")?,
                Err(_) => DEFAULT_MIN_SCORE,
            },
        };

        let out_path = cli
            .out
            .clone()
            .or_else(|| path_env("OUT_PATH"))
            .unwrap_or_else(|| data_dir.join("merged_data.csv"));
        let high_confidence_path = high_confidence_path_for(&out_path);

        Ok(Config {
            catalog_path,
            seed_path,
            scraped_paths,
            min_score,
            out_path,
            high_confidence_path,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn path_env(key: &str) -> Option<PathBuf> {
    std::env::var(key).ok().filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// `<stem>_highconf.csv` next to the merged output.
fn high_confidence_path_for(out: &Path) -> PathBuf {
    let stem = out
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("merged_data");
    out.with_file_name(format!("{stem}_highconf.csv"))
}
