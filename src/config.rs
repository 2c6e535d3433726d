//! Scorer configuration from environment variables
//!
//! - `CATALOG_PATH`: food catalog CSV/Parquet (default `data/dataset.csv`)
//! - `REFERENCE_TABLE_PATH`: optional JSON reference table
//! - `TOP_N`: number of suggestions (default 5)

use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "data/dataset.csv";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ScorerConfig {
    pub catalog_path: PathBuf,
    /// Standard table when unset
    pub reference_table_path: Option<PathBuf>,
    pub top_n: usize,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            reference_table_path: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ScorerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog_path);

        let reference_table_path = lookup("REFERENCE_TABLE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let top_n = match lookup("TOP_N") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid TOP_N '{}', using {}", raw, DEFAULT_TOP_N);
                DEFAULT_TOP_N
            }),
            None => defaults.top_n,
        };

        Self {
            catalog_path,
            reference_table_path,
            top_n,
        }
    }
}
