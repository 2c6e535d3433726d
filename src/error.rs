//! Error types
//!
//! Only loading can fail. The scoring pipeline itself falls back to zero
//! values instead of returning errors.

use thiserror::Error;

/// Failure while loading a food catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read food catalog {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: polars::error::PolarsError,
    },

    #[error("Food catalog must have at least a header and one data row (found {rows} data rows)")]
    TooFewRows { rows: usize },

    #[error("Food catalog needs an identifier and a description column (found {found} columns)")]
    MissingColumns { found: usize },

    #[error("Nutrient column '{column}' appears more than once in the food catalog")]
    DuplicateColumn { column: String },

    #[error("Invalid food catalog column '{column}': {source}")]
    Column {
        column: String,
        #[source]
        source: polars::error::PolarsError,
    },
}

/// Invalid reference table contents
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Reference table is empty")]
    Empty,

    #[error("Nutrient '{0}' appears more than once in the reference table")]
    DuplicateNutrient(String),

    #[error("Nutrient '{name}' has a non-positive reference amount ({rda})")]
    InvalidAmount { name: String, rda: f64 },
}
