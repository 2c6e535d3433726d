//! Food Catalog Loading
//!
//! Loads the local food dataset used for recommendations with Polars.
//!
//! Layout (CSV or Parquet):
//! - column 0: food identifier (e.g. FDC id)
//! - column 1: description
//! - columns 2..: one column per nutrient; the header names form the
//!   nutrient vocabulary, in column order
//!
//! Missing or unparseable amounts become 0.0. Rows without a description
//! (including an empty CSV cell, which Polars reads as null) are skipped.
//! A catalog without at least one data row is a load error, and so is a
//! nutrient header that appears twice (Polars would rename the second copy).

use crate::error::CatalogError;
use polars::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::path::Path;

/// A single food from the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: String,
    pub description: String,
    /// Nutrient name → raw amount, in the dataset's units
    pub nutrients: FxHashMap<String, f64>,
}

/// Immutable food catalog plus its ordered nutrient vocabulary
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    vocabulary: Vec<String>,
}

impl FoodCatalog {
    pub fn new(foods: Vec<FoodItem>, vocabulary: Vec<String>) -> Self {
        Self { foods, vocabulary }
    }

    /// Load a catalog, choosing the reader by file extension
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let is_parquet = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

        tracing::info!("Loading food catalog from {:?}", path);

        let df = if is_parquet {
            Self::read_parquet(path)?
        } else {
            Self::read_csv(path)?
        };

        let catalog = Self::from_dataframe(&df)?;

        tracing::info!(
            "  Foods: {}, nutrients: {}",
            catalog.foods.len(),
            catalog.vocabulary.len()
        );

        Ok(catalog)
    }

    /// Read CSV with every column as a string so amounts parse leniently
    fn read_csv(path: &Path) -> Result<DataFrame, CatalogError> {
        let read_err = |source: PolarsError| CatalogError::Read {
            path: path.display().to_string(),
            source,
        };

        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_parse_options(CsvParseOptions::default().with_truncate_ragged_lines(true))
            .try_into_reader_with_file_path(Some(path.into()))
            .map_err(read_err)?
            .finish()
            .map_err(read_err)
    }

    fn read_parquet(path: &Path) -> Result<DataFrame, CatalogError> {
        let read_err = |source: PolarsError| CatalogError::Read {
            path: path.display().to_string(),
            source,
        };

        let file = std::fs::File::open(path)
            .map_err(|e| read_err(PolarsError::from(e)))?;

        ParquetReader::new(file).finish().map_err(read_err)
    }

    /// Build a catalog from an already-loaded DataFrame
    pub fn from_dataframe(df: &DataFrame) -> Result<Self, CatalogError> {
        let columns = df.get_columns();
        if columns.len() < 2 {
            return Err(CatalogError::MissingColumns { found: columns.len() });
        }
        if df.height() == 0 {
            return Err(CatalogError::TooFewRows { rows: 0 });
        }

        let ids = string_values(&columns[0])?;
        let descriptions = string_values(&columns[1])?;

        let vocabulary: Vec<String> = columns[2..]
            .iter()
            .map(|column| column.name().to_string())
            .collect();

        if let Some(column) = duplicate_header(&vocabulary) {
            return Err(CatalogError::DuplicateColumn { column });
        }

        let amounts = columns[2..]
            .iter()
            .map(numeric_values)
            .collect::<Result<Vec<_>, _>>()?;

        let mut foods = Vec::with_capacity(df.height());
        for row in 0..df.height() {
            let Some(description) = descriptions[row].clone() else {
                continue;
            };

            let nutrients = vocabulary
                .iter()
                .zip(&amounts)
                .map(|(name, values)| (name.clone(), values[row]))
                .collect();

            foods.push(FoodItem {
                id: ids[row].clone().unwrap_or_default(),
                description,
                nutrients,
            });
        }

        if foods.len() < df.height() {
            tracing::warn!("Skipped {} catalog rows without a description", df.height() - foods.len());
        }

        Ok(Self { foods, vocabulary })
    }

    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Nutrient names in column order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

/// First nutrient header that appears twice
///
/// The CSV reader renames repeats to `<name>_duplicated_<n>`, so those count
/// as repeats of `<name>`.
fn duplicate_header(vocabulary: &[String]) -> Option<String> {
    let mut seen = FxHashSet::default();

    for name in vocabulary {
        let base = name
            .rsplit_once("_duplicated_")
            .filter(|(_, n)| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            .map_or(name.as_str(), |(base, _)| base);

        let renamed_repeat = base != name && vocabulary.iter().any(|other| other == base);
        if renamed_repeat || !seen.insert(base) {
            return Some(base.to_string());
        }
    }

    None
}

/// Column as optional strings (numeric id columns are cast)
fn string_values(column: &Column) -> Result<Vec<Option<String>>, CatalogError> {
    let column_err = |source: PolarsError| CatalogError::Column {
        column: column.name().to_string(),
        source,
    };

    let casted = column.cast(&DataType::String).map_err(column_err)?;
    let values = casted
        .str()
        .map_err(column_err)?
        .into_iter()
        .map(|value| value.map(|s| s.to_string()))
        .collect();

    Ok(values)
}

/// Column as amounts, with null or unparseable cells as 0.0
fn numeric_values(column: &Column) -> Result<Vec<f64>, CatalogError> {
    let column_err = |source: PolarsError| CatalogError::Column {
        column: column.name().to_string(),
        source,
    };

    if column.dtype() == &DataType::String {
        let values = column
            .str()
            .map_err(column_err)?
            .into_iter()
            .map(|cell| cell.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0))
            .collect();
        return Ok(values);
    }

    let casted = column.cast(&DataType::Float64).map_err(column_err)?;
    let values = casted
        .f64()
        .map_err(column_err)?
        .into_iter()
        .map(|cell| cell.unwrap_or(0.0))
        .collect();

    Ok(values)
}
