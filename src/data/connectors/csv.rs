use crate::error::{FitplotError, Result};
use crate::types::{StatColumn, StatisticsTable};
use super::validator::DataValidator;
use polars::prelude::*;
use std::path::Path;
use std::sync::Arc;

pub struct CsvConnector;

impl CsvConnector {
    /// Six Float64 columns, named in file order
    pub fn schema() -> Schema {
        let mut schema = Schema::with_capacity(StatColumn::all().len());
        for column in StatColumn::all() {
            schema.with_column(column.as_str().into(), DataType::Float64);
        }
        schema
    }

    /// Load a statistics CSV into a DataFrame, ignoring the first line.
    ///
    /// Fields are parsed against the fixed schema, so a non-numeric cell
    /// fails here; short rows come back with nulls and are caught by
    /// [`DataValidator::validate_complete_rows`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FitplotError::DataLoading(format!("Cannot open {}: {}", path.display(), e))
        })?;
        if contents.is_empty() {
            return Err(FitplotError::DataLoading(format!(
                "{} is empty (expected a header row)",
                path.display()
            )));
        }
        if Self::is_header_only(&contents) {
            log::warn!("{} has no data rows", path.display());
            return Ok(DataFrame::empty_with_schema(&Self::schema()));
        }

        CsvReadOptions::default()
            .with_has_header(false)
            .with_skip_rows(1)
            .with_schema(Some(Arc::new(Self::schema())))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()
            .map_err(|e| {
                FitplotError::DataLoading(format!("Failed to read CSV {}: {}", path.display(), e))
            })
    }

    /// True when nothing follows the first line. A blank line after the
    /// header is a row like any other and is not accepted here.
    pub fn is_header_only(contents: &str) -> bool {
        match contents.split_once('\n') {
            Some((_, rest)) => rest.is_empty(),
            None => true,
        }
    }

    /// Split a validated DataFrame into the six ordered sequences
    pub fn to_table(df: &DataFrame) -> Result<StatisticsTable> {
        let mut table = StatisticsTable::default();
        for column in StatColumn::all() {
            let values: Vec<f64> = df.column(column.as_str())?.f64()?.into_iter().flatten().collect();
            match column {
                StatColumn::MinFitness => table.min_fitness = values,
                StatColumn::MaxFitness => table.max_fitness = values,
                StatColumn::AvgFitness => table.avg_fitness = values,
                StatColumn::MinObjective => table.min_objective = values,
                StatColumn::MaxObjective => table.max_objective = values,
                StatColumn::AvgObjective => table.avg_objective = values,
            }
        }
        Ok(table)
    }
}

/// Read one statistics file into six equal-length sequences.
///
/// Any missing file, short row or non-numeric field is an error; nothing is
/// skipped or repaired.
pub fn load_statistics<P: AsRef<Path>>(path: P) -> Result<StatisticsTable> {
    let path = path.as_ref();
    let df = CsvConnector::load(path)?;

    DataValidator::validate_complete_rows(&df, path)?;

    let out_of_range = DataValidator::fitness_out_of_range(&df)?;
    if out_of_range > 0 {
        log::warn!(
            "{}: {} fitness values fall outside [0, 100] and will be clipped",
            path.display(),
            out_of_range
        );
    }

    let table = CsvConnector::to_table(&df)?;
    log::debug!("Loaded {} generations from {}", table.len(), path.display());
    Ok(table)
}
