use crate::error::{FitplotError, Result};
use crate::types::StatColumn;
use polars::prelude::*;
use std::path::Path;

pub struct DataValidator;

impl DataValidator {
    /// Every row must carry all six fields.
    ///
    /// The reader fills missing trailing fields with nulls, so the first
    /// null found marks a short row. Row numbers in errors are 1-based file
    /// lines (the header is line 1).
    pub fn validate_complete_rows(df: &DataFrame, path: &Path) -> Result<()> {
        let mut first_bad: Option<(usize, StatColumn)> = None;

        for column in StatColumn::all() {
            let values = df.column(column.as_str())?.f64()?;
            if values.null_count() == 0 {
                continue;
            }
            let row = values
                .into_iter()
                .position(|v| v.is_none())
                .unwrap_or(0);
            if first_bad.map_or(true, |(r, _)| row < r) {
                first_bad = Some((row, column));
            }
        }

        match first_bad {
            Some((row, column)) => Err(FitplotError::MalformedRow {
                file: path.display().to_string(),
                row: row + 2,
                reason: format!("missing field '{}' (expected 6 fields)", column.as_str()),
            }),
            None => Ok(()),
        }
    }

    /// Count fitness cells outside the fixed [0, 100] chart range
    pub fn fitness_out_of_range(df: &DataFrame) -> Result<usize> {
        let mut count = 0;
        for column in [
            StatColumn::MinFitness,
            StatColumn::MaxFitness,
            StatColumn::AvgFitness,
        ] {
            let values = df.column(column.as_str())?.f64()?;
            count += values
                .into_iter()
                .flatten()
                .filter(|v| !(0.0..=100.0).contains(v))
                .count();
        }
        Ok(count)
    }
}
