//! Loading of `new_max,iterations` tables.
//!
//! Columns are located by header name, so files may carry extra columns in
//! any order. Every failure is a [`LoadError`] that names the file.

use crate::{first_difference, ITERATIONS, NEW_MAX};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a table
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no `{column}` column", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{} row {row}: `{column}` value {value:?} is not a number", .path.display())]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl LoadError {
    /// File the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Open { path, .. }
            | LoadError::Csv { path, .. }
            | LoadError::MissingColumn { path, .. }
            | LoadError::InvalidValue { path, .. } => path,
        }
    }
}

type Result<T> = core::result::Result<T, LoadError>;

/// A `new_max` / `iterations` table in file row order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IterationTable {
    pub new_max: Vec<f64>,
    pub iterations: Vec<f64>,
}

impl IterationTable {
    /// Reads the table stored at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let csv_err = |source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        let x_col = column_index(&headers, NEW_MAX, path)?;
        let y_col = column_index(&headers, ITERATIONS, path)?;

        let mut table = IterationTable::default();
        for (i, record) in reader.records().enumerate() {
            let record = record.map_err(csv_err)?;
            let row = i + 1;
            table.new_max.push(parse_field(&record, x_col, NEW_MAX, row, path)?);
            table
                .iterations
                .push(parse_field(&record, y_col, ITERATIONS, row, path)?);
        }

        log::debug!("loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.new_max.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_max.is_empty()
    }

    /// Points to plot: `new_max` against `iterations`, or against the first
    /// difference of `iterations` when `diff_mode` is set. Empty cells load
    /// as NaN and come out as `None`.
    pub fn series(&self, diff_mode: bool) -> Vec<(f64, Option<f64>)> {
        let ys = if diff_mode {
            first_difference(&self.iterations)
        } else {
            self.iterations
                .iter()
                .map(|&v| Some(v).filter(|v| !v.is_nan()))
                .collect()
        };

        self.new_max.iter().copied().zip(ys).collect()
    }
}

fn column_index(headers: &StringRecord, column: &'static str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| LoadError::MissingColumn {
            path: path.to_path_buf(),
            column,
        })
}

fn parse_field(
    record: &StringRecord,
    idx: usize,
    column: &'static str,
    row: usize,
    path: &Path,
) -> Result<f64> {
    let raw = record.get(idx).unwrap_or_default();
    if raw.is_empty() {
        return Ok(f64::NAN);
    }
    raw.parse::<f64>().map_err(|_| LoadError::InvalidValue {
        path: path.to_path_buf(),
        row,
        column,
        value: raw.to_string(),
    })
}
