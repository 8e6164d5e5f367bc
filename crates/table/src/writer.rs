use crate::{ITERATIONS, NEW_MAX};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while writing an iteration log
#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush: {0}")]
    Flush(#[from] std::io::Error),
}

impl From<LogError> for std::io::Error {
    fn from(err: LogError) -> Self {
        match err {
            LogError::Create { source, .. } | LogError::Flush(source) => source,
            LogError::Csv(e) => e.into(),
        }
    }
}

type Result<T> = core::result::Result<T, LogError>;

#[derive(Serialize)]
struct LogRow {
    new_max: i64,
    iterations: u64,
}

/// Append-only `new_max,iterations` CSV file.
///
/// Every row is flushed as soon as it is recorded, so an interrupted run
/// still leaves a readable table behind.
pub struct IterationLog {
    writer: Writer<File>,
}

impl IterationLog {
    /// Truncates or creates `path` and writes the header row.
    pub fn create(path: &Path) -> Result<Self> {
        let create_err = |source| LogError::Create {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(create_err)?;
        }
        let file = File::create(path).map_err(create_err)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record([NEW_MAX, ITERATIONS])?;
        writer.flush()?;

        Ok(Self { writer })
    }

    pub fn record(&mut self, new_max: i64, iterations: u64) -> Result<()> {
        self.writer.serialize(LogRow {
            new_max,
            iterations,
        })?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flushes pending output and closes the file.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
