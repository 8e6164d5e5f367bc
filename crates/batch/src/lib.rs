//! Batch plotting of per-size iteration tables.
//!
//! For each configured size, in order: load `size-{N}-iterations.csv`,
//! optionally difference the `iterations` column, build a chart and hand it
//! to a [`ChartSink`]. The first failure aborts the whole run.

mod sink;

pub use sink::{ChartSink, FileSink, WaitMode};

use chart::{ChartSpec, PlotError};
use std::path::PathBuf;
use table::{table_path, IterationTable, LoadError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("chart for size {size}: {source}")]
    Plot {
        size: u32,
        #[source]
        source: PlotError,
    },
}

/// What to plot and where to read it from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotConfig {
    pub sizes: Vec<u32>,
    pub diff_mode: bool,
    pub directory: PathBuf,
}

/// Builds the chart for one size.
pub fn chart_for(config: &PlotConfig, size: u32) -> Result<ChartSpec, LoadError> {
    let path = table_path(&config.directory, size);
    let table = IterationTable::load(&path)?;
    Ok(ChartSpec::for_size(
        size,
        config.diff_mode,
        table.series(config.diff_mode),
    ))
}

/// Plots every configured size in order and returns the number of charts
/// shown.
pub fn run<S: ChartSink>(config: &PlotConfig, sink: &mut S) -> Result<usize, RunError> {
    let mut shown = 0;

    for &size in &config.sizes {
        let chart = chart_for(config, size)?;
        sink.show(size, &chart)
            .map_err(|source| RunError::Plot { size, source })?;

        log::info!("{} ({} points)", chart.title, chart.points.len());
        shown += 1;
    }

    Ok(shown)
}
