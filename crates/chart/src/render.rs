use crate::ChartSpec;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, PlotError>;

const SIZE: (u32, u32) = (1024, 768);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Draws `chart` and writes it to `path`.
///
/// The line is drawn with a circle marker on each defined point. Undefined
/// points split the line and get no marker.
pub fn render(chart: &ChartSpec, path: &Path, format: ImageFormat) -> Result<()> {
    match format {
        ImageFormat::Png => draw(chart, BitMapBackend::new(path, SIZE).into_drawing_area()),
        ImageFormat::Svg => draw(chart, SVGBackend::new(path, SIZE).into_drawing_area()),
    }
}

fn draw<DB: DrawingBackend>(chart: &ChartSpec, root: DrawingArea<DB, Shift>) -> Result<()> {
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let (x_range, y_range) = chart.ranges();

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    ctx.configure_mesh()
        .x_desc(chart.x_label.as_str())
        .y_desc(chart.y_label.as_str())
        .label_style(("sans-serif", 16))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for segment in chart.segments() {
        ctx.draw_series(LineSeries::new(segment.iter().copied(), &BLUE))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        ctx.draw_series(
            segment
                .iter()
                .map(|&point| Circle::new(point, 4, BLUE.filled())),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
