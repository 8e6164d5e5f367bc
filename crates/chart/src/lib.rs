//! Line charts of iteration tables.
//!
//! [`ChartSpec`] holds everything that ends up on a chart (title, axis
//! labels, points). [`render`] draws it with [`plotters`].

mod render;

pub use render::{render, ImageFormat, PlotError};

use std::ops::Range;

/// Label of the x axis.
pub const X_LABEL: &str = "new_max";

/// Chart title for one size.
pub fn title(size: u32, diff_mode: bool) -> String {
    format!(
        "Iterations{} vs new_max for size {}",
        if diff_mode { " diff" } else { "" },
        size
    )
}

pub fn y_label(diff_mode: bool) -> &'static str {
    if diff_mode {
        "iterations (diff)"
    } else {
        "iterations"
    }
}

/// A single line chart. Points with an undefined y value are kept in place
/// and break the line instead of being dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<(f64, Option<f64>)>,
    /// Whether the y values are first differences.
    pub diff_mode: bool,
}

impl ChartSpec {
    pub fn for_size(size: u32, diff_mode: bool, points: Vec<(f64, Option<f64>)>) -> Self {
        Self {
            title: title(size, diff_mode),
            x_label: X_LABEL.to_string(),
            y_label: y_label(diff_mode).to_string(),
            points,
            diff_mode,
        }
    }

    pub fn y_values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|&(_, y)| y).collect()
    }

    /// Runs of consecutive defined points, each drawn as one connected line.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for &(x, y) in &self.points {
            match y {
                Some(y) if y.is_finite() && x.is_finite() => current.push((x, y)),
                _ => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        segments
    }

    /// Axis ranges covering every drawable point with a small margin.
    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        let xs = self.points.iter().map(|&(x, _)| x);
        let ys = self.points.iter().filter_map(|&(_, y)| y);
        (padded(xs), padded(ys))
    }
}

fn padded(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 1.0)..(max + 1.0);
    }

    // scaled before subtracting so spans near f64::MAX stay finite
    let margin = max * 0.05 - min * 0.05;
    (min - margin).max(f64::MIN)..(max + margin).min(f64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_and_labels() {
        assert_eq!(title(4, false), "Iterations vs new_max for size 4");
        assert_eq!(title(6, true), "Iterations diff vs new_max for size 6");
        assert_eq!(y_label(false), "iterations");
        assert_eq!(y_label(true), "iterations (diff)");

        let c = ChartSpec::for_size(3, true, Vec::new());
        assert_eq!(c.x_label, "new_max");
        assert_eq!(c.y_label, "iterations (diff)");
    }

    #[test]
    fn line_breaks_at_undefined_points() {
        let c = ChartSpec::for_size(
            5,
            true,
            vec![
                (1.0, None),
                (2.0, Some(3.0)),
                (3.0, Some(4.0)),
                (4.0, None),
                (5.0, Some(1.0)),
            ],
        );

        assert_eq!(
            c.segments(),
            vec![vec![(2.0, 3.0), (3.0, 4.0)], vec![(5.0, 1.0)]]
        );
    }

    #[test]
    fn all_undefined_has_no_segments() {
        let c = ChartSpec::for_size(5, true, vec![(1.0, None)]);
        assert!(c.segments().is_empty());

        let (x, y) = c.ranges();
        assert_eq!(x, 0.0..2.0);
        assert_eq!(y, 0.0..1.0);
    }

    #[test]
    fn extreme_spans_stay_finite() {
        let c = ChartSpec::for_size(
            4,
            false,
            vec![(-1e308, Some(-1e308)), (1e308, Some(1e308))],
        );

        let (x, y) = c.ranges();
        for r in [x, y] {
            assert!(r.start.is_finite() && r.end.is_finite(), "{:?}", r);
            assert!(r.start < -1e308 && r.end > 1e308, "{:?}", r);
        }

        let c = ChartSpec::for_size(4, false, vec![(f64::MIN, Some(0.0)), (f64::MAX, Some(1.0))]);
        let (x, _) = c.ranges();
        assert_eq!(x, f64::MIN..f64::MAX);
    }

    #[test]
    fn undefined_x_breaks_the_line() {
        let c = ChartSpec::for_size(
            4,
            false,
            vec![(1.0, Some(1.0)), (f64::NAN, Some(2.0)), (3.0, Some(3.0))],
        );

        assert_eq!(c.segments(), vec![vec![(1.0, 1.0)], vec![(3.0, 3.0)]]);
    }

    #[test]
    fn ranges_include_all_points() {
        let c = ChartSpec::for_size(
            4,
            false,
            vec![(1.0, Some(0.0)), (11.0, Some(100.0))],
        );

        let (x, y) = c.ranges();
        assert!(x.start < 1.0 && x.end > 11.0);
        assert!(y.start < 0.0 && y.end > 100.0);
    }
}
