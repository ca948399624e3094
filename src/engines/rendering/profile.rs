use super::palette::SeriesColor;
use crate::config::ColorScheme;
use crate::types::{Metric, StatColumn, StatisticsTable};

pub const X_AXIS_LABEL: &str = "Generation";
pub const FITNESS_Y_LABEL: &str = "Fitness (higher is better)";
pub const OBJECTIVE_Y_LABEL: &str = "Objective function value (lower is better)";
pub const FITNESS_RANGE: (f64, f64) = (0.0, 100.0);

/// Fraction of the data span added above and below auto-scaled axes
const AUTO_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisRange {
    Fixed(f64, f64),
    Auto,
}

#[derive(Debug, Clone)]
pub struct SeriesSpec<'a> {
    pub label: &'static str,
    pub values: &'a [f64],
    pub color: SeriesColor,
}

/// Everything needed to draw one chart
#[derive(Debug, Clone)]
pub struct ChartSpec<'a> {
    pub metric: Metric,
    pub title: Option<String>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_axis: AxisRange,
    pub series: Vec<SeriesSpec<'a>>,
}

fn series_label(column: StatColumn) -> &'static str {
    match column {
        StatColumn::MinFitness => "Min fitness",
        StatColumn::MaxFitness => "Max fitness",
        StatColumn::AvgFitness => "Average fitness",
        StatColumn::MinObjective => "Min objective",
        StatColumn::MaxObjective => "Max objective",
        StatColumn::AvgObjective => "Average objective",
    }
}

impl<'a> ChartSpec<'a> {
    /// Build the chart of `metric` (min, max, avg series) for one table
    pub fn for_metric(
        metric: Metric,
        table: &'a StatisticsTable,
        scheme: ColorScheme,
        title: Option<String>,
    ) -> Self {
        let series = table
            .series(metric)
            .into_iter()
            .enumerate()
            .map(|(position, (column, values))| SeriesSpec {
                label: series_label(column),
                values,
                color: SeriesColor::for_column(scheme, column, position),
            })
            .collect();

        let (y_label, y_axis) = match metric {
            Metric::Fitness => (FITNESS_Y_LABEL, AxisRange::Fixed(FITNESS_RANGE.0, FITNESS_RANGE.1)),
            Metric::Objective => (OBJECTIVE_Y_LABEL, AxisRange::Auto),
        };

        Self {
            metric,
            title,
            x_label: X_AXIS_LABEL,
            y_label,
            y_axis,
            series,
        }
    }

    /// Number of generations plotted
    pub fn len(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// X axis spans generation indices `0..=n-1`, never narrower than `0..1`
    pub fn x_range(&self) -> (f64, f64) {
        let last = self.len().saturating_sub(1) as f64;
        (0.0, last.max(1.0))
    }

    pub fn y_range(&self) -> (f64, f64) {
        match self.y_axis {
            AxisRange::Fixed(lo, hi) => (lo, hi),
            AxisRange::Auto => auto_range(self.series.iter().flat_map(|s| s.values.iter().copied())),
        }
    }

    /// Visible pieces of `series`, clipped to the y range
    pub fn segments(&self, series: &SeriesSpec<'_>) -> Vec<Vec<(f64, f64)>> {
        let (lo, hi) = self.y_range();
        clip_to_range(series.values, lo, hi)
    }
}

/// Split a series (x = generation index) into polylines that stay inside
/// `lo..=hi`. Lines leaving the range end at the crossing point and resume
/// where they come back in.
pub fn clip_to_range(values: &[f64], lo: f64, hi: f64) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();

    if let [only] = values {
        if only.is_finite() && (lo..=hi).contains(only) {
            segments.push(vec![(0.0, *only)]);
        }
        return segments;
    }

    let mut current: Vec<(f64, f64)> = Vec::new();
    for (i, pair) in values.windows(2).enumerate() {
        let from = (i as f64, pair[0]);
        let to = ((i + 1) as f64, pair[1]);
        match clip_segment(from, to, lo, hi) {
            Some((start, end)) => {
                if current.last() != Some(&start) {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                    current.push(start);
                }
                current.push(end);
            }
            None => {
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

/// Clip one line segment to the horizontal band `lo..=hi`.
/// Endpoints inside the band are returned unchanged.
fn clip_segment(from: (f64, f64), to: (f64, f64), lo: f64, hi: f64) -> Option<((f64, f64), (f64, f64))> {
    let (x0, y0) = from;
    let (x1, y1) = to;
    if !y0.is_finite() || !y1.is_finite() {
        return None;
    }

    let dy = y1 - y0;
    let (mut t_in, mut t_out) = (0.0_f64, 1.0_f64);
    if dy == 0.0 {
        if y0 < lo || y0 > hi {
            return None;
        }
    } else {
        let t_lo = (lo - y0) / dy;
        let t_hi = (hi - y0) / dy;
        t_in = t_in.max(t_lo.min(t_hi));
        t_out = t_out.min(t_lo.max(t_hi));
        if t_in > t_out {
            return None;
        }
    }

    let at = |t: f64| {
        if t == 0.0 {
            from
        } else if t == 1.0 {
            to
        } else {
            (x0 + (x1 - x0) * t, y0 + dy * t)
        }
    };
    Some((at(t_in), at(t_out)))
}

/// Data min..max with a 5% margin; flat data gets a margin of at least 1
fn auto_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if !lo.is_finite() {
        return (0.0, 1.0);
    }

    let span = hi - lo;
    let margin = if span > 0.0 {
        span * AUTO_MARGIN
    } else {
        (lo.abs() * AUTO_MARGIN).max(1.0)
    };
    (lo - margin, hi + margin)
}
