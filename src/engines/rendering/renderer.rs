use super::profile::ChartSpec;
use crate::config::ChartStyle;
use crate::error::{FitplotError, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Draws one chart to one file
pub trait ChartRenderer {
    fn render(&mut self, chart: &ChartSpec<'_>, dest: &Path) -> Result<()>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &mut R {
    fn render(&mut self, chart: &ChartSpec<'_>, dest: &Path) -> Result<()> {
        (**self).render(chart, dest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Bitmap,
    Svg,
}

impl OutputFormat {
    /// `.svg` selects the SVG backend; everything else is a bitmap whose
    /// encoding follows the extension (PNG for `.png`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Bitmap,
        }
    }
}

pub struct PlottersRenderer {
    size: (u32, u32),
    caption_font_size: f64,
    label_font_size: f64,
}

impl PlottersRenderer {
    pub fn new(style: &ChartStyle) -> Self {
        Self {
            size: (style.width, style.height),
            caption_font_size: f64::from(style.caption_font_size),
            label_font_size: f64::from(style.label_font_size),
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: DrawingArea<DB, Shift>,
        chart: &ChartSpec<'_>,
    ) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let (x_lo, x_hi) = chart.x_range();
        let (y_lo, y_hi) = chart.y_range();

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(65);
        if let Some(title) = &chart.title {
            builder.caption(title, ("sans-serif", self.caption_font_size));
        }
        let mut ctx = builder.build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label)
            .y_desc(chart.y_label)
            .label_style(("sans-serif", self.label_font_size))
            .draw()?;

        for series in &chart.series {
            // Values outside the y range are cut at the axis edge, not clamped
            let color = series.color.to_rgb();
            let segments = chart.segments(series);
            ctx.draw_series(
                segments
                    .into_iter()
                    .map(|points| PathElement::new(points, color.stroke_width(2))),
            )?
            .label(series.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        }

        ctx.configure_series_labels()
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(("sans-serif", self.label_font_size))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&mut self, chart: &ChartSpec<'_>, dest: &Path) -> Result<()> {
        // The drawing area lives only for this call; it is flushed by
        // `present` and dropped before the next chart starts.
        let outcome = match OutputFormat::from_path(dest) {
            OutputFormat::Svg => {
                let root = SVGBackend::new(dest, self.size).into_drawing_area();
                self.draw(root, chart).map_err(|e| e.to_string())
            }
            OutputFormat::Bitmap => {
                let root = BitMapBackend::new(dest, self.size).into_drawing_area();
                self.draw(root, chart).map_err(|e| e.to_string())
            }
        };

        outcome.map_err(|message| FitplotError::Render {
            path: dest.display().to_string(),
            message,
        })?;

        log::debug!("Wrote {:?} chart to {}", chart.metric, dest.display());
        Ok(())
    }
}
