pub mod palette;
pub mod profile;
pub mod renderer;

pub use palette::SeriesColor;
pub use profile::{AxisRange, ChartSpec, SeriesSpec, X_AXIS_LABEL};
pub use renderer::{ChartRenderer, OutputFormat, PlottersRenderer};
