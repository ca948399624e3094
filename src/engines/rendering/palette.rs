use crate::config::ColorScheme;
use crate::types::StatColumn;
use plotters::style::{Color, Palette, Palette99, RGBColor};

pub const ORANGE_RED: RGBColor = RGBColor(255, 69, 0);
pub const GREEN: RGBColor = RGBColor(0, 128, 0);
pub const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);

/// Line color of one series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Rgb(u8, u8, u8),
    /// Index into the library palette
    Palette(usize),
}

impl SeriesColor {
    /// Color for `column` drawn as the `position`-th series of its chart.
    ///
    /// Under the explicit scheme the worst series is orange-red and the best
    /// green: min fitness and max objective are the bad ends.
    pub fn for_column(scheme: ColorScheme, column: StatColumn, position: usize) -> Self {
        match scheme {
            ColorScheme::LibraryDefault => Self::Palette(position),
            ColorScheme::Explicit => {
                let color = match column {
                    StatColumn::MinFitness | StatColumn::MaxObjective => ORANGE_RED,
                    StatColumn::MaxFitness | StatColumn::MinObjective => GREEN,
                    StatColumn::AvgFitness | StatColumn::AvgObjective => STEEL_BLUE,
                };
                Self::Rgb(color.0, color.1, color.2)
            }
        }
    }

    pub fn to_rgb(&self) -> RGBColor {
        match *self {
            Self::Rgb(r, g, b) => RGBColor(r, g, b),
            Self::Palette(index) => {
                let (r, g, b) = Palette99::pick(index).to_backend_color().rgb;
                RGBColor(r, g, b)
            }
        }
    }
}
