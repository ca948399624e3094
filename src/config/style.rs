use super::layout::expand_template;
use super::traits::ConfigSection;
use crate::error::FitplotError;
use crate::types::Metric;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartStyle {
    pub color_scheme: ColorScheme,
    pub width: u32,
    pub height: u32,
    pub caption_font_size: u32,
    pub label_font_size: u32,
    /// Per-index chart titles; no titles are drawn when absent
    #[serde(default)]
    pub titles: Option<TitleTemplates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    /// Fixed colors per series role (orange-red / green / steel blue)
    Explicit,
    /// The plotting library's palette, in series order
    LibraryDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleTemplates {
    pub fitness: String,
    pub objective: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Explicit,
            width: 640,
            height: 480,
            caption_font_size: 24,
            label_font_size: 16,
            titles: Some(TitleTemplates::default()),
        }
    }
}

impl Default for TitleTemplates {
    fn default() -> Self {
        Self {
            fitness: "Fitnesses for Trial {i}".to_string(),
            objective: "Objective Function for Trial {i}".to_string(),
        }
    }
}

impl ChartStyle {
    /// Title for the indexed chart of `metric`, if titles are enabled
    pub fn title_for(&self, metric: Metric, index: usize) -> Option<String> {
        self.titles.as_ref().map(|t| match metric {
            Metric::Fitness => expand_template(&t.fitness, index),
            Metric::Objective => expand_template(&t.objective, index),
        })
    }
}

impl ConfigSection for ChartStyle {
    fn section_name() -> &'static str {
        "style"
    }

    fn validate(&self) -> Result<(), FitplotError> {
        if self.width < 100 || self.height < 100 {
            return Err(FitplotError::Configuration(format!(
                "Image size {}x{} is too small (minimum 100x100)",
                self.width, self.height
            )));
        }
        if self.caption_font_size == 0 || self.label_font_size == 0 {
            return Err(FitplotError::Configuration(
                "Font sizes must be positive".to_string()
            ));
        }
        Ok(())
    }
}
