use super::layout::BatchLayout;
use super::manager::AppConfig;
use super::style::{ChartStyle, ColorScheme};
use serde::{Deserialize, Serialize};

/// Naming conventions of the known statistics producers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// `stats-trial-{i}.csv` plus `stats-average.csv`, titled charts
    #[default]
    Trials,
    /// `fitnessStatsGen{i}.csv`, untitled charts
    Generations,
    /// `fitnessStatsRun{i}.csv`, untitled charts in library colors
    Runs,
}

impl Preset {
    pub fn config(&self) -> AppConfig {
        match self {
            Self::Trials => AppConfig::default(),
            Self::Generations => AppConfig {
                layout: BatchLayout {
                    input_template: "fitnessStatsGen{i}.csv".to_string(),
                    fitness_template: "fitnessGen{i}.png".to_string(),
                    objective_template: "objectiveGen{i}.png".to_string(),
                    count: 30,
                    aggregate: None,
                },
                style: ChartStyle {
                    titles: None,
                    ..ChartStyle::default()
                },
            },
            Self::Runs => AppConfig {
                layout: BatchLayout {
                    input_template: "fitnessStatsRun{i}.csv".to_string(),
                    fitness_template: "fitnessRun{i}.png".to_string(),
                    objective_template: "objectiveRun{i}.png".to_string(),
                    count: 30,
                    aggregate: None,
                },
                style: ChartStyle {
                    color_scheme: ColorScheme::LibraryDefault,
                    titles: None,
                    ..ChartStyle::default()
                },
            },
        }
    }
}
