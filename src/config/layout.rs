use super::traits::ConfigSection;
use crate::error::FitplotError;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the file index in every template
pub const INDEX_PLACEHOLDER: &str = "{i}";

/// File naming and loop bounds for one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchLayout {
    pub input_template: String,
    pub fitness_template: String,
    pub objective_template: String,
    pub count: usize,
    /// Processed once, before the indexed files
    #[serde(default)]
    pub aggregate: Option<AggregateEntry>,
}

/// A single non-indexed input (e.g. the average over all trials)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub input: String,
    pub fitness_output: String,
    pub objective_output: String,
    pub fitness_title: String,
    pub objective_title: String,
}

impl Default for BatchLayout {
    fn default() -> Self {
        Self {
            input_template: "stats-trial-{i}.csv".to_string(),
            fitness_template: "fitness-trial-{i}.png".to_string(),
            objective_template: "objective-trial-{i}.png".to_string(),
            count: 30,
            aggregate: Some(AggregateEntry::default()),
        }
    }
}

impl Default for AggregateEntry {
    fn default() -> Self {
        Self {
            input: "stats-average.csv".to_string(),
            fitness_output: "fitness-average.png".to_string(),
            objective_output: "objective-average.png".to_string(),
            fitness_title: "Average Fitnesses (over 30 Trials)".to_string(),
            objective_title: "Average Objective Function (over 30 Trials)".to_string(),
        }
    }
}

/// Substitute `index` for every `{i}` in `template`
pub fn expand_template(template: &str, index: usize) -> String {
    template.replace(INDEX_PLACEHOLDER, &index.to_string())
}

impl BatchLayout {
    pub fn input_name(&self, index: usize) -> String {
        expand_template(&self.input_template, index)
    }

    pub fn fitness_name(&self, index: usize) -> String {
        expand_template(&self.fitness_template, index)
    }

    pub fn objective_name(&self, index: usize) -> String {
        expand_template(&self.objective_template, index)
    }
}

impl ConfigSection for BatchLayout {
    fn section_name() -> &'static str {
        "layout"
    }

    fn validate(&self) -> Result<(), FitplotError> {
        if self.count == 0 {
            return Err(FitplotError::Configuration(
                "Batch count must be at least 1".to_string()
            ));
        }
        for (name, template) in [
            ("input_template", &self.input_template),
            ("fitness_template", &self.fitness_template),
            ("objective_template", &self.objective_template),
        ] {
            if !template.contains(INDEX_PLACEHOLDER) {
                return Err(FitplotError::Configuration(format!(
                    "{} '{}' must contain {}",
                    name, template, INDEX_PLACEHOLDER
                )));
            }
        }
        if self.fitness_template == self.objective_template {
            return Err(FitplotError::Configuration(
                "Fitness and objective templates must differ".to_string()
            ));
        }
        if let Some(aggregate) = &self.aggregate {
            if aggregate.fitness_output == aggregate.objective_output {
                return Err(FitplotError::Configuration(
                    "Aggregate fitness and objective outputs must differ".to_string()
                ));
            }
            for name in [&aggregate.input, &aggregate.fitness_output, &aggregate.objective_output] {
                if name.contains(INDEX_PLACEHOLDER) {
                    return Err(FitplotError::Configuration(format!(
                        "Aggregate file name '{}' must not contain {}",
                        name, INDEX_PLACEHOLDER
                    )));
                }
            }
        }
        Ok(())
    }
}
