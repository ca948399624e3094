use crate::config::{BatchLayout, ChartStyle};
use crate::types::Metric;
use std::path::{Path, PathBuf};

/// One input file and the two charts drawn from it
#[derive(Debug, Clone, PartialEq)]
pub struct BatchJob {
    /// `None` for the aggregate file
    pub index: Option<usize>,
    pub input: PathBuf,
    pub fitness_output: PathBuf,
    pub objective_output: PathBuf,
    pub fitness_title: Option<String>,
    pub objective_title: Option<String>,
}

impl BatchJob {
    pub fn describe(&self) -> String {
        match self.index {
            Some(i) => format!("#{}", i),
            None => "aggregate".to_string(),
        }
    }

    pub fn output(&self, metric: Metric) -> &Path {
        match metric {
            Metric::Fitness => &self.fitness_output,
            Metric::Objective => &self.objective_output,
        }
    }

    pub fn title(&self, metric: Metric) -> Option<&str> {
        match metric {
            Metric::Fitness => self.fitness_title.as_deref(),
            Metric::Objective => self.objective_title.as_deref(),
        }
    }
}

/// Expand the layout into the ordered job list: the aggregate entry (if
/// any) first, then indices `0..count`.
pub fn plan_jobs(
    layout: &BatchLayout,
    style: &ChartStyle,
    data_dir: &Path,
    output_dir: &Path,
) -> Vec<BatchJob> {
    let mut jobs = Vec::with_capacity(layout.count + 1);

    if let Some(aggregate) = &layout.aggregate {
        let titled = style.titles.is_some();
        jobs.push(BatchJob {
            index: None,
            input: data_dir.join(&aggregate.input),
            fitness_output: output_dir.join(&aggregate.fitness_output),
            objective_output: output_dir.join(&aggregate.objective_output),
            fitness_title: titled.then(|| aggregate.fitness_title.clone()),
            objective_title: titled.then(|| aggregate.objective_title.clone()),
        });
    }

    for i in 0..layout.count {
        jobs.push(BatchJob {
            index: Some(i),
            input: data_dir.join(layout.input_name(i)),
            fitness_output: output_dir.join(layout.fitness_name(i)),
            objective_output: output_dir.join(layout.objective_name(i)),
            fitness_title: style.title_for(Metric::Fitness, i),
            objective_title: style.title_for(Metric::Objective, i),
        });
    }

    jobs
}
