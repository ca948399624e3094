use serde::{Deserialize, Serialize};

/// The six statistics columns, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatColumn {
    MinFitness,
    MaxFitness,
    AvgFitness,
    MinObjective,
    MaxObjective,
    AvgObjective,
}

impl StatColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MinFitness => "min_fitness",
            Self::MaxFitness => "max_fitness",
            Self::AvgFitness => "avg_fitness",
            Self::MinObjective => "min_objective",
            Self::MaxObjective => "max_objective",
            Self::AvgObjective => "avg_objective",
        }
    }

    pub fn all() -> [Self; 6] {
        [
            Self::MinFitness,
            Self::MaxFitness,
            Self::AvgFitness,
            Self::MinObjective,
            Self::MaxObjective,
            Self::AvgObjective,
        ]
    }
}

/// Which kind of series a chart plots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    Fitness,   // higher is better
    Objective, // lower is better
}

/// One statistics file: per-generation min/max/avg of fitness and objective.
/// Row position is the generation index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsTable {
    pub min_fitness: Vec<f64>,
    pub max_fitness: Vec<f64>,
    pub avg_fitness: Vec<f64>,
    pub min_objective: Vec<f64>,
    pub max_objective: Vec<f64>,
    pub avg_objective: Vec<f64>,
}

impl StatisticsTable {
    pub fn column(&self, column: StatColumn) -> &[f64] {
        match column {
            StatColumn::MinFitness => &self.min_fitness,
            StatColumn::MaxFitness => &self.max_fitness,
            StatColumn::AvgFitness => &self.avg_fitness,
            StatColumn::MinObjective => &self.min_objective,
            StatColumn::MaxObjective => &self.max_objective,
            StatColumn::AvgObjective => &self.avg_objective,
        }
    }

    /// Number of generations (rows)
    pub fn len(&self) -> usize {
        self.min_fitness.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (min, max, avg) columns for the given metric
    pub fn series(&self, metric: Metric) -> [(StatColumn, &[f64]); 3] {
        let columns = match metric {
            Metric::Fitness => [
                StatColumn::MinFitness,
                StatColumn::MaxFitness,
                StatColumn::AvgFitness,
            ],
            Metric::Objective => [
                StatColumn::MinObjective,
                StatColumn::MaxObjective,
                StatColumn::AvgObjective,
            ],
        };
        columns.map(|c| (c, self.column(c)))
    }
}
