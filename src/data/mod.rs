pub mod connectors;

pub use connectors::{load_statistics, CsvConnector, DataValidator};
