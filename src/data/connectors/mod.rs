mod csv;
mod validator;

pub use csv::{load_statistics, CsvConnector};
pub use validator::DataValidator;
