pub mod driver;
pub mod jobs;
pub mod progress;

pub use driver::{run_batch, BatchDriver, BatchReport};
pub use jobs::{plan_jobs, BatchJob};
pub use progress::{BatchObserver, LogObserver};
