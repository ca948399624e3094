use super::jobs::BatchJob;
use std::path::Path;

/// Hooks called by the batch driver as files are processed
pub trait BatchObserver {
    fn on_file_start(&mut self, job: &BatchJob, position: usize, total: usize);
    fn on_chart_written(&mut self, path: &Path);
    fn on_file_complete(&mut self, job: &BatchJob, generations: usize);
}

/// Reports progress through the `log` facade
pub struct LogObserver;

impl BatchObserver for LogObserver {
    fn on_file_start(&mut self, job: &BatchJob, position: usize, total: usize) {
        log::info!(
            "[{}/{}] Plotting {} ({})",
            position + 1,
            total,
            job.input.display(),
            job.describe()
        );
    }

    fn on_chart_written(&mut self, path: &Path) {
        log::debug!("  wrote {}", path.display());
    }

    fn on_file_complete(&mut self, job: &BatchJob, generations: usize) {
        if generations == 0 {
            log::warn!("{} contained no generations", job.input.display());
        }
    }
}

/// Discards all progress events
pub struct SilentObserver;

impl BatchObserver for SilentObserver {
    fn on_file_start(&mut self, _job: &BatchJob, _position: usize, _total: usize) {}
    fn on_chart_written(&mut self, _path: &Path) {}
    fn on_file_complete(&mut self, _job: &BatchJob, _generations: usize) {}
}
