use super::jobs::{plan_jobs, BatchJob};
use super::progress::{BatchObserver, LogObserver};
use crate::config::{AppConfig, ColorScheme};
use crate::data::load_statistics;
use crate::engines::rendering::{ChartRenderer, ChartSpec, PlottersRenderer};
use crate::error::{FitplotError, Result};
use crate::types::Metric;
use std::path::{Path, PathBuf};

/// Charts produced by a completed batch, in write order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub files_processed: usize,
    pub charts: Vec<PathBuf>,
}

pub struct BatchDriver<R: ChartRenderer, O: BatchObserver> {
    renderer: R,
    observer: O,
    color_scheme: ColorScheme,
}

impl<R: ChartRenderer, O: BatchObserver> BatchDriver<R, O> {
    pub fn new(renderer: R, observer: O, color_scheme: ColorScheme) -> Self {
        Self {
            renderer,
            observer,
            color_scheme,
        }
    }

    /// Process every job in order. The first failure ends the batch;
    /// charts written before it are left in place.
    pub fn run(&mut self, jobs: &[BatchJob]) -> Result<BatchReport> {
        let mut report = BatchReport::default();

        for (position, job) in jobs.iter().enumerate() {
            self.observer.on_file_start(job, position, jobs.len());
            let written = self.process(job)?;
            report.files_processed += 1;
            report.charts.extend(written);
        }

        Ok(report)
    }

    /// Load one file completely, then draw its fitness and objective charts
    pub fn process(&mut self, job: &BatchJob) -> Result<[PathBuf; 2]> {
        let table = load_statistics(&job.input)?;

        for metric in [Metric::Fitness, Metric::Objective] {
            let title = job.title(metric).map(str::to_string);
            let chart = ChartSpec::for_metric(metric, &table, self.color_scheme, title);
            let dest = job.output(metric);
            self.renderer.render(&chart, dest)?;
            self.observer.on_chart_written(dest);
        }

        self.observer.on_file_complete(job, table.len());
        Ok([job.fitness_output.clone(), job.objective_output.clone()])
    }
}

/// Plot a whole batch with the plotters backend, logging progress
pub fn run_batch(config: &AppConfig, data_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
    if !output_dir.is_dir() {
        return Err(FitplotError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )));
    }

    let jobs = plan_jobs(&config.layout, &config.style, data_dir, output_dir);
    let renderer = PlottersRenderer::new(&config.style);
    let mut driver = BatchDriver::new(renderer, LogObserver, config.style.color_scheme);

    let report = driver.run(&jobs)?;
    log::info!(
        "Plotted {} files, {} charts written to {}",
        report.files_processed,
        report.charts.len(),
        output_dir.display()
    );
    Ok(report)
}
