use anyhow::Context;
use fitplot::cli::{self, RunOutcome};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run(std::env::args_os()).context("fitplot batch failed")? {
        RunOutcome::Completed(report) => {
            log::debug!("{} charts written", report.charts.len());
        }
        RunOutcome::Usage | RunOutcome::ConfigPrinted => {}
    }
    Ok(())
}
