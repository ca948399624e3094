use crate::config::{ConfigManager, Preset};
use crate::engines::batch::{run_batch, BatchReport};
use crate::error::Result;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: fitplot <data directory> <output directory>";

/// Plot evolutionary-algorithm statistics CSVs as fitness and objective charts
#[derive(Parser, Debug)]
#[command(name = "fitplot", version, long_about = None)]
pub struct Cli {
    /// Directory holding the statistics CSV files
    pub data_dir: PathBuf,

    /// Existing directory the charts are written to
    pub output_dir: PathBuf,

    /// File naming and styling convention
    #[arg(long, value_enum, default_value_t = Preset::Trials)]
    pub preset: Preset,

    /// TOML file overriding the preset
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of indexed files to plot
    #[arg(long)]
    pub count: Option<usize>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Arguments were wrong; usage was printed and nothing was written
    Usage,
    ConfigPrinted,
    Completed(BatchReport),
}

pub fn run<I, T>(args: I) -> Result<RunOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            return Ok(RunOutcome::Usage);
        }
        Err(e) => {
            log::debug!("Argument error: {}", e);
            println!("{}", USAGE);
            return Ok(RunOutcome::Usage);
        }
    };

    let mut manager = ConfigManager::from_sources(cli.preset, cli.config.as_deref())?;
    if let Some(count) = cli.count {
        manager.update(|config| config.layout.count = count)?;
    }

    if cli.print_config {
        print!("{}", manager.to_toml()?);
        return Ok(RunOutcome::ConfigPrinted);
    }

    let report = run_batch(manager.get(), &cli.data_dir, &cli.output_dir)?;
    Ok(RunOutcome::Completed(report))
}
