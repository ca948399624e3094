use super::{
    layout::BatchLayout,
    preset::Preset,
    style::ChartStyle,
    traits::ConfigSection,
};
use crate::error::{FitplotError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `FITPLOT__LAYOUT__COUNT=10`
pub const ENV_PREFIX: &str = "FITPLOT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub layout: BatchLayout,
    pub style: ChartStyle,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.style.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Layer preset defaults, an optional TOML file and `FITPLOT__*`
    /// environment variables, in that order of precedence.
    pub fn from_sources(preset: Preset, file: Option<&Path>) -> Result<Self> {
        let defaults = toml::to_string(&preset.config())?;

        let mut builder = ::config::Config::builder()
            .add_source(::config::File::from_str(&defaults, ::config::FileFormat::Toml));

        if let Some(path) = file {
            if !path.is_file() {
                return Err(FitplotError::Configuration(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(
                ::config::File::from(path)
                    .format(::config::FileFormat::Toml)
                    .required(true),
            );
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;

        log::debug!(
            "Configuration loaded ({:?} preset, sections: {}, {})",
            preset,
            BatchLayout::section_name(),
            ChartStyle::section_name()
        );
        Ok(Self { config })
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FitplotError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_toml()?)
            .map_err(|e| FitplotError::Configuration(format!("Failed to write config: {}", e)))?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.config)?)
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
