use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Directory for generated spreadsheets; next to the input when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub open_after_export: bool,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("vertify-mappings");
        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Where to write the spreadsheet for `input`
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let file_name = crate::export::helpers::output_file_name(input);
        match &self.export.output_dir {
            Some(dir) => dir.join(file_name.file_name().unwrap_or_default()),
            None => file_name,
        }
    }
}
