use crate::layout::LayoutMode;
use clap::Parser;
use config::{Config as ConfigBuilder, File as ConfigFile};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LAYOUT: LayoutMode = LayoutMode::Center;
const DEFAULT_AUTO_SAVE: bool = false;
const DEFAULT_AUTO_SAVE_INTERVAL_SECS: u64 = 5;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] config::ConfigError),
    #[error("Invalid layout mode: {0}")]
    InvalidLayout(String),
}

/// Serde struct for the config file. Optional fields allow layering
/// (defaults -> file -> CLI args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    layout: Option<String>,
    auto_save: Option<bool>,
    auto_save_interval: Option<u64>,
    default_file: Option<String>,
}

/// Final configuration after all sources are merged.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub layout: LayoutMode,
    pub auto_save: bool,
    pub auto_save_interval: u64,
    pub default_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: DEFAULT_LAYOUT,
            auto_save: DEFAULT_AUTO_SAVE,
            auto_save_interval: DEFAULT_AUTO_SAVE_INTERVAL_SECS,
            default_file: None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard-driven tree diagramming in the terminal", long_about = None)]
pub struct CliArgs {
    /// Path to a saved diagram to load
    pub filename: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial layout mode (center | top)
    #[arg(long)]
    pub layout: Option<String>,

    #[arg(long)]
    pub auto_save: Option<bool>,

    #[arg(long)]
    pub auto_save_interval: Option<u64>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sprig").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn parse_layout(value: &str) -> Result<LayoutMode, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidLayout(value.to_string()))
}

/// Loads configuration from defaults, then the config file, then CLI args.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();
    let file_path = args.config.clone().or_else(default_config_path);
    if let Some(path) = file_path {
        if path.exists() {
            builder = builder.add_source(ConfigFile::from(path));
        }
    }
    let file: FileConfig = builder.build()?.try_deserialize()?;

    let mut cfg = AppConfig::default();

    if let Some(layout) = &file.layout {
        cfg.layout = parse_layout(layout)?;
    }
    if let Some(auto_save) = file.auto_save {
        cfg.auto_save = auto_save;
    }
    if let Some(interval) = file.auto_save_interval {
        cfg.auto_save_interval = interval;
    }
    cfg.default_file = file.default_file;

    if let Some(layout) = &args.layout {
        cfg.layout = parse_layout(layout)?;
    }
    if let Some(auto_save) = args.auto_save {
        cfg.auto_save = auto_save;
    }
    if let Some(interval) = args.auto_save_interval {
        cfg.auto_save_interval = interval;
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.layout, LayoutMode::Center);
        assert!(!cfg.auto_save);
        assert_eq!(cfg.auto_save_interval, 5);
        assert!(cfg.default_file.is_none());
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!(parse_layout("top").unwrap(), LayoutMode::Top);
        assert_eq!(parse_layout("center").unwrap(), LayoutMode::Center);
        assert!(matches!(
            parse_layout("spiral"),
            Err(ConfigError::InvalidLayout(_))
        ));
    }
}
