//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod import;
pub mod process;

use std::path::{Path, PathBuf};

use rocagem_core::RocagemConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rocagem")
        .join("config.json")
}

/// Load and validate the configuration given with `--config`, else the
/// default file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RocagemConfig> {
    let default_path = default_config_path();
    let config = match config_path {
        Some(path) => RocagemConfig::from_file(Path::new(path))?,
        None if default_path.exists() => RocagemConfig::from_file(&default_path)?,
        None => RocagemConfig::default(),
    };

    config.validate()?;
    Ok(config)
}
