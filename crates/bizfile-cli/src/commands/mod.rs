//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod process;

use std::path::PathBuf;

use bizfile_core::BizfileConfig;

/// Location of the per-user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bizfile")
        .join("config.json")
}

/// Load the configuration named by `--config`, else the per-user file if it
/// exists, else the defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<BizfileConfig> {
    let path = match path {
        Some(path) => PathBuf::from(path),
        None => {
            let user_path = default_config_path();
            if !user_path.exists() {
                return Ok(BizfileConfig::default());
            }
            user_path
        }
    };

    Ok(BizfileConfig::from_file(&path)?)
}
