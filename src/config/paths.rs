//! Default path helpers.
//! Determines where the optional config file and the suggested log file live.

use anyhow::{anyhow, Result};
use dirs::{config_dir, data_dir};
use std::env;
use std::path::PathBuf;

use super::CONFIG_ENV;

/// Config file path: `$FLATTENER_CONFIG` if set, else `<config_dir>/flattener/config.xml`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV) {
        if !p.is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    if let Some(mut base) = config_dir() {
        base.push("flattener");
        base.push("config.xml");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("flattener")
                .join("config.xml")
        })
        .ok_or_else(|| anyhow!("cannot determine a config directory (no config dir and HOME unset)"))
}

/// Suggested log file location (data dir). Not created here.
pub fn default_log_path() -> Result<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("flattener");
        base.push("flattener.log");
        return Ok(base);
    }
    env::var_os("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("flattener")
                .join("flattener.log")
        })
        .ok_or_else(|| anyhow!("cannot determine a data directory (no data dir and HOME unset)"))
}
