//! XML configuration support.
//! - Loads default flags from config.xml (quick_xml + serde).
//! - A missing file is not an error; defaults apply.
//!
//! Example:
//! <config>
//!   <verbose>false</verbose>
//!   <delete>true</delete>
//!   <overwrite>false</overwrite>
//!   <fail_fast>false</fail_fast>
//!   <log_level>normal</log_level>
//!   <log_file>/path/to/flattener.log</log_file>
//! </config>
//!
//! Unknown fields are rejected so typos surface instead of being silently ignored.

use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, ErrorPolicy, LogLevel};
use crate::errors::FlattenError;
use crate::fs_ops::describe_io_error;

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    verbose: Option<bool>,
    delete: Option<bool>,
    overwrite: Option<bool>,
    fail_fast: Option<bool>,
    log_level: Option<String>,
    log_file: Option<String>,
}

impl XmlConfig {
    /// Overlay the values present in the file onto `cfg`.
    fn apply_to(self, cfg: &mut Config, path: &Path) -> Result<(), FlattenError> {
        if let Some(v) = self.verbose {
            cfg.verbose = v;
        }
        if let Some(d) = self.delete {
            cfg.delete = d;
        }
        if let Some(o) = self.overwrite {
            cfg.overwrite = o;
        }
        if let Some(ff) = self.fail_fast {
            cfg.error_policy = ErrorPolicy::from_fail_fast(ff);
        }
        if let Some(s) = self.log_level.as_deref() {
            cfg.log_level = s.parse::<LogLevel>().map_err(|reason| FlattenError::Config {
                path: path.to_path_buf(),
                reason,
            })?;
        }
        if let Some(s) = self.log_file.as_deref() {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                cfg.log_file = Some(PathBuf::from(trimmed));
            }
        }
        Ok(())
    }
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config, FlattenError> {
    let contents = fs::read_to_string(path).map_err(|e| FlattenError::Config {
        path: path.to_path_buf(),
        reason: describe_io_error("read config file", path, &e),
    })?;
    let parsed: XmlConfig = if contents.trim().is_empty() {
        XmlConfig::default()
    } else {
        from_xml_str(&contents).map_err(|e| FlattenError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?
    };
    let mut cfg = Config::default();
    parsed.apply_to(&mut cfg, path)?;
    debug!(path = %path.display(), ?cfg, "Loaded config file");
    Ok(cfg)
}

/// Load the config file from `$FLATTENER_CONFIG` or the default location.
/// Returns Ok(None) when no file exists there.
pub fn load_config_from_xml() -> Result<Option<Config>, FlattenError> {
    let path = match default_config_path() {
        Ok(p) => p,
        Err(e) => {
            debug!(error = %e, "No config location available; using defaults");
            return Ok(None);
        }
    };
    if !path.exists() {
        debug!(path = %path.display(), "No config file; using defaults");
        return Ok(None);
    }
    load_config_from_xml_path(&path).map(Some)
}
