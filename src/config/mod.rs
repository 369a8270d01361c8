//! Config module.
//! Provides configuration types, default paths, XML loading, and root validation.

pub mod paths;
pub mod types;
mod validate;
pub mod xml;

pub use paths::{default_config_path, default_log_path};
pub use types::{Config, ErrorPolicy, LogLevel};
pub use xml::{load_config_from_xml, load_config_from_xml_path};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FLATTENER_CONFIG";
