//! Core library for `flattener`.
//!
//! Moves every file found below a root directory up into the root, optionally
//! removing the emptied subdirectories and optionally refusing to replace
//! files that already exist in the root.
//!
//! ```no_run
//! use flattener::{Config, flatten};
//!
//! let cfg = Config::new("/data/photos").with_delete(true);
//! let report = flatten(&cfg)?;
//! println!("{} moved, {} failed", report.succeeded, report.failed);
//! # Ok::<(), flattener::FlattenError>(())
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod platform;
pub mod report;
pub mod shutdown;

pub use config::{
    CONFIG_ENV, Config, ErrorPolicy, LogLevel, default_config_path, default_log_path,
    load_config_from_xml, load_config_from_xml_path,
};
pub use errors::FlattenError;
pub use fs_ops::{Flattener, flatten};
pub use platform::path_has_symlink_ancestor;
pub use report::FlattenReport;
