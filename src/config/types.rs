//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.
//! - ErrorPolicy decides whether an I/O error mid-walk stops the run.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users/config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// More info (per-file events)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// What to do when a rename, listing or removal below the root fails.
///
/// Listing the root itself always aborts regardless of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Count the failure and keep walking sibling entries.
    #[default]
    Continue,
    /// Stop the whole run at the first failure.
    FailFast,
}

impl ErrorPolicy {
    pub fn from_fail_fast(fail_fast: bool) -> Self {
        if fail_fast {
            ErrorPolicy::FailFast
        } else {
            ErrorPolicy::Continue
        }
    }

    pub fn is_fail_fast(self) -> bool {
        self == ErrorPolicy::FailFast
    }
}

/// Runtime configuration used by the flattener. Immutable for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory every nested file is moved into
    pub root: PathBuf,
    /// Narrate directory visits, moves and removals on the console
    pub verbose: bool,
    /// Remove subdirectories once their contents are moved out
    pub delete: bool,
    /// Replace same-named files already present in the root
    pub overwrite: bool,
    /// Abort or continue on I/O errors below the root
    pub error_policy: ErrorPolicy,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Construct a Config for `root`; other fields use defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_delete(mut self, delete: bool) -> Self {
        self.delete = delete;
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let cfg = Config::new("/r");
        assert!(!cfg.verbose);
        assert!(!cfg.delete);
        assert!(!cfg.overwrite);
        assert_eq!(cfg.error_policy, ErrorPolicy::Continue);
        assert_eq!(cfg.log_level, LogLevel::Normal);
        assert!(cfg.log_file.is_none());
    }

    #[test]
    fn fail_fast_flag_maps_to_policy() {
        assert!(ErrorPolicy::from_fail_fast(true).is_fail_fast());
        assert_eq!(ErrorPolicy::from_fail_fast(false), ErrorPolicy::Continue);
    }
}
