//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --dir takes precedence over the positional DIR.
//! - --debug is a shorthand for --log-level debug.
//! - Boolean flags can only switch behavior on; the config file supplies the rest.

use clap::{Parser, ValueHint};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::types::{Config, ErrorPolicy, LogLevel};

/// Move every file below a directory up into that directory.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Flatten a directory tree: move nested files up into the root directory"
)]
pub struct Args {
    /// Directory to flatten (use complete paths, e.g. /opt/foo or C:\foo).
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir_pos: Option<PathBuf>,

    /// Directory to flatten; overrides the positional DIR.
    #[arg(
        long = "dir",
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Directory to be processed (overrides positional)"
    )]
    pub dir: Option<PathBuf>,

    /// Print each directory visited, file moved and directory removed.
    #[arg(short = 'v', long, help = "Verbose execution")]
    pub verbose: bool,

    /// Remove subdirectories after their files have been moved out.
    #[arg(long, help = "Delete processed sub folders")]
    pub delete: bool,

    /// Replace files in the root that have the same name as a moved file.
    #[arg(
        long,
        help = "Overwrite files in destination if a file with the same name already exists"
    )]
    pub overwrite: bool,

    /// Stop at the first move, listing or removal error instead of continuing.
    #[arg(long, help = "Abort the whole run on the first I/O error")]
    pub fail_fast: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where flattener looks for its config file, then exit.
    #[arg(long, help = "Print the config file location and exit")]
    pub print_config: bool,
}

impl Args {
    /// Effective root: `--dir` if provided, else positional DIR; sanitized.
    pub fn resolved_root(&self) -> Option<PathBuf> {
        self.dir
            .as_deref()
            .or(self.dir_pos.as_deref())
            .map(Self::sanitize_path)
            .filter(|p| !p.as_os_str().is_empty())
    }

    #[inline]
    fn sanitize_path(p: &Path) -> PathBuf {
        Self::sanitize_os(p.as_os_str())
    }

    /// `sanitize_os` for a UTF-8 argument.
    pub fn sanitize_str(s: &str) -> PathBuf {
        Self::sanitize_os(OsStr::new(s))
    }

    /// Strip one pair of matching surrounding quotes (left behind by some
    /// Windows shells) and one trailing path separator. A bare root ("/" or
    /// "C:\") keeps its separator. Works on raw bytes, so names that are not
    /// valid UTF-8 pass through unchanged.
    #[cfg(unix)]
    pub fn sanitize_os(s: &OsStr) -> PathBuf {
        use std::os::unix::ffi::OsStrExt;

        let mut bytes = s.as_bytes();
        if let [first @ (b'"' | b'\''), .., last] = bytes
            && first == last
        {
            bytes = &bytes[1..bytes.len() - 1];
        }
        if bytes.len() > 1 && bytes.ends_with(b"/") {
            bytes = &bytes[..bytes.len() - 1];
        }
        PathBuf::from(OsStr::from_bytes(bytes))
    }

    #[cfg(not(unix))]
    pub fn sanitize_os(s: &OsStr) -> PathBuf {
        // Unpaired surrogates cannot hold quotes we would strip; keep as given.
        let Some(text) = s.to_str() else {
            return PathBuf::from(s);
        };
        let mut inner = text;
        if inner.len() >= 2
            && ((inner.starts_with('"') && inner.ends_with('"'))
                || (inner.starts_with('\'') && inner.ends_with('\'')))
        {
            inner = &inner[1..inner.len() - 1];
        }
        if inner.len() > 1 && (inner.ends_with('/') || inner.ends_with('\\')) {
            let without = &inner[..inner.len() - 1];
            if !without.ends_with(':') {
                inner = without;
            }
        }
        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(root) = self.resolved_root() {
            cfg.root = root;
        }
        if self.verbose {
            cfg.verbose = true;
        }
        if self.delete {
            cfg.delete = true;
        }
        if self.overwrite {
            cfg.overwrite = true;
        }
        if self.fail_fast {
            cfg.error_policy = ErrorPolicy::FailFast;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_trailing_separator() {
        assert_eq!(Args::sanitize_str("/opt/foo/"), PathBuf::from("/opt/foo"));
        assert_eq!(Args::sanitize_str("/opt/foo"), PathBuf::from("/opt/foo"));
        assert_eq!(Args::sanitize_str("/"), PathBuf::from("/"));
    }

    #[cfg(windows)]
    #[test]
    fn windows_separators_and_drive_roots() {
        assert_eq!(Args::sanitize_str(r"C:\foo\"), PathBuf::from(r"C:\foo"));
        assert_eq!(Args::sanitize_str(r"C:\"), PathBuf::from(r"C:\"));
    }

    #[test]
    fn surrounding_quotes_are_removed() {
        assert_eq!(Args::sanitize_str("'/tmp/with space/'"), PathBuf::from("/tmp/with space"));
        assert_eq!(Args::sanitize_str("\"/tmp/x\""), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn spaces_and_unpaired_quotes_are_part_of_the_name() {
        assert_eq!(Args::sanitize_str(" /tmp/pad "), PathBuf::from(" /tmp/pad "));
        assert_eq!(Args::sanitize_str("/tmp/it's'"), PathBuf::from("/tmp/it's'"));
        assert_eq!(Args::sanitize_str("'/tmp/x\""), PathBuf::from("'/tmp/x\""));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_survive() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/tmp/r\xff/");
        assert_eq!(
            Args::sanitize_os(raw),
            PathBuf::from(OsStr::from_bytes(b"/tmp/r\xff"))
        );
    }
}
