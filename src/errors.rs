//! Typed error definitions for flattener.
//! Provides a small set of well-known failure modes for better logs, tests and exit codes.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::describe_io_error;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("No root directory given")]
    Usage,

    #[error("Root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Root path is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("Cannot read root directory {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", describe_io_error("list directory", .path, .source))]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} (destination '{}')", describe_io_error("move file", .src, .source), .dest.display())]
    Relocate {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}", describe_io_error("remove directory", .path, .source))]
    RemoveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Operation interrupted by user")]
    Interrupted,
}

impl FlattenError {
    /// Stable numeric code used in structured logs.
    pub fn code(&self) -> u16 {
        match self {
            FlattenError::Usage => 10,
            FlattenError::RootNotFound(_) => 11,
            FlattenError::RootNotDirectory(_) => 12,
            FlattenError::RootUnreadable { .. } => 13,
            FlattenError::ListDir { .. } => 20,
            FlattenError::Relocate { .. } => 21,
            FlattenError::RemoveDir { .. } => 22,
            FlattenError::Config { .. } => 30,
            FlattenError::Interrupted => 40,
        }
    }

    /// Short machine-friendly name for the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FlattenError::Usage => "usage",
            FlattenError::RootNotFound(_) => "root_not_found",
            FlattenError::RootNotDirectory(_) => "root_not_directory",
            FlattenError::RootUnreadable { .. } => "root_unreadable",
            FlattenError::ListDir { .. } => "list_dir",
            FlattenError::Relocate { .. } => "relocate",
            FlattenError::RemoveDir { .. } => "remove_dir",
            FlattenError::Config { .. } => "config",
            FlattenError::Interrupted => "interrupted",
        }
    }
}
