//! Filesystem operations: listing, relocation, pruning and the walk that ties them together.

mod flatten;
mod helpers;
mod listing;
mod prune;
mod relocate;

pub use flatten::{Flattener, flatten};
pub use helpers::{describe_io_error, io_error_with_help_io};
pub use listing::{DirEntryInfo, list_dir};
pub use prune::remove_emptied_dir;
pub use relocate::{Relocation, destination_occupied, relocate_file};
