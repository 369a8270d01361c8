//! Run counters for a single flatten run.
//!
//! The report is owned by the traversal and handed back to the caller once the
//! walk ends (or aborts), so nothing here is global.

use std::fmt;

/// Outcome tallies of one run.
///
/// `failed` counts every file that stayed where it was, whether because of a
/// name conflict or because the rename itself failed. `conflicts` and
/// `relocation_errors` break that number down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenReport {
    /// Directories entered, the root included
    pub dirs_processed: u64,
    /// Files relocated into the root
    pub succeeded: u64,
    /// Files left in place (conflicts + relocation errors)
    pub failed: u64,
    /// Files skipped because the destination name was taken
    pub conflicts: u64,
    /// Renames that failed with an I/O error
    pub relocation_errors: u64,
    /// Listing and removal errors recovered under the continue policy
    pub other_errors: u64,
    /// Subdirectories removed after being emptied
    pub dirs_removed: u64,
    /// Subdirectories left on disk because they still hold entries
    pub dirs_kept: u64,
}

impl FlattenReport {
    pub(crate) fn record_dir(&mut self) {
        self.dirs_processed += 1;
    }

    pub(crate) fn record_moved(&mut self) {
        self.succeeded += 1;
    }

    pub(crate) fn record_conflict(&mut self) {
        self.failed += 1;
        self.conflicts += 1;
    }

    pub(crate) fn record_relocation_error(&mut self) {
        self.failed += 1;
        self.relocation_errors += 1;
    }

    pub(crate) fn record_other_error(&mut self) {
        self.other_errors += 1;
    }

    pub(crate) fn record_removed(&mut self) {
        self.dirs_removed += 1;
    }

    pub(crate) fn record_kept(&mut self) {
        self.dirs_kept += 1;
    }

    /// Files the run looked at below the root.
    pub fn files_seen(&self) -> u64 {
        self.succeeded + self.failed
    }

    /// True when every file moved and no error was swallowed along the way.
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.other_errors == 0
    }
}

impl fmt::Display for FlattenReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t{} directories processed", self.dirs_processed)?;
        writeln!(f, "\t{} files successfully moved", self.succeeded)?;
        write!(f, "\t{} files failed to move", self.failed)?;
        if self.conflicts > 0 {
            write!(f, "\n\t  {} skipped because the name already exists in the root", self.conflicts)?;
        }
        if self.relocation_errors > 0 {
            write!(f, "\n\t  {} failed with an I/O error", self.relocation_errors)?;
        }
        if self.other_errors > 0 {
            write!(f, "\n\t{} directory errors (listing or removal)", self.other_errors)?;
        }
        if self.dirs_removed > 0 || self.dirs_kept > 0 {
            write!(
                f,
                "\n\t{} directories removed, {} kept",
                self.dirs_removed, self.dirs_kept
            )?;
        }
        Ok(())
    }
}
