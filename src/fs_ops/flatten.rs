//! Tree flattening.
//!
//! Walks the root depth-first and moves every file found below it up into the
//! root. Directories are visited pre-order (a subdirectory is fully finished
//! before its next sibling is looked at) and removed post-order, once all of
//! their own entries and descendants are done.
//!
//! The walk keeps an explicit stack of open directories rather than recursing,
//! so very deep trees cannot exhaust the call stack. Each frame holds the
//! entries of its directory that have not been handled yet.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::FlattenError;
use crate::output as out;
use crate::report::FlattenReport;
use crate::shutdown;

use super::listing::{DirEntryInfo, list_dir};
use super::prune::remove_emptied_dir;
use super::relocate::{Relocation, relocate_file};

/// One open directory on the walk stack.
struct Frame {
    path: PathBuf,
    /// 0 for the root
    depth: usize,
    pending: std::vec::IntoIter<DirEntryInfo>,
    /// Something (a file or a kept subdirectory) is known to remain inside.
    retains_entries: bool,
}

/// Single-threaded flattener over one root.
///
/// Counters live in the flattener itself and survive an aborted run, so the
/// caller can still report what happened before the failure.
pub struct Flattener<'a> {
    config: &'a Config,
    report: FlattenReport,
}

impl<'a> Flattener<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            report: FlattenReport::default(),
        }
    }

    pub fn report(&self) -> &FlattenReport {
        &self.report
    }

    pub fn into_report(self) -> FlattenReport {
        self.report
    }

    fn root(&self) -> &Path {
        &self.config.root
    }

    /// Walk the whole tree once.
    ///
    /// Fails immediately if the root cannot be listed. Errors below the root
    /// abort the run under `ErrorPolicy::FailFast` and are counted and skipped
    /// under `ErrorPolicy::Continue`.
    pub fn run(&mut self) -> Result<(), FlattenError> {
        let root = self.root().to_path_buf();
        let root_frame = self.enter(&root, 0)?;
        let mut stack = vec![root_frame];

        while let Some(frame) = stack.last_mut() {
            if shutdown::is_requested() {
                debug!(dir = %frame.path.display(), "Interrupted; stopping walk");
                return Err(FlattenError::Interrupted);
            }

            match frame.pending.next() {
                Some(entry) if entry.is_dir => match self.enter(&entry.path, frame.depth + 1) {
                    Ok(child) => stack.push(child),
                    Err(e) => {
                        self.report.record_other_error();
                        self.tolerate(e)?;
                        // Unlisted, so it may still hold anything.
                        if self.config.delete {
                            self.report.record_kept();
                        }
                        frame.retains_entries = true;
                    }
                },
                Some(entry) => {
                    if frame.depth == 0 {
                        continue;
                    }
                    if self.relocate(&entry)? {
                        frame.retains_entries = true;
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        let kept = self.leave(&done)?;
                        if kept && let Some(parent) = stack.last_mut() {
                            parent.retains_entries = true;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Count and list a directory, producing its stack frame.
    fn enter(&mut self, dir: &Path, depth: usize) -> Result<Frame, FlattenError> {
        self.report.record_dir();
        if self.config.verbose {
            out::print_user(&format!("Processing directory: {}", dir.display()));
        }
        let entries = list_dir(dir).map_err(|source| FlattenError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        debug!(dir = %dir.display(), depth, entries = entries.len(), "Listed directory");
        Ok(Frame {
            path: dir.to_path_buf(),
            depth,
            pending: entries.into_iter(),
            retains_entries: false,
        })
    }

    /// Move one file into the root. Returns true when the file stayed behind.
    fn relocate(&mut self, entry: &DirEntryInfo) -> Result<bool, FlattenError> {
        let dest = self.root().join(&entry.name);
        if self.config.verbose {
            out::print_user(&format!(
                "Moving file {} to {}",
                entry.path.display(),
                self.root().display()
            ));
        }

        match relocate_file(&entry.path, &dest, self.config.overwrite) {
            Ok(Relocation::Moved) => {
                self.report.record_moved();
                Ok(false)
            }
            Ok(Relocation::Conflict) => {
                self.report.record_conflict();
                info!(src = %entry.path.display(), dest = %dest.display(), "Name conflict; file left in place");
                out::print_warn(&format!(
                    "Cannot move file {} to {}: a file with the same name already exists",
                    entry.path.display(),
                    dest.display()
                ));
                Ok(true)
            }
            Err(e) => {
                self.report.record_relocation_error();
                self.tolerate(e)?;
                Ok(true)
            }
        }
    }

    /// Finish a directory whose entries are all handled. Returns true when the
    /// directory is still on disk afterwards (delete mode only).
    fn leave(&mut self, frame: &Frame) -> Result<bool, FlattenError> {
        if frame.depth == 0 || !self.config.delete {
            return Ok(false);
        }

        if frame.retains_entries {
            self.report.record_kept();
            warn!(dir = %frame.path.display(), "Directory still holds entries; not removing");
            return Ok(true);
        }

        if self.config.verbose {
            out::print_user(&format!("Removing directory {}", frame.path.display()));
        }
        match remove_emptied_dir(&frame.path) {
            Ok(()) => {
                self.report.record_removed();
                Ok(false)
            }
            Err(e) => {
                self.report.record_other_error();
                self.report.record_kept();
                self.tolerate(e)?;
                Ok(true)
            }
        }
    }

    /// Apply the error policy to a failure below the root.
    fn tolerate(&self, err: FlattenError) -> Result<(), FlattenError> {
        if self.config.error_policy.is_fail_fast() {
            return Err(err);
        }
        info!(code = err.code(), kind = err.kind(), error = %err, "Continuing after error");
        out::print_error(&err.to_string());
        Ok(())
    }
}

/// Flatten `config.root` and return the counters.
///
/// Use [`Flattener`] directly to keep the counters of an aborted run.
pub fn flatten(config: &Config) -> Result<FlattenReport, FlattenError> {
    let mut flattener = Flattener::new(config);
    flattener.run()?;
    Ok(flattener.into_report())
}
