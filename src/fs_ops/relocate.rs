//! Relocation of a single file into the root.
//! Probes the destination when overwriting is off, then renames.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::FlattenError;

/// Result of one relocation attempt that did not hit an I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relocation {
    /// The file now lives at the destination.
    Moved,
    /// The destination name was taken; the file was left where it was.
    Conflict,
}

/// Point-in-time check whether something already occupies `dest`.
///
/// Uses `symlink_metadata` so a dangling symlink counts as an occupant. Any
/// probe error other than NotFound is treated as "occupied" to stay on the
/// side of not clobbering anything.
pub fn destination_occupied(dest: &Path) -> bool {
    match fs::symlink_metadata(dest) {
        Ok(_) => true,
        Err(e) => e.kind() != io::ErrorKind::NotFound,
    }
}

/// Move `src` to `dest` with a plain rename.
///
/// With `overwrite` off an occupied destination yields `Relocation::Conflict`
/// and nothing is touched. With it on, rename replaces the existing file.
/// The probe and the rename are not atomic together; the tree is assumed not
/// to change under us during a run.
pub fn relocate_file(src: &Path, dest: &Path, overwrite: bool) -> Result<Relocation, FlattenError> {
    if !overwrite && destination_occupied(dest) {
        debug!(src = %src.display(), dest = %dest.display(), "destination occupied");
        return Ok(Relocation::Conflict);
    }

    fs::rename(src, dest).map_err(|source| FlattenError::Relocate {
        src: src.to_path_buf(),
        dest: dest.to_path_buf(),
        source,
    })?;
    info!(src = %src.display(), dest = %dest.display(), "Moved file");
    Ok(Relocation::Moved)
}
