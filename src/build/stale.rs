use std::fs;
use std::path::Path;
use std::time::SystemTime;

use super::error::BuildError;
use super::target::{Sources, Target};

pub fn modified(path: &Path) -> Result<SystemTime, BuildError> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| BuildError::io(path, e))
}

/// True if `file` was modified strictly after every path in `compare`.
///
/// Every path must exist; a missing one is reported as [`BuildError::Io`].
pub fn is_newer(file: &Path, compare: &Sources) -> Result<bool, BuildError> {
    let file_time = modified(file)?;

    let mut newest = None;
    for path in compare.paths() {
        let time = modified(path)?;
        if newest.is_none_or(|n| time > n) {
            newest = Some(time);
        }
    }

    // An empty input list has nothing the file could be older than
    Ok(newest.is_none_or(|n| file_time > n))
}

/// A target is up to date iff its destination exists and is newer than all inputs.
pub fn is_up_to_date(target: &Target) -> Result<bool, BuildError> {
    if !target.dest.exists() {
        return Ok(false);
    }
    is_newer(&target.dest, &target.sources)
}
