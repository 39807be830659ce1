//! Output directory setup and fresh-build cleanup.

use colored::*;
use std::fs;
use std::path::Path;

use super::error::BuildError;
use super::target::Target;
use crate::config::Verbosity;

/// Creates each directory (and its parents) if it does not exist yet.
pub fn make_dirs<P: AsRef<Path>>(dirs: &[P], verbosity: Verbosity) -> Result<(), BuildError> {
    for dir in dirs {
        let dir = dir.as_ref();
        if dir.as_os_str().is_empty() {
            continue;
        }
        if dir.is_dir() {
            if verbosity.reports_all() {
                println!("   {} Folder already existed: {}", "•".dimmed(), dir.display());
            }
            continue;
        }
        fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))?;
        if verbosity.reports_work() {
            println!("   {} Folder created: {}", "📁".cyan(), dir.display());
        }
    }
    Ok(())
}

/// Deletes every destination that exists, forcing the next pass to rebuild it.
/// Returns how many files were removed.
pub fn remove_outputs(targets: &[Target], verbosity: Verbosity) -> Result<usize, BuildError> {
    let mut removed = 0;
    for target in targets {
        if target.dest.exists() {
            fs::remove_file(&target.dest).map_err(|e| BuildError::io(&target.dest, e))?;
            removed += 1;
        }
    }

    if verbosity.reports_work() {
        if removed > 0 {
            println!("   {} Removed {} object file(s)", "🗑️".red(), removed);
        } else if verbosity.reports_all() {
            println!("   {} Nothing to clean", "!".yellow());
        }
    }
    Ok(removed)
}
