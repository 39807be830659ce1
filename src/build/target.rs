//! Build targets and discovery of targets from a source directory.

use colored::*;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::BuildError;
use crate::config::Verbosity;

/// Input side of a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    Single(PathBuf),
    /// Ordered inputs of a many-to-one step such as linking
    Multi(Vec<PathBuf>),
}

impl Sources {
    pub fn paths(&self) -> &[PathBuf] {
        match self {
            Sources::Single(path) => std::slice::from_ref(path),
            Sources::Multi(paths) => paths,
        }
    }
}

/// A (sources, destination) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub sources: Sources,
    pub dest: PathBuf,
}

impl Target {
    pub fn single(src: impl Into<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            sources: Sources::Single(src.into()),
            dest: dest.into(),
        }
    }

    pub fn multi(srcs: Vec<PathBuf>, dest: impl Into<PathBuf>) -> Self {
        Self {
            sources: Sources::Multi(srcs),
            dest: dest.into(),
        }
    }
}

/// Normalizes case and separators the way the host filesystem compares paths.
/// On Windows this lowercases and uses `\`; elsewhere the path is unchanged.
pub fn normalize_path(path: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        let s = path.to_string_lossy().to_lowercase().replace('/', "\\");
        PathBuf::from(s)
    } else {
        path.to_path_buf()
    }
}

/// Lists the direct children of `folder` accepted by `filter` and pairs each
/// with its destination inside `target_folder` (defaults to `folder`), named by
/// `target_name`. Both callbacks receive the entry's file name.
///
/// A missing folder yields no targets, but a folder that exists and cannot be
/// listed is an error. Results are ordered by file name.
pub fn targets_in_dir<F, N>(
    folder: &Path,
    target_folder: Option<&Path>,
    filter: F,
    target_name: N,
    verbosity: Verbosity,
) -> Result<Vec<Target>, BuildError>
where
    F: Fn(&str) -> bool,
    N: Fn(&str) -> String,
{
    if !folder.is_dir() {
        if verbosity.reports_work() {
            println!(
                "   {} Folder does not exist: {}",
                "!".yellow(),
                folder.display()
            );
        }
        return Ok(Vec::new());
    }

    let target_folder = target_folder.unwrap_or(folder);

    let mut targets = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(folder).to_path_buf();
            BuildError::io(path, io::Error::from(e))
        })?;

        let name = entry.file_name().to_string_lossy().to_string();
        if !filter(name.as_str()) {
            continue;
        }
        targets.push(Target::single(
            normalize_path(&folder.join(&name)),
            normalize_path(&target_folder.join(target_name(name.as_str()))),
        ));
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_only_filtered_entries_are_returned() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "a.cpp");
        touch(tmp.path(), "b.cpp");
        touch(tmp.path(), "b.hpp");
        touch(tmp.path(), "notes.txt");

        let out = tmp.path().join("build");
        let targets = targets_in_dir(
            tmp.path(),
            Some(out.as_path()),
            |name| name.ends_with(".cpp"),
            |name| format!("{name}.o"),
            Verbosity::Silent,
        )
        .unwrap();

        assert_eq!(
            targets,
            vec![
                Target::single(
                    normalize_path(&tmp.path().join("a.cpp")),
                    normalize_path(&out.join("a.cpp.o"))
                ),
                Target::single(
                    normalize_path(&tmp.path().join("b.cpp")),
                    normalize_path(&out.join("b.cpp.o"))
                ),
            ]
        );
    }

    #[test]
    fn test_destination_defaults_to_source_folder() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "main.cpp");

        let targets = targets_in_dir(
            tmp.path(),
            None,
            |name| name.ends_with(".cpp"),
            |name| format!("{name}.o"),
            Verbosity::Silent,
        )
        .unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(
            targets[0].dest,
            normalize_path(&tmp.path().join("main.cpp.o"))
        );
    }

    #[test]
    fn test_missing_folder_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let targets = targets_in_dir(
            &tmp.path().join("nope"),
            None,
            |_| true,
            |name| name.to_string(),
            Verbosity::Silent,
        )
        .unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_does_not_recurse() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.cpp");
        touch(tmp.path(), "top.cpp");

        let targets = targets_in_dir(
            tmp.path(),
            None,
            |name| name.ends_with(".cpp"),
            |name| format!("{name}.o"),
            Verbosity::Silent,
        )
        .unwrap();
        assert_eq!(targets.len(), 1);
        assert!(targets[0].dest.to_string_lossy().ends_with("top.cpp.o"));
    }

    #[test]
    fn test_sources_paths() {
        let single = Sources::Single(PathBuf::from("a"));
        assert_eq!(single.paths(), &[PathBuf::from("a")]);

        let multi = Sources::Multi(vec![PathBuf::from("a"), PathBuf::from("b")]);
        assert_eq!(multi.paths().len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_folder_is_an_error() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir(&src).unwrap();
        touch(&src, "a.cpp");
        fs::set_permissions(&src, fs::Permissions::from_mode(0o311)).unwrap();

        // Permission bits do not apply to root
        if fs::read_dir(&src).is_ok() {
            fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();
            eprintln!("Skipping: directory is still listable");
            return;
        }

        let result = targets_in_dir(
            &src,
            None,
            |name| name.ends_with(".cpp"),
            |name| format!("{name}.o"),
            Verbosity::Silent,
        );
        fs::set_permissions(&src, fs::Permissions::from_mode(0o755)).unwrap();

        match result {
            Err(BuildError::Io { path, .. }) => assert_eq!(path, src),
            other => panic!("expected an IO error, got {:?}", other),
        }
    }
}
