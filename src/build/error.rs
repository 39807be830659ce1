use std::path::PathBuf;

/// Errors that stop a build.
#[derive(Debug)]
pub enum BuildError {
    /// A build command exited unsuccessfully
    CommandFailed {
        command: String,
        /// `None` when the process ended without an exit code (e.g. a signal)
        code: Option<i32>,
    },
    /// Inputs of a target were missing under the strict policy
    MissingSources { dest: PathBuf, missing: Vec<PathBuf> },
    /// Filesystem error on a path the build relies on
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.into(),
            source,
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::CommandFailed {
                command,
                code: Some(code),
            } => write!(f, "Build command failed with exit code {}: {}", code, command),
            BuildError::CommandFailed { command, code: None } => {
                write!(f, "Build command was terminated: {}", command)
            }
            BuildError::MissingSources { dest, missing } => {
                let names: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
                write!(
                    f,
                    "Missing sources for {}: {}",
                    dest.display(),
                    names.join(", ")
                )
            }
            BuildError::Io { path, source } => write!(f, "IO error on {}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
