//! Build configuration.
//!
//! All settings live in a [`BuildConfig`] value that the CLI fills in once and
//! then hands to every component. Nothing here is read from a file.

use std::path::{Path, PathBuf};

use crate::build::normalize_path;

/// How much console output the build produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// No progress output at all
    Silent,
    /// Report only work that was actually done
    Work,
    /// Report everything, including no-ops
    #[default]
    All,
}

impl Verbosity {
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Silent,
            1 => Verbosity::Work,
            _ => Verbosity::All,
        }
    }

    pub fn reports_work(self) -> bool {
        self >= Verbosity::Work
    }

    pub fn reports_all(self) -> bool {
        self >= Verbosity::All
    }
}

/// What to do with a target whose input files are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSources {
    /// Skip the target with a warning and keep building
    #[default]
    Skip,
    /// Abort the whole build
    Fail,
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root; relative directories below are resolved against it
    pub root: PathBuf,
    pub compiler: String,
    pub flags: String,
    pub src_dir: PathBuf,
    pub build_dir: PathBuf,
    /// Final executable path
    pub output: PathBuf,
    /// Source file extension, without the dot
    pub extension: String,
    pub verbosity: Verbosity,
    pub missing_sources: MissingSources,
    /// Write `compile_commands.json` into the build directory
    pub compile_commands: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            compiler: "clang++".to_string(),
            flags: default_flags(),
            src_dir: PathBuf::from("src"),
            build_dir: PathBuf::from("build"),
            output: PathBuf::from("bin").join(default_bin_name()),
            extension: "cpp".to_string(),
            verbosity: Verbosity::default(),
            missing_sources: MissingSources::default(),
            compile_commands: false,
        }
    }
}

impl BuildConfig {
    /// Resolves `path` against the project root.
    pub fn project_path(&self, path: &Path) -> PathBuf {
        normalize_path(&self.root.join(path))
    }

    pub fn src_path(&self) -> PathBuf {
        self.project_path(&self.src_dir)
    }

    pub fn build_path(&self) -> PathBuf {
        self.project_path(&self.build_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_path(&self.output)
    }

    /// Per-object compile command, `{0}` is the source and `{1}` the object.
    pub fn compile_template(&self) -> String {
        format!("{} {} -c {{0}} -o {{1}}", self.compiler, self.flags)
    }

    /// Link command, `{0}` is every object and `{1}` the executable.
    pub fn link_template(&self) -> String {
        format!("{} {} {{0}} -o {{1}}", self.compiler, self.flags)
    }
}

fn default_flags() -> String {
    "-pthread -Werror -Wall -Wpedantic -fdiagnostics-color=always -O1 -std=c++20 -g".to_string()
}

fn default_bin_name() -> String {
    if cfg!(target_os = "windows") {
        "main.exe".to_string()
    } else {
        "main".to_string()
    }
}
