//! # mkcpp CLI Entry Point
//!
//! Parses the command line with clap, turns it into a [`BuildConfig`], and
//! runs one build. `mkcpp fresh` deletes object files before building.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;

use mkcpp::build::{self, BuildError, BuildMode, SystemShell};
use mkcpp::config::{BuildConfig, MissingSources, Verbosity};

#[cfg(windows)]
#[link(name = "kernel32")]
unsafe extern "system" {
    fn SetConsoleOutputCP(wCodePageID: u32) -> i32;
}

#[cfg(windows)]
fn enable_windows_utf8_console() {
    unsafe {
        SetConsoleOutputCP(65001);
    }
}

#[cfg(not(windows))]
fn enable_windows_utf8_console() {}

#[derive(Parser)]
#[command(name = "mkcpp")]
#[command(about = "Incremental C++ build driver", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Cli {
    /// Pass `fresh` to delete all object files before building
    mode: Option<String>,
    /// Project root that the other paths are relative to
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Compiler executable
    #[arg(long)]
    cc: Option<String>,
    /// Flags passed to every compile and link command
    #[arg(long, allow_hyphen_values = true)]
    flags: Option<String>,
    /// Source directory
    #[arg(long)]
    src: Option<PathBuf>,
    /// Directory for object files
    #[arg(long)]
    build_dir: Option<PathBuf>,
    /// Path of the final executable
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Source file extension
    #[arg(long)]
    ext: Option<String>,
    /// 0 = silent, 1 = report work done, 2 = report everything
    #[arg(short, long, default_value_t = 2)]
    verbose: u8,
    /// Fail instead of skipping targets whose sources are missing
    #[arg(long)]
    strict: bool,
    /// Write compile_commands.json into the build directory
    #[arg(long)]
    compile_commands: bool,
}

impl Cli {
    fn into_config(self) -> BuildConfig {
        let defaults = BuildConfig::default();
        BuildConfig {
            root: self.root,
            compiler: self.cc.unwrap_or(defaults.compiler),
            flags: self.flags.unwrap_or(defaults.flags),
            src_dir: self.src.unwrap_or(defaults.src_dir),
            build_dir: self.build_dir.unwrap_or(defaults.build_dir),
            output: self.output.unwrap_or(defaults.output),
            extension: self.ext.unwrap_or(defaults.extension),
            verbosity: Verbosity::from_level(self.verbose),
            missing_sources: if self.strict {
                MissingSources::Fail
            } else {
                MissingSources::Skip
            },
            compile_commands: self.compile_commands,
        }
    }
}

fn main() -> Result<()> {
    enable_windows_utf8_console();

    let cli = Cli::parse();
    let mode = BuildMode::from_arg(cli.mode.as_deref());
    let config = cli.into_config();

    match build::build_project(&config, mode, SystemShell) {
        Ok(_) => Ok(()),
        Err(e @ BuildError::CommandFailed { .. }) => {
            eprintln!("{} {}", "x".red(), e);
            eprintln!("{} Build Command failed, build aborted.", "x".red());
            std::process::exit(-1);
        }
        Err(e) => Err(e).context("Build failed"),
    }
}
