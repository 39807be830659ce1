use colored::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::clean::{make_dirs, remove_outputs};
use super::command::{CommandTemplate, Shell};
use super::compdb::write_compile_commands;
use super::error::BuildError;
use super::rebuild::{BuildStats, Builder};
use super::target::{Target, targets_in_dir};
use crate::config::BuildConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Rebuild only what is stale
    #[default]
    Incremental,
    /// Delete all object files first, then rebuild everything
    Fresh,
}

impl BuildMode {
    /// Maps the optional positional CLI argument; only `fresh` is recognized.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("fresh") => BuildMode::Fresh,
            _ => BuildMode::Incremental,
        }
    }
}

#[derive(Debug)]
pub struct BuildReport {
    pub objects: Vec<PathBuf>,
    /// `None` when there was nothing to link
    pub executable: Option<PathBuf>,
    pub stats: BuildStats,
    pub elapsed: Duration,
}

/// Compiles every stale source in `config.src_dir` to `<name>.o` in
/// `config.build_dir`, then relinks the executable if any object is newer.
pub fn build_project<S: Shell>(
    config: &BuildConfig,
    mode: BuildMode,
    shell: S,
) -> Result<BuildReport, BuildError> {
    let start_time = Instant::now();
    let verbosity = config.verbosity;

    let src_dir = config.src_path();
    let build_dir = config.build_path();
    let output = config.output_path();

    let suffix = format!(".{}", config.extension);
    let targets = targets_in_dir(
        &src_dir,
        Some(build_dir.as_path()),
        |name| name.ends_with(&suffix),
        |name| format!("{name}.o"),
        verbosity,
    )?;

    if verbosity.reports_all() {
        println!("\n{}\n", "-".repeat(10).dimmed());
    }

    let mut dirs = vec![build_dir.clone()];
    if let Some(parent) = output.parent() {
        dirs.push(parent.to_path_buf());
    }
    make_dirs(&dirs, verbosity)?;

    if mode == BuildMode::Fresh {
        if verbosity.reports_work() {
            println!(
                "{} Fresh compile. Deleting stale object files",
                "🧹".yellow()
            );
        }
        remove_outputs(&targets, verbosity)?;
    }

    let mut builder = Builder::new(shell, verbosity, config.missing_sources);

    let compile = CommandTemplate::new(config.compile_template());

    // Written before compiling so editors still get it when a compile fails
    if config.compile_commands {
        let path = write_compile_commands(&build_dir, &targets, &compile)?;
        if verbosity.reports_all() {
            println!("   {} Wrote {}", "📝".cyan(), path.display());
        }
    }

    let objects = builder.rebuild(&targets, &compile)?;

    let executable = if objects.is_empty() {
        if verbosity.reports_work() {
            println!("{} No source files found.", "!".yellow());
        }
        None
    } else {
        let link = CommandTemplate::new(config.link_template());
        let exe = Target::multi(objects.clone(), &output);
        builder.rebuild(&[exe], &link)?.pop()
    };

    let elapsed = start_time.elapsed();
    let stats = builder.stats();
    if verbosity.reports_work() {
        println!(
            "{} Done in {:.2}ms ({} rebuilt, {} up to date, {} skipped)",
            "✓".green(),
            elapsed.as_secs_f64() * 1000.0,
            stats.rebuilt,
            stats.up_to_date,
            stats.skipped
        );
    }

    Ok(BuildReport {
        objects,
        executable,
        stats,
        elapsed,
    })
}
