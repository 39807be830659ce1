//! Running build commands for targets, and rebuilding only what is stale.

use colored::*;
use std::path::PathBuf;
use std::time::Instant;

use super::command::{CommandTemplate, Shell};
use super::error::BuildError;
use super::stale::is_up_to_date;
use super::target::Target;
use crate::config::{MissingSources, Verbosity};

/// Counters for the end-of-build summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub rebuilt: usize,
    pub up_to_date: usize,
    pub skipped: usize,
}

pub struct Builder<S: Shell> {
    shell: S,
    verbosity: Verbosity,
    missing_sources: MissingSources,
    stats: BuildStats,
}

impl<S: Shell> Builder<S> {
    pub fn new(shell: S, verbosity: Verbosity, missing_sources: MissingSources) -> Self {
        Self {
            shell,
            verbosity,
            missing_sources,
            stats: BuildStats::default(),
        }
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    /// Runs `template` for every target whose inputs all exist.
    ///
    /// Targets with missing inputs are skipped, or fail the build under
    /// [`MissingSources::Fail`]. The first command that does not exit with 0
    /// stops the build. Returns the destinations that were built.
    pub fn build(
        &mut self,
        targets: &[Target],
        template: &CommandTemplate,
    ) -> Result<Vec<PathBuf>, BuildError> {
        let mut built = Vec::new();

        for target in targets {
            let missing: Vec<PathBuf> = target
                .sources
                .paths()
                .iter()
                .filter(|p| !p.exists())
                .cloned()
                .collect();

            if !missing.is_empty() {
                match self.missing_sources {
                    MissingSources::Skip => {
                        if self.verbosity.reports_work() {
                            for path in &missing {
                                println!(
                                    "   {} Source does not exist: {}",
                                    "!".yellow(),
                                    path.display()
                                );
                            }
                        }
                        self.stats.skipped += 1;
                        continue;
                    }
                    MissingSources::Fail => {
                        return Err(BuildError::MissingSources {
                            dest: target.dest.clone(),
                            missing,
                        });
                    }
                }
            }

            let command = template.render(&target.sources, &target.dest);
            if self.verbosity.reports_work() {
                println!("   {} Executing: {}", "▶".cyan(), command);
            }

            let code = self
                .shell
                .execute(&command)
                .map_err(|e| BuildError::io(&target.dest, e))?;
            if code != Some(0) {
                return Err(BuildError::CommandFailed { command, code });
            }

            built.push(target.dest.clone());
        }

        Ok(built)
    }

    /// Builds every target that is missing or older than its inputs.
    ///
    /// Returns one destination per input target, rebuilt or not, so the result
    /// can feed the next stage (e.g. objects into a link step).
    pub fn rebuild(
        &mut self,
        targets: &[Target],
        template: &CommandTemplate,
    ) -> Result<Vec<PathBuf>, BuildError> {
        let mut dests = Vec::with_capacity(targets.len());

        for target in targets {
            if is_up_to_date(target)? {
                if self.verbosity.reports_all() {
                    println!(
                        "   {} Up to date: {}",
                        "⚡".green(),
                        target.dest.display()
                    );
                }
                self.stats.up_to_date += 1;
            } else {
                if self.verbosity.reports_work() {
                    println!("   {} Recompiling {}", "🔨".cyan(), target.dest.display());
                }
                let start = Instant::now();
                let built = self.build(std::slice::from_ref(target), template)?;
                if !built.is_empty() {
                    self.stats.rebuilt += 1;
                    if self.verbosity.reports_work() {
                        println!(
                            "     (in {:.2}ms)",
                            start.elapsed().as_secs_f64() * 1000.0
                        );
                    }
                }
            }
            dests.push(target.dest.clone());
        }

        Ok(dests)
    }
}
