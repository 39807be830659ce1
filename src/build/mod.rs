mod clean;
mod command;
mod compdb;
mod core;
mod error;
mod rebuild;
mod stale;
mod target;

pub use clean::{make_dirs, remove_outputs};
pub use command::{CommandTemplate, Shell, SystemShell};
pub use compdb::{CompileCommand, compile_commands, write_compile_commands};
pub use core::{BuildMode, BuildReport, build_project};
pub use error::BuildError;
pub use rebuild::{BuildStats, Builder};
pub use stale::{is_newer, is_up_to_date, modified};
pub use target::{Sources, Target, normalize_path, targets_in_dir};
