//! Command templates and the shell that runs them.

use std::io;
use std::path::Path;
use std::process::Command;

use super::target::Sources;

/// A command string with two positional slots: `{0}` for the source path(s)
/// and `{1}` for the destination. `{{` and `}}` produce literal braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate(String);

impl CommandTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Fills the slots. Every path is double-quoted on its own, multiple
    /// sources are separated by a single space.
    pub fn render(&self, sources: &Sources, dest: &Path) -> String {
        let srcs = sources
            .paths()
            .iter()
            .map(|p| quote(p))
            .collect::<Vec<_>>()
            .join(" ");
        let dst = quote(dest);

        let mut out = String::with_capacity(self.0.len() + srcs.len() + dst.len());
        let mut rest = self.0.as_str();
        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with("{{") {
                out.push('{');
                rest = &tail[2..];
            } else if tail.starts_with("}}") {
                out.push('}');
                rest = &tail[2..];
            } else if tail.starts_with("{0}") {
                out.push_str(&srcs);
                rest = &tail[3..];
            } else if tail.starts_with("{1}") {
                out.push_str(&dst);
                rest = &tail[3..];
            } else {
                // Unknown brace text is kept as-is
                out.push_str(&tail[..1]);
                rest = &tail[1..];
            }
        }
        out.push_str(rest);
        out
    }
}

fn quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

/// Runs a rendered command line and reports its exit code.
///
/// `Ok(None)` means the process ended without an exit code.
pub trait Shell {
    fn execute(&mut self, command: &str) -> io::Result<Option<i32>>;
}

impl<F> Shell for F
where
    F: FnMut(&str) -> io::Result<Option<i32>>,
{
    fn execute(&mut self, command: &str) -> io::Result<Option<i32>> {
        self(command)
    }
}

/// The platform command interpreter (`sh -c`, or `cmd /C` on Windows).
/// Output goes straight to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn execute(&mut self, command: &str) -> io::Result<Option<i32>> {
        let status = if cfg!(target_os = "windows") {
            Command::new("cmd").args(["/C", command]).status()?
        } else {
            Command::new("sh").args(["-c", command]).status()?
        };
        Ok(status.code())
    }
}
