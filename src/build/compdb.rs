//! `compile_commands.json` generation for editor tooling.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::command::CommandTemplate;
use super::error::BuildError;
use super::target::Target;

#[derive(Debug, Serialize)]
pub struct CompileCommand {
    pub directory: String,
    pub command: String,
    pub file: String,
}

pub fn compile_commands(
    directory: &Path,
    targets: &[Target],
    template: &CommandTemplate,
) -> Vec<CompileCommand> {
    targets
        .iter()
        .map(|t| CompileCommand {
            directory: directory.to_string_lossy().to_string(),
            command: template.render(&t.sources, &t.dest),
            file: t
                .sources
                .paths()
                .first()
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_default(),
        })
        .collect()
}

/// Writes the database to `<build_dir>/compile_commands.json`.
pub fn write_compile_commands(
    build_dir: &Path,
    targets: &[Target],
    template: &CommandTemplate,
) -> Result<PathBuf, BuildError> {
    let cwd = std::env::current_dir().map_err(|e| BuildError::io(".", e))?;
    let entries = compile_commands(&cwd, targets, template);

    let path = build_dir.join("compile_commands.json");
    let json = serde_json::to_string_pretty(&entries)
        .map_err(|e| BuildError::io(&path, io::Error::from(e)))?;
    fs::write(&path, json).map_err(|e| BuildError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_target() {
        let targets = vec![
            Target::single("src/a.cpp", "build/a.cpp.o"),
            Target::single("src/b.cpp", "build/b.cpp.o"),
        ];
        let tpl = CommandTemplate::new("clang++ -c {0} -o {1}");
        let entries = compile_commands(Path::new("/proj"), &targets, &tpl);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file, "src/a.cpp");
        assert_eq!(entries[0].directory, "/proj");
        assert_eq!(
            entries[1].command,
            r#"clang++ -c "src/b.cpp" -o "build/b.cpp.o""#
        );
    }

    #[test]
    fn test_written_file_is_json_array() {
        let tmp = tempfile::tempdir().unwrap();
        let targets = vec![Target::single("src/a.cpp", "build/a.cpp.o")];
        let tpl = CommandTemplate::new("cc -c {0} -o {1}");

        let path = write_compile_commands(tmp.path(), &targets, &tpl).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["file"], "src/a.cpp");
    }
}
