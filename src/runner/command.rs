use super::BuildError;
use crate::config::BuildConfig;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// One external tool invocation: a program and its argv, never a shell line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// `<compiler> -d <output-dir> -cp <classpath> <sources...>`
    pub fn compile(config: &BuildConfig, sources: &[PathBuf]) -> Result<Self, BuildError> {
        let sources = sources
            .iter()
            .map(|source| path_arg(source))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(&config.compiler)
            .arg("-d")
            .arg(path_arg(&config.output_dir)?)
            .arg("-cp")
            .arg(&config.compile_classpath)
            .args(sources))
    }

    /// `<runner> -cp <output-dir> <entry-point>`
    pub fn run(config: &BuildConfig) -> Result<Self, BuildError> {
        Ok(Self::new(&config.runner)
            .arg("-cp")
            .arg(path_arg(&config.output_dir)?)
            .arg(&config.entry_point))
    }

    /// Build the std command, rooted in `working_dir`
    pub fn to_command(&self, working_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).current_dir(working_dir);
        command
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

// A lossy conversion would hand the tool a name that does not exist on disk
fn path_arg(path: &Path) -> Result<String, BuildError> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| BuildError::NonUtf8Path {
            path: path.to_path_buf(),
        })
}

// Display only; the argv itself is passed through untouched.
fn quote(word: &str) -> String {
    if !word.is_empty() && !word.contains(|c: char| c.is_whitespace() || c == '"') {
        word.to_string()
    } else {
        format!("\"{}\"", word.replace('"', "\\\""))
    }
}
