use crate::runner::BuildError;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";
pub const DEFAULT_OUTPUT_DIR: &str = "classes";
pub const DEFAULT_EXTENSION: &str = ".java";
pub const DEFAULT_COMPILER: &str = "javac";
pub const DEFAULT_CLASSPATH: &str = ".";
pub const DEFAULT_RUNNER: &str = "java";
pub const DEFAULT_ENTRY_POINT: &str = "main.java.Main";

/// Everything the build pipeline needs to know about where sources live and
/// which tools to call. `Default` reproduces the zero-configuration layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Directory the tools run in; relative paths below resolve against it
    pub project_dir: PathBuf,
    pub source_root: PathBuf,
    pub output_dir: PathBuf,
    /// Suffix matched against file names, dot included (e.g. ".java")
    pub extension: String,
    pub compiler: String,
    /// Search path handed to the compiler with `-cp`
    pub compile_classpath: String,
    pub runner: String,
    pub entry_point: String,
    /// Sort discovered sources so the compiler sees a stable argument list
    pub sort_sources: bool,
}

impl BuildConfig {
    pub fn new() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            compiler: DEFAULT_COMPILER.to_string(),
            compile_classpath: DEFAULT_CLASSPATH.to_string(),
            runner: DEFAULT_RUNNER.to_string(),
            entry_point: DEFAULT_ENTRY_POINT.to_string(),
            sort_sources: true,
        }
    }

    pub fn with_project_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_dir = dir.into();
        self
    }

    pub fn with_source_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_root = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_compiler(mut self, program: impl Into<String>) -> Self {
        self.compiler = program.into();
        self
    }

    pub fn with_compile_classpath(mut self, classpath: impl Into<String>) -> Self {
        self.compile_classpath = classpath.into();
        self
    }

    pub fn with_runner(mut self, program: impl Into<String>) -> Self {
        self.runner = program.into();
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }

    pub fn with_sorted_sources(mut self, sort: bool) -> Self {
        self.sort_sources = sort;
        self
    }

    /// Source root as seen from the process running jbuild
    pub fn resolved_source_root(&self) -> PathBuf {
        resolve(&self.project_dir, &self.source_root)
    }

    /// Output directory as seen from the process running jbuild
    pub fn resolved_output_dir(&self) -> PathBuf {
        resolve(&self.project_dir, &self.output_dir)
    }

    /// Human label for the source kind, e.g. "java" for ".java"
    pub fn source_label(&self) -> &str {
        let label = self.extension.trim_start_matches('.');
        if label.is_empty() {
            "source"
        } else {
            label
        }
    }

    /// Reject settings that would produce a meaningless command line
    pub fn validate(&self) -> Result<(), BuildError> {
        let required = [
            ("extension", &self.extension),
            ("compiler", &self.compiler),
            ("runner", &self.runner),
            ("entry point", &self.entry_point),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(BuildError::InvalidConfig(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base == Path::new(".") {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
