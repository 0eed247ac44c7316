mod command;
mod error;
mod launcher;


pub use command::ToolCommand;
pub use error::BuildError;
pub use launcher::{Launcher, SystemLauncher};

use crate::config::BuildConfig;
use crate::locator::{find_sources, find_sources_unsorted};
use log::debug;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Exit status of a launched tool; `None` when it was killed by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signalled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ToolStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Where the pipeline currently stands.
///
/// `EmptyExit`, `CompileFailed`, `RunFailed` and `Done` are terminal. A
/// filesystem or config error leaves the runner at the last stage reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    DirectoryEnsured,
    FilesDiscovered,
    EmptyExit,
    Compiling,
    CompileFailed,
    CompileSucceeded,
    Running,
    RunFailed,
    Done,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Stage::EmptyExit | Stage::CompileFailed | Stage::RunFailed | Stage::Done
        )
    }
}

/// The commands a build would launch, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildPlan {
    pub sources: Vec<PathBuf>,
    pub compile: ToolCommand,
    pub run: ToolCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub sources: usize,
    pub plan: BuildPlan,
}

/// Create `path` and any missing parents. Existing directories are left
/// untouched.
pub fn ensure_output_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

/// Compile-then-run pipeline over a single source tree
pub struct BuildRunner<L: Launcher = SystemLauncher> {
    config: BuildConfig,
    launcher: L,
    stage: Stage,
}

impl<L: Launcher> BuildRunner<L> {
    pub fn new(config: BuildConfig, launcher: L) -> Self {
        Self {
            config,
            launcher,
            stage: Stage::Start,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Prepare the output directory and work out both commands without
    /// launching either of them.
    pub fn plan(&mut self) -> Result<BuildPlan, BuildError> {
        self.prepare(false)
    }

    /// Compile every discovered source, then run the entry point.
    ///
    /// Stops at the first failure. The output directory is never removed.
    pub fn run(&mut self) -> Result<BuildReport, BuildError> {
        let plan = self.prepare(true)?;
        let label = self.config.source_label().to_string();

        println!("Compiling {} files...", label);
        self.advance(Stage::Compiling);
        let status = match self.launcher.launch(&plan.compile, &self.config.project_dir) {
            Ok(status) => status,
            Err(e) => {
                self.advance(Stage::CompileFailed);
                return Err(e);
            }
        };
        if !status.success() {
            self.advance(Stage::CompileFailed);
            return Err(BuildError::CompileFailed { status });
        }

        self.advance(Stage::CompileSucceeded);
        println!("Compilation successful!");

        println!("Running the application...");
        self.advance(Stage::Running);
        let status = match self.launcher.launch(&plan.run, &self.config.project_dir) {
            Ok(status) => status,
            Err(e) => {
                self.advance(Stage::RunFailed);
                return Err(e);
            }
        };
        if !status.success() {
            self.advance(Stage::RunFailed);
            return Err(BuildError::RunFailed { status });
        }

        self.advance(Stage::Done);
        Ok(BuildReport {
            sources: plan.sources.len(),
            plan,
        })
    }

    fn prepare(&mut self, announce: bool) -> Result<BuildPlan, BuildError> {
        self.config.validate()?;

        ensure_output_dir(&self.config.resolved_output_dir())?;
        self.advance(Stage::DirectoryEnsured);

        let root = self.config.resolved_source_root();
        let found = if self.config.sort_sources {
            find_sources(&root, &self.config.extension)?
        } else {
            find_sources_unsorted(&root, &self.config.extension)?
        };
        self.advance(Stage::FilesDiscovered);

        if announce {
            println!("Found {} {} files", found.len(), self.config.source_label());
        }

        if found.is_empty() {
            self.advance(Stage::EmptyExit);
            return Err(BuildError::NoSources {
                root,
                extension: self.config.extension.clone(),
            });
        }

        // The tools run inside the project dir, so hand them paths relative to it
        let sources: Vec<PathBuf> = found
            .into_iter()
            .map(|path| match path.strip_prefix(&self.config.project_dir) {
                Ok(relative) => relative.to_path_buf(),
                Err(_) => path,
            })
            .collect();

        for source in &sources {
            debug!("source: {}", source.display());
        }

        Ok(BuildPlan {
            compile: ToolCommand::compile(&self.config, &sources)?,
            run: ToolCommand::run(&self.config)?,
            sources,
        })
    }

    fn advance(&mut self, stage: Stage) {
        debug!("{:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }
}
