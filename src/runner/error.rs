use super::ToolStatus;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Messages name what failed; the underlying cause is only reachable through
/// `source()`, so `{:#}` reports it once.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Filesystem error at {}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to walk source tree")]
    Walk(#[from] walkdir::Error),

    #[error("No {extension} files found to compile under {}", root.display())]
    NoSources { root: PathBuf, extension: String },

    #[error("Path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Compilation failed ({status})")]
    CompileFailed { status: ToolStatus },

    #[error("Application exited with failure ({status})")]
    RunFailed { status: ToolStatus },

    #[error("Failed to launch {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
