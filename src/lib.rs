// Public API exports
pub mod config;
pub mod locator;
pub mod runner;

// Re-export main types for convenience
pub use config::BuildConfig;

pub use locator::{find_sources, find_sources_unsorted};

pub use runner::{
    BuildError, BuildPlan, BuildReport, BuildRunner, Launcher, Stage, SystemLauncher, ToolCommand,
    ToolStatus, ensure_output_dir,
};
