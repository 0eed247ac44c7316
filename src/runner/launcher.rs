use super::{BuildError, ToolCommand, ToolStatus};
use log::debug;
use std::path::Path;
use std::process::Stdio;

/// Runs a tool to completion and reports how it exited
pub trait Launcher {
    fn launch(&mut self, command: &ToolCommand, working_dir: &Path)
        -> Result<ToolStatus, BuildError>;
}

/// Spawns real processes that share this process's terminal.
///
/// `status()` blocks until the child exits and reaps it on every path, so no
/// handle outlives the call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(
        &mut self,
        command: &ToolCommand,
        working_dir: &Path,
    ) -> Result<ToolStatus, BuildError> {
        debug!("[{}] {}", working_dir.display(), command);

        let status = command
            .to_command(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| BuildError::Launch {
                program: command.program.clone(),
                source,
            })?;

        debug!("{} exited with {}", command.program, ToolStatus::from(status));
        Ok(status.into())
    }
}
