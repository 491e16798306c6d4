//! Running the external editor and pager

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::error::{Error, Result};

/// Starts an interactive program on a file and waits for it to finish
pub trait Launcher {
    /// Run `program <path>` and hand back its exit status. Fails with
    /// [`Error::Launch`] if it could not be started and [`Error::Wait`] if
    /// waiting on it failed.
    fn launch(&self, program: &str, path: &Path) -> Result<ExitStatus>;
}

/// Spawns real child processes sharing this process's terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn launch(&self, program: &str, path: &Path) -> Result<ExitStatus> {
        log::debug!("launching {} {}", program, path.display());

        // stdin/stdout/stderr are inherited by default
        let mut child = Command::new(program)
            .arg(path)
            .spawn()
            .map_err(|source| Error::Launch {
                program: program.to_string(),
                source,
            })?;

        child.wait().map_err(|source| Error::Wait {
            program: program.to_string(),
            source,
        })
    }
}

/// Launch and wait. Only a failure to start is an error; anything that goes
/// wrong after that is logged.
pub fn run_interactive<L: Launcher + ?Sized>(launcher: &L, program: &str, path: &Path) -> Result<()> {
    match launcher.launch(program, path) {
        Ok(status) if !status.success() => {
            log::warn!("Error while editing. {} exited with {}", program, status);
        }
        Ok(_) => {}
        Err(e @ Error::Wait { .. }) => log::warn!("Error while editing. {}", e),
        Err(e) => return Err(e),
    }
    Ok(())
}
