//! Service stop/start through the legacy init script.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::Result;
use crate::util::run;

/// Stops and starts the daemon through the platform's service manager.
pub trait ServiceManager {
    /// Runs the service's stop action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action could not be run or reported failure.
    fn stop(&self) -> Result<()>;

    /// Runs the service's start action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action could not be run or reported failure.
    fn start(&self) -> Result<()>;
}

/// [`ServiceManager`] that invokes `<script> stop` and `<script> start`.
///
/// The script's own output is passed through to the terminal.
#[derive(Debug, Clone)]
pub struct InitScript {
    script: PathBuf,
}

impl InitScript {
    /// Creates a manager for the given init script.
    #[must_use]
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
        }
    }

    /// Returns the init script path.
    #[must_use]
    pub fn script(&self) -> &Path {
        &self.script
    }

    fn action(&self, action: &str) -> Result<()> {
        run(Command::new(&self.script).arg(action))
    }
}

impl ServiceManager for InitScript {
    fn stop(&self) -> Result<()> {
        self.action("stop")
    }

    fn start(&self) -> Result<()> {
        self.action("start")
    }
}
