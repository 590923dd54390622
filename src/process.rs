//! Signalling and probing processes by name.

use std::process::{Command, Stdio};

use crate::error::Result;
use crate::util::run;

/// Signal sent when terminating processes by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// `SIGTERM`, asks the process to shut down cleanly.
    Term,
    /// `SIGKILL`, cannot be caught or ignored.
    Kill,
}

/// Access to the system process table.
pub trait ProcessManager {
    /// Sends `signal` to every process named exactly `name`.
    ///
    /// Best-effort: an error here (including "no such process") never
    /// stops a restart.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool could not be run or reported failure.
    fn signal_by_name(&self, name: &str, signal: Signal) -> Result<()>;

    /// Returns `true` if a process named exactly `name` is running.
    fn is_running(&self, name: &str) -> bool;
}

/// [`ProcessManager`] backed by `killall` and `pgrep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Killall;

impl ProcessManager for Killall {
    fn signal_by_name(&self, name: &str, signal: Signal) -> Result<()> {
        let mut cmd = Command::new("killall");
        if signal == Signal::Kill {
            cmd.arg("-9");
        }
        cmd.arg(name).stderr(Stdio::null());
        run(&mut cmd)
    }

    /// Probes with `pgrep -lx`; its listing goes to our stdout.
    fn is_running(&self, name: &str) -> bool {
        match run(Command::new("pgrep").args(["-lx", name])) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(name = %name, error = %e, "Liveness probe found no process");
                false
            }
        }
    }
}
