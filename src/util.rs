//! Internal utilities.

use std::process::{Command, Stdio};

use crate::error::{RestartError, Result};

/// Search path given to every child. Nothing else from the caller's
/// environment reaches a child.
pub const SAFE_PATH: &str = "/usr/sbin:/usr/bin:/sbin:/bin";

/// Returns `true` if the effective user is root.
///
/// Checks the *effective* UID so a setuid-root binary qualifies.
#[must_use]
pub fn is_superuser() -> bool {
    // SAFETY: `geteuid` has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Runs `cmd` to completion and maps a non-zero exit to
/// [`RestartError::CommandFailed`].
///
/// The child gets an empty environment apart from `PATH=`[`SAFE_PATH`],
/// which is also what a bare program name is resolved against.
pub(crate) fn run(cmd: &mut Command) -> Result<()> {
    let command = describe(cmd);
    tracing::debug!(command = %command, "Running command");

    let status = cmd
        .env_clear()
        .env("PATH", SAFE_PATH)
        .stdin(Stdio::null())
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(RestartError::CommandFailed { command, status })
    }
}

fn describe(cmd: &Command) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
