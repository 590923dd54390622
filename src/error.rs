//! Error types.

use std::process::ExitStatus;

use thiserror::Error;

/// Result alias for restart operations.
pub type Result<T> = std::result::Result<T, RestartError>;

/// Errors returned by restart operations.
#[derive(Debug, Error)]
pub enum RestartError {
    /// The effective user is not root. The message is printed verbatim.
    #[error("Only root can execute this program. Consider a setuid.")]
    NotSuperuser,

    /// A command could not be spawned or a cache file could not be removed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external command ran but exited unsuccessfully.
    #[error("command `{command}` failed: {status}")]
    CommandFailed {
        /// The command line as it was invoked.
        command: String,
        /// The exit status it reported.
        status: ExitStatus,
    },
}

impl RestartError {
    /// Returns `true` if the underlying I/O error is `NotFound`, i.e. the
    /// external tool is not installed.
    #[must_use]
    pub fn is_missing_tool(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_superuser_message_is_exact() {
        assert_eq!(
            RestartError::NotSuperuser.to_string(),
            "Only root can execute this program. Consider a setuid."
        );
    }

    #[test]
    fn missing_tool_detection() {
        let err = RestartError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.is_missing_tool());
        assert!(!RestartError::NotSuperuser.is_missing_tool());
    }
}
