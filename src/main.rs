//! `nscd-restart` binary. Takes no arguments.

use std::process::ExitCode;

use nscd_restart::{RestartConfig, RestartReport, Restarter, Result};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (message, code) = finish(Restarter::new(RestartConfig::default()).restart());
    println!("{message}");
    ExitCode::from(code)
}

/// Maps a restart result to the status line and process exit code.
///
/// A failed liveness probe still exits 0; only a refused restart exits 1.
fn finish(result: Result<RestartReport>) -> (String, u8) {
    match result {
        Ok(report) => (report.outcome.to_string(), 0),
        Err(e) => (e.to_string(), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nscd_restart::{Outcome, RestartError};

    fn report(outcome: Outcome) -> Result<RestartReport> {
        Ok(RestartReport {
            steps: Vec::new(),
            outcome,
        })
    }

    #[test]
    fn restarted_exits_zero() {
        assert_eq!(
            finish(report(Outcome::Restarted)),
            ("NSCD restarted".to_string(), 0)
        );
    }

    #[test]
    fn not_running_still_exits_zero() {
        assert_eq!(
            finish(report(Outcome::NotRunning)),
            ("Looks like NSCD has not restarted :-(".to_string(), 0)
        );
    }

    #[test]
    fn not_superuser_exits_one() {
        assert_eq!(
            finish(Err(RestartError::NotSuperuser)),
            (
                "Only root can execute this program. Consider a setuid.".to_string(),
                1
            )
        );
    }
}
