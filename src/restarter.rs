//! The restart sequence.
//!
//! Each external effect sits behind a narrow trait so the sequencing can be
//! exercised with fakes:
//!
//! | Seam | Production impl | Used for |
//! |------|-----------------|----------|
//! | [`Identity`] | [`EffectiveUser`] | privilege gate |
//! | [`ProcessManager`] | [`Killall`] | graceful/forced kill, liveness probe |
//! | [`CacheStore`] | [`CacheDir`] | wiping the cache directory |
//! | [`ServiceManager`] | [`InitScript`] | service stop/start |

use std::fmt;

use crate::cache::{CacheDir, CacheStore};
use crate::config::RestartConfig;
use crate::error::{RestartError, Result};
use crate::process::{Killall, ProcessManager, Signal};
use crate::service::{InitScript, ServiceManager};
use crate::util::is_superuser;

/// Answers whether the caller may perform a restart.
pub trait Identity {
    /// Returns `true` for the superuser.
    fn is_superuser(&self) -> bool;
}

/// [`Identity`] of the running process, judged by its effective UID.
#[derive(Debug, Default, Clone, Copy)]
pub struct EffectiveUser;

impl Identity for EffectiveUser {
    fn is_superuser(&self) -> bool {
        is_superuser()
    }
}

/// One best-effort step of the restart sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `SIGTERM` to every daemon process.
    Terminate,
    /// `SIGKILL` to whatever survived the grace period.
    ForceKill,
    /// Remove the on-disk cache files.
    ClearCache,
    /// Service-manager stop action.
    ServiceStop,
    /// Service-manager start action.
    ServiceStart,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Terminate => "terminate",
            Self::ForceKill => "force-kill",
            Self::ClearCache => "clear-cache",
            Self::ServiceStop => "service-stop",
            Self::ServiceStart => "service-start",
        })
    }
}

/// Result of the post-restart liveness probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The daemon was found running.
    Restarted,
    /// No daemon process was found.
    NotRunning,
}

impl Outcome {
    /// Operator-facing status line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Restarted => "NSCD restarted",
            Self::NotRunning => "Looks like NSCD has not restarted :-(",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// What a completed restart did.
#[derive(Debug)]
pub struct RestartReport {
    /// Every best-effort step with its (ignored) result, in order.
    pub steps: Vec<(Step, Result<()>)>,
    /// Liveness probe verdict.
    pub outcome: Outcome,
}

impl RestartReport {
    /// Steps whose command failed.
    pub fn failed_steps(&self) -> impl Iterator<Item = (Step, &RestartError)> {
        self.steps
            .iter()
            .filter_map(|(step, res)| res.as_ref().err().map(|e| (*step, e)))
    }
}

/// Performs a privileged bounce of the daemon.
///
/// # Example
///
/// ```rust,no_run
/// use nscd_restart::{RestartConfig, Restarter};
///
/// match Restarter::new(RestartConfig::default()).restart() {
///     Ok(report) => println!("{}", report.outcome),
///     Err(e) => println!("{e}"),
/// }
/// ```
pub struct Restarter {
    config: RestartConfig,
    identity: Box<dyn Identity>,
    processes: Box<dyn ProcessManager>,
    cache: Box<dyn CacheStore>,
    service: Box<dyn ServiceManager>,
}

impl Restarter {
    /// Creates a restarter that acts on the real system.
    #[must_use]
    pub fn new(config: RestartConfig) -> Self {
        let cache = CacheDir::with_dir(config.cache_dir.clone());
        let service = InitScript::new(config.init_script.clone());
        Self::with_backends(config, EffectiveUser, Killall, cache, service)
    }

    /// Creates a restarter over caller-supplied backends.
    #[must_use]
    pub fn with_backends(
        config: RestartConfig,
        identity: impl Identity + 'static,
        processes: impl ProcessManager + 'static,
        cache: impl CacheStore + 'static,
        service: impl ServiceManager + 'static,
    ) -> Self {
        Self {
            config,
            identity: Box::new(identity),
            processes: Box::new(processes),
            cache: Box::new(cache),
            service: Box::new(service),
        }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub const fn config(&self) -> &RestartConfig {
        &self.config
    }

    /// Kills the daemon, wipes its cache, starts it again and probes it.
    ///
    /// Individual step failures are recorded in the report and otherwise
    /// ignored. A failed probe is reported through [`Outcome::NotRunning`],
    /// not as an error.
    ///
    /// # Errors
    ///
    /// Returns [`RestartError::NotSuperuser`] before touching anything if
    /// the caller is not root.
    pub fn restart(&self) -> Result<RestartReport> {
        if !self.identity.is_superuser() {
            return Err(RestartError::NotSuperuser);
        }

        let name = self.config.daemon_name.as_str();
        let mut steps = Vec::with_capacity(5);

        steps.push(best_effort(
            Step::Terminate,
            self.processes.signal_by_name(name, Signal::Term),
        ));
        std::thread::sleep(self.config.grace_period);
        steps.push(best_effort(
            Step::ForceKill,
            self.processes.signal_by_name(name, Signal::Kill),
        ));
        steps.push(best_effort(Step::ClearCache, self.cache.clear().map(drop)));
        steps.push(best_effort(Step::ServiceStop, self.service.stop()));
        steps.push(best_effort(Step::ServiceStart, self.service.start()));

        let outcome = if self.processes.is_running(name) {
            Outcome::Restarted
        } else {
            Outcome::NotRunning
        };
        tracing::info!(daemon = %name, ?outcome, "Restart finished");

        Ok(RestartReport { steps, outcome })
    }
}

fn best_effort(step: Step, result: Result<()>) -> (Step, Result<()>) {
    match &result {
        Ok(()) => tracing::debug!(%step, "Step succeeded"),
        Err(e) if e.is_missing_tool() => {
            tracing::warn!(%step, error = %e, "Command for step is not installed, continuing");
        }
        Err(e) => tracing::debug!(%step, error = %e, "Step failed, continuing"),
    }
    (step, result)
}
