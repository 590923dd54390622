//! Restart configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the daemon process.
pub const DEFAULT_DAEMON_NAME: &str = "nscd";

/// Directory holding the daemon's persistent cache files.
pub const DEFAULT_CACHE_DIR: &str = "/var/cache/nscd";

/// Legacy init script controlling the daemon.
pub const DEFAULT_INIT_SCRIPT: &str = "/etc/init.d/nscd";

/// Time given to the daemon to exit after `SIGTERM` before `SIGKILL` is sent.
pub const GRACEFUL_SHUTDOWN_GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Everything the restarter needs to know about the daemon.
///
/// The binary always uses [`RestartConfig::default`]; the builder methods
/// exist so tests can point the restarter at scratch locations.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use nscd_restart::RestartConfig;
///
/// let config = RestartConfig::default().with_grace_period(Duration::ZERO);
///
/// assert_eq!(config.daemon_name, "nscd");
/// assert_eq!(config.cache_dir.to_str(), Some("/var/cache/nscd"));
/// assert_eq!(config.grace_period, Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct RestartConfig {
    /// Exact process name matched by the kill and probe steps.
    pub daemon_name: String,

    /// Every file directly inside this directory is removed.
    pub cache_dir: PathBuf,

    /// Script invoked with `stop` and `start`.
    pub init_script: PathBuf,

    /// Pause between the graceful and the forced kill.
    pub grace_period: Duration,
}

impl RestartConfig {
    /// Overrides the daemon process name.
    #[must_use]
    pub fn with_daemon_name(mut self, name: impl Into<String>) -> Self {
        self.daemon_name = name.into();
        self
    }

    /// Overrides the cache directory.
    #[must_use]
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Overrides the init script path.
    #[must_use]
    pub fn with_init_script(mut self, script: impl Into<PathBuf>) -> Self {
        self.init_script = script.into();
        self
    }

    /// Overrides the graceful-shutdown grace period.
    #[must_use]
    pub const fn with_grace_period(mut self, period: Duration) -> Self {
        self.grace_period = period;
        self
    }
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            daemon_name: DEFAULT_DAEMON_NAME.to_string(),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            init_script: PathBuf::from(DEFAULT_INIT_SCRIPT),
            grace_period: GRACEFUL_SHUTDOWN_GRACE_PERIOD,
        }
    }
}
