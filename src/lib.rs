//! # nscd-restart
//!
//! Bounce the name service caching daemon (`nscd`) with an empty cache.
//!
//! Stale `nscd` caches can keep serving users, groups or hosts long after
//! the underlying databases changed. Invalidating through `nscd -i` is not
//! always enough, so this crate does the blunt thing:
//!
//! 1. `SIGTERM` every `nscd`, wait a second, then `SIGKILL` the survivors.
//! 2. Delete every file in `/var/cache/nscd/`.
//! 3. `/etc/init.d/nscd stop` followed by `/etc/init.d/nscd start`.
//! 4. Probe with `pgrep -lx nscd` and report.
//!
//! Every step is best-effort; only the privilege check and the final probe
//! change what the operator sees.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use nscd_restart::{RestartConfig, Restarter};
//!
//! let report = Restarter::new(RestartConfig::default()).restart()?;
//! println!("{}", report.outcome);
//! # Ok::<(), nscd_restart::RestartError>(())
//! ```
//!
//! ## Permissions
//!
//! Everything above requires root. The binary checks the *effective* UID,
//! so it may be installed setuid-root for use by unprivileged operators:
//!
//! ```bash
//! chown root:root nscd-restart && chmod 4755 nscd-restart
//! ```

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod config;
pub mod error;
pub mod process;
pub mod restarter;
pub mod service;
pub mod util;

pub use cache::{CacheDir, CacheStore};
pub use config::RestartConfig;
pub use error::{RestartError, Result};
pub use process::{Killall, ProcessManager, Signal};
pub use restarter::{EffectiveUser, Identity, Outcome, RestartReport, Restarter, Step};
pub use service::{InitScript, ServiceManager};
