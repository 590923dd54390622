//! On-disk cache directory management.

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_CACHE_DIR;
use crate::error::Result;

/// Persistent cache that must be wiped while the daemon is down.
pub trait CacheStore {
    /// Removes every cached file. Returns the number of files removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache location exists but cannot be read.
    fn clear(&self) -> Result<usize>;
}

/// [`CacheStore`] over a single directory such as `/var/cache/nscd`.
///
/// Only non-directory entries directly inside the directory are removed;
/// subdirectories are left alone. Files that fail to delete are logged and
/// skipped so the remaining ones are still removed.
#[derive(Debug, Clone)]
pub struct CacheDir {
    dir: PathBuf,
}

impl CacheDir {
    /// Creates a store targeting `/var/cache/nscd`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_dir(DEFAULT_CACHE_DIR)
    }

    /// Creates a store targeting a custom directory.
    #[must_use]
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the cache directory path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for CacheDir {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStore for CacheDir {
    fn clear(&self) -> Result<usize> {
        if !self.dir.exists() {
            tracing::debug!(dir = %self.dir.display(), "Cache directory does not exist, skipping");
            return Ok(0);
        }

        let removed = std::fs::read_dir(&self.dir)?
            .filter(remove_entry)
            .count();

        tracing::debug!(dir = %self.dir.display(), removed, "Cleared cache directory");
        Ok(removed)
    }
}

/// Removes one non-directory entry. Returns `true` if something was removed;
/// any failure is logged and skipped.
fn remove_entry(entry: &std::io::Result<DirEntry>) -> bool {
    let entry = match entry {
        Ok(entry) => entry,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to read cache directory entry");
            return false;
        }
    };

    let path = entry.path();
    match entry.file_type() {
        Ok(t) if t.is_dir() => return false,
        Ok(_) => {}
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Failed to stat cache entry");
            return false;
        }
    }

    match std::fs::remove_file(&path) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Failed to remove cache file");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir() {
        assert_eq!(CacheDir::new().dir(), Path::new("/var/cache/nscd"));
    }

    #[test]
    fn clear_removes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["passwd", "group", "hosts", "services", "netgroup"] {
            std::fs::write(dir.path().join(name), b"\0cache").unwrap();
        }
        std::fs::write(dir.path().join(".hidden"), b"x").unwrap();

        let cache = CacheDir::with_dir(dir.path());
        assert_eq!(cache.clear().unwrap(), 6);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn clear_leaves_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("keep"), b"x").unwrap();
        std::fs::write(dir.path().join("hosts"), b"x").unwrap();

        assert_eq!(CacheDir::with_dir(dir.path()).clear().unwrap(), 1);
        assert!(dir.path().join("nested").join("keep").exists());
        assert!(!dir.path().join("hosts").exists());
    }

    #[cfg(unix)]
    #[test]
    fn clear_removes_symlinks_not_targets() {
        let dir = tempfile::tempdir().unwrap();
        let outside = tempfile::NamedTempFile::new().unwrap();
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link")).unwrap();

        assert_eq!(CacheDir::with_dir(dir.path()).clear().unwrap(), 1);
        assert!(outside.path().exists());
    }

    #[test]
    fn unreadable_entry_is_skipped() {
        assert!(!remove_entry(&Err(std::io::Error::other("bad entry"))));
    }

    #[test]
    fn entry_failures_do_not_stop_the_sweep() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("passwd"), b"x").unwrap();
        std::fs::write(dir.path().join("hosts"), b"x").unwrap();

        let entries = std::iter::once(Err(std::io::Error::other("bad entry")))
            .chain(std::fs::read_dir(dir.path()).unwrap());
        assert_eq!(entries.filter(remove_entry).count(), 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn clear_empty_and_nonexistent() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(CacheDir::with_dir(dir.path()).clear().unwrap(), 0);
        assert_eq!(CacheDir::with_dir("/nonexistent/nscd").clear().unwrap(), 0);
    }
}
