//! Persisted snapshot of the executables found on the search path.
//!
//! The cache is a plain text file with one executable name per line, sorted
//! alphabetically. It is valid while its modification time is not older
//! than the newest search directory. There is no locking: two launchers
//! may both rescan and the last write wins.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use log::debug;

use crate::error::Result;
use crate::file_handling::{read_lines, write_lines};
use crate::path_index::PathIndexer;

const FILE_DESCRIPTION: &str = "cache";

pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the cached names unless the cache file is missing or was
    /// modified before `not_older_than`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file is current but cannot be read.
    pub fn get(&self, not_older_than: SystemTime) -> Result<Option<BTreeSet<String>>> {
        let modified = match fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                debug!("no usable cache at {}: {}", self.path.display(), e);
                return Ok(None);
            }
        };

        if modified < not_older_than {
            debug!("cache at {} is stale", self.path.display());
            return Ok(None);
        }

        let names = read_lines(FILE_DESCRIPTION, &self.path)?;
        Ok(Some(names.into_iter().collect()))
    }

    /// Overwrites the cache with one name per line, in sorted order.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file cannot be written.
    pub fn put(&self, names: &BTreeSet<String>) -> Result<()> {
        write_lines(FILE_DESCRIPTION, &self.path, names)?;
        Ok(())
    }

    /// Returns the cached executables, rescanning and rewriting the cache
    /// when it is stale, missing or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache cannot be read or written, or if the
    /// scan fails.
    pub fn load_or_scan(&self, indexer: &PathIndexer) -> Result<BTreeSet<String>> {
        let started = Instant::now();
        let not_older_than = indexer.last_changed().unwrap_or(SystemTime::UNIX_EPOCH);

        if let Some(names) = self.get(not_older_than)? {
            if !names.is_empty() {
                debug!(
                    "loaded {} names from cache in {:?}",
                    names.len(),
                    started.elapsed()
                );
                return Ok(names);
            }
        }

        let names = indexer.scan()?;
        self.put(&names)?;
        debug!("rebuilt cache in {:?}", started.elapsed());
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn names(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_put_writes_sorted_lines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&temp_dir.path().join("app_cache"));

        store.put(&names(&["zsh", "cat", "ls"])).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "cat\nls\nzsh\n");
    }

    #[test]
    fn test_get_missing_cache() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&temp_dir.path().join("app_cache"));

        assert!(store.get(SystemTime::UNIX_EPOCH).unwrap().is_none());
    }

    #[test]
    fn test_get_returns_stored_set_when_current() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&temp_dir.path().join("app_cache"));
        store.put(&names(&["cat", "ls"])).unwrap();

        let cached = store.get(SystemTime::UNIX_EPOCH).unwrap();
        assert_eq!(cached, Some(names(&["cat", "ls"])));
    }

    #[test]
    fn test_get_returns_none_when_stale() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&temp_dir.path().join("app_cache"));
        store.put(&names(&["cat", "ls"])).unwrap();

        let threshold = SystemTime::now() + Duration::from_secs(3600);
        assert!(store.get(threshold).unwrap().is_none());
    }

    #[test]
    fn test_get_accepts_cache_modified_exactly_at_threshold() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(&temp_dir.path().join("app_cache"));
        store.put(&names(&["cat"])).unwrap();

        let modified = fs::metadata(store.path()).unwrap().modified().unwrap();
        assert_eq!(store.get(modified).unwrap(), Some(names(&["cat"])));
    }
}
