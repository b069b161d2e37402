//! Discovery of executables on the search path.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime};

use log::{debug, warn};

use crate::error::{Error, Result};

/// What to do when a search directory cannot be opened or listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Fail the whole scan.
    #[default]
    Abort,
    /// Log a warning and continue with the next directory.
    Skip,
}

/// Scans a list of directories for executable files.
pub struct PathIndexer<'a> {
    directories: &'a [PathBuf],
    policy: ScanPolicy,
}

impl<'a> PathIndexer<'a> {
    pub fn new(directories: &'a [PathBuf], policy: ScanPolicy) -> Self {
        Self {
            directories,
            policy,
        }
    }

    /// Collects the names of all executable non-directory entries.
    ///
    /// Names found in several directories appear once. Symbolic links are
    /// followed; links that cannot be resolved are ignored.
    ///
    /// # Errors
    ///
    /// With [`ScanPolicy::Abort`], returns an error as soon as a directory
    /// cannot be opened or one of its entries cannot be read.
    pub fn scan(&self) -> Result<BTreeSet<String>> {
        let started = Instant::now();
        let mut names = BTreeSet::new();

        for directory in self.directories {
            match scan_directory(directory, &mut names) {
                Ok(count) => debug!("path: {} {} entries", directory.display(), count),
                Err(e) if self.policy == ScanPolicy::Skip => {
                    warn!("Skipping unreadable search directory: {e}");
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            "scanned {} directories, {} executables in {:?}",
            self.directories.len(),
            names.len(),
            started.elapsed()
        );
        Ok(names)
    }

    /// Latest modification time across the search directories.
    ///
    /// Directories that cannot be inspected are ignored, so the result is
    /// `None` only when none of them could be.
    pub fn last_changed(&self) -> Option<SystemTime> {
        self.directories
            .iter()
            .filter_map(|directory| fs::metadata(directory).and_then(|m| m.modified()).ok())
            .max()
    }
}

/// Adds the executables of `directory` to `names`, returning how many
/// entries the directory listed.
fn scan_directory(directory: &Path, names: &mut BTreeSet<String>) -> Result<usize> {
    let entries = fs::read_dir(directory).map_err(|e| Error::directory_scan(directory, e))?;

    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| Error::directory_scan(directory, e))?;
        count += 1;

        let Ok(metadata) = fs::metadata(entry.path()) else {
            debug!("ignoring unresolvable entry {}", entry.path().display());
            continue;
        };

        if metadata.is_dir() || !is_executable(&metadata) {
            continue;
        }

        if let Some(name) = entry.file_name().to_str() {
            names.insert(name.to_string());
        }
    }

    Ok(count)
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(_metadata: &fs::Metadata) -> bool {
    true
}
