//! Configuration for dmenu-hist.
//!
//! This module resolves the history and cache file locations, reads the
//! search path and bundles everything the launcher components need into a
//! single [`Config`] value.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::internal::InternalCommands;
use crate::path_index::ScanPolicy;

/// Directory created under the XDG data and cache directories
const APP_DIRECTORY: &str = "dmenu_hist";
/// File name of the usage history inside the data directory
const HISTORY_FILE_NAME: &str = "history";
/// File name of the executable cache inside the cache directory
const CACHE_FILE_NAME: &str = "app_cache";

/// Selector program used when none is configured
pub const DEFAULT_SELECTOR: &str = "dmenu";

/// Editor used to inspect the history file
pub const DEFAULT_EDITOR: &str = "gvim";

/// Everything the launcher needs to know about its environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub search_path: Vec<PathBuf>,
    pub history_path: PathBuf,
    pub cache_path: PathBuf,
    pub selector: String,
    pub selector_args: Vec<String>,
    pub editor: String,
    pub scan_policy: ScanPolicy,
    pub internal_commands: InternalCommands,
}

impl Config {
    /// Creates a configuration with the default selector, editor, scan
    /// policy and internal commands.
    pub fn new(search_path: Vec<PathBuf>, history_path: PathBuf, cache_path: PathBuf) -> Self {
        Self {
            search_path,
            history_path,
            cache_path,
            selector: DEFAULT_SELECTOR.to_string(),
            selector_args: Vec::new(),
            editor: DEFAULT_EDITOR.to_string(),
            scan_policy: ScanPolicy::default(),
            internal_commands: InternalCommands::default(),
        }
    }

    pub fn with_selector(mut self, selector: &str, selector_args: Vec<String>) -> Self {
        self.selector = selector.to_string();
        self.selector_args = selector_args;
        self
    }

    pub fn with_editor(mut self, editor: &str) -> Self {
        self.editor = editor.to_string();
        self
    }

    pub fn with_scan_policy(mut self, scan_policy: ScanPolicy) -> Self {
        self.scan_policy = scan_policy;
        self
    }

    pub fn with_internal_commands(mut self, internal_commands: InternalCommands) -> Self {
        self.internal_commands = internal_commands;
        self
    }
}

/// Resolves the history file path.
///
/// A custom path has `~` expanded. Otherwise the path is
/// `<data dir>/dmenu_hist/history`.
///
/// # Errors
///
/// Returns an error if no custom path is given and the user has no data
/// directory.
///
/// # Examples
///
/// ```
/// use dmenu_hist_core::config::get_history_path;
///
/// let custom = get_history_path(&Some("/tmp/history".to_string())).unwrap();
/// assert_eq!(custom.to_str(), Some("/tmp/history"));
/// ```
pub fn get_history_path(history_path_arg: &Option<String>) -> Result<PathBuf> {
    match history_path_arg {
        Some(history_path) => Ok(expand_path(history_path)),
        None => dirs::data_dir()
            .map(|data_dir| data_dir.join(APP_DIRECTORY).join(HISTORY_FILE_NAME))
            .ok_or_else(|| Error::NoDefaultDirectory("data".to_string())),
    }
}

/// Resolves the executable cache path.
///
/// A custom path has `~` expanded. Otherwise the path is
/// `<cache dir>/dmenu_hist/app_cache`.
///
/// # Errors
///
/// Returns an error if no custom path is given and the user has no cache
/// directory.
pub fn get_cache_path(cache_path_arg: &Option<String>) -> Result<PathBuf> {
    match cache_path_arg {
        Some(cache_path) => Ok(expand_path(cache_path)),
        None => dirs::cache_dir()
            .map(|cache_dir| cache_dir.join(APP_DIRECTORY).join(CACHE_FILE_NAME))
            .ok_or_else(|| Error::NoDefaultDirectory("cache".to_string())),
    }
}

/// Reads the directories of `PATH`, in order, dropping empty entries.
pub fn search_path_from_env() -> Vec<PathBuf> {
    match env::var_os("PATH") {
        Some(path) => env::split_paths(&path)
            .filter(|directory| !directory.as_os_str().is_empty())
            .collect(),
        None => Vec::new(),
    }
}

/// Creates the parent directory of `path` if it does not exist yet.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_directory(file_description: &str, path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| Error::io_error(file_description, parent, e)),
        _ => Ok(()),
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
