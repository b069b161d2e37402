//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate and turns it into a [`Config`] for the launcher.

use clap::Parser;
use dmenu_hist_core::config::{
    get_cache_path, get_history_path, search_path_from_env, Config, DEFAULT_EDITOR,
    DEFAULT_SELECTOR,
};
use dmenu_hist_core::error::Result;
use dmenu_hist_core::path_index::ScanPolicy;

/// Command-line arguments for the dmenu-hist launcher.
///
/// Everything after a `--` separator is passed to the selector verbatim.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use dmenu_hist_cli::cli_args::Args;
///
/// let args = Args::parse_from(["dmenu-hist", "--verbose", "--", "-i", "-l", "10"]);
/// assert_eq!(args.selector_args, vec!["-i", "-l", "10"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Do all except running the selector and the chosen program, for timing.
    #[arg(long, short = 'n', action)]
    pub noop: bool,

    /// Be more verbose: log debug information to stderr and print the
    /// candidate list to stdout.
    #[arg(long, short = 'v', action)]
    pub verbose: bool,

    /// Open the history file in the editor and exit.
    #[arg(long, short = 'e', action)]
    pub edit: bool,

    /// Path to the usage history file.
    ///
    /// If not provided, defaults to `$XDG_DATA_HOME/dmenu_hist/history`.
    #[arg(long)]
    pub history_path: Option<String>,

    /// Path to the executable cache file.
    ///
    /// If not provided, defaults to `$XDG_CACHE_HOME/dmenu_hist/app_cache`.
    #[arg(long)]
    pub cache_path: Option<String>,

    /// Selector program that is given the candidate list.
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    pub selector: String,

    /// Editor command used to open the history file.
    #[arg(long, default_value = DEFAULT_EDITOR)]
    pub editor: String,

    /// Skip search directories that cannot be read instead of failing.
    #[arg(long, action)]
    pub skip_unreadable: bool,

    /// Arguments passed unchanged to the selector.
    #[arg(last = true)]
    pub selector_args: Vec<String>,
}

impl Args {
    /// Builds the launcher configuration from these arguments and `PATH`.
    ///
    /// # Errors
    ///
    /// Returns an error if a default file location cannot be determined.
    pub fn to_config(&self) -> Result<Config> {
        let scan_policy = if self.skip_unreadable {
            ScanPolicy::Skip
        } else {
            ScanPolicy::Abort
        };

        Ok(Config::new(
            search_path_from_env(),
            get_history_path(&self.history_path)?,
            get_cache_path(&self.cache_path)?,
        )
        .with_selector(&self.selector, self.selector_args.clone())
        .with_editor(&self.editor)
        .with_scan_policy(scan_policy))
    }
}
