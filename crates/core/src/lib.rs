//! dmenu-hist Core Library
//!
//! This crate provides the core functionality for dmenu-hist, a launcher
//! front-end that offers the executables on the search path through an
//! external selector such as `dmenu`, ranking previously chosen commands
//! first by how often they were used.
//!
//! # Key Features
//!
//! - **Search Path Indexing**: Find executables on `PATH`, cached until a search directory changes
//! - **Usage History**: Count how often each command is chosen and rank by it
//! - **Selector Protocol**: Stream candidates to an external picker and read back the choice
//! - **Execution**: Resolve the chosen program and start it detached from the launcher
//! - **Internal Commands**: Sentinel entries such as `!edit-history` handled by the launcher itself
//!
//! # Examples
//!
//! Ranking the candidates for the selector:
//!
//! ```no_run
//! use dmenu_hist_core::cache::CacheStore;
//! use dmenu_hist_core::config::{search_path_from_env, Config};
//! use dmenu_hist_core::history::HistoryStore;
//! use dmenu_hist_core::path_index::PathIndexer;
//! use dmenu_hist_core::ranking::{candidates, filter_out_history};
//!
//! let config = Config::new(
//!     search_path_from_env(),
//!     "/tmp/dmenu_hist/history".into(),
//!     "/tmp/dmenu_hist/app_cache".into(),
//! );
//!
//! let mut history = HistoryStore::new(&config.history_path, &config.internal_commands).load()?;
//! history.sort_by_usage();
//!
//! let indexer = PathIndexer::new(&config.search_path, config.scan_policy);
//! let app_names: Vec<String> = CacheStore::new(&config.cache_path)
//!     .load_or_scan(&indexer)?
//!     .into_iter()
//!     .collect();
//!
//! for line in candidates(&history, &filter_out_history(&app_names, &history)) {
//!     println!("{line}");
//! }
//! # Ok::<(), dmenu_hist_core::error::Error>(())
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod execution;
pub mod file_handling;
pub mod history;
pub mod internal;
pub mod path_index;
pub mod ranking;
pub mod selector;
