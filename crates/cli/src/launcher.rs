//! The launcher pipeline.
//!
//! Runs strictly in sequence: load the executables (from cache or a fresh
//! scan), load and rank the history, drop history commands from the
//! executables, hand the candidates to the selector and execute its choice.

use std::io::Write;
use std::time::Instant;

use dmenu_hist_core::cache::CacheStore;
use dmenu_hist_core::config::Config;
use dmenu_hist_core::error::{Error, Result};
use dmenu_hist_core::execution::{Executor, Outcome};
use dmenu_hist_core::history::HistoryStore;
use dmenu_hist_core::path_index::PathIndexer;
use dmenu_hist_core::ranking::{candidates, filter_out_history};
use dmenu_hist_core::selector::Selector;
use itertools::Itertools;
use log::{debug, info};

/// Switches that change how far the pipeline goes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Stop before starting the selector.
    pub dry_run: bool,
    /// Print the candidate list to `out`.
    pub verbose: bool,
}

/// Runs the launcher once.
///
/// # Errors
///
/// Returns the first error of any stage; nothing is retried.
pub fn run<W: Write>(config: &Config, options: RunOptions, out: &mut W) -> Result<Outcome> {
    let started = Instant::now();
    debug!(
        "selector: {} {}",
        config.selector,
        config.selector_args.iter().join(" ")
    );

    let indexer = PathIndexer::new(&config.search_path, config.scan_policy);
    let app_names: Vec<String> = CacheStore::new(&config.cache_path)
        .load_or_scan(&indexer)?
        .into_iter()
        .collect();

    let history_store = HistoryStore::new(&config.history_path, &config.internal_commands);
    let mut history = history_store.load()?;
    history.sort_by_usage();

    debug!("apps before filter: {}", app_names.len());
    let app_names = filter_out_history(&app_names, &history);
    debug!(
        "history: {}",
        history.records().iter().map(ToString::to_string).join(", ")
    );
    debug!("apps count: {}", app_names.len());

    let lines = candidates(&history, &app_names);

    if options.verbose {
        for line in &lines {
            writeln!(out, "{line}").map_err(Error::Stdio)?;
        }
        out.flush().map_err(Error::Stdio)?;
    }

    if options.dry_run {
        info!("Dry run is specified, not starting the selector.");
        debug!("finished in {:?}", started.elapsed());
        return Ok(Outcome::DryRun);
    }

    let choice = Selector::new(&config.selector, &config.selector_args).select(&lines)?;
    if choice.is_cancelled() {
        info!("Nothing was chosen.");
        return Ok(Outcome::Cancelled);
    }

    debug!("chosen: {choice}");
    let outcome = Executor::new(config).execute(&choice, &history)?;
    debug!("finished in {:?}", started.elapsed());
    Ok(outcome)
}
