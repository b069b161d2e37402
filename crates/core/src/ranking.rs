//! Ordering of the candidates offered to the selector.

use std::collections::HashSet;
use std::time::Instant;

use log::debug;

use crate::history::History;

/// Removes every command present in `history` from `app_names`.
///
/// The remaining names keep their order, so a sorted input stays sorted.
pub fn filter_out_history(app_names: &[String], history: &History) -> Vec<String> {
    let started = Instant::now();
    let used: HashSet<&str> = history.commands().collect();

    let filtered: Vec<String> = app_names
        .iter()
        .filter(|name| !used.contains(name.as_str()))
        .cloned()
        .collect();

    debug!(
        "filtered {} of {} app names in {:?}",
        app_names.len() - filtered.len(),
        app_names.len(),
        started.elapsed()
    );
    filtered
}

/// Candidate lines in selector order: history commands as ranked, then the
/// remaining app names.
pub fn candidates(history: &History, app_names: &[String]) -> Vec<String> {
    history
        .commands()
        .map(ToString::to_string)
        .chain(app_names.iter().cloned())
        .collect()
}
