//! Usage history of launched commands.
//!
//! The history file holds one `command:count` line per command ever chosen.
//! Lines without a colon come from older versions of the file and count as
//! a single use. Internal commands are never read from or written to the
//! file; loading appends one synthetic record for each of them instead.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::debug;

use crate::error::{Error, Result};
use crate::file_handling::{read_lines, write_lines};
use crate::internal::InternalCommands;

const FILE_DESCRIPTION: &str = "history";

/// How often a command has been chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRecord {
    pub command: String,
    pub count: u32,
}

impl UsageRecord {
    pub fn new(command: &str, count: u32) -> Self {
        Self {
            command: command.to_string(),
            count,
        }
    }

    /// Parses a history line.
    ///
    /// The count follows the last colon, so commands may themselves contain
    /// colons. A line without any colon is a legacy entry used once.
    ///
    /// # Errors
    ///
    /// Returns an error if the text after the last colon is not a
    /// non-negative integer.
    pub fn parse(line: &str) -> Result<Self> {
        let Some((command, count)) = line.rsplit_once(':') else {
            return Ok(Self::new(line, 1));
        };

        let count = count
            .trim()
            .parse::<u32>()
            .map_err(|original| Error::MalformedCount {
                line: line.to_string(),
                original,
            })?;

        Ok(Self::new(command, count))
    }
}

impl Display for UsageRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}:{}", self.command, self.count)
    }
}

/// Ordered usage records with unique commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<UsageRecord>,
}

impl History {
    /// Builds a history, merging records that repeat a command into the
    /// first one.
    pub fn new(records: Vec<UsageRecord>) -> Self {
        let mut history = Self::default();
        for record in records {
            history.push_merged(record);
        }
        history
    }

    pub fn records(&self) -> &[UsageRecord] {
        &self.records
    }

    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.command.as_str())
    }

    pub fn get(&self, command: &str) -> Option<&UsageRecord> {
        self.records.iter().find(|record| record.command == command)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Orders records by descending count. Records with equal counts keep
    /// their relative order.
    pub fn sort_by_usage(&mut self) {
        self.records.sort_by(|a, b| b.count.cmp(&a.count));
    }

    fn push_merged(&mut self, record: UsageRecord) {
        match self
            .records
            .iter_mut()
            .find(|existing| existing.command == record.command)
        {
            Some(existing) => existing.count = existing.count.saturating_add(record.count),
            None => self.records.push(record),
        }
    }
}

/// Reads and writes the history file.
pub struct HistoryStore<'a> {
    path: PathBuf,
    internal_commands: &'a InternalCommands,
}

impl<'a> HistoryStore<'a> {
    pub fn new(path: &Path, internal_commands: &'a InternalCommands) -> Self {
        Self {
            path: path.to_path_buf(),
            internal_commands,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the history, followed by one zero-count record per internal
    /// command in registry order.
    ///
    /// A missing history file loads as an empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a count is malformed.
    pub fn load(&self) -> Result<History> {
        let started = Instant::now();
        let mut history = History::default();

        for line in read_lines(FILE_DESCRIPTION, &self.path)? {
            let record = UsageRecord::parse(&line)?;
            debug!("read history line {:?} as {}", line, record);

            if record.command.is_empty() || self.internal_commands.contains(&record.command) {
                continue;
            }
            history.push_merged(record);
        }

        for name in self.internal_commands.names() {
            history.records.push(UsageRecord::new(name, 0));
        }

        debug!(
            "loaded {} history records from {} in {:?}",
            history.len(),
            self.path.display(),
            started.elapsed()
        );
        Ok(history)
    }

    /// Writes the history, counting one more use of `chosen`.
    ///
    /// If `chosen` matches a record its count is incremented; otherwise a
    /// non-empty `chosen` is appended with a count of one. Internal commands
    /// are left out of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the history file cannot be written.
    pub fn save(&self, history: &History, chosen: &str) -> Result<()> {
        let lines = self.updated_records(history, chosen);
        debug!(
            "saving history {} with {} entries",
            self.path.display(),
            lines.len()
        );

        write_lines(
            FILE_DESCRIPTION,
            &self.path,
            lines.iter().map(ToString::to_string),
        )?;
        Ok(())
    }

    fn updated_records(&self, history: &History, chosen: &str) -> Vec<UsageRecord> {
        let mut matched = chosen.is_empty() || self.internal_commands.contains(chosen);
        let mut records = Vec::with_capacity(history.len() + 1);

        for record in history.records() {
            if self.internal_commands.contains(&record.command) {
                continue;
            }

            let mut record = record.clone();
            if !matched && record.command == chosen {
                record.count = record.count.saturating_add(1);
                matched = true;
            }
            records.push(record);
        }

        if !matched {
            records.push(UsageRecord::new(chosen, 1));
        }

        records
    }
}
