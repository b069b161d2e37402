use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::history::{History, HistoryStore};
use crate::internal::InternalAction;
use crate::selector::Choice;

/// What the launcher ended up doing with a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The selector returned nothing.
    Cancelled,
    /// Everything up to the selector ran, nothing was spawned.
    DryRun,
    /// An internal command was handled.
    Internal(InternalAction),
    /// The program at this path was started.
    Launched(PathBuf),
}

/// Dispatches the selector's choice.
pub struct Executor<'a> {
    config: &'a Config,
    history_store: HistoryStore<'a>,
}

impl<'a> Executor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            history_store: HistoryStore::new(&config.history_path, &config.internal_commands),
        }
    }

    /// Handles `choice`: internal commands run their action, anything else
    /// is resolved on the search path, recorded in the history and started.
    ///
    /// The history is written before the program starts, so the usage is
    /// kept even if the program fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the choice cannot be split, the program is not
    /// on the search path, the history cannot be saved or the program
    /// cannot be started.
    pub fn execute(&self, choice: &Choice, history: &History) -> Result<Outcome> {
        if choice.is_cancelled() {
            return Ok(Outcome::Cancelled);
        }

        if let Some(action) = self.config.internal_commands.get(choice.as_str()) {
            debug!("running internal command {}", choice);
            self.run_internal(action)?;
            return Ok(Outcome::Internal(action));
        }

        let (program, args) = choice.split()?;
        let resolved = self.resolve(&program)?;

        self.history_store.save(history, choice.as_str())?;
        spawn_detached(&resolved, &args)?;

        Ok(Outcome::Launched(resolved))
    }

    /// Finds `program` on the configured search path.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be found.
    pub fn resolve(&self, program: &str) -> Result<PathBuf> {
        let search_path = env::join_paths(&self.config.search_path)?;
        let cwd = env::current_dir()
            .map_err(|e| Error::io_error("working directory", Path::new("."), e))?;

        let resolved = which::which_in(program, Some(search_path), cwd).map_err(|original| {
            Error::ProgramNotFound {
                program: program.to_string(),
                original,
            }
        })?;

        debug!("resolved `{}` to {}", program, resolved.display());
        Ok(resolved)
    }

    fn run_internal(&self, action: InternalAction) -> Result<()> {
        match action {
            InternalAction::EditHistory => edit_history(self.config),
        }
    }
}

/// Opens the history file in the configured editor without waiting for it.
///
/// # Errors
///
/// Returns an error if the editor command cannot be split or started.
pub fn edit_history(config: &Config) -> Result<()> {
    let mut words = shell_words::split(&config.editor).map_err(|original| Error::ShellSplit {
        choice: config.editor.clone(),
        original,
    })?;

    if words.first().map_or(true, String::is_empty) {
        return Err(Error::EmptyCommand(config.editor.clone()));
    }

    let editor = words.remove(0);
    words.push(config.history_path.display().to_string());

    spawn_detached(&editor, &words)
}

/// Starts `program` and returns without waiting for it.
///
/// The child is not tracked after it starts; it outlives the launcher and
/// its exit status is never collected here.
///
/// # Errors
///
/// Returns an error if the program cannot be started.
pub fn spawn_detached<P: AsRef<OsStr>>(program: P, args: &[String]) -> Result<()> {
    let program = program.as_ref();

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| Error::launch_error(program.to_string_lossy(), e))?;

    info!("Launched {} {:?}", program.to_string_lossy(), args);
    Ok(())
}
