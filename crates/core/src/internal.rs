//! Registry of internal commands.
//!
//! Internal commands are sentinel entries offered to the selector next to
//! ordinary programs. Choosing one runs a launcher action instead of
//! spawning a program, and they are never written to the history file.

use indexmap::IndexMap;

/// Name under which the history editor is offered in the selector.
pub const EDIT_HISTORY: &str = "!edit-history";

/// Action performed when an internal command is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalAction {
    /// Open the history file in the configured editor.
    EditHistory,
}

/// Ordered mapping of internal command names to their actions.
///
/// Iteration order is insertion order, so the synthetic history records
/// built from this registry always appear in the same order.
#[derive(Debug, Clone)]
pub struct InternalCommands {
    commands: IndexMap<String, InternalAction>,
}

impl InternalCommands {
    /// Creates a registry with no internal commands.
    pub fn empty() -> Self {
        Self {
            commands: IndexMap::new(),
        }
    }

    /// Registers `name`, replacing the action of an existing entry in place.
    pub fn with(mut self, name: &str, action: InternalAction) -> Self {
        self.commands.insert(name.to_string(), action);
        self
    }

    pub fn get(&self, name: &str) -> Option<InternalAction> {
        self.commands.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for InternalCommands {
    fn default() -> Self {
        Self::empty().with(EDIT_HISTORY, InternalAction::EditHistory)
    }
}
