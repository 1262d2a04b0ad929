//! Business actions of the demo workbench
//!
//! [`Action`] is the typed pending-action record: each variant names a
//! business method together with the arguments it was invoked with, so a
//! captured action can be replayed exactly as it was first called.

use crate::prompt::PromptAction;

/// Actions the demo host can capture behind a confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete a single item by id
    DeleteItem { id: u64 },
    /// Remove every item
    PurgeAll,
    /// Quit the application
    Quit,
}

impl PromptAction for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::DeleteItem { .. } => "delete_item",
            Action::PurgeAll => "purge_all",
            Action::Quit => "quit",
        }
    }
}
