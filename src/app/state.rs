//! Application state management
//!
//! Centralized state for the demo workbench: the item list, notifications,
//! lifecycle, and the prompt controller. The business methods live here too;
//! each one requests confirmation before doing its work, which is what drives
//! the halt-and-resume cycle end to end.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    error::AppResult,
    prompt::{PromptController, PromptDefaults, PromptHost, PromptRequest},
};

use super::actions::Action;

/// Central application state
#[derive(Debug)]
pub struct AppState {
    /// Application lifecycle state
    pub lifecycle: LifecyclePhase,
    /// Items shown in the workbench list
    pub items: Vec<Item>,
    /// Index of the selected item
    pub selected: usize,
    /// User-visible notifications
    pub notifications: Vec<Notification>,
    /// Prompt controller for confirmation cycles
    pub prompt: PromptController<Action>,
}

impl AppState {
    /// Create state with the given prompt defaults and a seeded item list.
    pub fn new(prompt_defaults: PromptDefaults) -> Self {
        Self {
            lifecycle: LifecyclePhase::Running,
            items: Item::seed(),
            selected: 0,
            notifications: Vec::new(),
            prompt: PromptController::new(prompt_defaults),
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        matches!(self.lifecycle, LifecyclePhase::Quitting)
    }

    /// Move the selection up
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection down
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// Id of the currently selected item, if any
    pub fn selected_item_id(&self) -> Option<u64> {
        self.items.get(self.selected).map(|item| item.id)
    }

    /// Add an error notification
    pub fn add_error<S: Into<String>>(&mut self, message: S) {
        self.notifications
            .push(Notification::new(NotificationLevel::Error, message));
    }

    /// Add an info notification
    pub fn add_info<S: Into<String>>(&mut self, message: S) {
        self.notifications
            .push(Notification::new(NotificationLevel::Info, message));
    }

    /// Most recent notification, for the status line
    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    // --- business methods -------------------------------------------------
    //
    // Each method calls request_confirmation directly with its own action
    // value, halts on first entry, and continues past the call on replay.

    /// Delete the item with the given id, after confirmation.
    pub fn delete_item(&mut self, id: u64) -> AppResult<()> {
        let name = self
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| format!("#{}", id));

        self.prompt.request_confirmation(
            PromptRequest::new(format!("Delete '{}'?", name))
                .body("This item will be removed. Changes cannot be undone.")
                .confirm_label("Delete"),
            Action::DeleteItem { id },
        )?;

        self.items.retain(|item| item.id != id);
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
        self.add_info(format!("Deleted '{}'", name));
        Ok(())
    }

    /// Delete the currently selected item, after confirmation.
    pub fn delete_selected(&mut self) -> AppResult<()> {
        match self.selected_item_id() {
            Some(id) => self.delete_item(id),
            None => Ok(()),
        }
    }

    /// Remove every item. Requires typing the purge word to confirm.
    pub fn purge_all(&mut self) -> AppResult<()> {
        self.prompt.request_confirmation(
            PromptRequest::new("Purge all items?")
                .body("Every item will be removed. Changes cannot be undone.")
                .confirm_label("Purge")
                .required_word("PURGE"),
            Action::PurgeAll,
        )?;

        let count = self.items.len();
        self.items.clear();
        self.selected = 0;
        self.add_info(format!("Purged {} items", count));
        Ok(())
    }

    /// Quit the application, after confirmation.
    pub fn request_quit(&mut self) -> AppResult<()> {
        self.prompt.request_confirmation(
            PromptRequest::new("Quit the workbench?").confirm_label("Quit"),
            Action::Quit,
        )?;

        self.lifecycle = LifecyclePhase::Quitting;
        Ok(())
    }

    /// Fault-interception hook for dispatched action results.
    ///
    /// The halting signal is suppressed here so it never surfaces as a fault;
    /// every other error becomes a user-visible notification.
    pub fn absorb_action_result(&mut self, result: AppResult<()>) {
        match result {
            Ok(()) => {}
            Err(e) if e.is_confirmation_pending() => {
                tracing::debug!("halting signal absorbed, prompt open");
            }
            Err(e) => {
                tracing::warn!(error = %e, "action failed");
                self.add_error(e.to_string());
            }
        }
    }
}

impl PromptHost for AppState {
    type Action = Action;

    fn prompt_mut(&mut self) -> &mut PromptController<Action> {
        &mut self.prompt
    }

    fn run_action(&mut self, action: Action) -> AppResult<()> {
        match action {
            Action::DeleteItem { id } => self.delete_item(id),
            Action::PurgeAll => self.purge_all(),
            Action::Quit => self.request_quit(),
        }
    }
}

/// Application lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Running,
    Quitting,
}

/// A demo workbench item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

impl Item {
    /// Items the demo starts with
    pub fn seed() -> Vec<Self> {
        [
            "Quarterly report",
            "Design draft",
            "Meeting notes",
            "Old backups",
            "Access logs",
        ]
        .iter()
        .enumerate()
        .map(|(i, name)| Item {
            id: i as u64 + 1,
            name: (*name).to_string(),
        })
        .collect()
    }
}

/// User-visible notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    fn new<S: Into<String>>(level: NotificationLevel, message: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}
