//! Prompt display state
//!
//! [`PromptState`] is the single source of truth for everything the modal
//! renders: the question, optional body text, button labels, the optional
//! required confirmation word and the user's typed input. It is owned by the
//! controller and exposed read-only to the presentation layer.

use serde::{Deserialize, Serialize};

/// Default values a prompt resets to between cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    /// Question shown when a request does not override it
    pub question: String,
    /// Optional body text shown under the question
    pub body: Option<String>,
    /// Cancel button label
    pub cancel_label: String,
    /// Confirm button label
    pub confirm_label: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            question: "Are you sure you wish to proceed?".to_string(),
            body: None,
            cancel_label: "Cancel".to_string(),
            confirm_label: "Confirm".to_string(),
        }
    }
}

/// Mutable prompt state, one instance per controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    /// The question displayed as the modal heading
    pub question: String,
    /// Optional body text displayed under the heading
    pub body: Option<String>,
    /// Cancel button label
    pub cancel_label: String,
    /// Confirm button label
    pub confirm_label: String,
    /// When set, the confirm affordance stays disabled until the typed
    /// input equals this word exactly
    pub required_word: Option<String>,
    /// The user's current input when a required word is configured
    pub typed_confirmation: Option<String>,
}

impl PromptState {
    /// Create prompt state seeded from the given defaults.
    pub fn from_defaults(defaults: &PromptDefaults) -> Self {
        Self {
            question: defaults.question.clone(),
            body: defaults.body.clone(),
            cancel_label: defaults.cancel_label.clone(),
            confirm_label: defaults.confirm_label.clone(),
            required_word: None,
            typed_confirmation: None,
        }
    }

    /// Reset all fields back to the defaults, dropping any required word and
    /// typed input.
    pub fn reset(&mut self, defaults: &PromptDefaults) {
        *self = Self::from_defaults(defaults);
    }

    /// Replace the required word, clearing the typed input alongside it.
    pub fn set_required_word(&mut self, word: Option<String>) {
        self.required_word = word;
        self.typed_confirmation = None;
    }

    /// Whether the confirm affordance is currently allowed to fire.
    ///
    /// True when no required word is configured, or when the typed input
    /// equals it exactly.
    pub fn confirm_allowed(&self) -> bool {
        match &self.required_word {
            None => true,
            Some(word) => self.typed_confirmation.as_deref() == Some(word.as_str()),
        }
    }
}
