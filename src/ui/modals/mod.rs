//! Modal components for user interaction
//!
//! The prompt modal renders the controller's prompt state and wires key
//! events back into it.

pub mod confirmation;

pub use confirmation::PromptModal;

/// Result from modal interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult {
    /// No action taken
    None,
    /// User confirmed the action
    Confirmed,
    /// User cancelled the action
    Cancelled,
}
