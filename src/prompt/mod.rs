//! Halt-and-resume confirmation prompts
//!
//! The core of the crate: a business action requests confirmation, halts via
//! the [`AppError::ConfirmationPending`](crate::error::AppError) signal, the
//! modal renders the prompt state, and once the user confirms the captured
//! action is replayed with loop protection against re-opening the prompt.

pub mod controller;
pub mod state;

pub use controller::{
    confirm_pending, PendingAction, PromptAction, PromptController, PromptHost, PromptPhase,
    PromptRequest,
};
pub use state::{PromptDefaults, PromptState};
