//! Prompt controller
//!
//! Implements the halt-and-resume prompt cycle. A business action calls
//! [`PromptController::request_confirmation`] with the action value that
//! should be replayed; on first entry the controller captures it, opens the
//! modal and returns the halting signal so the caller aborts via `?`. Once the
//! user confirms, [`confirm_pending`] replays the captured action with the
//! controller in the `Resuming` phase, during which the re-entered
//! `request_confirmation` call short-circuits and lets the action run to
//! completion.
//!
//! # Example
//!
//! ```ignore
//! fn delete_item(&mut self, id: u64) -> AppResult<()> {
//!     self.prompt.request_confirmation(
//!         PromptRequest::new("Delete this item?"),
//!         Action::DeleteItem { id },
//!     )?;
//!     // only reached after the user confirmed
//!     self.items.retain(|item| item.id != id);
//!     Ok(())
//! }
//! ```

use tracing::debug;

use crate::error::{AppError, AppResult};

use super::state::{PromptDefaults, PromptState};

/// An action value that can be captured by a prompt and replayed later.
///
/// The name is used for the pending record and for logging; it plays the role
/// of the original caller's method name.
pub trait PromptAction {
    /// Display name of the action
    fn name(&self) -> &'static str;
}

/// Options for a single confirmation request.
///
/// Optional fields that are left unset keep their configured defaults.
#[derive(Debug, Clone, Default)]
pub struct PromptRequest {
    question: String,
    body: Option<String>,
    cancel_label: Option<String>,
    confirm_label: Option<String>,
    required_word: Option<String>,
}

impl PromptRequest {
    /// Create a request with the question to present to the user.
    pub fn new<S: Into<String>>(question: S) -> Self {
        Self {
            question: question.into(),
            ..Self::default()
        }
    }

    /// Body text shown under the question.
    pub fn body<S: Into<String>>(mut self, body: S) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Cancel button label.
    pub fn cancel_label<S: Into<String>>(mut self, label: S) -> Self {
        self.cancel_label = Some(label.into());
        self
    }

    /// Confirm button label.
    pub fn confirm_label<S: Into<String>>(mut self, label: S) -> Self {
        self.confirm_label = Some(label.into());
        self
    }

    /// Word the user must type before the confirm affordance is enabled.
    pub fn required_word<S: Into<String>>(mut self, word: S) -> Self {
        self.required_word = Some(word.into());
        self
    }

    /// The question this request carries.
    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Phases of one prompt cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptPhase {
    /// No prompt cycle in progress
    #[default]
    Idle,
    /// Modal open, waiting for the user to confirm or cancel
    AwaitingConfirmation,
    /// Captured action is being replayed after a confirmation
    Resuming,
}

/// The captured action awaiting replay, at most one live instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAction<A> {
    /// Display name of the captured action
    pub name: &'static str,
    /// The action value to replay on confirmation
    pub action: A,
}

/// Controller for the halt-and-resume confirmation flow.
///
/// Owns the prompt state, the pending action and the phase machine. One
/// instance per interactive session.
#[derive(Debug)]
pub struct PromptController<A> {
    defaults: PromptDefaults,
    state: PromptState,
    pending: Option<PendingAction<A>>,
    phase: PromptPhase,
}

impl<A: PromptAction> PromptController<A> {
    /// Create a controller whose prompt resets to the given defaults.
    pub fn new(defaults: PromptDefaults) -> Self {
        let state = PromptState::from_defaults(&defaults);
        Self {
            defaults,
            state,
            pending: None,
            phase: PromptPhase::Idle,
        }
    }

    /// Read-only view of the prompt state for the presentation layer.
    pub fn state(&self) -> &PromptState {
        &self.state
    }

    /// Current phase of the prompt cycle.
    pub fn phase(&self) -> PromptPhase {
        self.phase
    }

    /// Whether the modal should currently be shown.
    pub fn is_open(&self) -> bool {
        self.phase == PromptPhase::AwaitingConfirmation
    }

    /// Whether a confirmed action is currently being replayed.
    pub fn is_resuming(&self) -> bool {
        self.phase == PromptPhase::Resuming
    }

    /// Name of the captured action, if one is pending.
    pub fn pending_name(&self) -> Option<&'static str> {
        self.pending.as_ref().map(|pending| pending.name)
    }

    /// Request user confirmation for `action`.
    ///
    /// On first entry this captures the action, opens the modal and returns
    /// the halting signal ([`AppError::ConfirmationPending`]) so the calling
    /// business method aborts via `?`. When the same method is replayed after
    /// a confirmation, the call observes the `Resuming` phase, consumes it and
    /// returns `Ok(())` so the method continues past the request.
    ///
    /// Must be called directly by the business method that should pause: the
    /// `action` value is what gets replayed, so it has to reproduce that
    /// method's call, arguments included.
    pub fn request_confirmation(&mut self, request: PromptRequest, action: A) -> AppResult<()> {
        self.state.question = request.question;
        if let Some(body) = request.body {
            self.state.body = Some(body);
        }
        if let Some(label) = request.cancel_label {
            self.state.cancel_label = label;
        }
        if let Some(label) = request.confirm_label {
            self.state.confirm_label = label;
        }
        if let Some(word) = request.required_word {
            self.state.set_required_word(Some(word));
        }

        // The typed input never survives a (re)opened prompt.
        self.state.typed_confirmation = None;

        if self.phase == PromptPhase::Resuming {
            self.phase = PromptPhase::Idle;
            debug!(action = action.name(), "resuming confirmed action");
            return Ok(());
        }

        debug!(
            action = action.name(),
            question = %self.state.question,
            "confirmation requested, halting action"
        );

        self.pending = Some(PendingAction {
            name: action.name(),
            action,
        });
        self.phase = PromptPhase::AwaitingConfirmation;

        Err(AppError::confirmation_pending(self.state.question.clone()))
    }

    /// Consume the pending action after the user confirmed.
    ///
    /// Hides the modal and resets the prompt state either way. Returns `None`
    /// when nothing was pending (confirm pressed with no open cycle is a
    /// silent no-op). When an action is returned, the controller is left in
    /// the `Resuming` phase; the caller must invoke the action and then call
    /// [`finish_resume`](Self::finish_resume). Prefer [`confirm_pending`],
    /// which wires all of that up.
    pub fn take_confirmed(&mut self) -> Option<A> {
        let Some(pending) = self.pending.take() else {
            self.state.reset(&self.defaults);
            self.phase = PromptPhase::Idle;
            return None;
        };

        debug!(action = pending.name, "prompt confirmed, replaying action");

        self.state.reset(&self.defaults);
        self.phase = PromptPhase::Resuming;
        Some(pending.action)
    }

    /// Leave the `Resuming` phase after a replayed action returned.
    ///
    /// Only downgrades `Resuming`; if the replayed action opened a new prompt
    /// cycle the `AwaitingConfirmation` phase it set is left alone.
    pub fn finish_resume(&mut self) {
        if self.phase == PromptPhase::Resuming {
            self.phase = PromptPhase::Idle;
        }
    }

    /// Abandon the current prompt cycle.
    ///
    /// Hides the modal, drops the pending action and resets the prompt state.
    pub fn dismiss(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(action = pending.name, "prompt dismissed, dropping action");
        }
        self.state.reset(&self.defaults);
        if self.phase == PromptPhase::AwaitingConfirmation {
            self.phase = PromptPhase::Idle;
        }
    }

    /// Update the typed confirmation input (the two-way binding for the
    /// required-word field).
    pub fn set_typed_confirmation(&mut self, input: Option<String>) {
        self.state.typed_confirmation = input;
    }

    /// Whether the confirm affordance is currently enabled.
    pub fn confirm_allowed(&self) -> bool {
        self.state.confirm_allowed()
    }
}

/// Host integration contract for replaying confirmed actions.
///
/// The host owns the controller and knows how to execute its action type;
/// [`confirm_pending`] ties the two together with the phase discipline the
/// replay requires.
pub trait PromptHost {
    /// The action type this host can capture and replay
    type Action: PromptAction;

    /// Access the host's prompt controller
    fn prompt_mut(&mut self) -> &mut PromptController<Self::Action>;

    /// Execute a business action
    fn run_action(&mut self, action: Self::Action) -> AppResult<()>;
}

/// Confirm the host's pending prompt, replaying the captured action.
///
/// With nothing pending this only resets the prompt state. Otherwise the
/// captured action runs exactly once with the controller in the `Resuming`
/// phase; the phase is cleared after the action returns whether it succeeded
/// or not, and its error (including a new halting signal from a nested prompt
/// cycle) propagates to the dispatch point.
pub fn confirm_pending<H: PromptHost>(host: &mut H) -> AppResult<()> {
    let Some(action) = host.prompt_mut().take_confirmed() else {
        return Ok(());
    };

    let result = host.run_action(action);
    host.prompt_mut().finish_resume();
    result
}
