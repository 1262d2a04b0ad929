//! Prompt controller state machine and replay tests

use promptable::error::{AppError, AppResult};
use promptable::prompt::{
    confirm_pending, PromptAction, PromptController, PromptDefaults, PromptHost, PromptPhase,
    PromptRequest,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum TestAction {
    DeleteItem { id: u64 },
    ArchiveThenDelete { id: u64 },
    ReallyDelete { id: u64 },
}

impl PromptAction for TestAction {
    fn name(&self) -> &'static str {
        match self {
            TestAction::DeleteItem { .. } => "delete_item",
            TestAction::ArchiveThenDelete { .. } => "archive_then_delete",
            TestAction::ReallyDelete { .. } => "really_delete",
        }
    }
}

/// Minimal host with business methods that request confirmation before
/// doing their work.
struct TestHost {
    prompt: PromptController<TestAction>,
    log: Vec<String>,
    deleted: Vec<u64>,
    fail_on_delete: bool,
}

impl TestHost {
    fn new() -> Self {
        Self {
            prompt: PromptController::new(PromptDefaults::default()),
            log: Vec::new(),
            deleted: Vec::new(),
            fail_on_delete: false,
        }
    }

    fn delete_item(&mut self, id: u64) -> AppResult<()> {
        self.log.push(format!("enter:{id}"));
        self.prompt.request_confirmation(
            PromptRequest::new("Delete?").confirm_label("Delete"),
            TestAction::DeleteItem { id },
        )?;
        self.log.push(format!("after_prompt:{id}"));
        if self.fail_on_delete {
            return Err(AppError::application("delete failed"));
        }
        self.deleted.push(id);
        Ok(())
    }

    fn archive_then_delete(&mut self, id: u64) -> AppResult<()> {
        self.prompt.request_confirmation(
            PromptRequest::new("Archive first?"),
            TestAction::ArchiveThenDelete { id },
        )?;
        self.log.push(format!("archived:{id}"));
        self.really_delete(id)
    }

    fn really_delete(&mut self, id: u64) -> AppResult<()> {
        self.prompt.request_confirmation(
            PromptRequest::new("Really delete?"),
            TestAction::ReallyDelete { id },
        )?;
        self.deleted.push(id);
        Ok(())
    }
}

impl PromptHost for TestHost {
    type Action = TestAction;

    fn prompt_mut(&mut self) -> &mut PromptController<TestAction> {
        &mut self.prompt
    }

    fn run_action(&mut self, action: TestAction) -> AppResult<()> {
        match action {
            TestAction::DeleteItem { id } => self.delete_item(id),
            TestAction::ArchiveThenDelete { id } => self.archive_then_delete(id),
            TestAction::ReallyDelete { id } => self.really_delete(id),
        }
    }
}

#[test]
fn first_call_halts_before_following_code() {
    let mut host = TestHost::new();

    let result = host.delete_item(42);

    let err = result.expect_err("first call must halt");
    assert!(err.is_confirmation_pending());
    assert_eq!(host.log, vec!["enter:42"]);
    assert!(host.deleted.is_empty());
    assert_eq!(host.prompt.pending_name(), Some("delete_item"));
    assert_eq!(host.prompt.phase(), PromptPhase::AwaitingConfirmation);
    assert!(host.prompt.is_open());
    assert_eq!(host.prompt.state().question, "Delete?");
    assert_eq!(host.prompt.state().confirm_label, "Delete");
}

#[test]
fn confirm_replays_captured_action_exactly_once() {
    let mut host = TestHost::new();
    let _ = host.delete_item(42);

    confirm_pending(&mut host).expect("replay should succeed");

    assert_eq!(host.deleted, vec![42]);
    assert_eq!(host.log, vec!["enter:42", "enter:42", "after_prompt:42"]);
    assert_eq!(host.prompt.phase(), PromptPhase::Idle);
    assert_eq!(host.prompt.pending_name(), None);
    assert!(!host.prompt.is_open());
    assert!(!host.prompt.is_resuming());
}

#[test]
fn confirm_with_nothing_pending_is_a_silent_reset() {
    let mut host = TestHost::new();

    // A completed cycle leaves the replayed request's text in place (the
    // reset happens when the next cycle is confirmed or dismissed).
    let _ = host.delete_item(1);
    confirm_pending(&mut host).expect("replay should succeed");
    assert_eq!(host.prompt.state().question, "Delete?");

    // Confirming with nothing pending resets text and labels, nothing else.
    confirm_pending(&mut host).expect("no-op confirm must not fail");

    assert_eq!(host.deleted, vec![1]);
    assert_eq!(host.prompt.phase(), PromptPhase::Idle);
    let defaults = PromptDefaults::default();
    assert_eq!(host.prompt.state().question, defaults.question);
    assert_eq!(host.prompt.state().cancel_label, defaults.cancel_label);
    assert_eq!(host.prompt.state().confirm_label, defaults.confirm_label);
}

#[test]
fn required_word_and_typed_input_do_not_survive_the_cycle() {
    let mut host = TestHost::new();
    let _ = host.prompt.request_confirmation(
        PromptRequest::new("Custom question?")
            .body("Custom body")
            .cancel_label("Keep")
            .confirm_label("Drop")
            .required_word("DROP"),
        TestAction::DeleteItem { id: 1 },
    );
    host.prompt.set_typed_confirmation(Some("DROP".to_string()));

    confirm_pending(&mut host).expect("replay should succeed");

    // The replayed request overwrote question and confirm label; the
    // required word and typed input are gone.
    let state = host.prompt.state();
    assert_eq!(state.question, "Delete?");
    assert_eq!(state.confirm_label, "Delete");
    assert_eq!(state.required_word, None);
    assert_eq!(state.typed_confirmation, None);
    assert!(state.confirm_allowed());
}

#[test]
fn replay_fault_propagates_after_resuming_cleared() {
    let mut host = TestHost::new();
    let _ = host.delete_item(7);
    host.fail_on_delete = true;

    let err = confirm_pending(&mut host).expect_err("replay fault must propagate");

    assert!(!err.is_confirmation_pending());
    assert_eq!(host.prompt.phase(), PromptPhase::Idle);
    assert_eq!(host.prompt.pending_name(), None);
    assert!(host.deleted.is_empty());
}

#[test]
fn dismiss_drops_the_pending_action() {
    let mut host = TestHost::new();
    let _ = host.delete_item(9);

    host.prompt.dismiss();

    assert_eq!(host.prompt.phase(), PromptPhase::Idle);
    assert_eq!(host.prompt.pending_name(), None);
    assert!(!host.prompt.is_open());
    assert_eq!(
        host.prompt.state().question,
        PromptDefaults::default().question
    );

    // A dismissed cycle must not leave anything to replay.
    confirm_pending(&mut host).expect("nothing pending");
    assert!(host.deleted.is_empty());
}

#[test]
fn required_word_gates_the_confirm_affordance() {
    let mut host = TestHost::new();
    let _ = host.prompt.request_confirmation(
        PromptRequest::new("Delete everything?").required_word("DELETE"),
        TestAction::DeleteItem { id: 1 },
    );

    assert!(!host.prompt.confirm_allowed());

    host.prompt.set_typed_confirmation(Some("delet".to_string()));
    assert!(!host.prompt.confirm_allowed());

    host.prompt.set_typed_confirmation(Some("DELETE".to_string()));
    assert!(host.prompt.confirm_allowed());
}

#[test]
fn reopening_a_prompt_clears_the_typed_input() {
    let mut host = TestHost::new();
    let _ = host.prompt.request_confirmation(
        PromptRequest::new("First?").required_word("YES"),
        TestAction::DeleteItem { id: 1 },
    );
    host.prompt.set_typed_confirmation(Some("YES".to_string()));
    host.prompt.dismiss();

    let _ = host.prompt.request_confirmation(
        PromptRequest::new("Second?").required_word("YES"),
        TestAction::DeleteItem { id: 2 },
    );

    assert_eq!(host.prompt.state().typed_confirmation, None);
    assert!(!host.prompt.confirm_allowed());
}

#[test]
fn replay_can_open_a_nested_prompt_cycle() {
    let mut host = TestHost::new();

    // First entry halts at the archive prompt.
    let err = host.archive_then_delete(5).expect_err("must halt");
    assert!(err.is_confirmation_pending());
    assert_eq!(host.prompt.pending_name(), Some("archive_then_delete"));

    // Confirming replays the method; it runs past the first request and
    // halts again at the nested delete prompt.
    let err = confirm_pending(&mut host).expect_err("nested prompt must halt again");
    assert!(err.is_confirmation_pending());
    assert_eq!(host.log, vec!["archived:5"]);
    assert_eq!(host.prompt.phase(), PromptPhase::AwaitingConfirmation);
    assert_eq!(host.prompt.pending_name(), Some("really_delete"));
    assert!(host.deleted.is_empty());

    // Confirming the nested prompt completes the work.
    confirm_pending(&mut host).expect("nested replay should succeed");
    assert_eq!(host.deleted, vec![5]);
    assert_eq!(host.prompt.phase(), PromptPhase::Idle);
}

#[test]
fn resuming_flag_does_not_leak_into_unrelated_calls() {
    let mut host = TestHost::new();
    let _ = host.delete_item(1);
    confirm_pending(&mut host).expect("replay should succeed");

    // A fresh invocation after a completed cycle must halt again.
    let err = host.delete_item(2).expect_err("new cycle must halt");
    assert!(err.is_confirmation_pending());
    assert_eq!(host.deleted, vec![1]);
}
