//! Key handling tests for the prompt modal adapter

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use promptable::prompt::{PromptAction, PromptController, PromptDefaults, PromptRequest};
use promptable::ui::modals::{ModalResult, PromptModal};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Noop;

impl PromptAction for Noop {
    fn name(&self) -> &'static str {
        "noop"
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn open_controller(request: PromptRequest) -> PromptController<Noop> {
    let mut controller = PromptController::new(PromptDefaults::default());
    let _ = controller.request_confirmation(request, Noop);
    assert!(controller.is_open());
    controller
}

#[test]
fn keys_are_ignored_while_the_modal_is_closed() {
    let mut modal = PromptModal::new();
    let mut controller: PromptController<Noop> =
        PromptController::new(PromptDefaults::default());

    let result = modal
        .handle_key_event(key(KeyCode::Enter), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::None);
}

#[test]
fn y_and_n_shortcuts_work_without_a_required_word() {
    let mut modal = PromptModal::new();
    let mut controller = open_controller(PromptRequest::new("Sure?"));

    let result = modal
        .handle_key_event(key(KeyCode::Char('y')), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::Confirmed);

    let result = modal
        .handle_key_event(key(KeyCode::Char('n')), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::Cancelled);
}

#[test]
fn escape_always_cancels() {
    let mut modal = PromptModal::new();
    let mut controller = open_controller(PromptRequest::new("Sure?").required_word("YES"));

    let result = modal
        .handle_key_event(key(KeyCode::Esc), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::Cancelled);
}

#[test]
fn typing_feeds_the_required_word_input() {
    let mut modal = PromptModal::new();
    let mut controller = open_controller(PromptRequest::new("Purge?").required_word("PURGE"));

    for c in "PURGX".chars() {
        let result = modal
            .handle_key_event(key(KeyCode::Char(c)), &mut controller)
            .unwrap();
        assert_eq!(result, ModalResult::None);
    }
    assert_eq!(
        controller.state().typed_confirmation.as_deref(),
        Some("PURGX")
    );

    let _ = modal.handle_key_event(key(KeyCode::Backspace), &mut controller);
    let _ = modal.handle_key_event(key(KeyCode::Char('E')), &mut controller);
    assert_eq!(
        controller.state().typed_confirmation.as_deref(),
        Some("PURGE")
    );
}

#[test]
fn enter_is_inert_until_the_required_word_matches() {
    let mut modal = PromptModal::new();
    let mut controller = open_controller(PromptRequest::new("Purge?").required_word("PURGE"));

    let result = modal
        .handle_key_event(key(KeyCode::Enter), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::None, "blocked with nothing typed");

    for c in "PURGE".chars() {
        let _ = modal.handle_key_event(key(KeyCode::Char(c)), &mut controller);
    }

    let result = modal
        .handle_key_event(key(KeyCode::Enter), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::Confirmed, "enabled once the word matches");
}

#[test]
fn enter_follows_button_focus_without_a_required_word() {
    let mut modal = PromptModal::new();
    let mut controller = open_controller(PromptRequest::new("Sure?"));

    // Cancel is focused by default.
    let result = modal
        .handle_key_event(key(KeyCode::Enter), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::Cancelled);

    let _ = modal.handle_key_event(key(KeyCode::Right), &mut controller);
    let result = modal
        .handle_key_event(key(KeyCode::Enter), &mut controller)
        .unwrap();
    assert_eq!(result, ModalResult::Confirmed);
}
