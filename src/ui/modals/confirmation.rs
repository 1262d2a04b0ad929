//! Confirmation prompt modal
//!
//! Renders [`PromptState`] as a centered modal dialog: question heading,
//! optional body text, the typed-word input when a required word is
//! configured, and the cancel/confirm buttons. The confirm affordance stays
//! visibly disabled until the required word matches, and Enter only fires
//! while it is enabled.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    error::AppResult,
    prompt::{PromptAction, PromptController, PromptState},
    ui::theme::Theme,
};

use super::ModalResult;

/// Presentation adapter for the confirmation prompt.
///
/// Holds only view concerns (button focus); the prompt content lives in the
/// controller's state.
pub struct PromptModal {
    selected_button: usize, // 0 = cancel, 1 = confirm
}

impl PromptModal {
    pub fn new() -> Self {
        Self { selected_button: 0 }
    }

    /// Render the modal from the given prompt state.
    ///
    /// The caller is expected to skip this entirely while the controller
    /// reports the modal closed.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, state: &PromptState) {
        let modal_area = centered_rect(50, 40, area);

        frame.render_widget(Clear, modal_area);

        let has_input = state.required_word.is_some();
        let mut constraints = vec![
            Constraint::Length(3), // Question heading
            Constraint::Min(2),    // Body text
        ];
        if has_input {
            constraints.push(Constraint::Length(3)); // Typed-word input
        }
        constraints.push(Constraint::Length(3)); // Buttons

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(modal_area);

        // Question heading
        let title_block = Block::default()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .title(state.question.as_str())
            .border_style(Style::default().fg(theme.colors.primary));
        frame.render_widget(title_block, chunks[0]);

        // Body text
        let body = Paragraph::new(state.body.clone().unwrap_or_default())
            .block(Block::default().borders(Borders::LEFT | Borders::RIGHT))
            .style(theme.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(body, chunks[1]);

        // Typed-word input
        if let Some(word) = &state.required_word {
            let typed = state.typed_confirmation.clone().unwrap_or_default();
            let (input_text, input_style) = if typed.is_empty() {
                (
                    format!("Type `{}` to continue...", word),
                    theme.muted_style(),
                )
            } else {
                (typed, theme.text_style())
            };

            let input_field = Paragraph::new(input_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(theme.colors.accent)),
                )
                .style(input_style);
            frame.render_widget(input_field, chunks[2]);
        }

        // Buttons
        let button_area = chunks[chunks.len() - 1];
        let button_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(button_area);

        let cancel_style = if self.selected_button == 0 {
            Style::default()
                .bg(theme.colors.muted)
                .fg(theme.colors.background)
        } else {
            theme.text_style()
        };
        let cancel_button = Paragraph::new(Line::from(vec![Span::styled(
            state.cancel_label.as_str(),
            cancel_style,
        )]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(cancel_button, button_layout[0]);

        let confirm_style = if !state.confirm_allowed() {
            // Disabled until the required word is typed
            theme.muted_style().add_modifier(Modifier::DIM)
        } else if self.selected_button == 1 {
            Style::default()
                .bg(theme.colors.danger)
                .fg(theme.colors.background)
        } else {
            Style::default().fg(theme.colors.danger)
        };
        let confirm_button = Paragraph::new(Line::from(vec![Span::styled(
            state.confirm_label.as_str(),
            confirm_style,
        )]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        frame.render_widget(confirm_button, button_layout[1]);
    }

    /// Handle a key event while the modal is open.
    ///
    /// Typed characters feed the required-word input when one is configured;
    /// otherwise the y/n shortcuts and left/right button focus from the usual
    /// modal key map apply. Enter acts as confirm only while the confirm
    /// affordance is enabled.
    pub fn handle_key_event<A: PromptAction>(
        &mut self,
        key: KeyEvent,
        controller: &mut PromptController<A>,
    ) -> AppResult<ModalResult> {
        if !controller.is_open() {
            return Ok(ModalResult::None);
        }

        let has_input = controller.state().required_word.is_some();

        match key.code {
            KeyCode::Esc => {
                self.selected_button = 0;
                return Ok(ModalResult::Cancelled);
            }
            KeyCode::Enter => {
                if self.selected_button == 0 && !has_input {
                    self.selected_button = 0;
                    return Ok(ModalResult::Cancelled);
                }
                if controller.confirm_allowed() {
                    self.selected_button = 0;
                    return Ok(ModalResult::Confirmed);
                }
                return Ok(ModalResult::None);
            }
            _ => {}
        }

        if has_input {
            // All plain typing belongs to the confirmation input.
            match key.code {
                KeyCode::Char(c) => {
                    let mut typed = controller
                        .state()
                        .typed_confirmation
                        .clone()
                        .unwrap_or_default();
                    typed.push(c);
                    controller.set_typed_confirmation(Some(typed));
                }
                KeyCode::Backspace => {
                    let mut typed = controller
                        .state()
                        .typed_confirmation
                        .clone()
                        .unwrap_or_default();
                    typed.pop();
                    let typed = if typed.is_empty() { None } else { Some(typed) };
                    controller.set_typed_confirmation(typed);
                }
                _ => {}
            }
            // Keep focus on confirm so Enter fires as soon as the word matches.
            self.selected_button = 1;
            return Ok(ModalResult::None);
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_button = 0;
                Ok(ModalResult::None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected_button = 1;
                Ok(ModalResult::None)
            }
            KeyCode::Tab => {
                self.selected_button = if self.selected_button == 0 { 1 } else { 0 };
                Ok(ModalResult::None)
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.selected_button = 0;
                Ok(ModalResult::Confirmed)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.selected_button = 0;
                Ok(ModalResult::Cancelled)
            }
            _ => Ok(ModalResult::None),
        }
    }
}

impl Default for PromptModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Calculate centered rectangle for the modal
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
