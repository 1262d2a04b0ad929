//! User Interface module
//!
//! Terminal UI for the demo workbench using ratatui: an item list, a status
//! line, and the confirmation prompt modal rendered on top whenever a prompt
//! cycle is awaiting the user.

pub mod modals;
pub mod theme;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tracing::debug;

use crate::{
    app::actions::Action,
    app::state::{AppState, NotificationLevel},
    config::UIConfig,
    error::AppResult,
    prompt::PromptController,
};
use modals::{ModalResult, PromptModal};
use theme::Theme;

/// Main UI renderer
pub struct UI {
    /// Current theme
    theme: Theme,
    /// UI configuration
    config: UIConfig,
    /// The confirmation prompt modal
    modal: PromptModal,
}

impl UI {
    /// Create a new UI instance
    pub fn new(config: &UIConfig) -> AppResult<Self> {
        debug!("Initializing UI with theme: {}", config.theme);

        let theme = Theme::load(&config.theme)?;

        Ok(Self {
            theme,
            config: config.clone(),
            modal: PromptModal::new(),
        })
    }

    /// Render the entire UI
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let size = frame.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Item list
                Constraint::Length(3), // Status line
            ])
            .split(size);

        self.render_header(frame, chunks[0]);
        self.render_items(frame, chunks[1], state);
        self.render_status(frame, chunks[2], state);

        // Prompt modal sits on top of everything while a cycle is open.
        if state.prompt.is_open() {
            self.modal.render(frame, size, &self.theme, state.prompt.state());
        }
    }

    /// Forward a key event to the prompt modal.
    ///
    /// Only meaningful while the modal is open; the dispatch loop interprets
    /// the returned [`ModalResult`].
    pub fn prompt_modal_key(
        &mut self,
        key: KeyEvent,
        controller: &mut PromptController<Action>,
    ) -> AppResult<ModalResult> {
        self.modal.handle_key_event(key, controller)
    }

    fn render_header(&self, frame: &mut Frame, area: ratatui::layout::Rect) {
        let header = Paragraph::new(Line::from(" Promptable Workbench "))
            .style(
                Style::default()
                    .fg(self.theme.colors.primary)
                    .add_modifier(ratatui::style::Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_items(&self, frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
        let items: Vec<ListItem> = state
            .items
            .iter()
            .map(|item| ListItem::new(format!("  {}", item.name)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Items")
                    .border_style(self.theme.border_style()),
            )
            .style(self.theme.text_style())
            .highlight_style(self.theme.highlight_style());

        let mut list_state = ListState::default();
        if !state.items.is_empty() {
            list_state.select(Some(state.selected.min(state.items.len() - 1)));
        }

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_status(&self, frame: &mut Frame, area: ratatui::layout::Rect, state: &AppState) {
        let (text, style) = match state.last_notification() {
            Some(note) => {
                let style = match note.level {
                    NotificationLevel::Error => self.theme.error_style(),
                    NotificationLevel::Info => self.theme.text_style(),
                };
                (note.message.clone(), style)
            }
            None => (
                "j/k: navigate | d: delete | p: purge all | q: quit".to_string(),
                self.theme.muted_style(),
            ),
        };

        let status = Paragraph::new(text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(status, area);
    }

    /// Tick rate the event loop should poll at
    pub fn tick_rate_ms(&self) -> u64 {
        self.config.tick_rate_ms
    }
}
