//! Application core module
//!
//! Owns the terminal lifecycle and the single dispatch point every business
//! action result flows through. This is where the host integration contracts
//! live: confirming the modal replays the captured action via
//! [`confirm_pending`], and the halting signal raised by a freshly opened
//! prompt is absorbed before it could surface as a fault.

pub mod actions;
pub mod events;
pub mod state;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::AppResult,
    prompt::confirm_pending,
    ui::{modals::ModalResult, UI},
};
use events::{AppEvent, EventHandler};
use state::{AppState, LifecyclePhase};

/// Main application struct
pub struct App {
    /// Application state
    state: AppState,
    /// Event handler for async operations
    event_handler: EventHandler,
    /// UI renderer
    ui: UI,
    /// Application configuration
    config: Config,
}

impl App {
    /// Create a new application instance
    pub async fn new() -> AppResult<Self> {
        info!("Initializing Promptable workbench");

        let config = Config::load().await?;
        let state = AppState::new(config.prompt.clone());
        let event_handler = EventHandler::new();
        let ui = UI::new(&config.ui)?;

        Ok(Self {
            state,
            event_handler,
            ui,
            config,
        })
    }

    /// Run the main application loop
    pub async fn run(mut self) -> AppResult<()> {
        info!("Starting application main loop");

        self.setup_terminal()?;
        let result = self.main_loop().await;
        self.cleanup_terminal()?;

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal(&self) -> AppResult<()> {
        enable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(())
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(&self) -> AppResult<()> {
        disable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        } else {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    /// Main application event loop
    async fn main_loop(&mut self) -> AppResult<()> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;
        let tick_rate = Duration::from_millis(self.ui.tick_rate_ms());

        loop {
            terminal.draw(|f| {
                self.ui.render(f, &self.state);
            })?;

            self.handle_events(tick_rate)?;
            self.process_app_events();

            if self.state.should_quit() {
                info!("Application quit requested");
                break;
            }
        }

        Ok(())
    }

    /// Poll and handle input events
    fn handle_events(&mut self, tick_rate: Duration) -> AppResult<()> {
        if !event::poll(tick_rate)? {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
            }
            _ => {}
        }

        Ok(())
    }

    /// Route a key event either to the open prompt modal or to the workbench.
    fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<()> {
        // Ctrl+C always bails out, prompt or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.lifecycle = LifecyclePhase::Quitting;
            return Ok(());
        }

        if self.state.prompt.is_open() {
            match self.ui.prompt_modal_key(key, &mut self.state.prompt)? {
                ModalResult::Confirmed => self.confirm_prompt()?,
                ModalResult::Cancelled => self.state.prompt.dismiss(),
                ModalResult::None => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next(),
            KeyCode::Char('d') | KeyCode::Delete => {
                let result = self.state.delete_selected();
                self.state.absorb_action_result(result);
            }
            KeyCode::Char('p') => {
                let result = self.state.purge_all();
                self.state.absorb_action_result(result);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                let result = self.state.request_quit();
                self.state.absorb_action_result(result);
            }
            _ => {}
        }

        Ok(())
    }

    /// Replay the pending action after the user confirmed the prompt.
    fn confirm_prompt(&mut self) -> AppResult<()> {
        let name = self.state.prompt.pending_name();
        let result = confirm_pending(&mut self.state);

        if result.is_ok() {
            if let Some(name) = name {
                self.event_handler
                    .send_event(AppEvent::ActionCompleted { name })?;
            }
        }

        // A replay may itself halt again (nested prompt cycle) or fail; the
        // interception hook decides which results reach the user.
        self.state.absorb_action_result(result);
        Ok(())
    }

    /// Drain the async event channel
    fn process_app_events(&mut self) {
        while let Some(event) = self.event_handler.try_receive_event() {
            match event {
                AppEvent::ActionCompleted { name } => {
                    debug!(action = name, "confirmed action completed");
                }
                AppEvent::Error(error) => {
                    self.state.add_error(error);
                }
                AppEvent::Shutdown => {
                    self.state.lifecycle = LifecyclePhase::Quitting;
                }
            }
        }
    }
}
