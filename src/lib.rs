//! Promptable - halt-and-resume confirmation prompts for terminal UIs
//!
//! A business action can request user confirmation mid-execution, halt,
//! render a modal dialog, and be replayed with the exact same captured action
//! once the user confirms.
//!
//! # Architecture
//!
//! - **`prompt`**: the controller core, independent of any rendering.
//!   [`PromptController`](prompt::PromptController) owns the prompt state,
//!   the pending action and the `Idle`/`AwaitingConfirmation`/`Resuming`
//!   phase machine.
//! - **`ui`**: the ratatui presentation adapter rendering the prompt state
//!   as a modal dialog.
//! - **`app`**: a demo host wiring the two together, including the
//!   fault-interception hook that absorbs the halting signal at the dispatch
//!   point.

pub mod app;
pub mod config;
pub mod error;
pub mod prompt;
pub mod ui;

pub use app::App;
pub use error::{AppError, AppResult};
pub use prompt::{
    confirm_pending, PromptAction, PromptController, PromptDefaults, PromptHost, PromptRequest,
};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system with structured logging
///
/// Log levels are configurable via the RUST_LOG environment variable.
pub fn initialize_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promptable=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
