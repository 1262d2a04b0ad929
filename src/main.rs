use promptable::{
    app::state::AppState,
    config::Config,
    error::AppResult,
    initialize_logging,
    prompt::{confirm_pending, PromptHost},
    App,
};
use std::{env, process};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    let args: Vec<String> = env::args().collect();

    if args.contains(&"--version".to_string()) || args.contains(&"-V".to_string()) {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.contains(&"--help".to_string()) || args.contains(&"-h".to_string()) {
        print_help();
        process::exit(0);
    }

    initialize_logging()
        .map_err(|e| promptable::error::AppError::application(e.to_string()))?;

    let demo_mode = args.contains(&"--demo".to_string())
        || env::var("PROMPTABLE_DEMO_MODE").is_ok()
        || env::var("TERM").unwrap_or_default().is_empty();

    if demo_mode {
        info!("Promptable demo mode starting");
        run_demo_mode().await
    } else {
        info!("Promptable workbench starting");
        run_full_tui_mode().await
    }
}

/// Non-interactive walk through a full prompt cycle, for terminals that
/// cannot run the TUI.
async fn run_demo_mode() -> AppResult<()> {
    let config = Config::load().await?;
    info!("Configuration loaded: {}", config.app.name);

    let mut state = AppState::new(config.prompt.clone());
    info!("Workbench seeded with {} items", state.items.len());

    // First entry: the action halts and the prompt opens.
    let result = state.delete_item(2);
    state.absorb_action_result(result);
    info!(
        question = %state.prompt.state().question,
        pending = ?state.prompt.pending_name(),
        "prompt open, action halted"
    );

    // The user confirms; the captured action is replayed to completion.
    let result = confirm_pending(&mut state);
    state.absorb_action_result(result);
    info!(items = state.items.len(), "delete replayed after confirmation");

    // A purge requires typing the confirmation word first.
    let result = state.purge_all();
    state.absorb_action_result(result);
    info!(
        allowed = state.prompt.confirm_allowed(),
        "purge prompt open, confirm disabled until the word is typed"
    );

    state.prompt_mut().set_typed_confirmation(Some("PURGE".to_string()));
    info!(
        allowed = state.prompt.confirm_allowed(),
        "confirmation word typed"
    );

    let result = confirm_pending(&mut state);
    state.absorb_action_result(result);
    info!(items = state.items.len(), "purge replayed after confirmation");

    info!("Demo completed");
    Ok(())
}

async fn run_full_tui_mode() -> AppResult<()> {
    match App::new().await {
        Ok(app) => match app.run().await {
            Ok(_) => {
                info!("Promptable workbench terminated gracefully");
                Ok(())
            }
            Err(e) => {
                warn!("TUI mode failed: {}. Falling back to demo mode.", e);
                run_demo_mode().await
            }
        },
        Err(e) => {
            warn!("Failed to initialize TUI: {}. Running in demo mode.", e);
            run_demo_mode().await
        }
    }
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS]", env!("CARGO_PKG_NAME"));
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message and exit");
    println!("    -V, --version    Print version information and exit");
    println!("        --demo       Run in demo mode (non-interactive)");
    println!();
    println!("ENVIRONMENT:");
    println!("    PROMPTABLE_DEMO_MODE   Set to run in demo mode");
    println!("    RUST_LOG               Set logging level (debug, info, warn, error)");
}
