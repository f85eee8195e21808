use std::io;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;

use calorie_search::app::App;
use calorie_search::cli::{Cli, run_command};
use calorie_search::config::Config;
use calorie_search::error::AppError;
use calorie_search::provider::Provider;
use calorie_search::session::Session;
use calorie_search::suggest::{SuggestionController, spawn_worker};

/// How long to wait for a key before advancing timers
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    calorie_search::logging::init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Some(command) = &cli.command {
        run_command(command, &config, &mut io::stdout().lock())?;
        return Ok(());
    }

    let session = match &cli.user {
        Some(user) => Session::signed_in(user.clone()),
        None => Session::signed_out(),
    };
    let app = build_app(&config, session)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

/// Wire the controller to a lookup worker built from config
fn build_app(config: &Config, session: Session) -> Result<App, AppError> {
    let provider = Provider::from_config(&config.provider)?;

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(provider, request_rx, response_tx)
        .map_err(|e| AppError::Worker(e.to_string()))?;

    let mut controller = SuggestionController::from_config(&config.search);
    controller.set_channels(request_tx, response_rx);
    log::debug!("Lookups served by {:?} provider", config.provider.kind);

    Ok(App::new(controller, session))
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key_event(key);
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
