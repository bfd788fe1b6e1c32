//! SkyCast: a terminal weather dashboard.
//!
//! One thread owns the terminal and all UI state; acquisitions run on a
//! tokio runtime and report back over a channel. State is replaced
//! wholesale on success and left untouched on failure.

mod app;
mod error_mapping;
mod services;
mod ui;

use std::io;
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use skycast_core::{AppError, Config, ConfigError};
use skycast_weather::{Coordinates, OpenWeatherClient};

use crate::app::App;
use crate::services::WeatherServiceMessage;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Handles the main loop needs to issue requests.
struct Services {
    handle: tokio::runtime::Handle,
    tx: Sender<WeatherServiceMessage>,
    client: Arc<OpenWeatherClient>,
}

fn main() -> Result<()> {
    skycast_core::init()?;

    let config = Config::load().context("Failed to load configuration")?;
    let validation = config.validate();
    if !validation.is_valid() {
        anyhow::bail!("Configuration invalid: {}", validation.error_summary());
    }
    for warning in &validation.warnings {
        tracing::warn!("Config warning: {}", warning);
    }

    let api_key = config.api.resolved_key().ok_or(ConfigError::MissingApiKey)?;
    let client = Arc::new(OpenWeatherClient::with_base_url(
        &api_key,
        &config.api.base_url,
    )?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let (tx, rx) = std::sync::mpsc::channel();
    let services = Services {
        handle: runtime.handle().clone(),
        tx,
        client,
    };

    let mut app = App::new();

    // Both startup fetches fire unconditionally and independently: one
    // for the configured default coordinate, one for wherever
    // geolocation says we are. The sequence counter arbitrates
    // whichever resolves last.
    let default_coords = Coordinates {
        latitude: config.location.default_latitude,
        longitude: config.location.default_longitude,
    };
    app.loading = true;
    services::request_fetch(
        &services.handle,
        &services.tx,
        services.client.clone(),
        default_coords,
        app.next_seq(),
    );
    services::request_locate_and_fetch(
        &services.handle,
        &services.tx,
        services.client.clone(),
        app.next_seq(),
    );

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &rx, &services);
    restore_terminal(&mut terminal)?;

    result
}

fn run(
    terminal: &mut Tui,
    app: &mut App,
    rx: &Receiver<WeatherServiceMessage>,
    services: &Services,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(250)).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key, services);
                }
            }
        }

        while let Ok(message) = rx.try_recv() {
            handle_message(app, message);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent, services: &Services) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The popup is modal: it swallows input until dismissed.
    if app.notification.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notification();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => {
            let query = app.take_input();
            app.loading = true;
            services::request_search(
                &services.handle,
                &services.tx,
                services.client.clone(),
                query,
                app.next_seq(),
            );
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_message(app: &mut App, message: WeatherServiceMessage) {
    match message {
        WeatherServiceMessage::FetchDone { seq, result } => match result {
            Ok(data) => app.apply_weather(seq, data),
            Err(e) => {
                tracing::warn!("weather service error: {}", e);
                app.notify(AppError::from(e).user_message());
            }
        },
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
