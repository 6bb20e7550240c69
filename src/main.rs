//! DevFunds TUI - apply for development funding from the terminal
//!
//! A Ratatui-based multi-step application form that validates each step
//! and hands the finished application to a messaging agent.

mod app;
mod clipboard;
mod config;
mod handoff;
mod i18n;
mod platform;
mod state;
mod timer;
mod ui;

use anyhow::Result;
use app::App;
use clipboard::SystemClipboard;
use config::TuiConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use handoff::SystemOpener;
use ratatui::{backend::CrosstermBackend, Terminal};
use state::AppEvent;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devfunds_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = TuiConfig::load_or_default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(
        config,
        Box::new(SystemOpener::default()),
        Box::new(SystemClipboard),
        tx,
    );
    let result = run_app(&mut terminal, &mut app, &mut rx);
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key);
                }
            }
        }

        // Timer events from the handoff and testimonial tasks
        while let Ok(event) = events.try_recv() {
            app.handle_event(event);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
