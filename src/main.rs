//! DarkFlix - dark-themed terminal client for a curated movie and series
//! catalog
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! darkflix
//!
//! # CLI mode (for automation)
//! darkflix catalog --json
//! darkflix resolve 414906
//! darkflix favorites --toggle 1396
//! ```

// Allow dead code for library conveniences compiled into the binary tree
#![allow(dead_code)]

mod api;
mod app;
mod cache;
mod catalog;
mod cli;
mod commands;
mod config;
mod models;
mod player;
mod resolver;
mod router;
mod selector;
mod store;
mod tracking;
mod ui;

use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::cli::Cli;
use crate::config::Config;
use crate::store::{JsonFileStore, MemoryStore, SharedStore};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        let exit_code = commands::run(cli).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: launch interactive interface
        let config = Config::load_from(cli.config.as_deref());
        run_tui(config).await
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn open_store() -> SharedStore {
    match JsonFileStore::open_default() {
        Ok(store) => Arc::new(store),
        Err(e) => {
            log::warn!("falling back to in-memory store: {}", e);
            MemoryStore::shared()
        }
    }
}

/// Run interactive TUI
async fn run_tui(config: Config) -> Result<()> {
    let mut app = App::new(&config, open_store());
    app.start("/").await;

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop - handles input, updates state, renders UI
async fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    while app.running {
        // Render current state
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with timeout so playback keeps advancing
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = app.handle_key(key) {
                        app.apply(action).await;
                    }
                }
            }
        }

        // Advance simulated playback by the real elapsed time
        let now = Instant::now();
        app.tick(now.duration_since(last_tick).as_secs_f64());
        last_tick = now;
    }

    Ok(())
}
