//! A terminal slide deck: "Illuminating Our Waters".
//!
//! Run the binary to present the deck full-screen.
//! Run with `--outline` to print the slides as plain text instead.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};

const WINDOW_TITLE: &str = "Illuminating Our Waters";

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Bioluminescence pitch deck for the terminal")]
struct Cli {
    /// Leave out the interactive scoring slide.
    #[arg(long = "no-demo")]
    no_demo: bool,

    /// Print the deck as plain text and exit.
    #[arg(long)]
    outline: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is opt-in: the UI owns stderr, so only attach a subscriber
    // when RUST_LOG asks for one.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr) // never pollute stdout
            .init();
    }

    let cli = Cli::parse();
    let mut user_config = config::AppConfig::load();
    if cli.no_demo {
        user_config.include_demo = false;
    }

    if cli.write_config {
        user_config.save()?;
        println!("{}", config::config_path().display());
        return Ok(());
    }

    let deck = core::content::pitch_deck(user_config.include_demo)?;
    tracing::debug!(slides = deck.len(), demo = user_config.include_demo, "deck built");

    // ── outline mode ──────────────────────────────────────────
    if cli.outline {
        print!("{}", core::content::outline(&deck));
        return Ok(());
    }

    let mut state = AppState::new(deck, user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(
        stderr_handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let mut events = spawn_event_reader(Duration::from_millis(100));

    // ── event loop ────────────────────────────────────────────
    let result: Result<()> = async {
        loop {
            terminal.draw(|frame| {
                state.terminal_area = frame.area();
                ui::draw(frame, &state);
            })?;

            let Some(event) = events.recv().await else {
                break;
            };
            match event {
                AppEvent::Key(k) => handler::handle_key(&mut state, k),
                AppEvent::Mouse(m) => handler::handle_mouse(&mut state, m),
                AppEvent::Resize => {}
            }

            if state.should_quit {
                break;
            }
        }
        Ok(())
    }
    .await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
