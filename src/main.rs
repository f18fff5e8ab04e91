//! Fridgekeep - Entry Point
//!
//! Sets up the terminal, wires the store to the UI, and runs the
//! interaction loop.

use std::fs::OpenOptions;
use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use fridgekeep::items::Inventory;
use fridgekeep::store::Store;
use fridgekeep::ui::App;

/// How long to wait for input before redrawing; keeps the age
/// captions current without busy-looping
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Initialize logging to file (to avoid interfering with TUI)
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("fridgekeep.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Fridgekeep v{}", env!("CARGO_PKG_VERSION"));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let store = Store::default();
    log::info!("Inventory file: {}", store.path().display());
    let mut app = App::new(Inventory::new(store));

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Report any errors
    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Fridgekeep shut down cleanly");
    result
}

/// Interaction loop: reload the table, render it, react to one event.
/// The storage file is the single source of truth at the start of each
/// cycle, so every draw reads it fresh.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let now = Local::now().naive_local();
        let items = app.inventory().display_items()?;

        terminal.draw(|frame| {
            app.render(frame, &items, now);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press && app.handle_input(key)? {
                    break;
                }
            }
        }
    }

    Ok(())
}
