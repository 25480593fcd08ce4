use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use rusqlite::Connection;
use std::{error::Error, fs::File, io, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use todo_tui::app;

// Start the app.
// Terminal handling heavily based on:
// https://github.com/ratatui-org/ratatui/blob/main/examples/list.rs
pub fn main() -> Result<(), Box<dyn Error>> {
    // Log to a file so the alternate screen stays clean
    let log_file = File::create("todo.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Open the durable store holding the task collection
    let storage = app::storage::Storage {
        db_con: Connection::open("todos.db")?,
    };
    storage.create_table_if_not_exists();

    // Create an app with 250 ms tick
    let tick_rate = Duration::from_millis(250);
    let app = app::ui::App::new(&storage);
    let res = app::ui::run_app(&mut terminal, app, tick_rate);

    // Restore previous terminal state after exit
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
