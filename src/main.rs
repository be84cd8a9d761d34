use sprig::{actions, app::AppState, event, io as store_io, ui};

use anyhow::Result;
use clap::Parser;
use sprig::config::{load_config, CliArgs};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let cfg = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{cfg:#?}");
        return Ok(());
    }

    let mut app = AppState::new(cfg);

    // Load a snapshot if one was named on the command line or in the config.
    let filename = args
        .filename
        .clone()
        .or_else(|| app.config.default_file.clone().map(PathBuf::from));
    if let Some(ref path) = filename {
        if path.exists() {
            app.store = store_io::load_store(path)?;
            app.relayout();
        }
        app.filename = Some(path.clone());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Some(action) = event::handle_events(app)? {
            app.clear_message();
            actions::execute_action(action, app)?;
        }

        if app.config.auto_save && app.filename.is_some() && app.is_dirty {
            let due = app
                .last_modify_time
                .map(|t| {
                    Instant::now().duration_since(t)
                        >= Duration::from_secs(app.config.auto_save_interval)
                })
                .unwrap_or(false);
            if due {
                actions::save(app)?;
            }
        }
    }

    Ok(())
}
