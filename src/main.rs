mod app;
mod domain;
mod input;
mod notifications;
mod page;
mod persistence;
mod ticker;
mod ui;

use anyhow::{Context, Result};
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::Route;
use persistence::{
    config_file, ensure_data_dir, init_local_dir, load_config, log_file, save_config, AppConfig,
    FileStore, KeyValueStore, MemoryStore,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "todorious")]
#[command(about = "A to-do list that locks itself while the countdown runs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page to open: "/" for the to-do list, "/checkups" for the checklist
    #[arg(short, long, default_value = "/")]
    route: String,

    /// Keep lists in memory only; nothing is written to disk
    #[arg(long)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .todorious directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let cwd = std::env::current_dir()?;
            let data_dir = init_local_dir(&cwd)?;
            save_config(config_file(&data_dir), &AppConfig::default())?;
            println!("Initialized todorious directory: {}", data_dir.display());
            println!();
            println!("Run 'todorious' here to use the lists stored in it.");
            Ok(())
        }
        None => run_tui(&cli.route, cli.ephemeral),
    }
}

fn run_tui(route: &str, ephemeral: bool) -> Result<()> {
    let data_dir = ensure_data_dir()?;

    let config = match load_config(config_file(&data_dir)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {:#}. Using default settings.", e);
            AppConfig::default()
        }
    };

    // Logs go to a file; stdout belongs to the terminal UI
    let log_path = log_file(&data_dir);
    let log_target = File::create(&log_path)
        .with_context(|| format!("Failed to create log file: {}", log_path.display()))?;
    WriteLogger::init(config.level_filter(), simplelog::Config::default(), log_target)?;
    log::info!("Using data directory {}", data_dir.display());

    let store: Box<dyn KeyValueStore> = if ephemeral {
        log::info!("Ephemeral session, lists are not persisted");
        Box::new(MemoryStore::default())
    } else {
        Box::new(FileStore::new(data_dir))
    };

    let mut app = AppState::new(config, store, Route::from_path(route));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Release the countdown and save on exit
    app.shutdown();

    if let Err(err) = result {
        log::error!("Exited with error: {:#}", err);
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration(app.config.tick_rate_ms);

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        // Drive the countdown
        app.tick(Instant::now());

        // Autosave pending changes
        app.save();
    }
}
