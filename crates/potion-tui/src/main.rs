mod app;
mod render;
mod theme;

use app::App;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use potion_core::{GameConfig, Session};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use theme::Theme;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeName {
    Dark,
    Light,
}

/// Guess the hidden potion formula, one level at a time.
#[derive(Debug, Parser)]
#[command(name = "potions", version, about)]
struct Args {
    /// Seed for reproducible formulas
    #[arg(long)]
    seed: Option<u64>,

    /// Level to start on
    #[arg(long, default_value_t = 1)]
    level: u32,

    #[arg(long, value_enum, default_value_t = ThemeName::Dark)]
    theme: ThemeName,

    /// Write debug logs here (the terminal itself is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .with_env_var("POTION_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(ref path) = args.log_file {
        init_logging(path)?;
    }

    let config = GameConfig::default();
    let session = match args.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };
    let mut session = session.map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    if args.level != 1 {
        session
            .generate_level(args.level)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    }

    let theme = match args.theme {
        ThemeName::Dark => Theme::dark(),
        ThemeName::Light => Theme::light(),
    };
    let mut app = App::new(session, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }
    println!(
        "Final score: {}  ({:.0}% of levels brewed)",
        app.session.score(),
        app.session.progress()
    );

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, app)?;

        // Handle input with timeout for the check delay
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
