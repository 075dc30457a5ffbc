use anyhow::{Context, Result};
use clap::Parser;
use common::{Direction, GameConfig};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::info;

use terminal::app::{run_app, App};
use terminal::input::CrosstermInput;
use terminal::render::{CellDimensions, TerminalSink};

#[derive(Parser, Debug)]
#[command(name = "gridsnake", about = "Snake on a wrap-around grid, in the terminal")]
struct Args {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    cols: Option<u16>,

    /// Grid height in cells
    #[arg(long)]
    rows: Option<u16>,

    /// Milliseconds between snake moves
    #[arg(long)]
    speed_ms: Option<u64>,

    /// Starting facing as a compass letter: N, S, E or W
    #[arg(long, value_parser = parse_facing)]
    facing: Option<Direction>,

    /// Allow turning straight back onto the body. `--allow-reverse false` turns it off.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    allow_reverse: Option<bool>,

    /// Restart the round when the snake bites itself. With `false` play carries on.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    auto_restart: Option<bool>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here. Without it nothing is logged, since the game owns the screen.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                GameConfig::from_json_str(&json)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => GameConfig::default(),
        };

        self.apply_overrides(&mut config);
        if config.seed.is_none() {
            config.seed = Some(rand::random());
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut GameConfig) {
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(ms) = self.speed_ms {
            config.tick_interval_ms = ms;
        }
        if let Some(facing) = self.facing {
            config.spawn_direction = facing;
        }
        if let Some(allow) = self.allow_reverse {
            config.rules.allow_reverse = allow;
        }
        if let Some(restart) = self.auto_restart {
            config.rules.auto_restart_on_death = restart;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

fn parse_facing(s: &str) -> Result<Direction, String> {
    let mut chars = s.chars();
    match (chars.next().and_then(Direction::from_compass), chars.next()) {
        (Some(direction), None) => Ok(direction),
        _ => Err(format!("expected one of N, S, E, W, got {:?}", s)),
    }
}

/// Raw mode and the alternate screen, restored on drop so every exit path
/// leaves the terminal usable.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire(stdout: &mut Stdout) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(stdout, EnterAlternateScreen, Hide).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("Failed to create log file: {:?}", path))?;
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = args.load_config()?;
    info!(
        "Starting {}x{} game, tick {}ms, seed {:?}",
        config.cols, config.rows, config.tick_interval_ms, config.seed
    );
    let mut app = App::new(&config)?;

    let mut stdout = io::stdout();
    let guard = TerminalGuard::acquire(&mut stdout)?;
    let mut sink = TerminalSink::new(CrosstermBackend::new(stdout), CellDimensions::default())?;
    sink.terminal_mut().clear()?;

    run_app(&mut app, &mut CrosstermInput, &mut sink)?;

    let score = app.state.high_score;
    drop(sink);
    drop(guard);
    println!("Best score: {}", score);
    Ok(())
}
