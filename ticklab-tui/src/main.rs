//! TickLab TUI — a terminal candlestick simulator.
//!
//! Synthesizes a price tape, aggregates it into live candles, and lets the
//! user paper-trade against it from the keyboard. The loop is cooperative:
//! draw, advance the session clock, poll input, repeat.

mod app;
mod input;
mod persistence;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use ticklab_core::config::{ChartConfig, Tuning};
use ticklab_core::domain::Instrument;
use ticklab_core::periodicity::Periodicity;
use ticklab_core::session::SimSession;

use crate::app::App;

#[derive(Parser)]
#[command(name = "ticklab", about = "TickLab — illustrative candlestick trading simulator")]
struct Options {
    /// Symbol shown on the chart.
    #[arg(long)]
    symbol: Option<String>,

    /// Starting price before the first session generates a tape.
    #[arg(long, default_value_t = 150.0)]
    price: f64,

    /// Historical bars to synthesize on start.
    #[arg(long)]
    bars: Option<u32>,

    /// Bar duration: 1m, 5m, 30m, or 1h.
    #[arg(long, value_parser = clap::value_parser!(Periodicity))]
    periodicity: Option<Periodicity>,

    /// RNG seed for a reproducible tape. Defaults to the wall clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML tuning file overriding the random-walk ranges.
    #[arg(long)]
    tuning: Option<PathBuf>,
}

fn now_ms() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

fn main() -> Result<()> {
    let options = Options::parse();

    // Install a panic hook that restores the terminal before printing.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ticklab")
        .join("state.json");
    let persisted = persistence::load(&state_path);

    let tuning = match &options.tuning {
        Some(path) => Tuning::from_path(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    let symbol = options.symbol.clone().unwrap_or_else(|| persisted.symbol.clone());
    let instrument = Instrument::new(symbol, options.price)
        .context("starting price must not be negative")?;
    let seed = options.seed.unwrap_or_else(now_ms);
    let session = SimSession::new(instrument, tuning, seed);

    let mut app = App::new(session, ChartConfig::default(), 1);
    persistence::apply(&mut app, persisted);
    if let Some(bars) = options.bars {
        app.pending.bars_to_load = bars.clamp(app::MIN_BARS, app::MAX_BARS);
    }
    if let Some(periodicity) = options.periodicity {
        app.pending.periodicity = periodicity;
    }
    app.set_status("Press space to start the simulation");

    // Terminal setup.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save settings before exit.
    let persisted = persistence::extract(&app);
    let _ = persistence::save(&state_path, &persisted);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // 1. Render.
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Apply every due tick and rollover.
        let tally = app.session.advance(Instant::now(), now_ms());
        app.absorb(&tally);

        // 3. Poll for input (50ms timeout for ~20 FPS).
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, Instant::now(), now_ms());
            }
        }

        // 4. Check quit.
        if !app.running {
            break;
        }
    }
    Ok(())
}
