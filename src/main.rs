//! Terminal Swiftris runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `swiftris-term`.
//! Gravity runs on the engine's level-dependent tick interval.

use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use swiftris::core::{EngineConfig, GameSnapshot};
use swiftris::input::{handle_key_event, is_restart, should_quit};
use swiftris::session::Session;
use swiftris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use swiftris::types::Command;

#[derive(Parser, Debug)]
#[command(name = "swiftris", version, about = "Falling-block puzzle game for the terminal")]
struct Args {
    /// JSON engine config (board size, anchors, pacing, color policy)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for shape generation; defaults to the clock
    #[arg(short, long)]
    seed: Option<u32>,
}

struct Summary {
    score: u32,
    level: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    let session = Session::with_config(config.clone(), seed).context("invalid engine config")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let restored = term.exit();

    eprintln!(
        "[swiftris] seed {}, board {}x{}",
        seed, config.columns, config.rows
    );
    let summary = result?;
    restored?;
    eprintln!(
        "[swiftris] final score {}, level {}",
        summary.score, summary.level
    );
    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    EngineConfig::from_json_str(&text).with_context(|| format!("loading config {}", path.display()))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn tick_duration(session: &Session) -> Duration {
    Duration::from_millis(u64::from(session.tick_interval_ms()))
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<Summary> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    session.start();
    session.pump();
    let mut next_tick = Instant::now() + tick_duration(&session);

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        break;
                    }
                    if is_restart(key) {
                        session.start();
                        next_tick = Instant::now() + tick_duration(&session);
                    } else if let Some(command) = handle_key_event(key) {
                        session.command(command);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if Instant::now() >= next_tick {
            session.command(Command::Tick);
            next_tick = Instant::now() + tick_duration(&session);
        }

        session.pump();
    }

    let engine = session.engine();
    Ok(Summary {
        score: engine.score(),
        level: engine.level(),
    })
}
