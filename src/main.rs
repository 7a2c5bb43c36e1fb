//! Terminal falling-block runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from the term
//! crate. The loop runs at a fixed frame rate; every `--gravity-frames` frames
//! the engine takes one gravity step.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, warn};

use tui_blockfall::core::{EngineConfig, GameEngine, GameSnapshot, GravityClock};
use tui_blockfall::input::{handle_key_event, is_actionable, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{FRAMES_PER_SECOND, GRAVITY_FRAMES, GRID_HEIGHT, GRID_WIDTH};

/// tui-blockfall - falling blocks in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = GRID_WIDTH)]
    width: u16,

    /// Grid height in cells
    #[arg(long, default_value_t = GRID_HEIGHT)]
    height: u16,

    /// Seed for the piece sequence (defaults to the current time)
    #[arg(long)]
    seed: Option<u32>,

    /// Frames per second
    #[arg(long, default_value_t = FRAMES_PER_SECOND, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Frames between gravity steps
    #[arg(long, default_value_t = GRAVITY_FRAMES, value_parser = clap::value_parser!(u32).range(1..))]
    gravity_frames: u32,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the final score summary as JSON on exit
    #[arg(long)]
    summary_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = EngineConfig::new(args.width, args.height, seed);
    let mut engine = GameEngine::new(config)?;
    info!(width = args.width, height = args.height, seed, "starting game");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut engine, &args);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result?;

    let summary = engine.summary();
    info!(
        score = summary.score,
        pieces = summary.pieces_spawned,
        game_over = summary.game_over,
        "session ended"
    );
    if args.summary_json {
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    // stdout is the game screen, so logs only ever go to the file.
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, engine: &mut GameEngine, args: &Args) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut clock = GravityClock::new(args.gravity_frames);

    let frame = Duration::from_millis(1000 / args.fps as u64);
    let mut next_frame = Instant::now();

    loop {
        let now = Instant::now();
        if now >= next_frame {
            if clock.advance() && !engine.is_game_over() {
                engine.tick();
            }
            draw(term, &view, engine, &mut snap, &mut fb)?;
            next_frame += frame;
            // Don't try to catch up after a long stall.
            if next_frame < now {
                next_frame = now + frame;
            }
        }

        let timeout = next_frame.saturating_duration_since(Instant::now());
        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if is_actionable(&key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if engine.apply_action(action) {
                        draw(term, &view, engine, &mut snap, &mut fb)?;
                    }
                }
            }
            Event::Resize(..) => {
                term.invalidate();
                draw(term, &view, engine, &mut snap, &mut fb)?;
            }
            _ => {}
        }
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    engine: &GameEngine,
    snap: &mut GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    engine.snapshot_into(snap);
    view.render_into(snap, Viewport::new(w, h), fb);
    term.draw(fb)
}
