//! Terminal Lights Out runner.
//!
//! Blocking event loop: draw the board, wait for one key, apply it. The game
//! has no clock, so there is no tick timer to race against.
//!
//! Logs go to stderr (enable with `RUST_LOG`); the alternate screen owns
//! stdout.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tui_lightsout::core::{GameState, SimpleRng};
use tui_lightsout::input::{handle_key_event, should_quit};
use tui_lightsout::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_lightsout::types::{GridConfig, DEFAULT_COLS, DEFAULT_LIGHT_CHANCE, DEFAULT_ROWS};

/// Lights Out: turn every cell off. Toggling a cell flips it and its
/// orthogonal neighbors.
#[derive(Debug, Parser)]
#[command(name = "tui-lightsout", version, about)]
struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of grid columns.
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Chance in [0, 1] that a cell starts lit.
    #[arg(long, default_value_t = DEFAULT_LIGHT_CHANCE)]
    chance: f64,

    /// RNG seed; omit for a different board every run.
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GridConfig::new(args.rows, args.cols, args.chance);
    let seed = args.seed.unwrap_or_else(|| SimpleRng::from_entropy().state());

    let mut game = GameState::new(config, seed)
        .with_context(|| format!("cannot start a {}x{} game", args.rows, args.cols))?;
    info!(
        rows = args.rows,
        cols = args.cols,
        chance = args.chance,
        seed,
        "session started"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    let was_won = game.won();
                    game.apply_action(action)?;
                    debug!(?action, moves = game.moves(), "applied");
                    if !was_won && game.won() {
                        info!(moves = game.moves(), "solved");
                    }
                }
            }
            Event::Resize(_, _) => {
                // Next iteration re-renders at the new size.
            }
            _ => {}
        }
    }
}
