//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and a custom framebuffer-based
//! renderer (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_memory::core::{BoardView, GameConfig, GameController};
use tui_memory::input::{handle_key_event, handle_mouse_event, should_quit, BoardCursor};
use tui_memory::logging;
use tui_memory::settings::{Settings, SettingsArgs};
use tui_memory::term::{FrameBuffer, GameView, GlyphResolver, TableModel, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "tui-memory", version, about = "Tile-matching memory game for the terminal")]
struct Cli {
    #[command(flatten)]
    settings: SettingsArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings)?;
    let config = settings.game_config()?;

    if let Some(path) = settings.log_path() {
        // Still on the normal screen: report and keep going without logs.
        if let Err(err) = logging::init_file_logging(path) {
            eprintln!("tui-memory: logging disabled: {err:#}");
        }
    }

    let assets = GlyphResolver::new().with_theme(settings.theme.clone());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, assets);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: GameConfig, assets: GlyphResolver) -> Result<()> {
    let rows = config.board.rows();
    let columns = config.board.columns();

    let mut game = GameController::new(config, assets);
    let mut table = TableModel::new(rows, columns);
    let mut cursor = BoardCursor::new(rows, columns);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    game.launch();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        table.apply_all(game.drain_commands());
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        view.render_into(&table, Some(cursor.index()), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(episode = game.episode_id(), "quit");
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(GameAction::Select) => click(&mut game, cursor.index()),
                        Some(GameAction::Restart) => {
                            game.activate_restart();
                        }
                        Some(action) => {
                            cursor.apply(action);
                        }
                        None => {}
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some((x, y)) = handle_mouse_event(mouse) {
                        if let Some(tile) = view.tile_at(rows, columns, viewport, x, y) {
                            cursor.set_index(tile);
                            click(&mut game, tile);
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}

fn click(game: &mut GameController<GlyphResolver>, tile: usize) {
    if let Err(err) = game.handle_tile_click(tile) {
        warn!(%err, tile, "tile click rejected");
    }
}
