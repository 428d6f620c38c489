//! End-to-end game flow through the facade crate

use tui_memory::core::{
    AssetResolver, Board, BoardConfig, BoardView, DisplayCommand, Effect, GameConfig,
    GameController, GameError, GameEvent, GameState, Phase, Status,
};
use tui_memory::term::{GlyphResolver, TableModel};
use tui_memory::types::{FaceId, TileFace, TICK_MS};

/// State on a fixed board, already past the start delay.
fn ready_state(faces: &[&str]) -> GameState {
    let state = GameState::new(Board::from_faces(faces.iter().copied()));
    let transition = state.hide_timer_fired();
    assert!(transition.state.ready());
    transition.state
}

#[test]
fn test_abab_scenario() {
    let state = ready_state(&["A", "B", "A", "B"]);

    // Click 0 then 1: mismatch.
    let state = state.click(0).unwrap().state;
    assert_eq!(state.phase(), Phase::OneSelected);
    let t = state.click(1).unwrap();
    assert!(t.effects.contains(&Effect::ErrorsChanged(1)));
    assert!(t.effects.contains(&Effect::ArmHideTimer));
    let state = t.state;
    assert_eq!(state.errors(), 1);
    assert_eq!(state.score(), 0);
    assert!(!state.ready());

    // Hide timer: both face-down again, ready.
    let t = state.step(GameEvent::HideTimerFired).unwrap();
    assert_eq!(t.effects.as_slice(), &[Effect::Hide(0), Effect::Hide(1), Effect::Ready]);
    let state = t.state;
    assert_eq!(state.face(0), Some(&TileFace::FaceDown));
    assert_eq!(state.face(1), Some(&TileFace::FaceDown));
    assert!(state.ready());

    // Click 0 then 2: match.
    let state = state.click(0).unwrap().state;
    let state = state.step(GameEvent::TileClicked(2)).unwrap().state;
    assert_eq!(state.score(), 1);
    assert_eq!(state.errors(), 1);
    assert!(state.face(0).unwrap().is_face_up());
    assert!(state.face(2).unwrap().is_face_up());
    assert_eq!(state.phase(), Phase::Idle);
}

#[test]
fn test_clicks_while_locked_change_nothing() {
    let state = GameState::new(Board::from_faces(["A", "B", "A", "B"]));
    for tile in 0..4 {
        let t = state.click(tile).unwrap();
        assert!(t.is_noop());
        assert_eq!(t.state, state);
    }
}

#[test]
fn test_same_tile_twice_is_ignored() {
    let state = ready_state(&["A", "B", "A", "B"]).click(3).unwrap().state;
    let t = state.click(3).unwrap();
    assert!(t.is_noop());
    assert_eq!(t.state.selection().len(), 1);
}

#[test]
fn test_out_of_range_is_an_error() {
    let state = ready_state(&["A", "A"]);
    assert_eq!(
        state.click(2).unwrap_err(),
        GameError::TileOutOfRange { index: 2, len: 2 }
    );
}

fn small_config(seed: u64) -> GameConfig {
    let board = BoardConfig::new(
        2,
        3,
        ["Fire", "Water", "Grass"].map(FaceId::new).to_vec(),
    )
    .unwrap();
    GameConfig::new(board).with_seed(seed)
}

fn run_until_ready<A: AssetResolver>(game: &mut GameController<A>, table: &mut impl BoardView<Image = A::Image>) {
    for _ in 0..1000 {
        if game.state().ready() {
            break;
        }
        game.tick(TICK_MS);
        table.apply_all(game.drain_commands());
    }
    assert!(game.state().ready());
}

#[test]
fn test_full_game_through_the_terminal_model() {
    let mut game = GameController::new(small_config(11), GlyphResolver::new());
    let mut table = TableModel::new(2, 3);
    table.apply_all(game.drain_commands());

    game.launch();
    table.apply_all(game.drain_commands());
    assert!(table.tiles().iter().all(|t| t.image.is_front()));
    assert_eq!(table.status(), Some(Status::Memorize));

    run_until_ready(&mut game, &mut table);
    assert!(table.tiles().iter().all(|t| t.image.is_back()));
    assert!(table.restart_enabled());
    assert_eq!(table.status(), Some(Status::FindPairs));

    // Play perfectly using the dealt board.
    let board = game.state().board().clone();
    for first in 0..board.len() {
        if game.state().is_won(first) {
            continue;
        }
        let twin = (first + 1..board.len())
            .find(|&i| board.face(i) == board.face(first))
            .unwrap();
        game.handle_tile_click(first).unwrap();
        game.handle_tile_click(twin).unwrap();
        table.apply_all(game.drain_commands());
    }

    assert_eq!(table.score(), 3);
    assert_eq!(table.errors(), 0);
    assert!(table.tiles().iter().all(|t| !t.enabled && t.image.is_front()));
    assert_eq!(table.status(), Some(Status::Finished { errors: 0 }));
}

#[test]
fn test_restart_mid_game_keeps_multiset_and_clears_display() {
    let mut game = GameController::new(small_config(5), GlyphResolver::new());
    let mut table = TableModel::new(2, 3);
    game.launch();
    run_until_ready(&mut game, &mut table);

    let before = game.state().board().face_counts();
    let board = game.state().board().clone();
    let twin = (1..board.len()).find(|&i| board.face(i) == board.face(0)).unwrap();
    game.handle_tile_click(0).unwrap();
    game.handle_tile_click(twin).unwrap();
    table.apply_all(game.drain_commands());
    assert_eq!(table.score(), 1);

    assert!(game.activate_restart());
    table.apply_all(game.drain_commands());

    assert_eq!(game.state().board().face_counts(), before);
    assert_eq!((table.score(), table.errors()), (0, 0));
    assert!(table.tiles().iter().all(|t| t.enabled && t.image.is_back()));
    assert_eq!(table.status(), Some(Status::GetReady));
    assert!(!game.state().ready());

    run_until_ready(&mut game, &mut table);
    assert_eq!(game.snapshot().episode_id, 1);
}

#[test]
fn test_same_seed_deals_same_game() {
    let a = GameController::new(small_config(99), GlyphResolver::new());
    let b = GameController::new(small_config(99), GlyphResolver::new());
    assert_eq!(a.state().board(), b.state().board());
    assert_eq!(a.seed(), 99);
}

#[test]
fn test_commands_only_reference_board_tiles() {
    let mut game = GameController::new(small_config(1), GlyphResolver::new());
    game.launch();
    for _ in 0..300 {
        game.tick(TICK_MS);
    }
    let _ = game.handle_tile_click(0);
    let _ = game.handle_tile_click(1);
    for command in game.drain_commands() {
        if let DisplayCommand::SetFace { tile, .. } | DisplayCommand::SetTileEnabled { tile, .. } = command {
            assert!(tile < 6);
        }
    }
}
