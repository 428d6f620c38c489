//! Game controller - drives the state machine from clicks and timers
//!
//! The controller owns the single live [`GameState`], the deck, both timers and
//! the injected [`AssetResolver`]. Every input goes through the same sequence:
//! compute the transition, store the new state, then queue the display commands
//! for the host to drain with [`GameController::drain_commands`].
//!
//! # Lifecycle
//!
//! 1. [`launch`](GameController::launch): all tiles face-up, board locked,
//!    preview timer armed.
//! 2. Preview fires: tiles turned face-down, [`start_game`](GameController::start_game)
//!    locks the board and arms the hide timer as a start delay.
//! 3. Hide timer fires with no pending pair: the board becomes ready.
//! 4. [`restart`](GameController::restart) reshuffles, resets the counters and
//!    goes back to step 2 (or step 1 when `preview_on_restart` is set).

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::deck::DeckBuilder;
use crate::display::{AssetResolver, DisplayCommand, Status, TileImage};
use crate::error::GameError;
use crate::game_state::{Effect, GameState, Transition};
use crate::snapshot::{GameSnapshot, TimersSnapshot};
use crate::timer::{TimerKind, Timers};
use crate::types::TileFace;

pub struct GameController<A: AssetResolver> {
    config: GameConfig,
    deck: DeckBuilder,
    assets: A,
    state: GameState,
    timers: Timers,
    commands: Vec<DisplayCommand<A::Image>>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    restart_enabled: bool,
    previewing: bool,
    launched: bool,
}

impl<A: AssetResolver> GameController<A> {
    /// Deal the first board and queue the initial display (all face-down, zeroed labels).
    pub fn new(config: GameConfig, assets: A) -> Self {
        let mut deck = match config.seed {
            Some(seed) => DeckBuilder::new(seed, config.shuffle),
            None => DeckBuilder::from_entropy(config.shuffle),
        };
        let board = deck.deal(config.board.vocabulary());

        info!(
            seed = deck.seed(),
            rows = config.board.rows(),
            columns = config.board.columns(),
            shuffle = config.shuffle.as_str(),
            "deck dealt"
        );

        let timers = Timers::new(config.preview_ms, config.hide_delay_ms);
        let mut controller = Self {
            config,
            deck,
            assets,
            state: GameState::new(board),
            timers,
            commands: Vec::new(),
            episode_id: 0,
            restart_enabled: false,
            previewing: false,
            launched: false,
        };
        controller.reset_display();
        controller
    }

    /// First start: show every face for the preview window.
    pub fn launch(&mut self) {
        if self.launched {
            return;
        }
        self.launched = true;
        info!(episode = self.episode_id, preview_ms = self.config.preview_ms, "game launched");
        self.begin_preview();
    }

    /// Lock the board, arm the hide timer as a start delay and enable restart.
    pub fn start_game(&mut self) {
        self.state.lock();
        self.timers.hide.arm_for(self.config.hide_delay_ms);
        self.set_restart_enabled(true);
        self.push(DisplayCommand::SetStatus(Status::GetReady));
        debug!(episode = self.episode_id, "game started");
    }

    /// Host click on a tile.
    ///
    /// Ignored clicks queue nothing. Out-of-range indices are rejected without
    /// touching the state.
    pub fn handle_tile_click(&mut self, index: usize) -> Result<(), GameError> {
        let transition = self.state.click(index)?;
        if transition.is_noop() {
            debug!(tile = index, phase = self.state.phase().as_str(), "click ignored");
            return Ok(());
        }

        debug!(tile = index, "tile revealed");
        self.commit(transition);
        Ok(())
    }

    /// Start a new game on a reshuffled board.
    pub fn restart(&mut self) {
        self.set_restart_enabled(false);
        self.timers.cancel_all();
        self.previewing = false;

        let board = self.deck.shuffle(self.state.board());
        self.state = GameState::new(board);
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, seed = self.deck.seed(), "game restarted");

        self.reset_display();
        if self.config.preview_on_restart {
            self.begin_preview();
        } else {
            self.start_game();
        }
    }

    /// Restart control activated by the player; ignored while it is disabled.
    pub fn activate_restart(&mut self) -> bool {
        if !self.restart_enabled {
            debug!("restart ignored while disabled");
            return false;
        }
        self.restart();
        true
    }

    /// Advance both timers by one host tick and run whatever fired.
    pub fn tick(&mut self, elapsed_ms: u32) {
        // Hide first: the preview fire re-arms the hide timer, and that fresh
        // countdown must not be charged for this tick.
        if self.timers.hide.tick(elapsed_ms) {
            self.on_hide_elapsed();
        }
        if self.timers.preview.tick(elapsed_ms) {
            self.on_preview_elapsed();
        }
    }

    pub fn flip_all_face_up(&mut self) {
        for tile in 0..self.state.len() {
            let image = self.front_image(tile);
            self.push(DisplayCommand::SetFace { tile, image });
        }
    }

    pub fn flip_all_face_down(&mut self) {
        for tile in 0..self.state.len() {
            let image = self.back_image();
            self.push(DisplayCommand::SetFace { tile, image });
        }
    }

    /// Hand queued display commands to the host.
    pub fn drain_commands(&mut self) -> Vec<DisplayCommand<A::Image>> {
        std::mem::take(&mut self.commands)
    }

    pub fn pending_commands(&self) -> &[DisplayCommand<A::Image>] {
        &self.commands
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn assets(&self) -> &A {
        &self.assets
    }

    pub fn seed(&self) -> u64 {
        self.deck.seed()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn restart_enabled(&self) -> bool {
        self.restart_enabled
    }

    pub fn previewing(&self) -> bool {
        self.previewing
    }

    /// Read-only copy of the game. `faces` follows the display, so every tile
    /// reads face-up while the preview is showing.
    pub fn snapshot(&self) -> GameSnapshot {
        let faces = if self.previewing {
            self.state
                .board()
                .cards()
                .iter()
                .cloned()
                .map(TileFace::FaceUp)
                .collect()
        } else {
            self.state.faces().to_vec()
        };

        GameSnapshot {
            episode_id: self.episode_id,
            seed: self.deck.seed(),
            rows: self.config.board.rows(),
            columns: self.config.board.columns(),
            faces,
            won: (0..self.state.len()).map(|i| self.state.is_won(i)).collect(),
            selection: self.state.selection(),
            phase: self.state.phase(),
            score: self.state.score(),
            errors: self.state.errors(),
            ready: self.state.ready(),
            previewing: self.previewing,
            finished: self.state.finished(),
            restart_enabled: self.restart_enabled,
            timers: TimersSnapshot {
                preview_ms: self.timers.preview.remaining_ms(),
                hide_ms: self.timers.hide.remaining_ms(),
            },
        }
    }

    fn begin_preview(&mut self) {
        self.state.lock();
        self.previewing = true;
        self.flip_all_face_up();
        self.push(DisplayCommand::SetStatus(Status::Memorize));
        self.timers.preview.arm_for(self.config.preview_ms);
    }

    fn on_preview_elapsed(&mut self) {
        if !self.previewing {
            return;
        }
        debug!(timer = TimerKind::Preview.as_str(), "timer fired");
        self.previewing = false;
        self.flip_all_face_down();
        self.start_game();
    }

    fn on_hide_elapsed(&mut self) {
        debug!(timer = TimerKind::Hide.as_str(), "timer fired");
        if self.previewing {
            return;
        }
        let transition = self.state.hide_timer_fired();
        self.commit(transition);
    }

    fn commit(&mut self, transition: Transition) {
        let Transition { state, effects } = transition;
        self.state = state;
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Reveal(tile) => {
                let image = self.front_image(tile);
                self.push(DisplayCommand::SetFace { tile, image });
            }
            Effect::Hide(tile) => {
                let image = self.back_image();
                self.push(DisplayCommand::SetFace { tile, image });
            }
            Effect::Won(tile) => {
                self.push(DisplayCommand::SetTileEnabled {
                    tile,
                    enabled: false,
                });
            }
            Effect::ScoreChanged(score) => {
                info!(episode = self.episode_id, score, "pair matched");
                self.push(DisplayCommand::SetScore(score));
            }
            Effect::ErrorsChanged(errors) => {
                info!(episode = self.episode_id, errors, "pair mismatched");
                self.push(DisplayCommand::SetErrors(errors));
                self.push(DisplayCommand::SetStatus(Status::Mismatch));
            }
            Effect::ArmHideTimer => {
                self.timers.hide.arm_for(self.config.hide_delay_ms);
            }
            Effect::Ready => {
                self.push(DisplayCommand::SetStatus(Status::FindPairs));
            }
            Effect::Finished => {
                let errors = self.state.errors();
                info!(episode = self.episode_id, errors, "all pairs found");
                self.push(DisplayCommand::SetStatus(Status::Finished { errors }));
            }
        }
    }

    /// Everything face-down, every tile enabled, labels zeroed.
    fn reset_display(&mut self) {
        self.flip_all_face_down();
        for tile in 0..self.state.len() {
            self.push(DisplayCommand::SetTileEnabled {
                tile,
                enabled: true,
            });
        }
        self.push(DisplayCommand::SetScore(self.state.score()));
        self.push(DisplayCommand::SetErrors(self.state.errors()));
        self.set_restart_enabled(false);
    }

    fn set_restart_enabled(&mut self, enabled: bool) {
        self.restart_enabled = enabled;
        self.push(DisplayCommand::SetRestartEnabled(enabled));
    }

    fn front_image(&self, tile: usize) -> TileImage<A::Image> {
        TileImage::front(
            self.state
                .board()
                .face(tile)
                .and_then(|face| self.assets.resolve_face(face)),
        )
    }

    fn back_image(&self) -> TileImage<A::Image> {
        TileImage::back(self.assets.back_image())
    }

    fn push(&mut self, command: DisplayCommand<A::Image>) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::game_state::Phase;
    use crate::types::FaceId;

    const PREVIEW: u32 = 100;
    const HIDE: u32 = 50;

    struct NameAssets;

    impl AssetResolver for NameAssets {
        type Image = String;

        fn resolve_face(&self, face: &FaceId) -> Option<String> {
            Some(face.to_string())
        }

        fn back_image(&self) -> Option<String> {
            Some("#".to_string())
        }
    }

    struct MissingAssets;

    impl AssetResolver for MissingAssets {
        type Image = ();

        fn resolve_face(&self, _face: &FaceId) -> Option<()> {
            None
        }

        fn back_image(&self) -> Option<()> {
            None
        }
    }

    fn config() -> GameConfig {
        let board = BoardConfig::new(
            2,
            2,
            vec![FaceId::new("A"), FaceId::new("B")],
        )
        .unwrap();
        GameConfig {
            preview_ms: PREVIEW,
            hide_delay_ms: HIDE,
            ..GameConfig::new(board).with_seed(3)
        }
    }

    fn ready_controller() -> GameController<NameAssets> {
        let mut c = GameController::new(config(), NameAssets);
        c.launch();
        c.tick(PREVIEW);
        c.tick(HIDE);
        assert!(c.state().ready());
        c.drain_commands();
        c
    }

    /// (first tile of a pair, its twin, a tile with a different face)
    fn layout(c: &GameController<NameAssets>) -> (usize, usize, usize) {
        let board = c.state().board();
        let twin = (1..board.len())
            .find(|&i| board.face(i) == board.face(0))
            .unwrap();
        let other = (1..board.len()).find(|&i| i != twin).unwrap();
        (0, twin, other)
    }

    #[test]
    fn test_new_queues_initial_display() {
        let mut c = GameController::new(config(), NameAssets);
        let cmds = c.drain_commands();
        let backs = cmds
            .iter()
            .filter(|cmd| {
                matches!(cmd, DisplayCommand::SetFace { image: TileImage::Back(_), .. })
            })
            .count();
        assert_eq!(backs, 4);
        assert!(cmds.contains(&DisplayCommand::SetScore(0)));
        assert!(cmds.contains(&DisplayCommand::SetErrors(0)));
        assert!(cmds.contains(&DisplayCommand::SetRestartEnabled(false)));
        assert!(c.drain_commands().is_empty());
    }

    #[test]
    fn test_launch_previews_then_starts() {
        let mut c = GameController::new(config(), NameAssets);
        c.drain_commands();
        c.launch();
        assert!(c.previewing());
        assert!(!c.state().ready());
        let fronts = c
            .drain_commands()
            .into_iter()
            .filter(|cmd| matches!(cmd, DisplayCommand::SetFace { image: TileImage::Front(_), .. }))
            .count();
        assert_eq!(fronts, 4);

        // Clicks during the peek do nothing.
        c.handle_tile_click(0).unwrap();
        assert!(c.state().selection().is_empty());
        assert!(c.pending_commands().is_empty());

        c.tick(PREVIEW - 1);
        assert!(c.previewing());
        c.tick(1);
        assert!(!c.previewing());
        assert!(c.restart_enabled());
        assert!(!c.state().ready());
        assert_eq!(c.timers().hide.remaining_ms(), Some(HIDE));

        c.tick(HIDE - 1);
        assert!(!c.state().ready());
        c.tick(1);
        assert!(c.state().ready());
        assert_eq!(c.state().phase(), Phase::Idle);
    }

    #[test]
    fn test_launch_is_idempotent() {
        let mut c = GameController::new(config(), NameAssets);
        c.launch();
        c.tick(PREVIEW / 2);
        c.launch();
        assert_eq!(c.timers().preview.remaining_ms(), Some(PREVIEW / 2));
    }

    #[test]
    fn test_click_reveals_with_resolved_image() {
        let mut c = ready_controller();
        c.handle_tile_click(0).unwrap();
        let face = c.state().board().face(0).unwrap().to_string();
        assert_eq!(
            c.drain_commands(),
            vec![DisplayCommand::SetFace {
                tile: 0,
                image: TileImage::Front(face)
            }]
        );
    }

    #[test]
    fn test_match_updates_score_and_disables_tiles() {
        let mut c = ready_controller();
        let (a, twin, _) = layout(&c);
        c.handle_tile_click(a).unwrap();
        c.handle_tile_click(twin).unwrap();
        let cmds = c.drain_commands();
        assert!(cmds.contains(&DisplayCommand::SetScore(1)));
        assert!(cmds.contains(&DisplayCommand::SetTileEnabled {
            tile: a,
            enabled: false
        }));
        assert!(cmds.contains(&DisplayCommand::SetTileEnabled {
            tile: twin,
            enabled: false
        }));
        assert_eq!(c.state().errors(), 0);
        assert!(!c.timers().hide.is_pending());
    }

    #[test]
    fn test_mismatch_arms_hide_and_flips_back() {
        let mut c = ready_controller();
        let (a, twin, other) = layout(&c);
        c.handle_tile_click(a).unwrap();
        c.handle_tile_click(other).unwrap();
        let cmds = c.drain_commands();
        assert!(cmds.contains(&DisplayCommand::SetErrors(1)));
        assert!(cmds.contains(&DisplayCommand::SetStatus(Status::Mismatch)));
        assert_eq!(c.timers().hide.remaining_ms(), Some(HIDE));
        assert!(!c.state().ready());

        // Locked while the pair is on display.
        c.handle_tile_click(twin).unwrap();
        assert!(c.pending_commands().is_empty());

        c.tick(HIDE);
        let cmds = c.drain_commands();
        assert!(cmds.contains(&DisplayCommand::SetFace {
            tile: a,
            image: TileImage::Back("#".to_string())
        }));
        assert!(cmds.contains(&DisplayCommand::SetFace {
            tile: other,
            image: TileImage::Back("#".to_string())
        }));
        assert!(c.state().ready());
    }

    #[test]
    fn test_out_of_range_click_is_rejected() {
        let mut c = ready_controller();
        assert_eq!(
            c.handle_tile_click(4),
            Err(GameError::TileOutOfRange { index: 4, len: 4 })
        );
        assert!(c.pending_commands().is_empty());
    }

    #[test]
    fn test_restart_resets_and_rearms_hide() {
        let mut c = ready_controller();
        let (a, _, other) = layout(&c);
        let before = c.state().board().face_counts();
        c.handle_tile_click(a).unwrap();
        c.handle_tile_click(other).unwrap();
        c.tick(HIDE - 10);

        assert!(c.activate_restart());
        assert_eq!(c.episode_id(), 1);
        assert_eq!(c.state().score(), 0);
        assert_eq!(c.state().errors(), 0);
        assert!(c.state().selection().is_empty());
        assert_eq!(c.state().board().face_counts(), before);
        // Full delay again, not the 10ms left over from the mismatch.
        assert_eq!(c.timers().hide.remaining_ms(), Some(HIDE));
        assert!(c.restart_enabled());

        let cmds = c.drain_commands();
        assert!(cmds.contains(&DisplayCommand::SetRestartEnabled(false)));
        assert!(cmds.contains(&DisplayCommand::SetErrors(0)));
        assert_eq!(cmds.last(), Some(&DisplayCommand::SetStatus(Status::GetReady)));

        c.tick(10);
        assert!(!c.state().ready());
        c.tick(HIDE - 10);
        assert!(c.state().ready());
    }

    #[test]
    fn test_restart_ignored_while_disabled() {
        let mut c = GameController::new(config(), NameAssets);
        c.launch();
        assert!(!c.activate_restart());
        assert_eq!(c.episode_id(), 0);
    }

    #[test]
    fn test_preview_on_restart() {
        let mut cfg = config();
        cfg.preview_on_restart = true;
        let mut c = GameController::new(cfg, NameAssets);
        c.launch();
        c.tick(PREVIEW);
        c.tick(HIDE);
        c.restart();
        assert!(c.previewing());
        assert!(!c.restart_enabled());
        assert!(!c.timers().hide.is_pending());
        c.tick(PREVIEW);
        assert!(c.restart_enabled());
        c.tick(HIDE);
        assert!(c.state().ready());
    }

    #[test]
    fn test_missing_assets_render_blank() {
        let mut c = GameController::new(config(), MissingAssets);
        c.launch();
        assert!(c.drain_commands().iter().all(|cmd| match cmd {
            DisplayCommand::SetFace { image, .. } => *image == TileImage::Blank,
            _ => true,
        }));
    }

    #[test]
    fn test_finish_reports_status() {
        let mut c = ready_controller();
        let board = c.state().board().clone();
        for first in 0..board.len() {
            if c.state().is_won(first) {
                continue;
            }
            let twin = (first + 1..board.len())
                .find(|&i| board.face(i) == board.face(first))
                .unwrap();
            c.handle_tile_click(first).unwrap();
            c.handle_tile_click(twin).unwrap();
        }
        assert!(c.state().finished());
        assert_eq!(
            c.drain_commands().last(),
            Some(&DisplayCommand::SetStatus(Status::Finished { errors: 0 }))
        );
        assert!(c.snapshot().finished);
    }

    #[test]
    fn test_start_game_mid_turn_hides_lone_pick() {
        let mut c = ready_controller();
        c.handle_tile_click(0).unwrap();
        c.start_game();
        c.drain_commands();
        while !c.state().ready() {
            c.tick(16);
        }

        let cmds = c.drain_commands();
        assert!(cmds.contains(&DisplayCommand::SetFace {
            tile: 0,
            image: TileImage::Back("#".to_string())
        }));
        assert_eq!(c.state().face(0), Some(&TileFace::FaceDown));
        assert!(!c.state().is_won(0));
        assert!(c.state().selection().is_empty());
    }

    #[test]
    fn test_snapshot_shows_faces_during_preview() {
        let mut c = GameController::new(config(), NameAssets);
        c.launch();
        let snap = c.snapshot();
        assert!(snap.previewing);
        assert_eq!(snap.face_up_count(), 4);
        assert_eq!(c.state().faces().iter().filter(|f| f.is_face_up()).count(), 0);

        c.tick(PREVIEW);
        assert_eq!(c.snapshot().face_up_count(), 0);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut c = ready_controller();
        c.handle_tile_click(1).unwrap();
        let snap = c.snapshot();
        assert_eq!(snap.phase, Phase::OneSelected);
        assert_eq!(snap.selection.first(), Some(1));
        assert_eq!(snap.face_up_count(), 1);
        assert_eq!(snap.pairs(), 2);
        assert_eq!(snap.seed, 3);
        assert!(snap.playable());
    }
}
