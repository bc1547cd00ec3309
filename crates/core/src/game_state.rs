//! Game state module - manages the complete game state
//!
//! This module ties together the board, RNG, scoring rules and the delayed-task
//! scheduler. It handles tile selection, hints, the countdown clock and the
//! round lifecycle (`Playing -> Won | Lost`, back to `Playing` on reset).
//!
//! Every state change is also reported as a [`GameEvent`]; the presentation
//! layer drains them with [`GameState::take_events`].

use arrayvec::ArrayVec;
use tui_memory_types::{
    Difficulty, GameAction, GameEvent, Position, RoundStatus, SoundKind, TileValue,
    CLOCK_TICK_MS, FLIP_BACK_MS, HINT_COST, HINT_REVEAL_MS,
};

use crate::board::{Board, GameConfig, Tile};
use crate::error::{GameError, Result};
use crate::rng::GameRng;
use crate::scheduler::{ScheduledTask, Scheduler, TaskKind, TaskTarget};
use crate::scoring::{self, ScoreEvent};
use crate::snapshot::{GameSnapshot, TileSnapshot};

/// Result of a tile selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing happened (missing, face-up or matched tile, or round over).
    Ignored,
    /// First tile of a pair is now pending.
    FirstReveal,
    Matched { won: bool },
    /// Both tiles will be hidden again after the flip-back delay.
    Mismatch { pair: [Position; 2] },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    difficulty: Option<Difficulty>,
    board: Board,
    rng: GameRng,
    scheduler: Scheduler,
    /// Revealed tile waiting for its partner.
    pending: Option<Position>,
    /// Monotonic round id (increments on every reset). Scheduled tasks from an
    /// older generation are ignored when they fire.
    generation: u32,
    score: i32,
    seconds_remaining: u32,
    matched_pairs: usize,
    status: RoundStatus,
    paused: bool,
    /// Unpaused playing time not yet converted into clock ticks.
    clock_accum_ms: u32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a game for a validated configuration and deal the first board
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = Board::deal(&config, &mut rng);

        let mut state = Self {
            config,
            difficulty: None,
            board,
            rng,
            scheduler: Scheduler::new(),
            pending: None,
            generation: 0,
            score: 0,
            seconds_remaining: config.time_limit(),
            matched_pairs: 0,
            status: RoundStatus::Playing,
            paused: false,
            clock_accum_ms: 0,
            events: Vec::new(),
        };
        state.announce_round();
        state
    }

    /// Validate `grid_size`/`time_limit` and start a game
    pub fn new_game(grid_size: usize, time_limit: u32, seed: u64) -> Result<Self> {
        let config = GameConfig::new(grid_size, time_limit)?;
        Ok(Self::new(config, seed))
    }

    /// Start a game from a difficulty preset
    pub fn with_difficulty(difficulty: Difficulty, seed: u64) -> Self {
        let mut state = Self::new(GameConfig::from(difficulty), seed);
        state.difficulty = Some(difficulty);
        state
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Tile at `pos`, if it exists.
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.board.get(pos)
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn pending(&self) -> Option<Position> {
        self.pending
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    pub fn total_pairs(&self) -> usize {
        self.config.total_pairs()
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Whether elapsed time currently counts down the clock
    pub fn clock_running(&self) -> bool {
        self.status == RoundStatus::Playing && !self.paused
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Take every event emitted since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.tiles.clear();
        out.tiles.extend(self.board.tiles().iter().map(|tile| TileSnapshot {
            face: tile.face,
            value: (!tile.is_hidden()).then_some(tile.value),
        }));
        out.pending = self.pending;
        out.generation = self.generation;
        out.seed = self.rng.seed();
        out.difficulty = self.difficulty;
        out.score = self.score;
        out.seconds_remaining = self.seconds_remaining;
        out.time_limit = self.config.time_limit();
        out.matched_pairs = self.matched_pairs;
        out.total_pairs = self.config.total_pairs();
        out.status = self.status;
        out.paused = self.paused;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reveal a tile.
    ///
    /// With no tile pending this records the tile as pending. Otherwise the two
    /// face-up tiles are compared: equal values are matched for good, different
    /// values are scheduled to hide after [`FLIP_BACK_MS`].
    pub fn select_tile(&mut self, pos: Position) -> SelectOutcome {
        if self.status.is_over() {
            return SelectOutcome::Ignored;
        }

        let Some(reveal_id) = self.board.reveal(pos) else {
            return SelectOutcome::Ignored;
        };
        let value = self.value_at(pos);
        self.emit(GameEvent::TileRevealed { pos, value });

        let Some(first) = self.pending.take() else {
            self.pending = Some(pos);
            return SelectOutcome::FirstReveal;
        };

        if self.value_at(first) == value {
            self.resolve_match(first, pos)
        } else {
            self.resolve_mismatch(first, pos, reveal_id)
        }
    }

    fn resolve_match(&mut self, first: Position, second: Position) -> SelectOutcome {
        self.board.mark_matched(first);
        self.board.mark_matched(second);
        self.emit(GameEvent::TileMatched { pos: first });
        self.emit(GameEvent::TileMatched { pos: second });

        self.matched_pairs += 1;
        self.change_score(ScoreEvent::Match);
        self.emit(GameEvent::PlaySound(SoundKind::Correct));
        tracing::debug!(
            generation = self.generation,
            %first,
            %second,
            matched = self.matched_pairs,
            "pair matched"
        );

        let won = self.matched_pairs == self.total_pairs();
        if won {
            self.status = RoundStatus::Won;
            self.clock_accum_ms = 0;
            let final_score = self.score;
            tracing::info!(
                generation = self.generation,
                final_score,
                seconds_left = self.seconds_remaining,
                "round won"
            );
            self.emit(GameEvent::RoundWon { final_score });
            self.emit(GameEvent::ShowMessage(format!(
                "Congratulations! You matched all tiles! Your score: {}",
                final_score
            )));
        }

        SelectOutcome::Matched { won }
    }

    fn resolve_mismatch(
        &mut self,
        first: Position,
        second: Position,
        second_reveal_id: u32,
    ) -> SelectOutcome {
        self.change_score(ScoreEvent::Mismatch);
        self.emit(GameEvent::PlaySound(SoundKind::Incorrect));

        let first_reveal_id = self.board.get(first).map_or(0, |tile| tile.reveal_id);
        let mut targets = ArrayVec::new();
        targets.push(TaskTarget {
            pos: first,
            reveal_id: first_reveal_id,
        });
        targets.push(TaskTarget {
            pos: second,
            reveal_id: second_reveal_id,
        });
        self.scheduler
            .schedule(FLIP_BACK_MS, self.generation, TaskKind::FlipBack, targets);
        tracing::debug!(generation = self.generation, %first, %second, "pair mismatched");

        SelectOutcome::Mismatch {
            pair: [first, second],
        }
    }

    /// Count the clock down by one second.
    ///
    /// Does nothing while paused or once the round is over. Reaching zero ends
    /// the round as lost. Returns true if the clock moved.
    pub fn tick(&mut self) -> bool {
        if !self.clock_running() || self.seconds_remaining == 0 {
            return false;
        }

        self.seconds_remaining -= 1;
        self.emit(GameEvent::ClockChanged(self.seconds_remaining));

        if self.seconds_remaining == 0 {
            self.status = RoundStatus::Lost;
            self.clock_accum_ms = 0;
            let final_score = self.score;
            tracing::info!(generation = self.generation, final_score, "round lost");
            self.emit(GameEvent::PlaySound(SoundKind::TimeUp));
            self.emit(GameEvent::RoundLost { final_score });
            self.emit(GameEvent::ShowMessage(format!(
                "Time's up! Your score: {}",
                final_score
            )));
        }

        true
    }

    /// Spend [`HINT_COST`] points to reveal two hidden tiles for [`HINT_REVEAL_MS`].
    ///
    /// Both picks are drawn independently from the hidden tiles, so the same
    /// tile can come up twice. Returns `Ok(None)` without charging when fewer
    /// than two tiles are hidden or the round is over.
    pub fn hint(&mut self) -> Result<Option<[Position; 2]>> {
        if self.status.is_over() {
            return Ok(None);
        }

        if !scoring::can_afford_hint(self.score) {
            let err = GameError::InsufficientScore {
                score: self.score,
                required: HINT_COST,
            };
            self.emit(GameEvent::ShowMessage(err.to_string()));
            return Err(err);
        }

        let hidden = self.board.hidden_positions();
        if hidden.len() < 2 {
            return Ok(None);
        }

        let picks = [
            hidden[self.rng.next_index(hidden.len())],
            hidden[self.rng.next_index(hidden.len())],
        ];

        let mut targets = ArrayVec::new();
        for pos in picks {
            // A repeated pick is already face up and reveals nothing new.
            if let Some(reveal_id) = self.board.reveal(pos) {
                let value = self.value_at(pos);
                self.emit(GameEvent::TileRevealed { pos, value });
                targets.push(TaskTarget { pos, reveal_id });
            }
        }
        self.scheduler
            .schedule(HINT_REVEAL_MS, self.generation, TaskKind::HintHide, targets);

        self.change_score(ScoreEvent::Hint);
        tracing::debug!(
            generation = self.generation,
            first = %picks[0],
            second = %picks[1],
            score = self.score,
            "hint used"
        );

        Ok(Some(picks))
    }

    /// Toggle the paused clock. Scheduled hides keep running while paused.
    pub fn toggle_pause(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        self.paused = !self.paused;
        tracing::debug!(paused = self.paused, "pause toggled");
        true
    }

    /// Cancel every scheduled hide and deal a fresh board with the same configuration.
    pub fn reset(&mut self) {
        self.restart_with(self.config, self.difficulty);
    }

    /// Deal a fresh board for a difficulty preset
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        self.restart_with(GameConfig::from(difficulty), Some(difficulty));
    }

    fn restart_with(&mut self, config: GameConfig, difficulty: Option<Difficulty>) {
        self.scheduler.cancel_all();
        self.generation = self.generation.wrapping_add(1);

        self.config = config;
        self.difficulty = difficulty;
        self.board = Board::deal(&config, &mut self.rng);
        self.pending = None;
        self.score = 0;
        self.seconds_remaining = config.time_limit();
        self.matched_pairs = 0;
        self.status = RoundStatus::Playing;
        self.paused = false;
        self.clock_accum_ms = 0;

        self.announce_round();
    }

    /// Advance game time.
    ///
    /// Fires every scheduled task that became due, then turns accumulated
    /// playing time into whole-second [`tick`](Self::tick) calls. Time spent
    /// paused or after the round ended never reaches the clock. Returns true if
    /// anything visible changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let mut changed = false;

        for task in self.scheduler.advance(elapsed_ms) {
            changed |= self.run_task(task);
        }

        if self.clock_running() {
            self.clock_accum_ms = self.clock_accum_ms.saturating_add(elapsed_ms);
            while self.clock_accum_ms >= CLOCK_TICK_MS && self.clock_running() {
                self.clock_accum_ms -= CLOCK_TICK_MS;
                changed |= self.tick();
            }
        }

        changed
    }

    fn run_task(&mut self, task: ScheduledTask) -> bool {
        if task.generation != self.generation {
            tracing::debug!(
                task = task.id,
                task_generation = task.generation,
                generation = self.generation,
                "stale task ignored"
            );
            return false;
        }

        let mut changed = false;
        for target in &task.targets {
            if self.board.hide_if_unchanged(target.pos, target.reveal_id) {
                self.emit(GameEvent::TileHidden { pos: target.pos });
                changed = true;
            }
        }
        changed
    }

    /// Apply a game action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Select(pos) => self.select_tile(pos) != SelectOutcome::Ignored,
            GameAction::Hint => matches!(self.hint(), Ok(Some(_))),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
            GameAction::SetDifficulty(difficulty) => {
                self.select_difficulty(difficulty);
                true
            }
        }
    }

    fn value_at(&self, pos: Position) -> TileValue {
        self.board.get(pos).map_or(0, |tile| tile.value)
    }

    fn change_score(&mut self, event: ScoreEvent) {
        self.score = scoring::apply(self.score, event);
        self.emit(GameEvent::ScoreChanged(self.score));
    }

    fn announce_round(&mut self) {
        let dims = self.board.dims();
        tracing::debug!(
            generation = self.generation,
            rows = dims.rows,
            cols = dims.cols,
            time_limit = self.config.time_limit(),
            "new round"
        );
        self.emit(GameEvent::NewRound {
            generation: self.generation,
            rows: dims.rows,
            cols: dims.cols,
        });
        self.emit(GameEvent::ScoreChanged(self.score));
        self.emit(GameEvent::ClockChanged(self.seconds_remaining));
    }

    fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::Easy, 1)
    }
}
