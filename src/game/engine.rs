//! The Seega state machine.
//!
//! `Game` owns the board and the RNG, and is the only thing that mutates
//! either. Every mutator is atomic: it either applies the whole
//! placement/move/capture sequence and returns `Ok`, or leaves the game
//! untouched and returns the [`RuleViolation`]. The `bool`-returning
//! mutators wrap the `try_*` ones for callers that only need success.

use tracing::{debug, trace};

use crate::ai::AiStrategy;
use crate::core::{
    Action, ActionRecord, Board, Captures, Cell, Color, ConfigError, GameRng, GameRngState, Move,
    Position, RuleViolation,
};
use crate::rules;

use super::config::GameConfig;
use super::stage::Stage;

/// Pieces each side drops before the turn passes during placement.
pub const PIECES_PER_PLACEMENT_TURN: u8 = 2;

/// A single Seega match.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    stage: Stage,
    turn: Color,
    remaining_to_place: u8,
    yellow_pieces: usize,
    red_pieces: usize,
    ai_color: Option<Color>,
    ai_strategy: AiStrategy,
    last_move: Option<Move>,
    last_removed: Captures,
    history: Vec<ActionRecord>,
    rng: GameRng,
}

impl Game {
    /// Start a new match on an empty `dimension × dimension` board.
    ///
    /// The first mover is decided by a fair coin flip from the seeded RNG.
    /// With `ai_enabled`, the side that lost the toss is computer-controlled
    /// using the heuristic policy.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    pub fn new(dimension: usize, ai_enabled: bool, seed: u64) -> Self {
        Self::build(dimension, ai_enabled, AiStrategy::Heuristic, seed)
    }

    /// Start a new match from a validated configuration.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            config.dimension,
            config.ai_enabled,
            config.ai_strategy,
            config.seed,
        ))
    }

    fn build(dimension: usize, ai_enabled: bool, ai_strategy: AiStrategy, seed: u64) -> Self {
        let board = Board::new(dimension);
        let mut rng = GameRng::new(seed);
        let turn = if rng.gen_bool(0.5) { Color::Yellow } else { Color::Red };
        let ai_color = ai_enabled.then(|| turn.opponent());

        debug!(dimension, %turn, ?ai_color, seed, "new game");

        Self {
            board,
            stage: Stage::PlacingPieces,
            turn,
            remaining_to_place: PIECES_PER_PLACEMENT_TURN,
            yellow_pieces: 0,
            red_pieces: 0,
            ai_color,
            ai_strategy,
            last_move: None,
            last_removed: Captures::new(),
            history: Vec::new(),
            rng,
        }
    }

    /// Resume play from an arbitrary position, skipping placement.
    ///
    /// Piece counts are taken from the board. The game starts in `Playing`,
    /// or in `End` if either side has no pieces. If `turn` has no legal move
    /// the turn passes to the opponent, as at the end of placement.
    #[must_use]
    pub fn from_position(board: Board, turn: Color, ai_color: Option<Color>, seed: u64) -> Self {
        let yellow_pieces = board.count_color(Color::Yellow);
        let red_pieces = board.count_color(Color::Red);

        let mut game = Self {
            board,
            stage: Stage::Playing,
            turn,
            remaining_to_place: 0,
            yellow_pieces,
            red_pieces,
            ai_color,
            ai_strategy: AiStrategy::Heuristic,
            last_move: None,
            last_removed: Captures::new(),
            history: Vec::new(),
            rng: GameRng::new(seed),
        };

        if yellow_pieces == 0 || red_pieces == 0 {
            game.stage = Stage::End;
        } else {
            game.begin_playing();
        }
        game
    }

    /// Replace the policy driving the computer side.
    #[must_use]
    pub fn with_ai_strategy(mut self, strategy: AiStrategy) -> Self {
        self.ai_strategy = strategy;
        self
    }

    /// Continue the RNG stream from a snapshot taken with [`Game::rng_state`].
    ///
    /// A game rebuilt at the same position with the same snapshot makes the
    /// same AI decisions from here on.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }

    // === Queries ===

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.board.dimension()
    }

    /// Side to act.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Computer-controlled side, if any.
    #[must_use]
    pub fn ai_color(&self) -> Option<Color> {
        self.ai_color
    }

    /// Policy driving the computer side.
    #[must_use]
    pub fn ai_strategy(&self) -> AiStrategy {
        self.ai_strategy
    }

    /// Check if the side to act is computer-controlled.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.ai_color == Some(self.turn)
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.stage == Stage::End
    }

    #[must_use]
    pub fn can_place_pieces(&self) -> bool {
        self.stage == Stage::PlacingPieces
    }

    #[must_use]
    pub fn can_move_pieces(&self) -> bool {
        self.stage == Stage::Playing
    }

    /// Most recent successful move, `None` before the first one.
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Positions captured by the most recent move.
    #[must_use]
    pub fn last_removed(&self) -> &[Position] {
        &self.last_removed
    }

    /// Live pieces of `color`.
    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        match color {
            Color::Yellow => self.yellow_pieces,
            Color::Red => self.red_pieces,
        }
    }

    /// Pieces the side to act still drops before the turn passes.
    /// Zero outside the placement stage.
    #[must_use]
    pub fn remaining_to_place(&self) -> u8 {
        if self.can_place_pieces() {
            self.remaining_to_place
        } else {
            0
        }
    }

    /// Side with pieces left once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if !self.is_over() {
            return None;
        }
        Color::ALL
            .into_iter()
            .find(|&color| self.piece_count(color) > 0)
    }

    /// Legal one-step moves for the side to act. Empty outside `Playing`.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.can_move_pieces() {
            rules::legal_moves(&self.board, self.turn)
        } else {
            Vec::new()
        }
    }

    /// Every action the side to act may take right now.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        match self.stage {
            Stage::PlacingPieces => rules::placement_candidates(&self.board)
                .into_iter()
                .map(Action::Place)
                .collect(),
            Stage::Playing => self.legal_moves().into_iter().map(Action::Move).collect(),
            Stage::End => Vec::new(),
        }
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Snapshot of the RNG. Pass it to [`Game::with_rng_state`] to replay
    /// AI decisions.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Mutators ===

    /// Drop a piece for the side to act. Returns `false` if refused.
    pub fn place_piece(&mut self, row: usize, col: usize) -> bool {
        self.try_place_piece(row, col).is_ok()
    }

    /// Slide a piece one step for the side to act. Returns `false` if refused.
    pub fn move_piece(
        &mut self,
        row_from: usize,
        col_from: usize,
        row_to: usize,
        col_to: usize,
    ) -> bool {
        self.try_move_piece(row_from, col_from, row_to, col_to).is_ok()
    }

    /// Let the computer take one action. Returns `false` unless it is the
    /// computer's turn in an unfinished game.
    pub fn let_ai_play(&mut self) -> bool {
        self.try_let_ai_play().is_ok()
    }

    /// Apply an action for the side to act.
    pub fn apply(&mut self, action: &Action) -> Result<ActionRecord, RuleViolation> {
        match *action {
            Action::Place(pos) => self.try_place_piece(pos.row, pos.col),
            Action::Move(mv) => self.try_move_piece(mv.from.row, mv.from.col, mv.to.row, mv.to.col),
        }
    }

    /// Drop a piece for the side to act.
    pub fn try_place_piece(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<ActionRecord, RuleViolation> {
        match self.stage {
            Stage::PlacingPieces => {}
            Stage::Playing => return Err(RuleViolation::NotPlacingStage),
            Stage::End => return Err(RuleViolation::GameOver),
        }

        let pos = Position::new(row, col);
        self.check_on_board(pos)?;
        if rules::is_center(&self.board, pos) {
            return Err(RuleViolation::CenterCell(pos));
        }
        if !self.board[row][col].is_empty() {
            return Err(RuleViolation::Occupied(pos));
        }

        let placer = self.turn;
        self.board.set(pos, Cell::from(placer));
        *self.count_mut(placer) += 1;
        self.remaining_to_place -= 1;

        trace!(color = %placer, position = %pos, "piece placed");

        let placed = self.yellow_pieces + self.red_pieces;
        let capacity = self.dimension() * self.dimension() - 1;

        if placed == capacity {
            // The last placer keeps the turn into the playing stage.
            self.stage = Stage::Playing;
            debug!(placed, "placement complete, playing stage begins");
            self.begin_playing();
        } else if self.remaining_to_place == 0 {
            self.remaining_to_place = PIECES_PER_PLACEMENT_TURN;
            self.turn = placer.opponent();
        }

        Ok(self.record(placer, Action::Place(pos), Captures::new()))
    }

    /// Slide a piece one step for the side to act, resolving captures.
    pub fn try_move_piece(
        &mut self,
        row_from: usize,
        col_from: usize,
        row_to: usize,
        col_to: usize,
    ) -> Result<ActionRecord, RuleViolation> {
        match self.stage {
            Stage::Playing => {}
            Stage::PlacingPieces => return Err(RuleViolation::NotPlayingStage),
            Stage::End => return Err(RuleViolation::GameOver),
        }

        let from = Position::new(row_from, col_from);
        let to = Position::new(row_to, col_to);
        self.check_on_board(from)?;
        self.check_on_board(to)?;

        let mv = Move::new(from, to);
        if !mv.is_single_step() {
            return Err(RuleViolation::NotOrthogonalStep { from, to });
        }

        let mover = self.turn;
        if !self.board[row_from][col_from].holds(mover) {
            return Err(RuleViolation::NotOwnPiece { pos: from, color: mover });
        }
        if !self.board[row_to][col_to].is_empty() {
            return Err(RuleViolation::Occupied(to));
        }

        self.board.swap(from, to);
        self.last_move = Some(mv);
        trace!(color = %mover, %mv, "piece moved");

        let captured = rules::captures_at(&self.board, to);
        for &pos in &captured {
            self.eliminate(pos);
        }
        self.last_removed = captured.clone();

        if self.yellow_pieces == 0 || self.red_pieces == 0 {
            self.stage = Stage::End;
            debug!(winner = %mover, "game over");
        } else if rules::has_possible_move(&self.board, mover.opponent()) {
            self.turn = mover.opponent();
        } else {
            debug!(color = %mover.opponent(), "no legal move, turn skipped");
        }

        Ok(self.record(mover, Action::Move(mv), captured))
    }

    /// Let the computer take one action.
    pub fn try_let_ai_play(&mut self) -> Result<ActionRecord, RuleViolation> {
        let ai = self.ai_color.ok_or(RuleViolation::AiDisabled)?;
        if self.is_over() {
            return Err(RuleViolation::GameOver);
        }
        if self.turn != ai {
            return Err(RuleViolation::NotAiTurn);
        }

        let policy = self.ai_strategy.policy();
        match self.stage {
            Stage::PlacingPieces => {
                let pos = policy
                    .choose_placement(&self.board, ai, &mut self.rng)
                    .ok_or(RuleViolation::NoLegalAction(ai))?;
                self.try_place_piece(pos.row, pos.col)
            }
            Stage::Playing => {
                let mv = policy
                    .choose_move(&self.board, ai, &mut self.rng)
                    .ok_or(RuleViolation::NoLegalAction(ai))?;
                self.try_move_piece(mv.from.row, mv.from.col, mv.to.row, mv.to.col)
            }
            Stage::End => Err(RuleViolation::GameOver),
        }
    }

    // === Internals ===

    fn check_on_board(&self, pos: Position) -> Result<(), RuleViolation> {
        if self.board.contains(pos) {
            Ok(())
        } else {
            Err(RuleViolation::OutOfBounds(pos))
        }
    }

    fn count_mut(&mut self, color: Color) -> &mut usize {
        match color {
            Color::Yellow => &mut self.yellow_pieces,
            Color::Red => &mut self.red_pieces,
        }
    }

    /// Pass the turn if the side about to move is blocked.
    fn begin_playing(&mut self) {
        if !rules::has_possible_move(&self.board, self.turn) {
            debug!(color = %self.turn, "no legal move at start of play, turn skipped");
            self.turn = self.turn.opponent();
        }
    }

    fn eliminate(&mut self, pos: Position) {
        if let Some(color) = self.board[pos.row][pos.col].color() {
            *self.count_mut(color) -= 1;
            self.board.set(pos, Cell::Empty);
            debug!(%color, position = %pos, "piece captured");
        }
    }

    fn record(&mut self, color: Color, action: Action, captured: Captures) -> ActionRecord {
        let record = ActionRecord {
            color,
            action,
            sequence: self.history.len(),
            captured,
        };
        self.history.push(record.clone());
        record
    }
}
