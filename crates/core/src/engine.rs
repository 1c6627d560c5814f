//! Engine module - owns the board and applies moves
//!
//! This module ties together the board, the slide algorithm, the random
//! source and the score. It never renders and never decides when a game
//! ends: it only answers [`GridEngine::has_won`] and
//! [`GridEngine::is_game_over`] for whoever drives it.

use log::{debug, info, trace};

use crate::moves::slide;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Board;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GridEngine<R = SimpleRng> {
    board: Board,
    score: u64,
    /// Accepted (board-changing) moves since the last reset.
    moves: u32,
    rng: R,
}

impl GridEngine<SimpleRng> {
    /// Create a new game driven by a seeded [`SimpleRng`]
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::GridEngine;
    /// use tui_2048_types::Direction;
    ///
    /// let mut engine = GridEngine::with_seed(4, 12345).unwrap();
    /// assert_eq!(engine.board().cells().iter().filter(|&&v| v != 0).count(), 2);
    ///
    /// let result = engine.apply_move(Direction::Left);
    /// if !result.changed {
    ///     assert_eq!(result.spawned, None);
    /// }
    /// ```
    pub fn with_seed(size: usize, seed: u32) -> Result<Self, GameError> {
        Self::new(size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GridEngine<R> {
    /// Create a new game: an empty `size` x `size` board seeded with two tiles
    pub fn new(size: usize, rng: R) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        let mut engine = Self {
            board,
            score: 0,
            moves: 0,
            rng,
        };
        engine.reset();
        Ok(engine)
    }

    /// Adopt an existing board and score without spawning anything
    pub fn from_board(board: Board, score: u64, rng: R) -> Self {
        Self {
            board,
            score,
            moves: 0,
            rng,
        }
    }

    /// Start a new game of the same size, keeping the random source
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        info!("new {0}x{0} game", self.board.size());
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_tile(&self) -> Cell {
        self.board.max_tile()
    }

    /// All empty positions as (row, col), in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.board.empty_cells()
    }

    /// Slide the board in `direction`.
    ///
    /// The slide runs on a copy. If the copy matches the current board the
    /// move is rejected and nothing (board, score, random source) changes.
    /// Otherwise the copy is committed, merge points are added and one tile
    /// is spawned.
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        let mut candidate = self.board.clone();
        let points = slide(&mut candidate, direction);

        if candidate == self.board {
            trace!("move {} left the board unchanged", direction);
            return MoveResult::unchanged();
        }

        self.board = candidate;
        self.score += points;
        self.moves = self.moves.wrapping_add(1);
        let spawned = self.spawn_tile();

        debug!(
            "move {} #{}: +{} points (score {}), spawned {:?}",
            direction, self.moves, points, self.score, spawned
        );

        MoveResult {
            changed: true,
            points,
            spawned,
        }
    }

    /// Parse a direction name and apply it.
    ///
    /// Unknown names return `InvalidDirection` and leave the game untouched.
    pub fn apply_named_move(&mut self, name: &str) -> Result<MoveResult, GameError> {
        let direction: Direction = name.parse()?;
        Ok(self.apply_move(direction))
    }

    /// Apply a game action. `Restart` reports `changed` as the board is replaced.
    pub fn apply_action(&mut self, action: GameAction) -> MoveResult {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => {
                self.reset();
                MoveResult {
                    changed: true,
                    points: 0,
                    spawned: None,
                }
            }
        }
    }

    /// Place a 2 (90%) or a 4 (10%) in a uniformly chosen empty cell.
    ///
    /// A full board is left alone and `None` is returned.
    pub fn spawn_tile(&mut self) -> Option<Spawn> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let pick = self.rng.next_range(empty.len() as u32) as usize;
        let (row, col) = empty[pick];
        let value = if self.rng.next_range(SPAWN_ODDS_DENOMINATOR) < SPAWN_LOW_ODDS {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        };
        self.board.set(row, col, value);
        Some(Spawn { row, col, value })
    }

    /// Check whether any tile has reached [`WIN_TILE`]
    pub fn has_won(&self) -> bool {
        self.board.max_tile() >= WIN_TILE
    }

    /// Check whether no move can change the board
    pub fn is_game_over(&self) -> bool {
        !self.board.has_empty_cells() && !self.board.has_adjacent_pair()
    }

    /// Won takes precedence over Lost.
    pub fn terminal(&self) -> Terminal {
        if self.has_won() {
            Terminal::Won
        } else if self.is_game_over() {
            Terminal::Lost
        } else {
            Terminal::None
        }
    }

    /// Check whether `direction` would change the board, without applying it
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut candidate = self.board.clone();
        slide(&mut candidate, direction);
        candidate != self.board
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.board.size();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.score = self.score;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.terminal = self.terminal();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
