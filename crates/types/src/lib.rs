//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the grid engine, the input
//! mapping and the terminal renderer. Everything here is plain data with no
//! I/O, so it can be used from any layer.
//!
//! # Board Dimensions
//!
//! The board is square. The classic game is played on 4x4, but any size of
//! at least [`MIN_SIZE`] is accepted:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIZE` | 4 | Side length used when none is configured |
//! | `MIN_SIZE` | 2 | Smallest accepted side length |
//! | `WIN_TILE` | 2048 | A tile at or above this value wins |
//! | `INITIAL_TILES` | 2 | Tiles placed when a game starts |
//!
//! # Spawn Odds
//!
//! A spawned tile is a 2 nine times out of ten and a 4 otherwise. The odds are
//! expressed as integers so the engine can draw them from any `u32` source.
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, WIN_TILE};
//!
//! // Parse a direction (case-insensitive)
//! let dir: Direction = "up".parse().unwrap();
//! assert_eq!(dir, Direction::Up);
//!
//! // Unknown names are rejected
//! assert!("north-east".parse::<Direction>().is_err());
//!
//! // Actions wrap directions
//! assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
//!
//! assert_eq!(WIN_TILE, 2048);
//! ```

use std::fmt;
use std::str::FromStr;

/// Side length of the classic board
pub const DEFAULT_SIZE: usize = 4;

/// Smallest board side length the engine accepts
pub const MIN_SIZE: usize = 2;

/// Reaching a tile of at least this value wins the game
pub const WIN_TILE: u32 = 2048;

/// Number of tiles placed on an empty board when a game starts
pub const INITIAL_TILES: usize = 2;

/// Value of the common spawn
pub const SPAWN_LOW: u32 = 2;

/// Value of the rare spawn
pub const SPAWN_HIGH: u32 = 4;

/// Denominator of the spawn odds
pub const SPAWN_ODDS_DENOMINATOR: u32 = 10;

/// Out of [`SPAWN_ODDS_DENOMINATOR`], how many spawns are [`SPAWN_LOW`] (90%)
pub const SPAWN_LOW_ODDS: u32 = 9;

/// A board cell: 0 for empty, otherwise a power of two.
pub type Cell = u32;

/// Errors surfaced by the engine API.
///
/// The failure surface is narrow: everything else is a total function over
/// well-formed state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A direction name or code that does not map to one of the four moves.
    #[error("invalid direction: {0}")]
    InvalidDirection(String),
    /// A board shape or cell contents that cannot form a game.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// The four move directions.
///
/// A move slides every tile as far as possible along one axis. `Left` and
/// `Right` gather tiles on column 0 and the last column. `Up` transposes and
/// reverses before the left slide, so it gathers tiles on the last row;
/// `Down` only transposes and gathers them on row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::Up.as_str(), "up");
    /// assert_eq!(Direction::Right.as_str(), "right");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Numeric code (0=Up, 1=Down, 2=Left, 3=Right).
    pub fn code(&self) -> u8 {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GameError;

    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(GameError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| GameError::InvalidDirection(format!("code {}", value)))
    }
}

/// Actions that can be applied to a game
///
/// Only `Move` reaches the board; `Restart` starts a new game of the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Discard the current game and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        s.parse::<Direction>().ok().map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Terminal state of a game, as derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terminal {
    /// Still playable
    #[default]
    None,
    /// A tile of at least [`WIN_TILE`] exists
    Won,
    /// No empty cell and no adjacent equal pair
    Lost,
}

impl Terminal {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Terminal::None)
    }
}

/// A tile placed by the engine after a changed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: Cell,
}

/// Outcome of applying one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether the board differs from its pre-move state.
    pub changed: bool,
    /// Points gained from merges in this move (0 when unchanged).
    pub points: u64,
    /// The tile spawned afterwards, if any.
    pub spawned: Option<Spawn>,
}

impl MoveResult {
    /// Result of a move that left the board untouched.
    pub fn unchanged() -> Self {
        Self::default()
    }
}
