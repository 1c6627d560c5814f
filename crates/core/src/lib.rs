//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 grid engine: board storage, the slide and
//! merge rules, tile spawning and win/loss detection.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Randomness is injected, so the same seed replays the same game
//! - **Testable**: Spawns can be scripted with [`rng::ScriptedRng`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid of power-of-two tiles
//! - [`moves`]: Orientation table plus compress/merge for a single direction
//! - [`engine`]: [`GridEngine`], which applies moves, scores and spawns
//! - [`rng`]: The [`RandomSource`] seam and a seedable LCG
//! - [`snapshot`]: Owned, read-only view handed to presenters
//!
//! # Game Rules
//!
//! - **Slide**: Tiles move as far as they can toward the chosen edge
//! - **Merge**: Two equal neighbours become one tile of double value, scoring that value;
//!   a tile merges at most once per move
//! - **Spawn**: Every move that changes the board adds a 2 (90%) or a 4 (10%) on an empty cell
//! - **Win**: Any tile of 2048 or more
//! - **Loss**: Full board with no equal neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GridEngine;
//! use tui_2048_types::{Direction, Terminal};
//!
//! let mut game = GridEngine::with_seed(4, 12345).unwrap();
//!
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.apply_move(dir);
//! }
//!
//! assert!(game.terminal() != Terminal::Won);
//! ```

pub mod board;
pub mod engine;
pub mod moves;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{is_tile_value, merged_value, Board};
pub use engine::GridEngine;
pub use moves::{slide, Orientation};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::GameSnapshot;
