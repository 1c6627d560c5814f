//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]; only the four
//! directions and restart ever reach the game.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
