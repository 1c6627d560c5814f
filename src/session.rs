//! Game session - the presentation-side driver of a [`GridEngine`].
//!
//! The engine only reports predicates. A session applies actions, checks
//! `has_won` and then `is_game_over` after every move that changed the board,
//! and latches the outcome so later moves are ignored until a restart.

use log::{info, trace};

use crate::core::{GameSnapshot, GridEngine, RandomSource};
use crate::types::{GameAction, MoveResult};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

#[derive(Debug)]
pub struct GameSession<R> {
    engine: GridEngine<R>,
    phase: Phase,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(engine: GridEngine<R>) -> Self {
        let mut session = Self {
            engine,
            phase: Phase::Playing,
        };
        session.update_phase();
        session
    }

    pub fn engine(&self) -> &GridEngine<R> {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply one action.
    ///
    /// Moves are dropped once the game is won or lost; `Restart` always works.
    pub fn handle(&mut self, action: GameAction) -> MoveResult {
        match action {
            GameAction::Restart => {
                let result = self.engine.apply_action(action);
                self.phase = Phase::Playing;
                result
            }
            GameAction::Move(direction) => {
                if self.phase != Phase::Playing {
                    trace!("ignoring {} after the game ended", direction);
                    return MoveResult::unchanged();
                }
                let result = self.engine.apply_move(direction);
                if result.changed {
                    self.update_phase();
                }
                result
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    fn update_phase(&mut self) {
        if self.engine.has_won() {
            self.phase = Phase::Won;
            info!(
                "won after {} moves with score {}",
                self.engine.moves(),
                self.engine.score()
            );
        } else if self.engine.is_game_over() {
            self.phase = Phase::Lost;
            info!(
                "no moves left after {} moves, final score {}",
                self.engine.moves(),
                self.engine.score()
            );
        }
    }
}
