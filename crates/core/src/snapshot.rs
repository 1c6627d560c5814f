use crate::types::{Cell, Terminal};

/// Read-only copy of everything a presenter needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major cells, `size * size` long.
    pub board: Vec<Cell>,
    pub score: u64,
    pub moves: u32,
    pub max_tile: Cell,
    pub terminal: Terminal,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.size = 0;
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.terminal = Terminal::None;
    }

    /// Cell at (row, col), or None when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.board.get(row * self.size + col).copied()
    }

    pub fn playable(&self) -> bool {
        !self.terminal.is_terminal()
    }
}
