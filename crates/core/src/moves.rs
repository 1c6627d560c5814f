//! Move module - the direction-agnostic slide
//!
//! Every move is computed as a left slide. The board is first reoriented so
//! the requested edge becomes column 0, the rows are compressed, merged in a
//! single forward sweep and compressed again, and the reorientation is undone.

use crate::types::{Cell, Direction};
use crate::board::merged_value;
use crate::Board;

/// How to turn the board so a direction becomes "left".
///
/// Normalization applies the transpose first, then the row reversal; the
/// inverse applies them in the opposite order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub transpose: bool,
    pub reverse: bool,
}

/// Orientation table indexed by [`Direction::code`].
const ORIENTATIONS: [Orientation; 4] = [
    // Up: columns become rows, reversed, so tiles gather on the last row.
    Orientation {
        transpose: true,
        reverse: true,
    },
    // Down: columns become rows, so tiles gather on row 0.
    Orientation {
        transpose: true,
        reverse: false,
    },
    // Left
    Orientation {
        transpose: false,
        reverse: false,
    },
    // Right
    Orientation {
        transpose: false,
        reverse: true,
    },
];

impl Orientation {
    pub fn for_direction(direction: Direction) -> Self {
        ORIENTATIONS[direction.code() as usize]
    }

    /// Reorient `board` so that `direction` points at column 0.
    pub fn normalize(&self, board: &mut Board) {
        if self.transpose {
            board.transpose();
        }
        if self.reverse {
            board.reverse_rows();
        }
    }

    /// Undo [`Orientation::normalize`].
    pub fn restore(&self, board: &mut Board) {
        if self.reverse {
            board.reverse_rows();
        }
        if self.transpose {
            board.transpose();
        }
    }
}

/// Slide all non-zero values toward index 0, keeping their order.
pub fn compress_row(row: &mut [Cell]) {
    let mut write = 0usize;
    for read in 0..row.len() {
        if row[read] != 0 {
            row.swap(write, read);
            write += 1;
        }
    }
}

/// Merge equal neighbours in one left-to-right sweep.
///
/// A merged cell is not compared again in the same sweep, so `[2, 2, 2, 2]`
/// becomes `[4, 0, 4, 0]` and `[2, 2, 2, 0]` becomes `[4, 0, 2, 0]`. A pair
/// whose double would not fit in a [`Cell`] stays as it is.
/// Returns the sum of the merged values.
pub fn merge_row(row: &mut [Cell]) -> u64 {
    let mut points = 0u64;
    let mut j = 0usize;
    while j + 1 < row.len() {
        if let Some(merged) = merged_value(row[j], row[j + 1]) {
            row[j] = merged;
            row[j + 1] = 0;
            points += merged as u64;
            j += 2;
        } else {
            j += 1;
        }
    }
    points
}

/// Compress, merge and compress one row. Returns the points earned.
pub fn slide_row(row: &mut [Cell]) -> u64 {
    compress_row(row);
    let points = merge_row(row);
    compress_row(row);
    points
}

/// Apply a full move to `board` in place. Returns the points earned.
///
/// Whether anything moved is left to the caller, which compares against the
/// pre-move board.
pub fn slide(board: &mut Board, direction: Direction) -> u64 {
    let orientation = Orientation::for_direction(direction);
    orientation.normalize(board);

    let mut points = 0u64;
    for row in 0..board.size() {
        points += slide_row(board.row_mut(row));
    }

    orientation.restore(board);
    points
}
