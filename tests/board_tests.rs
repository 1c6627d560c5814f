//! Board tests - grid storage and the slide rules

use tui_2048::core::{slide, Board, Orientation};
use tui_2048::types::{Direction, GameError};

fn board(rows: Vec<Vec<u32>>) -> Board {
    Board::from_rows(rows).unwrap()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(4).unwrap();
    assert_eq!(board.size(), 4);
    assert!(board.is_empty());

    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(board.get(row, col), Some(0), "({}, {})", row, col);
        }
    }
    assert_eq!(board.empty_cells().len(), 16);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(3).unwrap();
    assert_eq!(board.get(3, 0), None);
    assert_eq!(board.get(0, 3), None);
}

#[test]
fn test_board_size_below_minimum() {
    assert!(matches!(
        Board::new(1),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_empty_cells_are_row_major() {
    let b = board(vec![vec![0, 2, 0], vec![4, 0, 8], vec![16, 32, 0]]);
    assert_eq!(b.empty_cells(), vec![(0, 0), (0, 2), (1, 1), (2, 2)]);
}

#[test]
fn test_max_tile() {
    assert_eq!(Board::new(2).unwrap().max_tile(), 0);
    assert_eq!(board(vec![vec![2, 64], vec![8, 0]]).max_tile(), 64);
}

#[test]
fn test_left_merge_scan() {
    let mut b = board(vec![
        vec![2, 2, 2, 2],
        vec![0, 2, 0, 2],
        vec![2, 2, 2, 0],
        vec![4, 0, 4, 4],
    ]);
    let points = slide(&mut b, Direction::Left);
    assert_eq!(
        b.rows(),
        vec![
            vec![4, 4, 0, 0],
            vec![4, 0, 0, 0],
            vec![4, 2, 0, 0],
            vec![8, 4, 0, 0],
        ]
    );
    assert_eq!(points, 8 + 4 + 4 + 8);
}

#[test]
fn test_right_merge_prefers_right_edge() {
    let mut b = board(vec![vec![2, 2, 2, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0], vec![0, 0, 0, 0]]);
    slide(&mut b, Direction::Right);
    assert_eq!(b.row(0), &[0, 0, 2, 4]);
}

#[test]
fn test_up_transposes_then_reverses() {
    // Transposed and reversed, the columns read [2,0,0], [4,4,0], [8,0,0];
    // after the left slide every column gathers on the last row.
    let mut b = board(vec![vec![0, 0, 0], vec![0, 4, 0], vec![2, 4, 8]]);
    let points = slide(&mut b, Direction::Up);
    assert_eq!(b.rows(), vec![vec![0, 0, 0], vec![0, 0, 0], vec![2, 8, 8]]);
    assert_eq!(points, 8);
}

#[test]
fn test_up_merges_pair_nearest_last_row() {
    let mut b = board(vec![vec![2, 0, 0], vec![2, 0, 0], vec![2, 0, 0]]);
    assert_eq!(slide(&mut b, Direction::Up), 4);
    assert_eq!(b.rows(), vec![vec![0, 0, 0], vec![2, 0, 0], vec![4, 0, 0]]);
}

#[test]
fn test_down_transposes_only() {
    let mut b = board(vec![vec![0, 0, 0], vec![0, 4, 0], vec![2, 4, 8]]);
    let points = slide(&mut b, Direction::Down);
    assert_eq!(b.rows(), vec![vec![2, 8, 8], vec![0, 0, 0], vec![0, 0, 0]]);
    assert_eq!(points, 8);
}

#[test]
fn test_down_round_trip_without_legal_move() {
    // Every column is already packed toward row 0 with no equal neighbours.
    let original = board(vec![vec![2, 4, 8], vec![4, 8, 0], vec![8, 0, 0]]);

    let orientation = Orientation::for_direction(Direction::Down);
    let mut b = original.clone();
    orientation.normalize(&mut b);
    orientation.restore(&mut b);
    assert_eq!(b, original);

    let mut moved = original.clone();
    assert_eq!(slide(&mut moved, Direction::Down), 0);
    assert_eq!(moved, original);

    let mut up = original.clone();
    slide(&mut up, Direction::Up);
    assert_eq!(up.rows(), vec![vec![2, 0, 0], vec![4, 4, 0], vec![8, 8, 8]]);
}

#[test]
fn test_display_matches_rows() {
    let b = board(vec![vec![2, 0], vec![1024, 4]]);
    assert_eq!(format!("{}", b), "2\t0\n1024\t4\n");
}
