use tui_2048::core::{Board, GameSnapshot, GridEngine, SimpleRng};
use tui_2048::term::{
    encode_diff_into, encode_full_into, tile_style, AnchorY, FrameBuffer, GameView, Viewport,
};
use tui_2048::types::Terminal;

fn snapshot(rows: Vec<Vec<u32>>, score: u64) -> GameSnapshot {
    let board = Board::from_rows(rows).unwrap();
    GridEngine::from_board(board, score, SimpleRng::new(1)).snapshot()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_places_tile_labels() {
    let snap = snapshot(
        vec![
            vec![2048, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 16, 0],
            vec![0, 0, 0, 0],
        ],
        0,
    );
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    // 38 wide board + 2 gap + 16 panel fits exactly.
    let fb = view.render(&snap, Viewport::new(56, 17));

    // Tile (0,0) starts at (2,1); its label row is the middle one.
    let row = fb.row_text(2);
    assert_eq!(&row[2..9], " 2048  ");
    assert_eq!(fb.get(3, 2).unwrap().style, tile_style(2048));

    // Tile (2,2) starts at (2 + 2*9, 1 + 2*4).
    let row = fb.row_text(10);
    assert_eq!(&row[20..27], "  16   ");
    assert_eq!(fb.get(20, 9).unwrap().style, tile_style(16));

    // Empty slots use the empty style and show no label.
    assert_eq!(fb.get(11, 2).unwrap().style, tile_style(0));
    assert_eq!(fb.get(11, 2).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = snapshot(vec![vec![2, 4], vec![0, 128]], 1234);
    let fb = GameView::default().render(&snap, Viewport::new(60, 20));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST TILE"));
    assert!(all.contains("128"));
    assert!(all.contains("r restart"));
}

#[test]
fn term_view_skips_panel_when_narrow() {
    let snap = snapshot(vec![vec![2, 4], vec![0, 128]], 1234);
    // A 2x2 board needs 20x9.
    let fb = GameView::default().render(&snap, Viewport::new(20, 9));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_shows_win_banner() {
    let snap = snapshot(vec![vec![2048, 2], vec![0, 0]], 20000);
    assert_eq!(snap.terminal, Terminal::Won);
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    let all = screen_text(&fb);
    assert!(all.contains("YOU WIN!"));
    assert!(!all.contains("GAME OVER"));
}

#[test]
fn term_view_shows_game_over_banner() {
    let snap = snapshot(vec![vec![2, 4], vec![4, 2]], 12);
    assert_eq!(snap.terminal, Terminal::Lost);
    let fb = GameView::default().render(&snap, Viewport::new(80, 24));
    assert!(screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_reports_too_small_terminal() {
    let snap = GridEngine::with_seed(6, 5).unwrap().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(40, 12));
    assert!(fb.row_text(0).starts_with("Terminal too small for the board."));
}

#[test]
fn term_view_reuses_framebuffer_across_resizes() {
    let snap = snapshot(vec![vec![2, 0], vec![0, 0]], 0);
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(30, 10));
    view.render_into(&snap, Viewport::new(50, 12), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 12));
}

#[test]
fn renderer_encodes_frame_to_writer() {
    let snap = snapshot(vec![vec![2, 0], vec![0, 4]], 0);
    let fb = GameView::default().render(&snap, Viewport::new(40, 10));

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    assert!(!out.is_empty());

    // Unchanged frames produce no cell writes.
    let mut diff = Vec::new();
    encode_diff_into(&fb, &fb, &mut diff).unwrap();
    assert!(diff.len() < out.len());
    assert!(!String::from_utf8_lossy(&diff).contains('2'));
}
