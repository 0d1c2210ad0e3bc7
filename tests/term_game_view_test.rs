//! Game view rendering tests against the public crate surface.

use blockfall::core::Game;
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{BOARD_COLS, BOARD_ROWS, ShapeKind};

fn frame_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

fn game_with_current(kind: ShapeKind) -> Game {
    for seed in 1..10_000 {
        let game = Game::new(BOARD_ROWS, BOARD_COLS, seed);
        if game.current().kind == kind {
            return game;
        }
    }
    panic!("no seed below 10000 produced a {kind:?} piece");
}

#[test]
fn test_frame_has_field_border_and_panel() {
    let game = Game::new(BOARD_ROWS, BOARD_COLS, 1);
    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(80, 24));
    let text = frame_text(&fb);

    assert!(text.contains('┌'));
    assert!(text.contains('┐'));
    assert!(text.contains('└'));
    assert!(text.contains('┘'));
    assert!(text.contains("Next"));
    assert!(text.contains("Score: 0"));
}

#[test]
fn test_score_line_tracks_the_engine() {
    let mut game = game_with_current(ShapeKind::O);
    for x in 0..BOARD_COLS as i8 {
        if x != 4 && x != 5 {
            game.board_mut().set(x, 19, 1);
        }
    }
    game.hard_drop();
    assert_eq!(game.score(), 1);

    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(80, 24));
    assert!(frame_text(&fb).contains("Score: 1"));
}

#[test]
fn test_reusing_a_framebuffer_across_frames() {
    let mut game = Game::new(BOARD_ROWS, BOARD_COLS, 1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&game, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    game.tick();
    view.render_into(&game, Viewport::new(100, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
    assert!(frame_text(&fb).contains("Score: 0"));
}

#[test]
fn test_game_over_banner() {
    let mut game = Game::new(BOARD_ROWS, BOARD_COLS, 9);
    for x in 3..=6 {
        for y in 0..=1 {
            game.board_mut().set(x, y, 2);
        }
    }
    game.hard_drop();
    assert!(!game.is_active());

    let view = GameView::default();
    let fb = view.render(&game, Viewport::new(80, 24));
    assert!(frame_text(&fb).contains("GAME OVER"));
}
