use tui_memory::core::GameState;
use tui_memory::term::{GameView, HudState, Viewport};
use tui_memory::types::{Difficulty, Position};

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_difficulty(Difficulty::Easy, 1).snapshot();
    let view = GameView::default();

    // 4 tiles of width 5 with 3 gaps, plus border and padding => 27 wide.
    // 4 rows of height 1 with 3 gaps, plus border => 9 tall.
    let vp = Viewport::new(27, 9);
    let fb = view.render(&snap, HudState::default(), vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(26, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 8).unwrap().ch, '└');
    assert_eq!(fb.get(26, 8).unwrap().ch, '┘');
}

#[test]
fn term_view_hides_values_until_revealed() {
    let mut game = GameState::with_difficulty(Difficulty::Easy, 1);
    let view = GameView::default();
    let vp = Viewport::new(27, 9);

    let fb = view.render(&game.snapshot(), HudState::default(), vp);
    let first_row = fb.row_text(1);
    assert_eq!(first_row.matches('?').count(), 4);

    game.select_tile(Position::new(0, 0));
    let value = game.board().get(Position::new(0, 0)).unwrap().value;
    let fb = view.render(&game.snapshot(), HudState::default(), vp);
    let first_row = fb.row_text(1);
    assert_eq!(first_row.matches('?').count(), 3);
    assert!(first_row.contains(&value.to_string()));
}

#[test]
fn term_view_click_maps_to_rendered_tile() {
    let snap = GameState::with_difficulty(Difficulty::Medium, 1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(6, 6, vp);

    // Third column, second row: x = origin + 2 * (5 + 1), y = origin + 1 * (1 + 1).
    let x = layout.start_x + 2 + 12;
    let y = layout.start_y + 1 + 2;
    assert_eq!(view.tile_at(&snap, vp, x, y), Some(Position::new(1, 2)));
    assert_eq!(view.tile_at(&snap, vp, x, y + 1), None);
    assert_eq!(view.tile_at(&snap, vp, 0, 0), None);
}

#[test]
fn term_view_shows_insufficient_score_message() {
    let mut game = GameState::with_difficulty(Difficulty::Easy, 1);
    let _ = game.hint();
    let message = game
        .take_events()
        .into_iter()
        .find_map(|e| match e {
            tui_memory::types::GameEvent::ShowMessage(text) => Some(text),
            _ => None,
        })
        .unwrap();

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let hud = HudState {
        message: Some(&message),
        ..HudState::default()
    };
    let fb = view.render(&game.snapshot(), hud, vp);
    let text: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(text.contains("You need at least 5 points to use a hint."));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = GameState::with_difficulty(Difficulty::Hard, 1).snapshot();
    let view = GameView::default();
    let fb = view.render(&snap, HudState::default(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
