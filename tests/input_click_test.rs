//! Pointer events travel from the terminal through the layout into the session.

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tictactoe::core::Session;
use tictactoe::input::map_event;
use tictactoe::term::{BoardLayout, Hit, Viewport};
use tictactoe::types::{InputEvent, MoveRejected, Player};

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn dispatch(session: &mut Session, layout: &BoardLayout, event: &Event) -> Option<Hit> {
    let Some(InputEvent::PointerPressed { x, y }) = map_event(event) else {
        return None;
    };
    let hit = layout.hit_test(x, y);
    if let Some(Hit::Cell { row, col }) = hit {
        let _ = session.handle_move(row, col);
    }
    hit
}

#[test]
fn click_on_cell_places_mark() {
    let layout = BoardLayout::fit(Viewport::new(80, 24));
    let mut session = Session::default();

    let (x, y) = layout.cell_center(2, 1);
    assert_eq!(
        dispatch(&mut session, &layout, &click(x, y)),
        Some(Hit::Cell { row: 2, col: 1 })
    );
    assert_eq!(session.board().get(2, 1), Some(Some(Player::One)));
    assert_eq!(session.active_player(), Some(Player::Two));
}

#[test]
fn click_on_grid_line_is_ignored() {
    let layout = BoardLayout::fit(Viewport::new(80, 24));
    let mut session = Session::default();
    let before = session.snapshot();

    let (_, y) = layout.cell_center(0, 0);
    assert_eq!(dispatch(&mut session, &layout, &click(layout.line_x(1), y)), None);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn clicking_an_occupied_cell_keeps_turn() {
    let layout = BoardLayout::fit(Viewport::new(80, 24));
    let mut session = Session::default();
    let (x, y) = layout.cell_center(1, 1);

    dispatch(&mut session, &layout, &click(x, y));
    session.tick(3_000);
    let before = session.snapshot();

    dispatch(&mut session, &layout, &click(x, y));
    assert_eq!(session.snapshot(), before);
    assert!(matches!(
        session.handle_move(1, 1),
        Err(MoveRejected::InvalidMove(_))
    ));
}

#[test]
fn close_button_is_hit() {
    let layout = BoardLayout::fit(Viewport::new(80, 24));
    let mut session = Session::default();
    let button = layout.close_button();
    assert_eq!(
        dispatch(&mut session, &layout, &click(button.x + 2, button.y)),
        Some(Hit::Close)
    );
}
