//! Event mapping from terminal events to game input events.

use crate::types::InputEvent;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map a terminal event to a game input event.
///
/// Everything the game does not react to (other keys, scroll, right clicks,
/// button releases, focus changes, paste) maps to `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(*key) => {
            Some(InputEvent::Quit)
        }
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerPressed { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved { x, y }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
