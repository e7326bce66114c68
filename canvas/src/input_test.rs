use super::*;

// =============================================================
// Key
// =============================================================

#[test]
fn delete_and_backspace_delete() {
    assert!(Key("Delete".to_owned()).is_delete());
    assert!(Key("Backspace".to_owned()).is_delete());
    assert!(!Key("d".to_owned()).is_delete());
}

#[test]
fn escape_is_recognized() {
    assert!(Key("Escape".to_owned()).is_escape());
    assert!(!Key("Delete".to_owned()).is_escape());
}

// =============================================================
// Cursor
// =============================================================

#[test]
fn cursor_default_is_default() {
    assert_eq!(Cursor::default(), Cursor::Default);
}

#[test]
fn cursor_css_names() {
    assert_eq!(Cursor::Default.css(), "default");
    assert_eq!(Cursor::Move.css(), "move");
    assert_eq!(Cursor::Resize.css(), "nwse-resize");
}

#[test]
fn cursor_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Cursor::Resize).unwrap(), "\"resize\"");
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
    assert!(InputState::default().target().is_none());
}

#[test]
fn drag_states_expose_target() {
    let item = InputState::DraggingItem { id: "a".to_owned(), last: Point::screen(0, 0) };
    let handle = InputState::DraggingHandle { id: "b".to_owned(), corner: Corner::Se, last: Point::screen(0, 0) };
    assert_eq!(item.target().map(String::as_str), Some("a"));
    assert_eq!(handle.target().map(String::as_str), Some("b"));
}

#[test]
fn panning_has_no_target() {
    let pan = InputState::Panning { last: Point::screen(1, 1) };
    assert!(pan.target().is_none());
    assert!(!pan.is_idle());
}
