//! Translates winit input events into hueclear [`Msg`] values.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key as WKey, ModifiersState, NamedKey};

use hueclear_core::{
    geom::Viewport,
    messages::{Key, Msg},
};

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

pub(crate) fn translate_key(key: &WKey) -> Option<Key> {
    match key {
        WKey::Named(NamedKey::Escape) => Some(Key::Escape),
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            }
        }
        _ => None,
    }
}

pub(crate) fn translate_keyboard(event: &KeyEvent, mods: ModifiersState) -> Option<Msg> {
    // Only key-down (pressed) events.
    if event.state != ElementState::Pressed {
        return None;
    }
    Some(Msg::KeyDown {
        key: translate_key(&event.logical_key)?,
        ctrl: mods.control_key(),
    })
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

/// Button events carry no position, so the last cursor position is used.
/// Only a left press becomes a click; without a cursor position (cursor
/// never entered, or zero-sized window) it is dropped too.
pub(crate) fn translate_mouse_button(
    btn_state: ElementState,
    button: MouseButton,
    cursor: Option<PhysicalPosition<f64>>,
    viewport: Viewport,
) -> Option<Msg> {
    if btn_state != ElementState::Pressed || button != MouseButton::Left {
        return None;
    }
    let cursor = cursor?;
    let pos = viewport.to_game(cursor.x, cursor.y)?;
    Some(Msg::Click { pos })
}
