//! Input events delivered to a [`Model`](crate::app::Model).

use crate::geom::Point;

/// A key the game reacts to. Back-ends drop every other key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    /// A printable character.
    Char(char),
}

/// An input message.
///
/// Click positions are already converted to game space by the back-end.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    /// A key was pressed; `ctrl` is set when Control was held.
    KeyDown { key: Key, ctrl: bool },
    /// The primary button was pressed.
    Click { pos: Point },
    /// The device surface changed size. [`AppRunner`](crate::app::AppRunner)
    /// answers it with a redraw; models never receive it.
    Resize,
    /// Sent once when the application starts.
    Init,
    /// Request to quit.
    Quit,
}
