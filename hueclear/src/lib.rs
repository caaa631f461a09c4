//! hueclear — click a square to clear it and every square of a similar
//! colour, scoring fewer points with every attempt.

pub mod cell;
pub mod color;
pub mod events;
pub mod game;
pub mod log;
pub mod model;

pub use cell::{CELL_COUNT, COLS, Cell, ROWS};
pub use color::Rgb;
pub use events::{GameEvent, SelectionResult};
pub use game::{GameConfig, GameState, Phase, Selection};
pub use model::HueClearModel;
