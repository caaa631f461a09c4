//! **hueclear-core** — framework types shared by the hueclear game and its
//! back-ends.
//!
//! This crate provides game-space geometry, display colours, input events,
//! the drawable [`Scene`], and the Elm-architecture application loop.

pub mod app;
pub mod geom;
pub mod messages;
pub mod scene;
pub mod style;

pub use app::{App, AppConfig, AppRunner, Driver, Effect, EventLoopDriver, Model};
pub use geom::{Point, Rect, Viewport};
pub use messages::{Key, Msg};
pub use scene::{Quad, Scene};
pub use style::Color;
