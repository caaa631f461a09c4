//! The drawable [`Scene`]: a list of coloured game-space [`Quad`]s plus a
//! line of status text.
//!
//! Models fill a scene in [`Model::draw`](crate::app::Model::draw); back-ends
//! rasterize it onto their own surface.

use crate::geom::Rect;
use crate::style::Color;

/// A filled rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    pub rect: Rect,
    pub color: Color,
}

/// One frame worth of drawing commands. Quads are painted in order, later
/// ones over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clear: Color,
    pub quads: Vec<Quad>,
    pub status: String,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every quad and paint the background with `color`.
    pub fn clear_to(&mut self, color: Color) {
        self.clear = color;
        self.quads.clear();
        self.status.clear();
    }

    /// Append a filled rectangle.
    #[inline]
    pub fn push(&mut self, rect: Rect, color: Color) {
        self.quads.push(Quad { rect, color });
    }

    /// Replace the status text.
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_contents() {
        let mut scene = Scene::new();
        scene.push(Rect::from_edges(-1.0, -1.0, 0.0, 0.0), Color::WHITE);
        scene.set_status("hello");
        scene.clear_to(Color::from_rgb(10, 20, 30));
        assert!(scene.quads.is_empty());
        assert!(scene.status.is_empty());
        assert_eq!(scene.clear, Color::from_rgb(10, 20, 30));
    }

    #[test]
    fn quads_keep_push_order() {
        let mut scene = Scene::new();
        let red = Color::from_rgb(255, 0, 0);
        let blue = Color::from_rgb(0, 0, 255);
        scene.push(Rect::from_edges(-1.0, -1.0, 1.0, 1.0), red);
        scene.push(Rect::from_edges(0.0, 0.0, 1.0, 1.0), blue);
        let colors: Vec<Color> = scene.quads.iter().map(|q| q.color).collect();
        assert_eq!(colors, vec![red, blue]);
    }
}
