//! Geometry primitives: [`Point`], [`Rect`] and [`Viewport`].
//!
//! Game space is the normalized square \[-1, 1\] × \[-1, 1\], origin centered,
//! X growing right and Y growing *up*. Device space (window pixels or terminal
//! cells) has its origin at the top-left corner with Y growing down; a
//! [`Viewport`] converts between the two.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A point in game space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Origin (0, 0), the center of the board.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in game space, stored by its four edges.
///
/// Rectangles built from the same edge values meet exactly, so inclusive
/// [`contains`](Self::contains) leaves no gap along a shared edge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl Rect {
    #[inline]
    pub const fn from_edges(left: f32, bottom: f32, right: f32, top: f32) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Whether `p` lies inside the rectangle, edges included.
    ///
    /// NaN coordinates never compare as inside.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// A half-open span of device units `[x0, x1) × [y0, y1)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeviceSpan {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

/// The size of a device surface (pixels for a window, character cells for a
/// terminal) onto which game space is stretched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Convert a device position into game space, flipping the Y axis.
    ///
    /// Returns `None` for an empty viewport.
    pub fn to_game(&self, px: f64, py: f64) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        let x = (px / self.width as f64) * 2.0 - 1.0;
        let y = 1.0 - (py / self.height as f64) * 2.0;
        Some(Point::new(x as f32, y as f32))
    }

    /// The device span covered by a game-space rectangle, clamped to the
    /// surface. Returns `None` when nothing of it is visible.
    pub fn to_device(&self, rect: &Rect) -> Option<DeviceSpan> {
        if self.is_empty() {
            return None;
        }
        let w = self.width as f32;
        let h = self.height as f32;
        let to_x = |gx: f32| (((gx + 1.0) * 0.5 * w).round().clamp(0.0, w)) as usize;
        let to_y = |gy: f32| (((1.0 - gy) * 0.5 * h).round().clamp(0.0, h)) as usize;

        let span = DeviceSpan {
            x0: to_x(rect.left),
            x1: to_x(rect.right),
            y0: to_y(rect.top),
            y1: to_y(rect.bottom),
        };
        if span.x0 >= span.x1 || span.y0 >= span.y1 {
            return None;
        }
        Some(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect::from_edges(-1.0, -1.0, -0.5, -0.5);
        assert!(r.contains(Point::new(-1.0, -1.0)));
        assert!(r.contains(Point::new(-0.5, -0.5)));
        assert!(r.contains(Point::new(-0.8, -0.7)));
        assert!(!r.contains(Point::new(-0.49, -0.8)));
        assert!(!r.contains(Point::new(f32::NAN, -0.8)));
    }

    #[test]
    fn viewport_corners_map_to_game_corners() {
        let vp = Viewport::new(600, 600);
        assert_eq!(vp.to_game(0.0, 0.0), Some(Point::new(-1.0, 1.0)));
        assert_eq!(vp.to_game(600.0, 600.0), Some(Point::new(1.0, -1.0)));
        assert_eq!(vp.to_game(300.0, 300.0), Some(Point::ZERO));
    }

    #[test]
    fn empty_viewport_has_no_game_point() {
        assert_eq!(Viewport::new(0, 480).to_game(10.0, 10.0), None);
        assert!(Viewport::new(640, 0).to_device(&Rect::from_edges(-1.0, -1.0, 1.0, 1.0)).is_none());
    }

    #[test]
    fn full_square_covers_surface() {
        let vp = Viewport::new(640, 480);
        let span = vp.to_device(&Rect::from_edges(-1.0, -1.0, 1.0, 1.0)).unwrap();
        assert_eq!(span, DeviceSpan { x0: 0, y0: 0, x1: 640, y1: 480 });
    }

    #[test]
    fn bottom_left_rect_lands_bottom_left() {
        let vp = Viewport::new(100, 100);
        let span = vp.to_device(&Rect::from_edges(-1.0, -1.0, -0.6, -0.6)).unwrap();
        assert_eq!(span, DeviceSpan { x0: 0, y0: 80, x1: 20, y1: 100 });
    }

    #[test]
    fn rects_sharing_an_edge_both_contain_it() {
        let edge = 0.4f32 - 1.0;
        let a = Rect::from_edges(-1.0, -1.0, edge, 1.0);
        let b = Rect::from_edges(edge, -1.0, 1.0, 1.0);
        let p = Point::new(edge, 0.0);
        assert!(a.contains(p));
        assert!(b.contains(p));
    }

    #[test]
    fn offscreen_rect_is_clipped_away() {
        let vp = Viewport::new(100, 100);
        assert!(vp.to_device(&Rect::from_edges(1.5, 0.0, 1.9, 0.4)).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn rect_serde_round_trip() {
        let r = Rect::from_edges(-1.0, 0.25, -0.5, 1.0);
        let json = serde_json::to_string(&r).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
