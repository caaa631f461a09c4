//! Board squares and the fixed grid layout.

use hueclear_core::{Point, Rect};

use crate::color::Rgb;

pub const ROWS: usize = 5;
pub const COLS: usize = 5;
pub const CELL_COUNT: usize = ROWS * COLS;

/// One square of the board.
///
/// Position, size and colour are fixed at creation; only `active` changes,
/// and only from `true` to `false`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    rect: Rect,
    color: Rgb,
    active: bool,
}

impl Cell {
    /// A new, active square.
    pub fn new(rect: Rect, color: Rgb) -> Self {
        Self {
            rect,
            color,
            active: true,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether `p` lies on the square, edges included. Ignores `active`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }
}

/// Coordinate of grid line `i` when \[-1, 1\] is cut into `n` equal parts.
fn grid_line(i: usize, n: usize) -> f32 {
    2.0 * i as f32 / n as f32 - 1.0
}

/// Rectangle of the square at row-major `index`. Row 0 is the bottom row.
///
/// Both edges of every square come from [`grid_line`], so neighbours share
/// their common edge bit for bit.
pub fn grid_rect(index: usize) -> Rect {
    let row = index / COLS;
    let col = index % COLS;
    Rect::from_edges(
        grid_line(col, COLS),
        grid_line(row, ROWS),
        grid_line(col + 1, COLS),
        grid_line(row + 1, ROWS),
    )
}
