//! Square colours and the similarity metric used to clear them.

use hueclear_core::style::Color;
use rand::Rng;

/// Background behind cleared squares.
pub const BACKGROUND: Color = Color::BLACK;

/// A colour with three channels in \[0, 1\].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Euclidean distance in RGB space.
    pub fn distance(self, other: Rgb) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Draw every channel independently and uniformly from \[0, 1\].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0.0..=1.0),
            g: rng.random_range(0.0..=1.0),
            b: rng.random_range(0.0..=1.0),
        }
    }

    /// Quantize to a packed 8-bit display colour.
    pub fn to_color(self) -> Color {
        let q = |c: f32| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Color::from_rgb(q(self.r), q(self.g), q(self.b))
    }
}
