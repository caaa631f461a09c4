//! Rasterizes a [`Scene`] into a `0xFFRRGGBB` pixel buffer.

use hueclear_core::{geom::Viewport, scene::Scene};

/// Paint `scene` into `buf`, a row-major surface of `viewport` size.
///
/// A buffer smaller than the viewport (a resize still in flight) is left
/// untouched.
pub(crate) fn paint(scene: &Scene, viewport: Viewport, buf: &mut [u32]) {
    let width = viewport.width as usize;
    let height = viewport.height as usize;
    if viewport.is_empty() || buf.len() < width * height {
        return;
    }

    buf[..width * height].fill(scene.clear.to_pixel());

    for quad in &scene.quads {
        let Some(span) = viewport.to_device(&quad.rect) else {
            continue;
        };
        let pixel = quad.color.to_pixel();
        for y in span.y0..span.y1 {
            let row = y * width;
            buf[row + span.x0..row + span.x1].fill(pixel);
        }
    }
}
