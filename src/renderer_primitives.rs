//! Basic shape primitives renderer.
//!
//! Fills axis-aligned rectangles and ellipses given in floating point pixel
//! coordinates, without anti-aliasing. A pixel is painted when its center
//! lies inside the shape; rectangles are half-open on the right and bottom
//! edges so adjacent shapes never overlap.
//!
//! [`ShapeRenderer`] is the drawing capability the plotter depends on;
//! [`RendererPrimitives`] implements it on top of a clipping `RendererBase`.

use crate::basics::{iceil, RectD};
use crate::color::Rgba8;
use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;

// ============================================================================
// ShapeRenderer
// ============================================================================

/// Minimal fill capability used to draw plot markers.
pub trait ShapeRenderer {
    /// Fill the rectangle `r` with color `c`.
    fn fill_rect(&mut self, r: &RectD, c: &Rgba8);

    /// Fill the ellipse inscribed in rectangle `r` with color `c`.
    fn fill_ellipse(&mut self, r: &RectD, c: &Rgba8);
}

/// Inclusive range of pixel indices whose centers fall in `[lo, hi)`.
/// Returns `None` when no center does. Coordinates beyond the `i32` range
/// saturate.
#[inline]
fn pixel_span(lo: f64, hi: f64) -> Option<(i32, i32)> {
    let first = iceil(lo - 0.5);
    let last = iceil(hi - 0.5).saturating_sub(1);
    if first <= last {
        Some((first, last))
    } else {
        None
    }
}

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Solid shape renderer over a `RendererBase`.
///
/// Keeps a current fill color like a pen; the `ShapeRenderer` methods set it
/// from their color argument before drawing.
pub struct RendererPrimitives<'a, PF: PixelFormat> {
    ren: &'a mut RendererBase<PF>,
    fill_color: PF::ColorType,
}

impl<'a, PF: PixelFormat> RendererPrimitives<'a, PF>
where
    PF::ColorType: Default + Clone,
{
    pub fn new(ren: &'a mut RendererBase<PF>) -> Self {
        Self {
            ren,
            fill_color: PF::ColorType::default(),
        }
    }

    pub fn set_fill_color(&mut self, c: PF::ColorType) {
        self.fill_color = c;
    }

    pub fn fill_color(&self) -> &PF::ColorType {
        &self.fill_color
    }

    /// Draw a solid filled rectangle (fill color only).
    pub fn solid_rectangle(&mut self, r: &RectD) {
        let (Some((x1, x2)), Some((y1, y2))) = (pixel_span(r.x1, r.x2), pixel_span(r.y1, r.y2))
        else {
            return;
        };
        let fc = self.fill_color.clone();
        self.ren.copy_bar(x1, y1, x2, y2, &fc);
    }

    /// Draw a solid filled ellipse inscribed in `r` (fill color only).
    pub fn solid_ellipse(&mut self, r: &RectD) {
        let rx = r.width() * 0.5;
        let ry = r.height() * 0.5;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let c = r.center();
        let Some((y1, y2)) = pixel_span(r.y1, r.y2) else {
            return;
        };
        // Only rows inside the clip box are scanned.
        let y1 = y1.max(self.ren.ymin());
        let y2 = y2.min(self.ren.ymax());
        let (xmin, xmax) = (self.ren.xmin(), self.ren.xmax());

        let fc = self.fill_color.clone();
        for y in y1..=y2 {
            let dy = (y as f64 + 0.5 - c.y) / ry;
            let k = 1.0 - dy * dy;
            if k <= 0.0 {
                continue;
            }
            let half = rx * k.sqrt();
            if let Some((x1, x2)) = pixel_span(c.x - half, c.x + half) {
                let (x1, x2) = (x1.max(xmin), x2.min(xmax));
                if x1 > x2 {
                    continue;
                }
                self.ren.copy_hline(x1, y, x2, &fc);
            }
        }
    }
}

impl<PF: PixelFormat<ColorType = Rgba8>> ShapeRenderer for RendererPrimitives<'_, PF> {
    fn fill_rect(&mut self, r: &RectD, c: &Rgba8) {
        self.set_fill_color(*c);
        self.solid_rectangle(r);
    }

    fn fill_ellipse(&mut self, r: &RectD, c: &Rgba8) {
        self.set_fill_color(*c);
        self.solid_ellipse(r);
    }
}
