//! Base renderer with clipping.
//!
//! Wraps a pixel format with a clip rectangle so that shapes partially
//! outside the canvas (markers near the margin, curves leaving the unit
//! square) are cut at the buffer edge instead of indexing out of bounds.

use crate::basics::RectI;
use crate::pixfmt_rgba::PixelFormat;

// ============================================================================
// RendererBase: clip-and-delegate renderer
// ============================================================================

/// Base renderer that clips all operations to the buffer extent before
/// delegating to the underlying pixel format.
pub struct RendererBase<PF: PixelFormat> {
    ren: PF,
    clip_box: RectI,
}

impl<PF: PixelFormat> RendererBase<PF> {
    /// Create a new renderer wrapping the given pixel format.
    /// The clip box covers the full buffer.
    pub fn new(ren: PF) -> Self {
        let w = ren.width() as i32;
        let h = ren.height() as i32;
        Self {
            ren,
            clip_box: RectI::new(0, 0, w - 1, h - 1),
        }
    }

    pub fn width(&self) -> u32 {
        self.ren.width()
    }
    pub fn height(&self) -> u32 {
        self.ren.height()
    }

    pub fn xmin(&self) -> i32 {
        self.clip_box.x1
    }
    pub fn ymin(&self) -> i32 {
        self.clip_box.y1
    }
    pub fn xmax(&self) -> i32 {
        self.clip_box.x2
    }
    pub fn ymax(&self) -> i32 {
        self.clip_box.y2
    }

    // ========================================================================
    // Rendering operations (clip then delegate)
    // ========================================================================

    /// Clear the entire buffer to a solid color.
    pub fn clear(&mut self, c: &PF::ColorType) {
        let w = self.ren.width();
        if w > 0 {
            for y in 0..self.ren.height() as i32 {
                self.ren.copy_hline(0, y, w, c);
            }
        }
    }

    /// Copy a horizontal line (clipped). x1, x2 are inclusive endpoints.
    pub fn copy_hline(&mut self, mut x1: i32, y: i32, mut x2: i32, c: &PF::ColorType) {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        if y > self.ymax() || y < self.ymin() || x1 > self.xmax() || x2 < self.xmin() {
            return;
        }
        x1 = x1.max(self.xmin());
        x2 = x2.min(self.xmax());
        self.ren.copy_hline(x1, y, (x2 - x1 + 1) as u32, c);
    }

    /// Fill a solid bar (clipped). All four coordinates are inclusive.
    pub fn copy_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, c: &PF::ColorType) {
        let mut rc = RectI::new(x1, y1, x2, y2);
        rc.normalize();
        if rc.clip(&self.clip_box) {
            for y in rc.y1..=rc.y2 {
                self.ren.copy_hline(rc.x1, y, (rc.x2 - rc.x1 + 1) as u32, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;
    use crate::pixfmt_rgba::PixfmtRgba32;
    use crate::rendering_buffer::RenderingBuffer;

    #[test]
    fn test_new() {
        let mut buf = RenderingBuffer::new(100, 80);
        let ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
        assert_eq!(ren.width(), 100);
        assert_eq!(ren.height(), 80);
        assert_eq!(ren.xmin(), 0);
        assert_eq!(ren.ymin(), 0);
        assert_eq!(ren.xmax(), 99);
        assert_eq!(ren.ymax(), 79);
    }

    #[test]
    fn test_clear() {
        let mut buf = RenderingBuffer::new(10, 10);
        {
            let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
            ren.clear(&Rgba8::white());
        }
        assert_eq!(buf.pixel(5, 5), [255, 255, 255, 255]);
        assert_eq!(buf.pixel(9, 9), [255, 255, 255, 255]);
        assert!(buf.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_copy_hline_clipped() {
        let mut buf = RenderingBuffer::new(10, 10);
        {
            let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
            ren.copy_hline(8, 2, -3, &Rgba8::white());
            ren.copy_hline(0, 20, 5, &Rgba8::white());
            ren.copy_hline(12, 4, 30, &Rgba8::white());
        }
        for x in 0..=8 {
            assert_eq!(buf.pixel(x, 2), [255, 255, 255, 255]);
        }
        assert_eq!(buf.pixel(9, 2), [0, 0, 0, 0]);
        let painted = buf.data().chunks(4).filter(|p| p[3] != 0).count();
        assert_eq!(painted, 9);
    }

    #[test]
    fn test_copy_bar_clipped() {
        let mut buf = RenderingBuffer::new(10, 10);
        {
            let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
            ren.copy_bar(12, 12, 7, 7, &Rgba8::gray());
            ren.copy_bar(-5, -5, -1, 3, &Rgba8::white());
        }
        assert_eq!(buf.pixel(7, 7), [128, 128, 128, 255]);
        assert_eq!(buf.pixel(9, 9), [128, 128, 128, 255]);
        assert_eq!(buf.pixel(6, 7), [0, 0, 0, 0]);
        let painted = buf.data().chunks(4).filter(|p| p[3] != 0).count();
        assert_eq!(painted, 9);
    }
}
