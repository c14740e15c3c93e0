//! RGBA pixel format.
//!
//! Writes RGBA32 pixels (4 bytes per pixel) in a
//! [`RenderingBuffer`]. Plotting never anti-aliases, so every write is an
//! opaque copy; there is no coverage or blending.
//!
//! Provides the `PixelFormat` trait and `PixfmtRgba32` concrete implementation.

use crate::color::Rgba8;
use crate::rendering_buffer::{RenderingBuffer, BPP};

// ============================================================================
// PixelFormat trait
// ============================================================================

/// Trait for pixel formats that write colors into a rendering buffer.
///
/// Callers are responsible for bounds: coordinates passed in must lie inside
/// `[0, width) × [0, height)`. `RendererBase` does the clipping.
pub trait PixelFormat {
    type ColorType;

    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Copy (overwrite) a horizontal line of `len` pixels starting at (x, y).
    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Self::ColorType);
}

// ============================================================================
// PixfmtRgba32: RGBA, 8 bits per channel
// ============================================================================

/// Pixel format for RGBA32 (component order R=0, G=1, B=2, A=3).
pub struct PixfmtRgba32<'a> {
    rbuf: &'a mut RenderingBuffer,
}

impl<'a> PixfmtRgba32<'a> {
    pub fn new(rbuf: &'a mut RenderingBuffer) -> Self {
        Self { rbuf }
    }
}

impl PixelFormat for PixfmtRgba32<'_> {
    type ColorType = Rgba8;

    fn width(&self) -> u32 {
        self.rbuf.width()
    }

    fn height(&self) -> u32 {
        self.rbuf.height()
    }

    fn copy_hline(&mut self, x: i32, y: i32, len: u32, c: &Rgba8) {
        let px = c.to_array();
        let start = x as usize * BPP;
        let end = start + len as usize * BPP;
        for p in self.rbuf.row_slice_mut(y as u32)[start..end].chunks_exact_mut(BPP) {
            p.copy_from_slice(&px);
        }
    }
}
