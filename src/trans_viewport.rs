//! Viewport transformation.
//!
//! Maps curve space (the unit square, y pointing up) onto the drawable
//! interior of a canvas (pixels, y pointing down) inset by a margin:
//!
//! ```text
//! px = x * inner_width + margin
//! py = (1 - y) * inner_height + margin
//! ```
//!
//! with `inner_width = width - 2 * margin` and likewise for the height. The
//! vertical flip is what puts curve-space `y = 0` at the bottom of the image.

use crate::basics::PointD;
use crate::error::{Error, Result};

// ============================================================================
// TransViewport
// ============================================================================

/// Curve-space to pixel-space transformer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransViewport {
    width: u32,
    height: u32,
    margin: u32,
    // Computed values
    kx: f64,
    ky: f64,
}

impl TransViewport {
    /// Build a viewport for a `width × height` canvas inset by `margin`.
    ///
    /// Fails with [`Error::InvalidConfig`] when the margin leaves no interior.
    pub fn new(width: u32, height: u32, margin: u32) -> Result<Self> {
        let inner_w = width as i64 - 2 * margin as i64;
        let inner_h = height as i64 - 2 * margin as i64;
        if inner_w <= 0 || inner_h <= 0 {
            return Err(Error::InvalidConfig(format!(
                "margin {} leaves no drawable area on a {}x{} canvas",
                margin, width, height
            )));
        }
        Ok(Self {
            width,
            height,
            margin,
            kx: inner_w as f64,
            ky: inner_h as f64,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    /// Width of the drawable interior in pixels.
    pub fn inner_width(&self) -> f64 {
        self.kx
    }

    /// Height of the drawable interior in pixels.
    pub fn inner_height(&self) -> f64 {
        self.ky
    }

    /// Transform a curve-space point to pixel coordinates.
    pub fn to_pixel(&self, p: PointD) -> PointD {
        let m = self.margin as f64;
        PointD::new(p.x * self.kx + m, (1.0 - p.y) * self.ky + m)
    }

    /// Transform pixel coordinates back to curve space.
    pub fn to_curve(&self, p: PointD) -> PointD {
        let m = self.margin as f64;
        PointD::new((p.x - m) / self.kx, 1.0 - (p.y - m) / self.ky)
    }
}
