//! Curve plotting: draws sampled curve points and control-point markers.
//!
//! Drawing goes through [`ShapeRenderer`], so the marker layout can be tested
//! against any fill target. [`render_plot`] builds the concrete raster stack
//! (`RenderingBuffer` → `PixfmtRgba32` → `RendererBase` →
//! `RendererPrimitives`) and composes a full image.
//!
//! Curve points are drawn first so that control-point markers sit on top.

use log::debug;

use crate::basics::{PointD, RectD};
use crate::color::Palette;
use crate::config::PlotConfig;
use crate::curves::{sample_curve, ControlPolygon, CurveSample};
use crate::error::Result;
use crate::pixfmt_rgba::PixfmtRgba32;
use crate::renderer_base::RendererBase;
use crate::renderer_primitives::{RendererPrimitives, ShapeRenderer};
use crate::rendering_buffer::RenderingBuffer;
use crate::trans_viewport::TransViewport;

// ============================================================================
// Markers
// ============================================================================

/// Filled circle of diameter `size` centered on `pixel`, in the curve color.
pub fn draw_curve_point<R: ShapeRenderer + ?Sized>(
    target: &mut R,
    palette: &Palette,
    pixel: PointD,
    size: f64,
) {
    target.fill_ellipse(&RectD::centered(pixel, size), &palette.curve);
}

/// Bordered square marker centered on `pixel`.
///
/// The outer square of side `size` is filled with the border color, then a
/// concentric square of side `size - border` with the fill color. An inner
/// side of zero or less is skipped rather than drawn inverted.
pub fn draw_control_point<R: ShapeRenderer + ?Sized>(
    target: &mut R,
    palette: &Palette,
    pixel: PointD,
    size: f64,
    border: f64,
) {
    target.fill_rect(&RectD::centered(pixel, size), &palette.control_border);

    let inner = (size - border).max(0.0);
    if inner > 0.0 {
        target.fill_rect(&RectD::centered(pixel, inner), &palette.control_fill);
    }
}

// ============================================================================
// Plot composition
// ============================================================================

/// Marker geometry taken from a `PlotConfig`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub curve_point_size: f64,
    pub control_point_size: f64,
    pub control_point_border: f64,
}

impl From<&PlotConfig> for MarkerStyle {
    fn from(c: &PlotConfig) -> Self {
        Self {
            curve_point_size: c.curve_point_size,
            control_point_size: c.control_point_size,
            control_point_border: c.control_point_border,
        }
    }
}

/// Draw every curve sample, then every control point, onto `target`.
pub fn draw_plot<R: ShapeRenderer + ?Sized>(
    target: &mut R,
    viewport: &TransViewport,
    palette: &Palette,
    style: &MarkerStyle,
    polygon: &ControlPolygon,
    samples: &CurveSample,
) {
    for p in samples {
        draw_curve_point(
            target,
            palette,
            viewport.to_pixel(*p),
            style.curve_point_size,
        );
    }
    for p in polygon.points() {
        draw_control_point(
            target,
            palette,
            viewport.to_pixel(*p),
            style.control_point_size,
            style.control_point_border,
        );
    }
}

/// Rasterize an already sampled curve into a fresh buffer.
pub fn rasterize(
    viewport: &TransViewport,
    palette: &Palette,
    style: &MarkerStyle,
    polygon: &ControlPolygon,
    samples: &CurveSample,
) -> RenderingBuffer {
    let mut buf = RenderingBuffer::new(viewport.width(), viewport.height());
    {
        let mut rb = RendererBase::new(PixfmtRgba32::new(&mut buf));
        rb.clear(&palette.background);
        let mut prim = RendererPrimitives::new(&mut rb);
        draw_plot(&mut prim, viewport, palette, style, polygon, samples);
    }
    buf
}

/// Sample the configured curve and rasterize it with the default palette.
pub fn render_plot(config: &PlotConfig) -> Result<RenderingBuffer> {
    config.validate()?;
    let viewport = TransViewport::new(config.width, config.height, config.margin)?;
    let polygon = config.control_polygon()?;
    let samples = sample_curve(&polygon, config.resolution)?;

    debug!(
        "rendering {} samples and {} control points onto {}x{} canvas (margin {})",
        samples.len(),
        polygon.len(),
        viewport.width(),
        viewport.height(),
        viewport.margin()
    );

    Ok(rasterize(
        &viewport,
        &Palette::default(),
        &MarkerStyle::from(config),
        &polygon,
        &samples,
    ))
}
