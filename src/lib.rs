//! # bezier-raster
//!
//! Evaluates Bezier curves of any degree with de Casteljau's algorithm and
//! plots them, together with their control polygon, into a BMP image.
//!
//! ## Architecture
//!
//! A run is a short pipeline:
//!
//! 1. **Control polygon**: ordered, non-empty list of points in the unit
//!    square ([`curves::ControlPolygon`])
//! 2. **Sampling**: the curve evaluated at evenly spaced parameters
//!    ([`curves::sample_curve`])
//! 3. **Viewport**: curve space mapped to pixels with a margin and a
//!    vertical flip ([`trans_viewport::TransViewport`])
//! 4. **Rasterization**: curve samples drawn as dots, control points as
//!    bordered squares ([`plot`])
//! 5. **Output**: BMP encoding and backup rotation ([`bmp`], [`output`])
//!
//! The curve math in `basics`, `math` and `curves` has no dependency on the
//! raster stack.
//!
//! ```
//! use bezier_raster::basics::PointD;
//! use bezier_raster::curves::{sample_curve, ControlPolygon};
//!
//! let polygon = ControlPolygon::new(vec![
//!     PointD::new(0.0, 0.0),
//!     PointD::new(0.5, 1.0),
//!     PointD::new(1.0, 0.0),
//! ])
//! .unwrap();
//! let samples = sample_curve(&polygon, 3).unwrap();
//! assert_eq!(samples[1], PointD::new(0.5, 0.5));
//! ```

// Foundation types & math
pub mod basics;
pub mod bounding_rect;
pub mod color;
pub mod error;
pub mod math;

// Curve evaluation
pub mod curves;

// Raster stack
pub mod pixfmt_rgba;
pub mod renderer_base;
pub mod renderer_primitives;
pub mod rendering_buffer;
pub mod trans_viewport;

// Plotting & output
pub mod bmp;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod plot;

pub use config::PlotConfig;
pub use error::{Error, Result};
pub use pipeline::{run, RunSummary};
