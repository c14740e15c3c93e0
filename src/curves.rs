//! Arbitrary-degree Bezier curves evaluated by de Casteljau reduction.
//!
//! A curve is defined by a [`ControlPolygon`]; its degree is one less than
//! the number of control points. Evaluation at a parameter `t` repeatedly
//! replaces the polygon by the pairwise interpolations of consecutive points
//! until a single point remains:
//!
//! - [`de_casteljau`] evaluates a raw slice, rejecting an empty one.
//! - [`ControlPolygon::eval`] is the infallible form for a validated polygon.
//! - [`CurveSampler`] walks `resolution` evenly spaced parameters in order.
//! - [`sample_curve`] collects the sampler into a [`CurveSample`].
//!
//! The reduction runs in place over one scratch buffer, so high degrees do
//! not grow the call stack.

use log::debug;

use crate::basics::PointD;
use crate::error::{Error, Result};
use crate::math::lerp;

// ============================================================================
// de Casteljau reduction
// ============================================================================

/// Reduce `work` in place to the curve point at `t`.
///
/// After round `k` the first `len - k` entries hold the level-`k`
/// intermediate points. `work` must not be empty.
fn reduce_in_place(work: &mut [PointD], t: f64) -> PointD {
    let n = work.len();
    for level in 1..n {
        for i in 0..n - level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }
    work[0]
}

/// Evaluate the Bezier curve defined by `points` at parameter `t`.
///
/// A single point is returned unchanged for every `t` (a degree-0 curve).
/// An empty slice is a precondition violation and yields
/// [`Error::EmptyPolygon`].
pub fn de_casteljau(points: &[PointD], t: f64) -> Result<PointD> {
    match points {
        [] => Err(Error::EmptyPolygon),
        [p] => Ok(*p),
        _ => {
            let mut work = points.to_vec();
            Ok(reduce_in_place(&mut work, t))
        }
    }
}

/// Parameter value of sample `i` out of `resolution` evenly spaced samples.
///
/// Samples span `[0, 1]` inclusive. A single sample sits at `t = 0`.
#[inline]
pub fn sample_param(i: usize, resolution: usize) -> f64 {
    if resolution <= 1 {
        0.0
    } else {
        i as f64 / (resolution - 1) as f64
    }
}

// ============================================================================
// ControlPolygon
// ============================================================================

/// Ordered, non-empty list of control points.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPolygon {
    points: Vec<PointD>,
}

impl ControlPolygon {
    pub fn new(points: Vec<PointD>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::EmptyPolygon);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PointD] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed polygon.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Curve degree, `len - 1`.
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    pub fn first(&self) -> PointD {
        self.points[0]
    }

    pub fn last(&self) -> PointD {
        self.points[self.points.len() - 1]
    }

    /// Point on the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> PointD {
        let mut work = self.points.clone();
        reduce_in_place(&mut work, t)
    }

    /// Iterate `resolution` evenly spaced curve points.
    pub fn sampler(&self, resolution: usize) -> Result<CurveSampler<'_>> {
        CurveSampler::new(self, resolution)
    }
}

impl TryFrom<Vec<PointD>> for ControlPolygon {
    type Error = Error;

    fn try_from(points: Vec<PointD>) -> Result<Self> {
        Self::new(points)
    }
}

// ============================================================================
// CurveSampler
// ============================================================================

/// Streaming evaluation of a curve at evenly spaced parameters.
///
/// Yields exactly `resolution` points in increasing parameter order. One
/// scratch buffer is reused across all evaluations.
pub struct CurveSampler<'a> {
    polygon: &'a ControlPolygon,
    resolution: usize,
    index: usize,
    scratch: Vec<PointD>,
}

impl<'a> CurveSampler<'a> {
    pub fn new(polygon: &'a ControlPolygon, resolution: usize) -> Result<Self> {
        if resolution == 0 {
            return Err(Error::InvalidResolution(resolution));
        }
        Ok(Self {
            polygon,
            resolution,
            index: 0,
            scratch: Vec::with_capacity(polygon.len()),
        })
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

impl Iterator for CurveSampler<'_> {
    type Item = PointD;

    fn next(&mut self) -> Option<PointD> {
        if self.index >= self.resolution {
            return None;
        }
        let t = sample_param(self.index, self.resolution);
        self.index += 1;

        self.scratch.clear();
        self.scratch.extend_from_slice(self.polygon.points());
        Some(reduce_in_place(&mut self.scratch, t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.resolution - self.index;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for CurveSampler<'_> {}

// ============================================================================
// CurveSample
// ============================================================================

/// Fully materialized polyline approximation of a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSample {
    points: Vec<PointD>,
}

impl CurveSample {
    pub fn points(&self) -> &[PointD] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PointD> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PointD> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PointD> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<PointD> {
        self.points
    }
}

impl<'a> IntoIterator for &'a CurveSample {
    type Item = &'a PointD;
    type IntoIter = std::slice::Iter<'a, PointD>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for CurveSample {
    type Output = PointD;
    fn index(&self, i: usize) -> &PointD {
        &self.points[i]
    }
}

/// Sample the curve at `resolution` evenly spaced parameters in `[0, 1]`.
///
/// `resolution` must be at least 1; a single sample is taken at `t = 0`.
pub fn sample_curve(polygon: &ControlPolygon, resolution: usize) -> Result<CurveSample> {
    let points: Vec<PointD> = polygon.sampler(resolution)?.collect();
    debug!(
        "sampled degree-{} curve at {} parameters",
        polygon.degree(),
        points.len()
    );
    Ok(CurveSample { points })
}
