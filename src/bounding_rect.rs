//! Bounding rectangle calculation.
//!
//! Axis-aligned bounding box of a point set. A Bezier curve never leaves the
//! convex hull of its control polygon, so this box is a cheap containment
//! check for sampled curves.

use crate::basics::{PointD, RectD};

/// Compute the bounding rectangle of a sequence of points.
///
/// Returns `None` if the sequence is empty.
pub fn bounding_rect<'a, I>(points: I) -> Option<RectD>
where
    I: IntoIterator<Item = &'a PointD>,
{
    let mut it = points.into_iter();
    let first = it.next()?;
    let mut r = RectD::new(first.x, first.y, first.x, first.y);
    for p in it {
        if p.x < r.x1 {
            r.x1 = p.x;
        }
        if p.y < r.y1 {
            r.y1 = p.y;
        }
        if p.x > r.x2 {
            r.x2 = p.x;
        }
        if p.y > r.y2 {
            r.y2 = p.y;
        }
    }
    Some(r)
}
