//! 2D geometry over image-space point sequences.
//!
//! Polygons are ordered vertex lists, implicitly closed: the edge from
//! the last vertex back to the first is part of the outline even though
//! the point is not duplicated. A polygon with fewer than
//! [`MIN_POLYGON_POINTS`] vertices is incomplete and contains nothing.

use serde::{Deserialize, Serialize};

/// Minimum vertex count for a closed polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Denominator guard applied in the ray cast so that near-horizontal
/// edges cannot blow up the x-intersection computation.
pub const RAY_CAST_EPSILON: f64 = 1e-12;

/// A point in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite (no NaN, no infinities).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from `point` towards +x and flips parity at
/// every crossed edge. An edge is crossed when the point's y lies
/// strictly between the edge's y-extents (half-open comparison, so a
/// shared vertex is not counted twice) and the edge's x-intersection
/// with the ray is to the right of the point.
///
/// Points exactly on an edge are decided by floating-point comparison
/// and may land on either side; callers must not rely on
/// boundary-exact behavior.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < MIN_POLYGON_POINTS {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        let crosses = (pi.y > point.y) != (pj.y > point.y)
            && point.x
                < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y + RAY_CAST_EPSILON) + pi.x;
        if crosses {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Vertex mean of a polygon, used for placing text labels.
///
/// This is the arithmetic mean of the vertices, not the area-weighted
/// centroid: for irregular polygons the label sits slightly off the
/// visual center, which is accepted. Returns `None` for an empty
/// vertex list.
pub fn polygon_centroid(polygon: &[Point]) -> Option<Point> {
    if polygon.is_empty() {
        return None;
    }

    let mut x = 0.0;
    let mut y = 0.0;
    for p in polygon {
        x += p.x;
        y += p.y;
    }
    let n = polygon.len() as f64;
    Some(Point::new(x / n, y / n))
}
