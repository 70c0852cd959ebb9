//! # Floormark Core
//!
//! Geometry primitives shared across the Floormark workspace:
//! image-space points, the ray-casting containment test that gates
//! room tracing, and the vertex-mean centroid used for label
//! placement.
//!
//! All coordinates live in the pixel space of the source floor-plan
//! image, never in the zoomed on-screen space.

pub mod geometry;

pub use geometry::{
    point_in_polygon, polygon_centroid, Point, MIN_POLYGON_POINTS, RAY_CAST_EPSILON,
};
