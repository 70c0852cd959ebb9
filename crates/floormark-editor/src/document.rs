//! The annotation document: floor boundary and marked rooms.
//!
//! A [`Document`] holds everything the editor has marked on the current
//! floor. It is a plain value type; all mutation goes through the editor
//! command API so that invariants (boundary immutability, room name
//! uniqueness, containment) hold at every commit point.

use floormark_core::{point_in_polygon, Point};

/// Pixel dimensions of the attached floor plan image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// The outer contour of a floor.
///
/// The boundary accumulates points while floor markup is active and becomes
/// ready (immutable) once finished. Containment tests only succeed against a
/// ready boundary.
#[derive(Debug, Clone, Default)]
pub struct FloorBoundary {
    points: Vec<Point>,
    ready: bool,
}

impl FloorBoundary {
    /// Rebuilds a finished boundary from imported points.
    pub fn restore(points: Vec<Point>) -> Self {
        Self {
            points,
            ready: true,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True once the boundary polygon has been finished.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// True when `point` lies inside a ready boundary.
    pub fn contains(&self, point: Point) -> bool {
        self.ready && point_in_polygon(point, &self.points)
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    pub(crate) fn finish(&mut self) {
        self.ready = true;
    }

    pub(crate) fn reset(&mut self) {
        self.points.clear();
        self.ready = false;
    }
}

/// A committed room annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Identifier of the declared catalog room this annotation fulfils,
    /// when markup was started for one.
    pub external_id: Option<String>,
    /// Display name, unique within the document.
    pub name: String,
    /// Room type label, usually one of the registry entries.
    pub room_type: String,
    /// Fill color as a `#RRGGBB` hex string.
    pub color: String,
    /// Polygon vertices in image pixel coordinates.
    pub points: Vec<Point>,
}

/// Everything marked on the current floor.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub boundary: FloorBoundary,
    pub rooms: Vec<Room>,
}

impl Document {
    /// True when another room already uses `name`. Pass `except` to exclude
    /// a room from the check (used when renaming it).
    pub fn room_name_exists(&self, name: &str, except: Option<usize>) -> bool {
        self.rooms
            .iter()
            .enumerate()
            .any(|(index, room)| Some(index) != except && room.name == name)
    }

    /// First free name of the form `Room N`.
    pub fn next_auto_name(&self) -> String {
        let mut n = 1;
        loop {
            let candidate = format!("Room {n}");
            if !self.room_name_exists(&candidate, None) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Discards the boundary and all rooms.
    pub fn reset(&mut self) {
        self.boundary.reset();
        self.rooms.clear();
    }
}
