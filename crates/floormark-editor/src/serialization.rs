//! Plan coordinate text format: writing and tolerant parsing.
//!
//! The format is line oriented. A header names the building and floor, a
//! `КОНТУР_ЭТАЖА:` section lists the boundary polygon, and each room follows
//! as a `Название (Тип) [id]:` header with one `x;y` line per vertex.
//! Sections are separated by blank lines and coordinates are rounded to
//! whole pixels on output.
//!
//! The parser is deliberately forgiving: header lines it does not recognize
//! and coordinate lines it cannot parse are skipped, and rooms with fewer
//! than three vertices are dropped. The only fatal condition is a missing or
//! degenerate floor boundary.

use tracing::debug;

use floormark_catalog::RoomTypeRegistry;
use floormark_core::{Point, MIN_POLYGON_POINTS};

use crate::document::{Document, Room};
use crate::error::PlanParseError;

/// Prefix of the building header line.
pub const BUILDING_TOKEN: &str = "ЗДАНИЕ:";
/// Prefix of the floor header line.
pub const FLOOR_TOKEN: &str = "ЭТАЖ:";
/// Opens the floor boundary coordinate section.
pub const BOUNDARY_TOKEN: &str = "КОНТУР_ЭТАЖА:";

/// Suggested filename for text exports.
pub const TEXT_EXPORT_FILENAME: &str = "rooms_coordinates.txt";

/// Suggested filename for HTML exports.
pub fn html_export_filename(building_id: &str, floor_id: &str) -> String {
    format!("plan_{building_id}_{floor_id}.html")
}

/// Identifying header written at the top of an exported plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanInfo {
    pub building_id: String,
    pub building_name: String,
    pub floor_id: String,
    pub floor_name: String,
}

/// Result of a successful plan text parse.
#[derive(Debug, Clone, Default)]
pub struct ParsedPlan {
    /// Boundary polygon vertices, in file order.
    pub boundary: Vec<Point>,
    /// Rooms that survived the minimum vertex count.
    pub rooms: Vec<Room>,
}

/// Renders `document` in the plan coordinate text format.
pub fn write_plan_text(document: &Document, info: &PlanInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{BUILDING_TOKEN} {} ({})\n",
        info.building_id, info.building_name
    ));
    out.push_str(&format!(
        "{FLOOR_TOKEN} {} ({})\n\n",
        info.floor_id, info.floor_name
    ));

    out.push_str(BOUNDARY_TOKEN);
    out.push('\n');
    for point in document.boundary.points() {
        push_point_line(&mut out, *point);
    }
    out.push('\n');

    for room in &document.rooms {
        match room.external_id.as_deref() {
            Some(id) if !id.is_empty() => {
                out.push_str(&format!("{} ({}) [{}]:\n", room.name, room.room_type, id));
            }
            _ => out.push_str(&format!("{} ({}):\n", room.name, room.room_type)),
        }
        for point in &room.points {
            push_point_line(&mut out, *point);
        }
        out.push('\n');
    }

    out
}

fn push_point_line(out: &mut String, point: Point) {
    out.push_str(&format!(
        "{};{}\n",
        point.x.round() as i64,
        point.y.round() as i64
    ));
}

#[derive(Debug, PartialEq, Eq)]
enum Section {
    None,
    Boundary,
    Room,
}

/// Parses plan coordinate text.
///
/// Room types that are missing or not present in `registry` fall back to the
/// registry's first entry, and room colors are resolved from the registry.
/// Returns an error only when the file yields fewer than three boundary
/// points; nothing else is fatal.
pub fn parse_plan_text(
    content: &str,
    registry: &RoomTypeRegistry,
) -> Result<ParsedPlan, PlanParseError> {
    let mut boundary: Vec<Point> = Vec::new();
    let mut rooms: Vec<Room> = Vec::new();
    let mut current: Option<Room> = None;
    let mut section = Section::None;

    for raw in content.lines() {
        let line = raw.trim();

        if line.is_empty() {
            flush_room(&mut rooms, current.take());
            section = Section::None;
            continue;
        }

        // Exact section tokens come before the header skips so that a bare
        // "ЭТАЖ:" line (older files) still opens the boundary section.
        if line == FLOOR_TOKEN || line == BOUNDARY_TOKEN {
            flush_room(&mut rooms, current.take());
            boundary.clear();
            section = Section::Boundary;
            continue;
        }

        if line.starts_with(BUILDING_TOKEN) || line.starts_with(FLOOR_TOKEN) {
            continue;
        }

        if section == Section::Boundary {
            if let Some(point) = parse_point_line(line) {
                boundary.push(point);
            }
            continue;
        }

        if line.ends_with(':') {
            flush_room(&mut rooms, current.take());
            current = Some(parse_room_header(line, registry));
            section = Section::Room;
            continue;
        }

        if section == Section::Room {
            if let (Some(point), Some(room)) = (parse_point_line(line), current.as_mut()) {
                room.points.push(point);
            }
        }
    }
    flush_room(&mut rooms, current.take());

    if boundary.len() < MIN_POLYGON_POINTS {
        return Err(PlanParseError::BoundaryTooSmall {
            required: MIN_POLYGON_POINTS,
            actual: boundary.len(),
        });
    }

    Ok(ParsedPlan { boundary, rooms })
}

fn flush_room(rooms: &mut Vec<Room>, room: Option<Room>) {
    if let Some(room) = room {
        if room.points.len() >= MIN_POLYGON_POINTS {
            rooms.push(room);
        } else {
            debug!(
                name = %room.name,
                points = room.points.len(),
                "dropping room with too few points"
            );
        }
    }
}

/// Parses one `x;y` coordinate line. Extra `;`-separated fields are ignored.
fn parse_point_line(line: &str) -> Option<Point> {
    let mut parts = line.split(';');
    let x: f64 = parts.next()?.trim().parse().ok()?;
    let y: f64 = parts.next()?.trim().parse().ok()?;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(x, y))
}

/// Parses a room header of the form `Название (Тип) [id]:`.
///
/// The type and the bracketed id are optional; the older `Название:` form
/// is still accepted and gets the registry's first type.
fn parse_room_header(line: &str, registry: &RoomTypeRegistry) -> Room {
    let header = match line.rfind(':') {
        Some(index) => line[..index].trim(),
        None => line,
    };

    let (header, external_id) = match (header.rfind('['), header.rfind(']')) {
        (Some(open), Some(close)) if open < close => {
            let id = header[open + 1..close].trim().to_string();
            (header[..open].trim(), (!id.is_empty()).then_some(id))
        }
        _ => (header, None),
    };

    let (name, room_type) = match (header.rfind('('), header.rfind(')')) {
        (Some(open), Some(close)) if open < close => (
            header[..open].trim().to_string(),
            header[open + 1..close].trim().to_string(),
        ),
        _ => (header.to_string(), String::new()),
    };

    let room_type = if registry.contains(&room_type) {
        room_type
    } else {
        registry.first_type_or_default().to_string()
    };
    let color = registry.color_or_fallback(&room_type).to_string();

    Room {
        external_id,
        name,
        room_type,
        color,
        points: Vec::new(),
    }
}
