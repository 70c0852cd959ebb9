//! Floor boundary and room markup commands.

use tracing::{debug, info, warn};

use floormark_core::{Point, MIN_POLYGON_POINTS};

use crate::document::Room;
use crate::error::{CommandError, EditorResult};

use super::{Editor, EditorMode};

impl Editor {
    /// Begins tracing the floor boundary.
    ///
    /// When a boundary or rooms already exist the call is rejected with
    /// [`CommandError::ConfirmationRequired`] unless `confirm_reset` is set,
    /// since starting over discards all of them.
    pub fn start_floor_markup(&mut self, confirm_reset: bool) -> EditorResult<()> {
        if self.image.is_none() {
            return Err(CommandError::NoImage);
        }
        if self.selected_building.is_none() {
            return Err(CommandError::NoBuildingSelected);
        }
        if self.selected_floor.is_none() {
            return Err(CommandError::NoFloorSelected);
        }
        let discards = self.document.boundary.is_ready() || !self.document.rooms.is_empty();
        if discards && !confirm_reset {
            return Err(CommandError::ConfirmationRequired);
        }

        self.document.reset();
        self.draft_room.clear();
        self.mode = EditorMode::MarkingFloor;
        debug!("started floor markup");
        Ok(())
    }

    /// Appends a vertex to the boundary being traced.
    pub fn add_floor_point(&mut self, point: Point) -> EditorResult<()> {
        if self.mode != EditorMode::MarkingFloor {
            return Err(CommandError::NotMarkingFloor);
        }
        if !point.is_finite() {
            return Err(CommandError::NonFinitePoint);
        }
        self.document.boundary.push(point);
        debug!(
            x = point.x,
            y = point.y,
            total = self.document.boundary.len(),
            "added boundary point"
        );
        Ok(())
    }

    /// Closes the boundary polygon, making it ready for containment tests.
    pub fn finish_floor_markup(&mut self) -> EditorResult<()> {
        if self.mode != EditorMode::MarkingFloor {
            return Err(CommandError::NotMarkingFloor);
        }
        let count = self.document.boundary.len();
        if count < MIN_POLYGON_POINTS {
            return Err(CommandError::TooFewBoundaryPoints { actual: count });
        }
        self.document.boundary.finish();
        self.mode = EditorMode::Idle;
        info!(points = count, "floor boundary finished");
        Ok(())
    }

    /// Begins tracing a room polygon.
    ///
    /// `Some(declared_id)` selects the declared catalog room the polygon
    /// will fulfil; the selection sticks until a room is committed. `None`
    /// keeps the current selection. Without a selection the floor must have
    /// at least one declared room.
    pub fn start_room(&mut self, declared_id: Option<&str>) -> EditorResult<()> {
        if self.image.is_none() {
            return Err(CommandError::NoImage);
        }
        let building_id = self
            .selected_building
            .as_deref()
            .ok_or(CommandError::NoBuildingSelected)?;
        let floor_id = self
            .selected_floor
            .as_deref()
            .ok_or(CommandError::NoFloorSelected)?;
        if !self.document.boundary.is_ready() {
            return Err(CommandError::BoundaryNotReady);
        }

        let selection = declared_id
            .map(str::to_string)
            .or_else(|| self.declared_selection.clone());
        if selection.is_none() && self.catalog.declared_rooms(building_id, floor_id).is_empty() {
            return Err(CommandError::NoDeclaredRooms);
        }

        self.declared_selection = selection;
        self.draft_room.clear();
        self.mode = EditorMode::MarkingRoom;
        debug!(declared = ?self.declared_selection, "started room markup");
        Ok(())
    }

    /// Appends a vertex to the room being traced. The point must lie inside
    /// the floor boundary.
    pub fn add_room_point(&mut self, point: Point) -> EditorResult<()> {
        if self.mode != EditorMode::MarkingRoom {
            return Err(CommandError::NotMarkingRoom);
        }
        if !point.is_finite() {
            return Err(CommandError::NonFinitePoint);
        }
        if !self.document.boundary.contains(point) {
            warn!(x = point.x, y = point.y, "rejected point outside boundary");
            return Err(CommandError::PointOutsideBoundary {
                x: point.x,
                y: point.y,
            });
        }
        self.draft_room.push(point);
        debug!(
            x = point.x,
            y = point.y,
            total = self.draft_room.len(),
            "added room point"
        );
        Ok(())
    }

    /// Commits the room being traced and returns it.
    ///
    /// Identity comes from the declared catalog room matching the sticky
    /// selection when there is one; otherwise the room gets the first free
    /// auto name, the selected room type and the registry color. A matched
    /// declaration with an empty name gets an auto name too. The resolved
    /// name must be unused.
    pub fn finish_room(&mut self) -> EditorResult<&Room> {
        if self.mode != EditorMode::MarkingRoom {
            return Err(CommandError::NotMarkingRoom);
        }
        if self.draft_room.len() < MIN_POLYGON_POINTS {
            return Err(CommandError::TooFewRoomPoints {
                actual: self.draft_room.len(),
            });
        }
        for point in &self.draft_room {
            if !self.document.boundary.contains(*point) {
                return Err(CommandError::PointOutsideBoundary {
                    x: point.x,
                    y: point.y,
                });
            }
        }

        let building_id = self.selected_building.as_deref().unwrap_or("");
        let floor_id = self.selected_floor.as_deref().unwrap_or("");
        let declared = self.declared_selection.as_deref().and_then(|id| {
            self.catalog
                .declared_rooms(building_id, floor_id)
                .iter()
                .find(|room| room.id == id)
        });

        let (name, room_type, color) = match declared {
            Some(declared) => {
                // A nameless declaration still supplies type and color.
                let name = if declared.name.is_empty() {
                    self.document.next_auto_name()
                } else {
                    declared.name.clone()
                };
                (name, declared.room_type.clone(), declared.color.clone())
            }
            None => {
                let room_type = match self.selected_type.as_deref() {
                    Some(room_type) if self.registry.contains(room_type) => room_type.to_string(),
                    _ => self.registry.first_type_or_default().to_string(),
                };
                let color = self.registry.color_or_fallback(&room_type).to_string();
                (self.document.next_auto_name(), room_type, color)
            }
        };

        if self.document.room_name_exists(&name, None) {
            return Err(CommandError::RoomNameTaken { name });
        }

        let room = Room {
            external_id: self.declared_selection.take(),
            name,
            room_type,
            color,
            points: std::mem::take(&mut self.draft_room),
        };
        info!(
            name = %room.name,
            room_type = %room.room_type,
            points = room.points.len(),
            "room committed"
        );

        let index = self.document.rooms.len();
        self.document.rooms.push(room);
        self.mode = EditorMode::Idle;
        Ok(&self.document.rooms[index])
    }

    /// Removes the most recent vertex of whichever polygon is being traced.
    /// A no-op in `Idle` or when the buffer is empty.
    pub fn undo_last_point(&mut self) -> EditorResult<()> {
        match self.mode {
            EditorMode::MarkingFloor => {
                if let Some(point) = self.document.boundary.pop() {
                    debug!(x = point.x, y = point.y, "removed boundary point");
                }
            }
            EditorMode::MarkingRoom => {
                if let Some(point) = self.draft_room.pop() {
                    debug!(x = point.x, y = point.y, "removed room point");
                }
            }
            EditorMode::Idle => {}
        }
        Ok(())
    }
}
