//! Maintenance of committed rooms: renaming, retyping, deleting.

use tracing::{debug, info};

use floormark_catalog::FALLBACK_COLOR;

use crate::document::Room;
use crate::error::{CommandError, EditorResult};

use super::{Editor, EditorMode};

impl Editor {
    /// Renames and retypes a committed room.
    ///
    /// The name is trimmed and must stay unique among the other rooms;
    /// renaming a room to its own current name succeeds. The type is free
    /// text: a registered type recolors the room from the registry, while an
    /// unregistered one keeps the current color.
    pub fn edit_room(&mut self, index: usize, name: &str, room_type: &str) -> EditorResult<()> {
        if self.mode != EditorMode::Idle {
            return Err(CommandError::MarkupInProgress);
        }
        let count = self.document.rooms.len();
        let Some(room) = self.document.rooms.get(index) else {
            return Err(CommandError::RoomIndexOutOfRange { index, count });
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(CommandError::EmptyRoomName);
        }
        if self.document.room_name_exists(name, Some(index)) {
            return Err(CommandError::RoomNameTaken {
                name: name.to_string(),
            });
        }

        let color = self
            .registry
            .color_for(room_type)
            .map(str::to_string)
            .or_else(|| (!room.color.is_empty()).then(|| room.color.clone()))
            .unwrap_or_else(|| FALLBACK_COLOR.to_string());

        let room = &mut self.document.rooms[index];
        room.name = name.to_string();
        room.room_type = room_type.to_string();
        room.color = color;
        debug!(index, name = %room.name, room_type = %room.room_type, "room edited");
        Ok(())
    }

    /// Removes a committed room and returns it.
    pub fn delete_room(&mut self, index: usize) -> EditorResult<Room> {
        if self.mode != EditorMode::Idle {
            return Err(CommandError::MarkupInProgress);
        }
        let count = self.document.rooms.len();
        if index >= count {
            return Err(CommandError::RoomIndexOutOfRange { index, count });
        }
        let room = self.document.rooms.remove(index);
        info!(name = %room.name, "room deleted");
        Ok(room)
    }

    /// Picks the room type applied to freehand rooms at commit time.
    pub fn select_room_type(&mut self, room_type: &str) -> EditorResult<()> {
        if !self.registry.contains(room_type) {
            return Err(CommandError::UnknownRoomType(room_type.to_string()));
        }
        self.selected_type = Some(room_type.to_string());
        Ok(())
    }
}
