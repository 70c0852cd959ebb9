//! Room type registry: type name to display color.
//!
//! The registry is insertion-ordered because the first entry doubles
//! as the fallback type whenever a declared or imported type is
//! missing or unrecognized.

use tracing::debug;

/// Type assigned to catalog rooms that do not declare one.
pub const DEFAULT_ROOM_TYPE: &str = "Учебное помещение";

/// Color used for types with no registry entry.
pub const FALLBACK_COLOR: &str = "#AAAAAA";

const STOCK_TYPES: [(&str, &str); 7] = [
    ("Учебное помещение", "#4CAF50"),
    ("Подсобное помещение", "#FFC107"),
    ("Административное", "#2196F3"),
    ("Коридор", "#9C27B0"),
    ("Санузел", "#607D8B"),
    ("Лаборатория", "#E91E63"),
    ("Склад", "#795548"),
];

/// Ordered mapping from room type name to hex color.
///
/// Seeded with the stock set and extended during catalog import when a
/// declared room carries an unrecognized type with an explicit color.
/// Entries are never overwritten or removed within a session.
#[derive(Debug, Clone)]
pub struct RoomTypeRegistry {
    entries: Vec<(String, String)>,
}

impl Default for RoomTypeRegistry {
    fn default() -> Self {
        Self {
            entries: STOCK_TYPES
                .iter()
                .map(|(t, c)| (t.to_string(), c.to_string()))
                .collect(),
        }
    }
}

impl RoomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registered color for a type, if any.
    pub fn color_for(&self, room_type: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| t == room_type)
            .map(|(_, c)| c.as_str())
    }

    /// The registered color for a type, or the fallback gray.
    pub fn color_or_fallback(&self, room_type: &str) -> &str {
        self.color_for(room_type).unwrap_or(FALLBACK_COLOR)
    }

    pub fn contains(&self, room_type: &str) -> bool {
        self.color_for(room_type).is_some()
    }

    /// The first registered type, used as the fallback for missing or
    /// unrecognized types.
    pub fn first_type(&self) -> Option<&str> {
        self.entries.first().map(|(t, _)| t.as_str())
    }

    /// The first registered type, or the stock default if the registry
    /// is somehow empty.
    pub fn first_type_or_default(&self) -> &str {
        self.first_type().unwrap_or(DEFAULT_ROOM_TYPE)
    }

    /// Registers a new type. Returns true if the entry was added;
    /// re-registering an existing type is a no-op.
    pub fn register(&mut self, room_type: &str, color: &str) -> bool {
        if self.contains(room_type) {
            return false;
        }
        debug!(room_type, color, "registering room type");
        self.entries
            .push((room_type.to_string(), color.to_string()));
        true
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(t, c)| (t.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
