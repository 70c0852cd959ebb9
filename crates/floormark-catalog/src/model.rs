use serde::Deserialize;

use crate::error::{CatalogError, CatalogResult};
use crate::registry::{RoomTypeRegistry, DEFAULT_ROOM_TYPE};

// Wire shapes: every field is optional in the JSON, defaults apply
// during normalization.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    buildings: Vec<BuildingRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BuildingRecord {
    id: String,
    name: String,
    floors: Vec<FloorRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FloorRecord {
    id: String,
    name: String,
    rooms: Vec<RoomRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RoomRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    room_type: String,
    color: Option<String>,
}

/// A room entry declared by the catalog, pre-supplying identity and
/// styling for the tracing step.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDeclaration {
    pub id: String,
    pub name: String,
    pub room_type: String,
    pub color: String,
}

/// A floor within a building, with its declared rooms in file order.
#[derive(Debug, Clone)]
pub struct Floor {
    pub id: String,
    pub name: String,
    pub rooms: Vec<RoomDeclaration>,
}

impl Floor {
    pub fn room(&self, id: &str) -> Option<&RoomDeclaration> {
        self.rooms.iter().find(|r| r.id == id)
    }
}

/// A building with its floors in file order.
#[derive(Debug, Clone)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub floors: Vec<Floor>,
}

impl Building {
    pub fn floor(&self, id: &str) -> Option<&Floor> {
        self.floors.iter().find(|f| f.id == id)
    }

    pub fn first_floor(&self) -> Option<&Floor> {
        self.floors.first()
    }
}

/// The externally supplied building hierarchy.
///
/// Read-only once loaded: the annotation session looks up declared
/// rooms here but never writes back. Loading normalizes the wire data:
/// missing names fall back to ids, missing room types to
/// [`DEFAULT_ROOM_TYPE`], missing colors to the registry color for the
/// type (or the fallback gray), and any unrecognized type that carries
/// an explicit color is registered for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct BuildingCatalog {
    buildings: Vec<Building>,
}

impl BuildingCatalog {
    /// Parses and normalizes catalog JSON. A document without a
    /// `buildings` key yields an empty catalog.
    pub fn from_json(json: &str, registry: &mut RoomTypeRegistry) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut buildings = Vec::with_capacity(file.buildings.len());
        for building in file.buildings {
            let mut floors = Vec::with_capacity(building.floors.len());
            for floor in building.floors {
                let mut rooms = Vec::with_capacity(floor.rooms.len());
                for room in floor.rooms {
                    let name = if room.name.is_empty() {
                        room.id.clone()
                    } else {
                        room.name
                    };
                    let room_type = if room.room_type.is_empty() {
                        DEFAULT_ROOM_TYPE.to_string()
                    } else {
                        room.room_type
                    };

                    let declared_color = room.color.filter(|c| !c.is_empty());
                    if let Some(color) = &declared_color {
                        registry.register(&room_type, color);
                    }
                    let color = declared_color
                        .unwrap_or_else(|| registry.color_or_fallback(&room_type).to_string());

                    rooms.push(RoomDeclaration {
                        id: room.id,
                        name,
                        room_type,
                        color,
                    });
                }

                let name = if floor.name.is_empty() {
                    floor.id.clone()
                } else {
                    floor.name
                };
                floors.push(Floor {
                    id: floor.id,
                    name,
                    rooms,
                });
            }

            let name = if building.name.is_empty() {
                building.id.clone()
            } else {
                building.name
            };
            buildings.push(Building {
                id: building.id,
                name,
                floors,
            });
        }

        Ok(Self { buildings })
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn first_building(&self) -> Option<&Building> {
        self.buildings.first()
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn require_building(&self, id: &str) -> CatalogResult<&Building> {
        self.building(id)
            .ok_or_else(|| CatalogError::BuildingNotFound(id.to_string()))
    }

    pub fn floor(&self, building_id: &str, floor_id: &str) -> Option<&Floor> {
        self.building(building_id).and_then(|b| b.floor(floor_id))
    }

    pub fn require_floor(&self, building_id: &str, floor_id: &str) -> CatalogResult<&Floor> {
        self.floor(building_id, floor_id)
            .ok_or_else(|| CatalogError::FloorNotFound {
                building: building_id.to_string(),
                floor: floor_id.to_string(),
            })
    }

    /// Declared rooms for a floor, or an empty slice when the
    /// building/floor pair is unknown.
    pub fn declared_rooms(&self, building_id: &str, floor_id: &str) -> &[RoomDeclaration] {
        self.floor(building_id, floor_id)
            .map(|f| f.rooms.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FALLBACK_COLOR;

    const SAMPLE: &str = r##"{
        "buildings": [
            {
                "id": "B1",
                "name": "Главный корпус",
                "floors": [
                    {
                        "id": "F1",
                        "name": "Первый этаж",
                        "rooms": [
                            {"id": "R101", "name": "Аудитория 101", "type": "Учебное помещение"},
                            {"id": "R102", "name": "Серверная 1", "type": "Серверная", "color": "#112233"},
                            {"id": "R103"}
                        ]
                    },
                    {"id": "F2"}
                ]
            },
            {"id": "B2", "floors": []}
        ]
    }"##;

    #[test]
    fn test_load_and_normalize() {
        let mut registry = RoomTypeRegistry::new();
        let catalog = BuildingCatalog::from_json(SAMPLE, &mut registry).unwrap();

        assert_eq!(catalog.len(), 2);
        let b1 = catalog.building("B1").unwrap();
        assert_eq!(b1.name, "Главный корпус");

        // Missing names fall back to ids.
        assert_eq!(catalog.building("B2").unwrap().name, "B2");
        assert_eq!(b1.floor("F2").unwrap().name, "F2");

        let f1 = b1.floor("F1").unwrap();
        let r101 = f1.room("R101").unwrap();
        assert_eq!(r101.name, "Аудитория 101");
        assert_eq!(r101.color, "#4CAF50");

        // Bare room: name from id, default type with its stock color.
        let r103 = f1.room("R103").unwrap();
        assert_eq!(r103.name, "R103");
        assert_eq!(r103.room_type, DEFAULT_ROOM_TYPE);
        assert_eq!(r103.color, "#4CAF50");
    }

    #[test]
    fn test_unknown_type_with_color_extends_registry() {
        let mut registry = RoomTypeRegistry::new();
        let catalog = BuildingCatalog::from_json(SAMPLE, &mut registry).unwrap();

        assert_eq!(registry.color_for("Серверная"), Some("#112233"));
        let r102 = catalog.floor("B1", "F1").unwrap().room("R102").unwrap();
        assert_eq!(r102.color, "#112233");
    }

    #[test]
    fn test_unknown_type_without_color_gets_fallback_and_no_registration() {
        let json = r#"{"buildings": [{"id": "B1", "floors": [
            {"id": "F1", "rooms": [{"id": "R1", "type": "Обсерватория"}]}
        ]}]}"#;
        let mut registry = RoomTypeRegistry::new();
        let catalog = BuildingCatalog::from_json(json, &mut registry).unwrap();

        assert!(!registry.contains("Обсерватория"));
        let room = catalog.floor("B1", "F1").unwrap().room("R1").unwrap();
        assert_eq!(room.color, FALLBACK_COLOR);
    }

    #[test]
    fn test_registered_type_colors_later_rooms() {
        let json = r##"{"buildings": [{"id": "B1", "floors": [{"id": "F1", "rooms": [
            {"id": "R1", "type": "Серверная", "color": "#112233"},
            {"id": "R2", "type": "Серверная"}
        ]}]}]}"##;
        let mut registry = RoomTypeRegistry::new();
        let catalog = BuildingCatalog::from_json(json, &mut registry).unwrap();

        let r2 = catalog.floor("B1", "F1").unwrap().room("R2").unwrap();
        assert_eq!(r2.color, "#112233");
    }

    #[test]
    fn test_missing_buildings_key_is_empty_catalog() {
        let mut registry = RoomTypeRegistry::new();
        let catalog = BuildingCatalog::from_json("{}", &mut registry).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut registry = RoomTypeRegistry::new();
        let err = BuildingCatalog::from_json("{\"buildings\": [", &mut registry).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_require_lookups() {
        let mut registry = RoomTypeRegistry::new();
        let catalog = BuildingCatalog::from_json(SAMPLE, &mut registry).unwrap();

        assert!(catalog.require_building("B1").is_ok());
        assert!(matches!(
            catalog.require_building("B9"),
            Err(CatalogError::BuildingNotFound(_))
        ));
        assert!(catalog.require_floor("B1", "F2").is_ok());
        assert!(matches!(
            catalog.require_floor("B1", "F9"),
            Err(CatalogError::FloorNotFound { .. })
        ));
        assert!(catalog.declared_rooms("B9", "F1").is_empty());
        assert_eq!(catalog.declared_rooms("B1", "F1").len(), 3);
    }
}
