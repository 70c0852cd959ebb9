//! The annotation editor: owned state plus the command API.
//!
//! Submodules group the commands:
//! - `markup` - floor boundary and room markup state machine
//! - `rooms` - editing and deleting committed rooms
//! - `io` - catalog import, plan text import/export, HTML export
//!
//! Every command validates first and mutates only on success, so a failed
//! call leaves the editor exactly as it was.

mod io;
mod markup;
mod rooms;

pub use io::ImportSummary;

use tracing::debug;

use floormark_catalog::{BuildingCatalog, RoomTypeRegistry};
use floormark_core::Point;

use crate::document::{Document, ImageInfo};
use crate::error::{CommandError, EditorResult};
use crate::viewport::Viewport;

/// Markup state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// No markup in progress; rooms can be edited and plans exported.
    #[default]
    Idle,
    /// Collecting floor boundary points.
    MarkingFloor,
    /// Collecting room polygon points.
    MarkingRoom,
}

/// Interactive floor plan annotation session.
///
/// The editor owns the building catalog, the room type registry, the current
/// selection and the annotation [`Document`]. It is single threaded by
/// design; wrap it in your own synchronization if it must cross threads.
#[derive(Debug, Clone)]
pub struct Editor {
    registry: RoomTypeRegistry,
    catalog: BuildingCatalog,
    selected_building: Option<String>,
    selected_floor: Option<String>,
    image: Option<ImageInfo>,
    viewport: Viewport,
    mode: EditorMode,
    document: Document,
    draft_room: Vec<Point>,
    declared_selection: Option<String>,
    selected_type: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Creates an editor with the stock room type registry and an empty
    /// catalog.
    pub fn new() -> Self {
        Self {
            registry: RoomTypeRegistry::default(),
            catalog: BuildingCatalog::default(),
            selected_building: None,
            selected_floor: None,
            image: None,
            viewport: Viewport::new(),
            mode: EditorMode::Idle,
            document: Document::default(),
            draft_room: Vec::new(),
            declared_selection: None,
            selected_type: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn registry(&self) -> &RoomTypeRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &BuildingCatalog {
        &self.catalog
    }

    pub fn selected_building_id(&self) -> Option<&str> {
        self.selected_building.as_deref()
    }

    pub fn selected_floor_id(&self) -> Option<&str> {
        self.selected_floor.as_deref()
    }

    pub fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Vertices of the room polygon currently being marked.
    pub fn draft_room_points(&self) -> &[Point] {
        &self.draft_room
    }

    /// Declared catalog room the next committed room will fulfil, if any.
    pub fn declared_selection(&self) -> Option<&str> {
        self.declared_selection.as_deref()
    }

    /// Room type used for freehand rooms, when one has been selected.
    pub fn selected_room_type(&self) -> Option<&str> {
        self.selected_type.as_deref()
    }

    /// Selects a building and its first floor, discarding any markup.
    pub fn select_building(&mut self, building_id: &str) -> EditorResult<()> {
        let building = self.catalog.require_building(building_id)?;
        let first_floor = building.first_floor().map(|floor| floor.id.clone());

        self.selected_building = Some(building_id.to_string());
        self.selected_floor = first_floor;
        self.reset_markup();
        debug!(
            building = building_id,
            floor = ?self.selected_floor,
            "selected building"
        );
        Ok(())
    }

    /// Selects a floor in the current building, discarding any markup.
    pub fn select_floor(&mut self, floor_id: &str) -> EditorResult<()> {
        let building_id = self
            .selected_building
            .as_deref()
            .ok_or(CommandError::NoBuildingSelected)?;
        self.catalog.require_floor(building_id, floor_id)?;

        self.selected_floor = Some(floor_id.to_string());
        self.reset_markup();
        debug!(floor = floor_id, "selected floor");
        Ok(())
    }

    /// Attaches a floor plan image for the selected floor.
    ///
    /// Resets the zoom to 1:1 and discards any markup, since stored points
    /// are only meaningful relative to one image.
    pub fn attach_image(&mut self, image: ImageInfo) -> EditorResult<()> {
        if self.selected_building.is_none() {
            return Err(CommandError::NoBuildingSelected);
        }
        if self.selected_floor.is_none() {
            return Err(CommandError::NoFloorSelected);
        }

        self.image = Some(image);
        self.viewport.reset();
        self.reset_markup();
        debug!(
            width = image.width,
            height = image.height,
            "attached floor plan image"
        );
        Ok(())
    }

    /// Zooms in one step. Does nothing until an image is attached.
    pub fn zoom_in(&mut self) {
        if self.image.is_some() {
            self.viewport.zoom_in();
        }
    }

    /// Zooms out one step. Does nothing until an image is attached.
    pub fn zoom_out(&mut self) {
        if self.image.is_some() {
            self.viewport.zoom_out();
        }
    }

    /// Restores the 1:1 zoom. Does nothing until an image is attached.
    pub fn reset_zoom(&mut self) {
        if self.image.is_some() {
            self.viewport.reset();
        }
    }

    /// Maps an on-screen position to image pixel coordinates.
    pub fn screen_to_image(&self, x: f64, y: f64) -> Point {
        self.viewport.screen_to_image(x, y)
    }

    /// Discards the boundary, all rooms and any in-progress polygon. The
    /// catalog, selection and image are kept.
    pub(crate) fn reset_markup(&mut self) {
        self.document.reset();
        self.draft_room.clear();
        self.declared_selection = None;
        self.mode = EditorMode::Idle;
    }
}
