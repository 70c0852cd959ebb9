//! Catalog import, plan text import/export and HTML export.

use std::path::Path;

use anyhow::Context;
use tracing::info;

use floormark_catalog::BuildingCatalog;

use crate::document::{Document, FloorBoundary};
use crate::error::{CommandError, EditorResult};
use crate::html_export::render_plan_html;
use crate::serialization::{self, parse_plan_text, write_plan_text, PlanInfo};

use super::{Editor, EditorMode};

/// Counts reported after a successful text import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Vertices of the imported floor boundary.
    pub boundary_points: usize,
    /// Rooms that survived the import.
    pub rooms: usize,
}

/// Display name used in HTML exports when the catalog has no entry.
const UNKNOWN_NAME: &str = "Неизвестно";

impl Editor {
    /// Replaces the building catalog from JSON.
    ///
    /// Normalization may extend the room type registry. The first building
    /// and its first floor are auto-selected and any markup is discarded.
    /// On parse failure nothing changes.
    pub fn import_catalog(&mut self, json: &str) -> EditorResult<()> {
        let catalog = BuildingCatalog::from_json(json, &mut self.registry)?;
        self.catalog = catalog;

        self.selected_building = self.catalog.first_building().map(|b| b.id.clone());
        self.selected_floor = self
            .catalog
            .first_building()
            .and_then(|b| b.first_floor())
            .map(|f| f.id.clone());
        self.reset_markup();
        info!(
            buildings = self.catalog.len(),
            building = ?self.selected_building,
            floor = ?self.selected_floor,
            "imported building catalog"
        );
        Ok(())
    }

    /// Renders the document as plan coordinate text.
    pub fn export_text(&self) -> EditorResult<String> {
        if !self.document.boundary.is_ready() {
            return Err(CommandError::BoundaryNotReady);
        }
        if self.document.rooms.is_empty() {
            return Err(CommandError::NoRooms);
        }
        let info = self.text_plan_info()?;
        Ok(write_plan_text(&self.document, &info))
    }

    /// Renders the document as a standalone HTML page.
    pub fn export_html(&self) -> EditorResult<String> {
        if !self.document.boundary.is_ready() {
            return Err(CommandError::BoundaryNotReady);
        }
        if self.document.rooms.is_empty() {
            return Err(CommandError::NoRooms);
        }
        let image = self.image.ok_or(CommandError::NoImage)?;
        Ok(render_plan_html(&self.document, &self.html_plan_info(), image))
    }

    /// Suggested filename for an HTML export of the current selection.
    pub fn html_export_filename(&self) -> EditorResult<String> {
        let building_id = self
            .selected_building
            .as_deref()
            .ok_or(CommandError::NoBuildingSelected)?;
        let floor_id = self
            .selected_floor
            .as_deref()
            .ok_or(CommandError::NoFloorSelected)?;
        Ok(serialization::html_export_filename(building_id, floor_id))
    }

    /// Replaces the document from plan coordinate text.
    ///
    /// On success the parsed boundary arrives ready, the rooms replace the
    /// current list wholesale and the editor returns to `Idle`. A parse
    /// failure leaves everything untouched.
    pub fn import_text(&mut self, content: &str) -> EditorResult<ImportSummary> {
        if self.selected_building.is_none() {
            return Err(CommandError::NoBuildingSelected);
        }
        if self.selected_floor.is_none() {
            return Err(CommandError::NoFloorSelected);
        }
        if self.image.is_none() {
            return Err(CommandError::NoImage);
        }

        let parsed = parse_plan_text(content, &self.registry)?;
        let summary = ImportSummary {
            boundary_points: parsed.boundary.len(),
            rooms: parsed.rooms.len(),
        };

        self.selected_type = parsed.rooms.first().map(|room| room.room_type.clone());
        self.document = Document {
            boundary: FloorBoundary::restore(parsed.boundary),
            rooms: parsed.rooms,
        };
        self.draft_room.clear();
        self.mode = EditorMode::Idle;
        info!(
            boundary_points = summary.boundary_points,
            rooms = summary.rooms,
            "imported plan text"
        );
        Ok(summary)
    }

    /// Exports plan text and writes it to `path`.
    pub fn save_text_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.export_text()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write plan text to {}", path.display()))?;
        info!(path = %path.display(), "saved plan text");
        Ok(())
    }

    /// Exports HTML and writes it to `path`.
    pub fn save_html_to(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.export_html()?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write plan HTML to {}", path.display()))?;
        info!(path = %path.display(), "saved plan HTML");
        Ok(())
    }

    /// Header for text exports: names fall back to the building id and an
    /// empty floor name.
    fn text_plan_info(&self) -> EditorResult<PlanInfo> {
        let building_id = self
            .selected_building
            .as_deref()
            .ok_or(CommandError::NoBuildingSelected)?;
        let floor_id = self
            .selected_floor
            .as_deref()
            .ok_or(CommandError::NoFloorSelected)?;
        let building_name = self
            .catalog
            .building(building_id)
            .map(|b| b.name.clone())
            .unwrap_or_else(|| building_id.to_string());
        let floor_name = self
            .catalog
            .floor(building_id, floor_id)
            .map(|f| f.name.clone())
            .unwrap_or_default();
        Ok(PlanInfo {
            building_id: building_id.to_string(),
            building_name,
            floor_id: floor_id.to_string(),
            floor_name,
        })
    }

    /// Header for HTML exports: missing names render as "Неизвестно".
    fn html_plan_info(&self) -> PlanInfo {
        let building_id = self.selected_building.clone().unwrap_or_default();
        let floor_id = self.selected_floor.clone().unwrap_or_default();
        let building_name = self
            .catalog
            .building(&building_id)
            .map(|b| b.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let floor_name = self
            .catalog
            .floor(&building_id, &floor_id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        PlanInfo {
            building_id,
            building_name,
            floor_id,
            floor_name,
        }
    }
}
