//! Interactive floor plan annotation: document model, markup state machine
//! and plan import/export.
//!
//! The central type is [`Editor`], which owns the building catalog, the room
//! type registry, the current building/floor selection, the attached plan
//! image and the annotation [`Document`]. All mutation goes through its
//! command API; every command validates first and either succeeds or leaves
//! the editor untouched, reporting a human-readable reason.
//!
//! A typical session:
//!
//! ```no_run
//! use floormark_core::Point;
//! use floormark_editor::{Editor, ImageInfo};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = Editor::new();
//! editor.import_catalog(r#"{"buildings": [{"id": "b1", "name": "Корпус 1",
//!     "floors": [{"id": "f1", "name": "Этаж 1", "rooms":
//!         [{"id": "r-101", "name": "Аудитория 101"}]}]}]}"#)?;
//! editor.attach_image(ImageInfo::new(800, 600))?;
//!
//! editor.start_floor_markup(false)?;
//! for (x, y) in [(0.0, 0.0), (800.0, 0.0), (800.0, 600.0), (0.0, 600.0)] {
//!     editor.add_floor_point(Point::new(x, y))?;
//! }
//! editor.finish_floor_markup()?;
//!
//! editor.start_room(Some("r-101"))?;
//! for (x, y) in [(10.0, 10.0), (200.0, 10.0), (200.0, 150.0)] {
//!     editor.add_room_point(Point::new(x, y))?;
//! }
//! editor.finish_room()?;
//!
//! let text = editor.export_text()?;
//! # let _ = text;
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod editor;
pub mod error;
pub mod html_export;
pub mod serialization;
pub mod viewport;

pub use document::{Document, FloorBoundary, ImageInfo, Room};
pub use editor::{Editor, EditorMode, ImportSummary};
pub use error::{CommandError, EditorResult, PlanParseError};
pub use html_export::render_plan_html;
pub use serialization::{
    html_export_filename, parse_plan_text, write_plan_text, ParsedPlan, PlanInfo, BOUNDARY_TOKEN,
    BUILDING_TOKEN, FLOOR_TOKEN, TEXT_EXPORT_FILENAME,
};
pub use viewport::Viewport;
