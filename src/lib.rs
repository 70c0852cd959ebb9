//! # Floormark
//!
//! An interactive floor plan annotation toolkit: load a building/floor
//! hierarchy from JSON, overlay a raster floor plan, trace the floor
//! boundary and room polygons, and export the result as a coordinate text
//! file or a standalone SVG-in-HTML visualization.
//!
//! ## Architecture
//!
//! Floormark is organized as a workspace with multiple crates:
//!
//! 1. **floormark-core** - 2D points and polygon geometry (ray-casting
//!    containment, centroid)
//! 2. **floormark-catalog** - building/floor/room catalog and the room
//!    type registry
//! 3. **floormark-editor** - annotation document, markup state machine,
//!    text/HTML import/export
//! 4. **floormark** - this facade plus the command line interface
//!
//! ## Features
//!
//! - **Polygon annotation**: floor boundary and room polygons in image
//!   pixel coordinates, gated by point-in-polygon containment
//! - **Catalog binding**: rooms can fulfil pre-declared catalog records or
//!   be traced freehand with auto-naming
//! - **Plain text plans**: a tolerant line-oriented coordinate format that
//!   round-trips through export and import
//! - **Standalone HTML export**: a self-contained page with an SVG
//!   rendering, tooltips and centroid-placed labels

pub use floormark_core::{
    point_in_polygon, polygon_centroid, Point, MIN_POLYGON_POINTS, RAY_CAST_EPSILON,
};

pub use floormark_catalog::{
    Building, BuildingCatalog, CatalogError, CatalogResult, Floor, RoomDeclaration,
    RoomTypeRegistry, DEFAULT_ROOM_TYPE, FALLBACK_COLOR,
};

pub use floormark_editor::{
    html_export_filename, parse_plan_text, render_plan_html, write_plan_text, CommandError,
    Document, Editor, EditorMode, EditorResult, FloorBoundary, ImageInfo, ImportSummary,
    ParsedPlan, PlanInfo, PlanParseError, Room, Viewport, BOUNDARY_TOKEN, BUILDING_TOKEN,
    FLOOR_TOKEN, TEXT_EXPORT_FILENAME,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
