//! Error types for the annotation editor.
//!
//! Two error domains live here:
//! - [`CommandError`] - a command was rejected; the document is unchanged
//! - [`PlanParseError`] - a plan coordinate file could not be imported
//!
//! Every variant renders a human-readable reason through `Display`, suitable
//! for surfacing directly in a status line or CLI output.

use thiserror::Error;

use floormark_catalog::CatalogError;

/// Reasons an editor command can be rejected.
///
/// A rejected command never applies a partial mutation: the document, the
/// catalog and the registry all keep the state they had before the call.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No floor plan image has been attached yet.
    #[error("No floor plan image is attached")]
    NoImage,

    /// No building is selected in the catalog.
    #[error("No building is selected")]
    NoBuildingSelected,

    /// No floor is selected in the current building.
    #[error("No floor is selected")]
    NoFloorSelected,

    /// The floor boundary has not been finished yet.
    #[error("The floor boundary is not finished")]
    BoundaryNotReady,

    /// Restarting floor markup would discard an existing boundary or rooms.
    #[error("Restarting floor markup discards the current boundary and rooms; confirm to proceed")]
    ConfirmationRequired,

    /// The command requires floor markup to be active.
    #[error("Floor markup is not active")]
    NotMarkingFloor,

    /// The command requires room markup to be active.
    #[error("Room markup is not active")]
    NotMarkingRoom,

    /// The command is only available while no markup is in progress.
    #[error("Markup is in progress; finish the current polygon first")]
    MarkupInProgress,

    /// The boundary polygon is too small to close.
    #[error("The floor boundary needs at least 3 points, got {actual}")]
    TooFewBoundaryPoints {
        /// Number of points collected so far.
        actual: usize,
    },

    /// The room polygon is too small to close.
    #[error("A room needs at least 3 points, got {actual}")]
    TooFewRoomPoints {
        /// Number of points collected so far.
        actual: usize,
    },

    /// A point falls outside the finished floor boundary.
    #[error("Point ({x}, {y}) is outside the floor boundary")]
    PointOutsideBoundary { x: f64, y: f64 },

    /// A point has a NaN or infinite coordinate.
    #[error("Point coordinates must be finite")]
    NonFinitePoint,

    /// Room markup needs a declared room or a declared-room selection.
    #[error("The selected floor has no declared rooms and none was specified")]
    NoDeclaredRooms,

    /// Another room already uses this name.
    #[error("A room named \"{name}\" already exists")]
    RoomNameTaken {
        /// The conflicting name.
        name: String,
    },

    /// Room names must contain at least one non-whitespace character.
    #[error("The room name must not be empty")]
    EmptyRoomName,

    /// The room index does not refer to an existing room.
    #[error("No room at index {index} (the floor has {count})")]
    RoomIndexOutOfRange { index: usize, count: usize },

    /// Export requires at least one committed room.
    #[error("No rooms have been marked yet")]
    NoRooms,

    /// The room type is not present in the registry.
    #[error("Unknown room type: {0}")]
    UnknownRoomType(String),

    /// A catalog operation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A plan coordinate file could not be parsed.
    #[error(transparent)]
    Parse(#[from] PlanParseError),
}

/// Errors raised while importing a plan coordinate file.
#[derive(Error, Debug)]
pub enum PlanParseError {
    /// The file holds no usable floor boundary.
    #[error("The file has no floor boundary with at least {required} points (found {actual})")]
    BoundaryTooSmall {
        /// Minimum number of boundary points accepted.
        required: usize,
        /// Number of boundary points actually found.
        actual: usize,
    },
}

/// Convenience alias for editor command results.
pub type EditorResult<T> = Result<T, CommandError>;
