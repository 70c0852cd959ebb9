//! Error types for catalog loading and lookups.

use thiserror::Error;

/// Errors raised while parsing or querying the building catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No building with the requested id exists in the catalog.
    #[error("Building not found: {0}")]
    BuildingNotFound(String),

    /// No floor with the requested id exists under the building.
    #[error("Floor not found: {floor} in building {building}")]
    FloorNotFound {
        /// The id of the building that was searched.
        building: String,
        /// The floor id that was not found.
        floor: String,
    },
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
