pub mod error;
pub mod model;
pub mod registry;

pub use error::{CatalogError, CatalogResult};
pub use model::{Building, BuildingCatalog, Floor, RoomDeclaration};
pub use registry::{RoomTypeRegistry, DEFAULT_ROOM_TYPE, FALLBACK_COLOR};
