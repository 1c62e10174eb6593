pub mod animation;
pub mod descriptor;
pub mod registry;
pub mod types;

// Re-export commonly used items
pub use animation::{AnimationClock, TileAnimation};
pub use descriptor::TilesetDescriptor;
pub use registry::Tileset;
pub use types::{Frame, TileId, TileRect};
