//! Floor layout, generation, entity placement and fog of war.

pub mod floor;
pub mod generation;
pub mod spawning;
pub mod types;
pub mod visibility;

pub use floor::*;
pub use generation::*;
pub use types::*;
pub use visibility::*;
