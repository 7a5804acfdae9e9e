//! Item system: types, equipment, names, generation and loot decisions.

pub mod equipment;
pub mod generation;
pub mod loot;
pub mod names;
pub mod types;

pub use equipment::*;
pub use generation::*;
pub use loot::*;
pub use types::*;
