//! Game state aggregate, tunables and the turn processor.

pub mod config;
pub mod constants;
pub mod effects;
pub mod error;
pub mod game_state;
pub mod turn;

pub use config::*;
pub use effects::*;
pub use error::*;
pub use game_state::*;
pub use turn::*;
