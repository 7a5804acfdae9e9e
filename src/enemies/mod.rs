//! Enemy state and turn behaviour.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
