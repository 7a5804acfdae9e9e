//! Delve - terminal dungeon crawler library
//!
//! Floor generation, enemy behaviour, combat, progression and loot. The
//! binary in `main.rs` is a thin ratatui front-end over this crate.

pub mod build_info;
pub mod character;
pub mod combat;
pub mod core;
pub mod dungeon;
pub mod enemies;
pub mod input;
pub mod items;
pub mod ui;
