//! Tunables for floor generation and visibility.

use super::constants::{
    FOG_RADIUS, MAP_HEIGHT, MAP_WIDTH, MAX_PLACEMENT_ATTEMPTS, MAX_ROOMS, ROOM_MAX_SIZE,
    ROOM_MIN_SIZE,
};
use super::error::{GenerationError, GenerationResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub map_width: i32,
    pub map_height: i32,
    /// Candidate rooms attempted per floor; rejected candidates are not retried.
    pub max_rooms: usize,
    pub room_min_size: i32,
    pub room_max_size: i32,
    pub fog_radius: i32,
    pub max_placement_attempts: u32,
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            max_rooms: MAX_ROOMS,
            room_min_size: ROOM_MIN_SIZE,
            room_max_size: ROOM_MAX_SIZE,
            fog_radius: FOG_RADIUS,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Checks that a room of the largest size still fits inside the border
    /// margin, so candidate position ranges are never empty.
    pub fn validate(&self) -> GenerationResult<()> {
        if self.room_min_size < 1 || self.room_min_size > self.room_max_size {
            return Err(GenerationError::InvalidConfig(format!(
                "room size band {}..={} is empty",
                self.room_min_size, self.room_max_size
            )));
        }
        // x is drawn from 1..=width - room_width - 2
        if self.map_width - self.room_max_size - 2 < 1
            || self.map_height - self.room_max_size - 2 < 1
        {
            return Err(GenerationError::InvalidConfig(format!(
                "{}x{} map cannot hold a {} tile room with a border",
                self.map_width, self.map_height, self.room_max_size
            )));
        }
        if self.max_rooms == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_rooms must be at least 1".to_string(),
            ));
        }
        if self.max_placement_attempts == 0 {
            return Err(GenerationError::InvalidConfig(
                "max_placement_attempts must be at least 1".to_string(),
            ));
        }
        if self.fog_radius < 0 {
            return Err(GenerationError::InvalidConfig(
                "fog_radius cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
