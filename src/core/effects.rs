//! Damage floats: short-lived numbers drawn over a tile after a hit or heal.
//!
//! Only the render clock advances these; turns just spawn them.

use crate::core::constants::DAMAGE_FLOAT_LIFETIME_SECONDS;
use crate::dungeon::types::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatColor {
    /// Damage the player dealt
    White,
    /// Critical hit by the player
    Yellow,
    /// Damage the player took
    Red,
    /// Healing of any kind
    Green,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageFloat {
    pub position: Position,
    pub amount: u32,
    pub color: FloatColor,
    pub lifetime: f64,
    pub max_lifetime: f64,
}

impl DamageFloat {
    pub fn new(position: Position, amount: u32, color: FloatColor) -> Self {
        Self {
            position,
            amount,
            color,
            lifetime: 0.0,
            max_lifetime: DAMAGE_FLOAT_LIFETIME_SECONDS,
        }
    }

    /// Advances the fade. Returns false once the float has expired.
    pub fn update(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.lifetime < self.max_lifetime
    }

    pub fn remaining_life(&self) -> f64 {
        (self.max_lifetime - self.lifetime).max(0.0)
    }

    /// 0.0 when fresh, 1.0 when gone.
    pub fn progress(&self) -> f64 {
        if self.max_lifetime <= 0.0 {
            return 1.0;
        }
        (self.lifetime / self.max_lifetime).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_creation() {
        let float = DamageFloat::new(Position::new(3, 3), 4, FloatColor::White);
        assert!(float.is_active());
        assert_eq!(float.lifetime, 0.0);
        assert_eq!(float.remaining_life(), DAMAGE_FLOAT_LIFETIME_SECONDS);
    }

    #[test]
    fn test_float_expires() {
        let mut float = DamageFloat::new(Position::new(0, 0), 2, FloatColor::Red);
        assert!(float.update(0.5));
        assert!(!float.update(0.5));
        assert_eq!(float.remaining_life(), 0.0);
        assert_eq!(float.progress(), 1.0);
    }
}
