//! Errors raised while building a floor.
//!
//! Gameplay never fails: bad intents are no-ops with a status message. Only
//! floor construction can fail, and only under configurations that leave too
//! little floor space to place everything.

use thiserror::Error;

/// What the spawner was trying to place when it ran out of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Enemy,
    Consumable,
    Container,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Enemy => "enemy",
            EntityKind::Consumable => "consumable",
            EntityKind::Container => "container",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("invalid generation config: {0}")]
    InvalidConfig(String),
    #[error("could not find a free floor tile for {kind} after {attempts} attempts")]
    PlacementExhausted { kind: EntityKind, attempts: u32 },
}

pub type GenerationResult<T> = Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_error_message_names_kind() {
        let err = GenerationError::PlacementExhausted {
            kind: EntityKind::Container,
            attempts: 12,
        };
        assert_eq!(
            err.to_string(),
            "could not find a free floor tile for container after 12 attempts"
        );
    }
}
