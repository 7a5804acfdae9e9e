//! Fog of war: a radius-limited visible set plus a monotonic discovered set.

use super::types::Position;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    width: i32,
    height: i32,
    /// Recomputed every frame, still part of the snapshot
    visible: Vec<bool>,
    /// Only ever grows for the lifetime of a floor
    discovered: Vec<bool>,
}

impl Visibility {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            visible: vec![false; len],
            discovered: vec![false; len],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }

    /// Marks every in-bounds tile within Euclidean `radius` of `center` as
    /// visible, clears the rest, and folds the result into the discovered set.
    /// Calling it twice with the same inputs leaves the same state.
    pub fn recompute(&mut self, center: Position, radius: i32) {
        self.visible.iter_mut().for_each(|v| *v = false);

        let radius_sq = radius * radius;
        for y in (center.y - radius)..=(center.y + radius) {
            for x in (center.x - radius)..=(center.x + radius) {
                let pos = Position::new(x, y);
                if pos.distance_squared(center) > radius_sq {
                    continue;
                }
                if let Some(i) = self.index(pos) {
                    self.visible[i] = true;
                    self.discovered[i] = true;
                }
            }
        }
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        self.index(pos)
            .and_then(|i| self.visible.get(i).copied())
            .unwrap_or(false)
    }

    pub fn is_discovered(&self, pos: Position) -> bool {
        self.index(pos).map(|i| self.discovered[i]).unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.iter().filter(|&&d| d).count()
    }
}
