//! Player position and collision-gated movement.
//!
//! The core does not own player input: the presentation layer computes the
//! intended movement delta (camera-relative, already scaled by speed and
//! delta-time) and hands it in each tick. This module only applies the delta
//! through the collision classifier, one horizontal axis at a time, so a
//! diagonal push into a wall still slides along the open axis.

use crate::game::collision::CollisionSystem;
use crate::math::vec::Vec3;
use crate::maze::grid::Grid;

/// The tracked player position.
#[derive(Debug, Clone)]
pub struct Player {
    /// Current world position.
    pub position: Vec3,
}

impl Player {
    /// Creates a player at the given position (normally a spawn position).
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Applies an intended movement delta, committing each horizontal axis
    /// independently iff its proposed position classifies as free.
    ///
    /// `delta` is `(dx, dz)` in world units; height never changes.
    pub fn apply_movement(
        &mut self,
        grid: &Grid,
        collision: &CollisionSystem,
        delta: (f32, f32),
    ) {
        let along_x = Vec3::new(
            self.position.x() + delta.0,
            self.position.y(),
            self.position.z(),
        );
        if !collision.is_blocked(grid, along_x) {
            self.position = along_x;
        }

        let along_z = Vec3::new(
            self.position.x(),
            self.position.y(),
            self.position.z() + delta.1,
        );
        if !collision.is_blocked(grid, along_z) {
            self.position = along_z;
        }
    }
}
