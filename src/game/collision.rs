//! Wall collision classification.
//!
//! # Overview
//!
//! [`CollisionSystem`] maps a continuous world position to a grid cell and
//! tests it against that cell's wall flags. The test treats the mover as a
//! point with a radius buffer against each of the four cell-local wall
//! planes. This is a deliberate approximation: it is not circle-vs-segment
//! collision, and the radius is not carried across an open boundary into the
//! neighboring cell's walls. The player's axis-separated movement and the
//! NPCs' give-up policy are tuned around exactly this behavior, so it must
//! not be replaced with an exact geometric test.
//!
//! # Coordinate mapping
//!
//! Cells are centered at multiples of `cell_size` on the world x/z plane
//! (height is ignored). Cell index and local offset:
//!
//! ```text
//! cell  = floor((pos + cell_size / 2) / cell_size)
//! local = pos - (cell * cell_size - cell_size / 2)    // in [0, cell_size)
//! ```
//!
//! Positions that map outside the grid classify as blocked (fail-closed), so
//! nothing can escape past the maze's outer boundary.

use crate::config::SimulationConfig;
use crate::math::vec::Vec3;
use crate::maze::grid::{Direction, Grid};

/// Classifies world positions as blocked or free against a maze's walls.
#[derive(Debug, Clone)]
pub struct CollisionSystem {
    cell_size: f32,
    player_radius: f32,
}

impl CollisionSystem {
    /// Builds a classifier from the configured cell geometry.
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            player_radius: config.player_radius,
        }
    }

    /// Returns `true` if the position is inside a wall buffer, outside the
    /// grid, or not finite.
    pub fn is_blocked(&self, grid: &Grid, position: Vec3) -> bool {
        // NaN would otherwise cast to cell index 0 and classify as free.
        if !position.x().is_finite() || !position.z().is_finite() {
            return true;
        }

        let half = self.cell_size / 2.0;
        let cell_x = ((position.x() + half) / self.cell_size).floor();
        let cell_y = ((position.z() + half) / self.cell_size).floor();

        let local_x = position.x() - (cell_x * self.cell_size - half);
        let local_y = position.z() - (cell_y * self.cell_size - half);

        let Some(cell) = grid.get_cell(cell_x as isize, cell_y as isize) else {
            return true;
        };

        if cell.wall(Direction::North) && local_y > self.cell_size - self.player_radius {
            return true;
        }
        if cell.wall(Direction::East) && local_x > self.cell_size - self.player_radius {
            return true;
        }
        if cell.wall(Direction::South) && local_y < self.player_radius {
            return true;
        }
        if cell.wall(Direction::West) && local_x < self.player_radius {
            return true;
        }

        false
    }
}
