//! Maze grid model and generation.
//!
//! This module owns all wall state. [`grid`] holds the cell array and the
//! wall-symmetry invariant; [`generator`] carves perfect mazes into it. The
//! spawn helper here is the shared source of random positions: initial
//! placement, NPC re-targeting, and respawn after regeneration all draw from
//! it.

pub mod generator;
pub mod grid;

use rand::Rng;

use crate::config::SimulationConfig;
use crate::math::vec::Vec3;
use crate::maze::grid::Grid;

/// Picks a uniformly random cell and returns its center in world space.
///
/// Cell (x, y) is centered at world (`x * cell_size`, `y * cell_size`) on the
/// floor plane; the vertical offset is fixed at half the body height.
pub fn random_spawn_position(
    grid: &Grid,
    config: &SimulationConfig,
    rng: &mut impl Rng,
) -> Vec3 {
    let x = rng.gen_range(0..grid.width());
    let y = rng.gen_range(0..grid.height());
    Vec3::new(
        x as f32 * config.cell_size,
        config.spawn_height(),
        y as f32 * config.cell_size,
    )
}
