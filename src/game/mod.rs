//! Simulation state management and the per-tick update loop.
//!
//! This module defines [`Simulation`], which owns all mutable state of the
//! core: the maze grid, the NPC collection, the tracked player position, and
//! the random source. The presentation layer drives it by calling
//! [`Simulation::tick`] once per frame with a [`FrameInput`] and reads state
//! back through the accessor methods.
//!
//! Tick ordering is fixed: a pending regenerate trigger is applied first and
//! atomically (no player or NPC update ever runs against a half-built grid),
//! then the player's movement delta is applied against the current grid, then
//! each NPC thinks and moves in a fixed order. NPCs never observe each other,
//! so their order only matters for reproducibility of random-number
//! consumption under a seeded source.

pub mod collision;
pub mod npc;
pub mod player;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, SimulationConfig};
use crate::game::collision::CollisionSystem;
use crate::game::npc::Npc;
use crate::game::player::Player;
use crate::math::vec::Vec3;
use crate::maze::generator::MazeGenerator;
use crate::maze::grid::Grid;
use crate::maze::random_spawn_position;

/// Everything the presentation layer supplies for one simulation tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Seconds elapsed since the previous tick; never negative.
    pub delta_time: f32,
    /// Intended player movement `(dx, dz)`, already scaled by speed and
    /// delta-time and pre-shaped by the camera.
    pub move_delta: (f32, f32),
    /// Edge-triggered request to rebuild the maze before anything else
    /// happens this tick.
    pub regenerate: bool,
}

/// The complete headless maze simulation.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    generator: MazeGenerator,
    collision: CollisionSystem,
    player: Player,
    npcs: Vec<Npc>,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a simulation seeded from process entropy.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, rand::random())
    }

    /// Creates a simulation with a fixed seed for deterministic replay.
    ///
    /// Two simulations built from the same config and seed, fed the same
    /// sequence of [`FrameInput`]s, evolve identically.
    pub fn with_seed(config: SimulationConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut grid = Grid::new(config.maze_width, config.maze_height)?;
        let mut generator = MazeGenerator::new();
        generator.generate(&mut grid, &mut rng);

        let player = Player::new(random_spawn_position(&grid, &config, &mut rng));
        let npcs = (0..config.npc_count)
            .map(|_| Npc::spawn(&grid, &config, &mut rng))
            .collect();

        Ok(Self {
            collision: CollisionSystem::new(&config),
            config,
            grid,
            generator,
            player,
            npcs,
            rng,
        })
    }

    /// Advances the simulation by one frame.
    pub fn tick(&mut self, input: &FrameInput) {
        if input.regenerate {
            self.regenerate();
        }

        self.player
            .apply_movement(&self.grid, &self.collision, input.move_delta);

        let player_position = self.player.position;
        for npc in &mut self.npcs {
            npc.think(
                &self.grid,
                &self.config,
                player_position,
                input.delta_time,
                &mut self.rng,
            );
            npc.update(
                &self.grid,
                &self.collision,
                &self.config,
                input.delta_time,
                &mut self.rng,
            );
        }
    }

    /// Rebuilds the maze and respawns the player and every NPC.
    ///
    /// This is a single synchronous step; callers observe either the old
    /// world or the fully rebuilt one, never anything in between.
    pub fn regenerate(&mut self) {
        self.generator.generate(&mut self.grid, &mut self.rng);
        self.player.position = random_spawn_position(&self.grid, &self.config, &mut self.rng);
        for npc in &mut self.npcs {
            npc.respawn(&self.grid, &self.config, &mut self.rng);
        }
        tracing::debug!(npcs = self.npcs.len(), "maze regenerated, world respawned");
    }

    /// Classifies a world position against the current maze walls.
    pub fn is_blocked(&self, position: Vec3) -> bool {
        self.collision.is_blocked(&self.grid, position)
    }

    /// Draws a uniformly random cell-center spawn position.
    pub fn random_spawn_position(&mut self) -> Vec3 {
        random_spawn_position(&self.grid, &self.config, &mut self.rng)
    }

    /// Wall flags of the cell at (x, y), or `None` if out of bounds.
    ///
    /// Read-only view for renderers and minimaps; flags are indexed by
    /// [`crate::maze::grid::Direction`].
    pub fn cell_at(&self, x: isize, y: isize) -> Option<[bool; 4]> {
        self.grid.get_cell(x, y).map(|cell| cell.walls())
    }

    /// The maze grid (read-only).
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The tracked player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Overwrites the player position, e.g. when the presentation layer
    /// teleports or resets outside the normal movement path.
    pub fn set_player_position(&mut self, position: Vec3) {
        self.player.position = position;
    }

    /// The NPC collection, in their fixed processing order.
    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::npc::NpcState;
    use super::*;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            maze_width: 5,
            maze_height: 5,
            npc_count: 4,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn construction_validates_config() {
        let bad = SimulationConfig {
            maze_width: 0,
            ..SimulationConfig::default()
        };
        assert!(Simulation::new(bad).is_err());
    }

    #[test]
    fn new_simulation_spawns_everything_in_bounds() {
        let sim = Simulation::with_seed(small_config(), 21).unwrap();

        assert_eq!(sim.npcs().len(), 4);
        assert!(!sim.is_blocked(sim.player().position));
        for npc in sim.npcs() {
            assert!(!sim.is_blocked(npc.position));
            assert_eq!(npc.state, NpcState::Wandering);
        }
    }

    /// Tests deterministic replay: same seed and inputs, identical worlds.
    #[test]
    fn same_seed_evolves_identically() {
        let mut a = Simulation::with_seed(small_config(), 77).unwrap();
        let mut b = Simulation::with_seed(small_config(), 77).unwrap();

        let input = FrameInput {
            delta_time: 0.2,
            move_delta: (0.05, 0.0),
            regenerate: false,
        };
        for _ in 0..20 {
            a.tick(&input);
            b.tick(&input);
        }

        assert_eq!(a.player().position, b.player().position);
        for (na, nb) in a.npcs().iter().zip(b.npcs()) {
            assert_eq!(na.position, nb.position);
            assert_eq!(na.target, nb.target);
            assert_eq!(na.state, nb.state);
        }
    }

    /// Tests that regeneration rebuilds the maze and respawns the player
    /// and every NPC with their state machines reset.
    #[test]
    fn regenerate_respawns_the_world() {
        let mut sim = Simulation::with_seed(small_config(), 5).unwrap();
        let old_walls: Vec<[bool; 4]> = sim.grid().cells().map(|c| c.walls()).collect();

        sim.regenerate();

        let new_walls: Vec<[bool; 4]> = sim.grid().cells().map(|c| c.walls()).collect();
        assert_ne!(old_walls, new_walls);
        assert_eq!(sim.npcs().len(), 4);
        assert!(!sim.is_blocked(sim.player().position));
        for npc in sim.npcs() {
            assert_eq!(npc.state, NpcState::Wandering);
            assert_eq!(npc.think_timer, 0.0);
        }
        // The new maze is still a spanning tree.
        assert_eq!(sim.grid().open_wall_flags(), 2 * (5 * 5 - 1));
    }

    /// Tests that a regenerate trigger is applied before anything else in
    /// the tick: afterwards every NPC timer carries at most that single
    /// tick's delta, not time accumulated before the rebuild.
    #[test]
    fn tick_applies_the_regenerate_trigger_first() {
        let mut sim = Simulation::with_seed(small_config(), 5).unwrap();
        let quiet = FrameInput {
            delta_time: 0.1,
            move_delta: (0.0, 0.0),
            regenerate: false,
        };
        for _ in 0..3 {
            sim.tick(&quiet);
        }
        let old_walls: Vec<[bool; 4]> = sim.grid().cells().map(|c| c.walls()).collect();

        sim.tick(&FrameInput {
            regenerate: true,
            ..quiet
        });

        let new_walls: Vec<[bool; 4]> = sim.grid().cells().map(|c| c.walls()).collect();
        assert_ne!(old_walls, new_walls);
        assert!(!sim.is_blocked(sim.player().position));
        for npc in sim.npcs() {
            assert!(npc.think_timer <= quiet.delta_time);
            assert!(!sim.is_blocked(npc.position));
        }
    }

    #[test]
    fn cell_at_exposes_wall_flags() {
        let sim = Simulation::with_seed(small_config(), 1).unwrap();
        assert!(sim.cell_at(0, 0).is_some());
        assert!(sim.cell_at(-1, 0).is_none());
        assert!(sim.cell_at(5, 5).is_none());
    }

    /// Tests that ticking never lets the player or an NPC end a frame inside
    /// a blocked position.
    #[test]
    fn ticks_keep_everyone_in_free_space() {
        let mut sim = Simulation::with_seed(small_config(), 33).unwrap();

        for i in 0..200 {
            let wiggle = if i % 2 == 0 { 0.05 } else { -0.05 };
            sim.tick(&FrameInput {
                delta_time: 0.016,
                move_delta: (wiggle, 0.05),
                regenerate: i == 100,
            });

            assert!(!sim.is_blocked(sim.player().position));
            for npc in sim.npcs() {
                assert!(!sim.is_blocked(npc.position));
            }
        }
    }
}
