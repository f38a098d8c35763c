//! NPC behavior: a timer-driven state machine with seek movement.
//!
//! Each NPC re-evaluates its state at a fixed think interval based on its
//! distance to the player, then integrates movement toward its target every
//! tick. Movement that would collide does not resolve around the obstacle:
//! the NPC abandons the target and picks a fresh random one. That give-up
//! policy is part of the observable behavior and must not be upgraded to
//! wall sliding.

use rand::Rng;

use crate::config::SimulationConfig;
use crate::game::collision::CollisionSystem;
use crate::math::vec::Vec3;
use crate::maze::grid::Grid;
use crate::maze::random_spawn_position;

/// Behavioral state of an NPC.
///
/// There is no per-state payload; the shared NPC fields carry everything,
/// so a closed enum with exhaustive matching is all the machine needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcState {
    /// Drifting between random targets.
    Wandering,
    /// Seeking the player's position.
    Chasing,
    /// Heading directly away from the player.
    Fleeing,
    /// Reserved. No transition currently enters this state; it is kept so
    /// existing consumers matching on the state space stay compatible.
    Patrolling,
}

/// An autonomous agent navigating the maze.
#[derive(Debug, Clone)]
pub struct Npc {
    /// Current world position.
    pub position: Vec3,
    /// Position the NPC is seeking.
    pub target: Vec3,
    /// Movement speed in units per second.
    pub speed: f32,
    /// Accumulates elapsed time toward the next think.
    pub think_timer: f32,
    /// Current behavioral state.
    pub state: NpcState,
    /// Cosmetic tint for renderers; no effect on behavior.
    pub color: [u8; 3],
}

impl Npc {
    /// Creates an NPC at a random spawn position with a random target and
    /// color.
    pub fn spawn(grid: &Grid, config: &SimulationConfig, rng: &mut impl Rng) -> Self {
        Self {
            position: random_spawn_position(grid, config, rng),
            target: random_spawn_position(grid, config, rng),
            speed: config.npc_speed,
            think_timer: 0.0,
            state: NpcState::Wandering,
            color: random_color(rng),
        }
    }

    /// Re-initializes position, target, and state after maze regeneration.
    pub fn respawn(&mut self, grid: &Grid, config: &SimulationConfig, rng: &mut impl Rng) {
        self.position = random_spawn_position(grid, config, rng);
        self.target = random_spawn_position(grid, config, rng);
        self.think_timer = 0.0;
        self.state = NpcState::Wandering;
    }

    /// Accumulates the think timer and, when it fires, re-evaluates state
    /// against the player's position.
    ///
    /// Exactly one transition fires per think, in priority order: flee when
    /// the player is inside `flee_radius`, chase inside `chase_radius`,
    /// otherwise wander (with a configured chance of picking a new random
    /// target; the previous target is kept otherwise).
    pub fn think(
        &mut self,
        grid: &Grid,
        config: &SimulationConfig,
        player_position: Vec3,
        delta_time: f32,
        rng: &mut impl Rng,
    ) {
        self.think_timer += delta_time;
        if self.think_timer <= config.think_interval {
            return;
        }
        self.think_timer = 0.0;

        let previous = self.state;
        let distance_to_player = self.position.distance_to(&player_position);

        if distance_to_player < config.flee_radius {
            self.state = NpcState::Fleeing;
            let away = (self.position - player_position).normalize();
            self.target = self.position + away * config.flee_offset;
        } else if distance_to_player < config.chase_radius {
            self.state = NpcState::Chasing;
            self.target = player_position;
        } else {
            self.state = NpcState::Wandering;
            if rng.gen_bool(config.wander_retarget_chance) {
                self.target = random_spawn_position(grid, config, rng);
            }
        }

        if self.state != previous {
            tracing::trace!(from = ?previous, to = ?self.state, "npc state change");
        }
    }

    /// Moves one step toward the target, gated by collision.
    ///
    /// If the proposed step is blocked the NPC keeps its position and
    /// abandons the target for a fresh random spawn position instead of
    /// sliding along the wall.
    pub fn update(
        &mut self,
        grid: &Grid,
        collision: &CollisionSystem,
        config: &SimulationConfig,
        delta_time: f32,
        rng: &mut impl Rng,
    ) {
        let direction = self.target - self.position;
        let distance = direction.length();
        if distance <= config.arrival_epsilon {
            return;
        }

        let proposed = self.position + direction.normalize() * (self.speed * delta_time);
        if !collision.is_blocked(grid, proposed) {
            self.position = proposed;
        } else {
            self.target = random_spawn_position(grid, config, rng);
        }
    }
}

fn random_color(rng: &mut impl Rng) -> [u8; 3] {
    [
        rng.gen_range(55..255),
        rng.gen_range(55..255),
        rng.gen_range(55..255),
    ]
}
