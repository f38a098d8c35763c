//! Simulation configuration and validation.
//!
//! All tunable constants of the simulation live in [`SimulationConfig`]: maze
//! dimensions, cell geometry, movement speeds, and the NPC behavior
//! thresholds. The defaults reproduce the reference configuration (a 20x20
//! maze with 1.0-unit cells and ten NPCs). Configs can be deserialized from
//! TOML, and every constructor that accepts one runs [`SimulationConfig::validate`]
//! first so malformed values are rejected up front rather than surfacing as
//! runtime misbehavior.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by configuration validation or parsing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The maze must contain at least one cell on each axis.
    #[error("maze dimensions must be at least 1x1 (got {width}x{height})")]
    InvalidDimensions {
        /// Requested maze width in cells.
        width: usize,
        /// Requested maze height in cells.
        height: usize,
    },
    /// Cell size must be a positive, finite length.
    #[error("cell size must be positive (got {0})")]
    InvalidCellSize(f32),
    /// A radius at or above half the cell size would classify every position
    /// inside a walled cell as blocked.
    #[error("player radius {radius} must be less than half the cell size {cell_size}")]
    RadiusTooLarge {
        /// Configured collision radius.
        radius: f32,
        /// Configured cell size.
        cell_size: f32,
    },
    /// The wander re-target chance is fed to `Rng::gen_bool`, which panics
    /// outside [0, 1].
    #[error("wander re-target chance must be within [0, 1] (got {0})")]
    InvalidProbability(f64),
    /// A speed, interval, or distance parameter must be finite and
    /// non-negative.
    #[error("{name} must be finite and non-negative (got {value})")]
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// The config file could not be parsed as TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Tunable parameters for the maze simulation.
///
/// Field defaults match the reference configuration. The `player_speed`
/// field is not consumed by the core itself (the presentation layer owns
/// player input and supplies already-scaled movement deltas); it is carried
/// here so producers of those deltas share one source of constants.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maze width in cells.
    pub maze_width: usize,
    /// Maze height in cells.
    pub maze_height: usize,
    /// Side length of one cell in world units.
    pub cell_size: f32,
    /// Collision radius applied against each wall plane.
    pub player_radius: f32,
    /// Player movement speed in units per second.
    pub player_speed: f32,
    /// Player/NPC body height; spawn positions sit at half this height.
    pub player_height: f32,
    /// Number of NPCs placed at generation time.
    pub npc_count: usize,
    /// NPC movement speed in units per second (slower than the player).
    pub npc_speed: f32,
    /// Seconds between NPC state re-evaluations.
    pub think_interval: f32,
    /// Distance below which an NPC flees the player.
    pub flee_radius: f32,
    /// Distance below which an NPC chases the player.
    pub chase_radius: f32,
    /// How far past its own position a fleeing NPC places its target.
    pub flee_offset: f32,
    /// Per-think probability that a wandering NPC picks a new target.
    pub wander_retarget_chance: f64,
    /// Distance below which an NPC considers its target reached.
    pub arrival_epsilon: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            maze_width: 20,
            maze_height: 20,
            cell_size: 1.0,
            player_radius: 0.15,
            player_speed: 3.0,
            player_height: 0.5,
            npc_count: 10,
            npc_speed: 2.0,
            think_interval: 0.5,
            flee_radius: 3.0,
            chase_radius: 5.0,
            flee_offset: 2.0,
            wander_retarget_chance: 0.3,
            arrival_epsilon: 0.1,
        }
    }
}

impl SimulationConfig {
    /// Parses and validates a config from a TOML document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the structural constraints the rest of the crate relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_width == 0 || self.maze_height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.maze_width,
                height: self.maze_height,
            });
        }
        if !(self.cell_size > 0.0) || !self.cell_size.is_finite() {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if self.player_radius >= self.cell_size / 2.0 {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.player_radius,
                cell_size: self.cell_size,
            });
        }
        // Written to also reject NaN, which fails every comparison.
        if !(self.wander_retarget_chance >= 0.0 && self.wander_retarget_chance <= 1.0) {
            return Err(ConfigError::InvalidProbability(self.wander_retarget_chance));
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("player_height", self.player_height),
            ("npc_speed", self.npc_speed),
            ("think_interval", self.think_interval),
            ("flee_radius", self.flee_radius),
            ("chase_radius", self.chase_radius),
            ("flee_offset", self.flee_offset),
            ("arrival_epsilon", self.arrival_epsilon),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }

    /// Vertical offset of spawn positions: half the body height.
    pub fn spawn_height(&self) -> f32 {
        self.player_height / 2.0
    }
}
