//! Ronda - a headless maze simulation core.
//!
//! Ronda procedurally builds a perfect maze over a fixed grid, classifies
//! world positions as blocked or free against the maze walls, and drives
//! simple autonomous NPCs that navigate relative to a tracked player
//! position. It contains no rendering, input handling, or camera code: a
//! presentation layer owns those concerns, feeds the simulation a
//! [`game::FrameInput`] once per frame, and reads state back for drawing.
//!
//! # Architecture
//! - `config/`: typed configuration with TOML loading and validation
//! - `maze/`: grid and wall model, DFS maze generation, spawn positions
//! - `game/`: collision classification, NPC behavior, player movement,
//!   and the [`game::Simulation`] tick loop that ties them together
//! - `math/`: the vector type shared across the crate
//!
//! # Determinism
//! Every randomized operation draws from an injected RNG. Build with
//! [`game::Simulation::with_seed`] and identical inputs replay identical
//! worlds, which the test suite leans on throughout.
//!
//! # Usage
//! ```no_run
//! use ronda::config::SimulationConfig;
//! use ronda::game::{FrameInput, Simulation};
//!
//! let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
//! loop {
//!     // delta_time and move_delta come from the windowing/input layer.
//!     sim.tick(&FrameInput {
//!         delta_time: 1.0 / 60.0,
//!         move_delta: (0.0, 0.0),
//!         regenerate: false,
//!     });
//! }
//! ```

pub mod config;
pub mod game;
pub mod math;
pub mod maze;

pub use config::{ConfigError, SimulationConfig};
pub use game::{FrameInput, Simulation};
pub use math::vec::Vec3;
