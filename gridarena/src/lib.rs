//! # Grid Arena
//!
//! A turn-based engine for multi-agent 2D grid worlds, exposed through a
//! Gym-style `reset`/`step` interface.
//!
//! ## Overview
//!
//! A scenario declares the grid, its players, the object types and the
//! action types. Each step the caller submits raw actions; the engine decodes
//! them against the scenario's action space, resolves them in a fixed order
//! and renders one observation tensor per player. Everything is
//! deterministic: the same inputs from the same reset always give the same
//! trajectory.
//!
//! ## Project Architecture
//!
//! -   **`gridarena`:** The crate you are currently viewing. It is the
//!     documentation entry point and ships the `gridarena` binary, which runs
//!     a scenario from the command line and can hot-reload it on change.
//! -   **[`grid`]:** The state store. Objects, their tiles and z-layers, the
//!     owner/type index, the rule tables and the action resolver.
//! -   **[`scenario`]:** JSON scenario files: parsing, validation and building
//!     a fresh grid for each episode.
//! -   **[`env`]:** The step interface. Action and observation spaces, the
//!     action decoder, the observation builder and [`env::GridEnv`].
//!
//! ## Getting Started
//!
//! ```text
//! gridarena --scenario scenarios/coin_collector.json --steps 40 --seed 7 --history
//! gridarena --scenario scenarios/single_player_single_action_type.json --actions "[1, 1, 3]"
//! ```
//!
//! From code, start with [`env::GridEnv::from_path`], call `reset` and then
//! `step` with a scalar, a list, or a nested list of actions.

pub use env;
pub use grid;
pub use scenario;
