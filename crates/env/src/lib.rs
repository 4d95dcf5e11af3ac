#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate
)]
//! # Grid Environment
//!
//! The step interface of the grid engine. A [`GridEnv`] is built from a
//! [`scenario::ScenarioConfig`], reset to its initial level, then stepped with
//! raw action inputs of any accepted nesting level. Each step returns the
//! per-player observations, rewards and a done flag.
//!
//! ```rust,no_run
//! use env::GridEnv;
//!
//! let mut env = GridEnv::from_path("scenarios/single_player_single_action_type.json").unwrap();
//! env.reset().unwrap();
//! let result = env.step(1_u32).unwrap();
//! assert_eq!(result.observation.single().unwrap().shape(), [1, 5, 6]);
//! ```

pub mod decoder;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod grid_env;
pub mod observation;
pub mod space;

pub use decoder::ActionInput;
pub use descriptor::ActionSpaceDescriptor;
pub use env::{ActionInfo, Env, StepInfo, StepResult};
pub use error::{ActionFormatError, EnvError};
pub use grid_env::GridEnv;
pub use observation::{Observation, ObservationBuilder, Observer};
pub use space::{ActionSpace, ObservationSpace, PerPlayer};
