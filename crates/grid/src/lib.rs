#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
//! # Grid Engine
//!
//! The state store and action resolver for a turn-based, multi-player 2D grid
//! world.
//!
//! ## Key Components
//!
//! -   **Objects:** every entity on the grid is an [`Object`] with a type
//!     name, an owning player (0 for the environment), a [`Location`], a
//!     facing and a z-index. Types are defined in the [`types`] module.
//! -   **Store:** [`GridState`] in the [`state`] module owns all objects and
//!     keeps two indices over them: one cell per tile and an owner/type index
//!     ([`index`]). Placement and movement live in [`builder`].
//! -   **Rules and resolution:** [`ActionRules`] ([`rules`]) describe what
//!     each action type and value does; [`GridState::perform_actions`]
//!     ([`resolver`]) applies a batch of [`Action`]s in a fixed order.
//!
//! ## Usage
//!
//! ```rust
//! use grid::{Action, ActionDefinition, ActionRules, ActionSource, Behaviour, Command,
//!     Direction, GridState, InputMapping, Location};
//!
//! let mut grid = GridState::new(5, 6, 1).unwrap();
//! grid.add_object("avatar", 1, Location::new(2, 3), 0, Direction::None).unwrap();
//!
//! let rules = ActionRules {
//!     avatar_object: Some("avatar".into()),
//!     action_types: vec![ActionDefinition {
//!         name: "move".into(),
//!         inputs: InputMapping::default_directional(),
//!         behaviours: vec![Behaviour {
//!             source: "avatar".into(),
//!             destination: "_empty".into(),
//!             commands: vec![Command::Move],
//!         }],
//!     }],
//! };
//!
//! let action = Action { player_id: 1, source: ActionSource::Avatar, action_type: 0, action_value: 1 };
//! grid.perform_actions(&rules, &[action]);
//! assert_eq!(grid.avatar(1, "avatar").unwrap().location, Location::new(1, 3));
//! ```

pub mod builder;
pub mod error;
pub mod history;
pub mod index;
pub mod resolver;
pub mod rules;
pub mod state;
pub mod types;

pub use error::GridError;
pub use history::GridEvent;
pub use resolver::{Action, ActionOutcome, ActionSource, Resolution};
pub use rules::{ActionDefinition, ActionRules, Behaviour, Command, InputMapping, EMPTY};
pub use state::{GridDebugInfo, GridState};
pub use types::{
    Direction, GridSnapshot, Location, Object, ObjectId, ObjectState, PlayerId, Vector,
    NEUTRAL_PLAYER,
};
