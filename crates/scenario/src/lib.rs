#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Scenario descriptions for the grid engine.
//!
//! A scenario is a JSON document naming the grid size, the players, the
//! object types (one observation channel each, in declaration order), the
//! action types with their inputs and behaviours, and the initial level.
//! [`ScenarioConfig::build_grid`] turns it into a fresh [`GridState`];
//! [`ScenarioConfig::action_rules`] into the resolver's rule table.

mod error;

pub use error::ConfigurationError;

use grid::{ActionDefinition, ActionRules, Direction, GridState, Location, PlayerId, EMPTY};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "one_player")]
    pub player_count: u32,
    /// Object type each player controls implicitly. Without it, actions
    /// carry explicit source coordinates.
    #[serde(default)]
    pub avatar_object: Option<String>,
    /// Whether a player may submit several actions in one step.
    #[serde(default)]
    pub multiple_actions: bool,
    /// Step after which `done` is reported.
    #[serde(default)]
    pub max_steps: Option<u64>,
    pub objects: Vec<ObjectDef>,
    pub action_types: Vec<ActionDefinition>,
    #[serde(default)]
    pub level: Vec<Placement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDef {
    pub name: String,
    #[serde(default)]
    pub z_index: u32,
    /// Upper bound on objects of this type per owner.
    #[serde(default)]
    pub max_count: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub object: String,
    #[serde(default)]
    pub player: PlayerId,
    pub location: Location,
    #[serde(default)]
    pub orientation: Direction,
}

fn one_player() -> u32 {
    1
}

impl ScenarioConfig {
    /// Parse and validate a scenario.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] for malformed JSON and any
    /// validation error from [`ScenarioConfig::validate`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a scenario file.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors and everything [`ScenarioConfig::from_str`] rejects.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str(&json)
    }

    #[must_use]
    pub fn has_avatar(&self) -> bool {
        self.avatar_object.is_some()
    }

    /// Object type names in channel order.
    #[must_use]
    pub fn channel_names(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.name.as_str()).collect()
    }

    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ObjectDef> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Check everything that can be checked without building the grid.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.width == 0 || self.height == 0 {
            return Err(grid::GridError::EmptyGrid {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if self.player_count == 0 {
            return Err(ConfigurationError::NoPlayers);
        }
        if self.objects.is_empty() {
            return Err(ConfigurationError::NoObjects);
        }
        if self.action_types.is_empty() {
            return Err(ConfigurationError::NoActionTypes);
        }

        let mut names = HashSet::new();
        for object in &self.objects {
            if !names.insert(object.name.as_str()) {
                return Err(ConfigurationError::DuplicateObject(object.name.clone()));
            }
        }
        let known = |context: String, name: &str| {
            if names.contains(name) {
                Ok(())
            } else {
                Err(ConfigurationError::UnknownObject {
                    context,
                    name: name.to_owned(),
                })
            }
        };

        if let Some(avatar) = &self.avatar_object {
            known("avatar_object".into(), avatar)?;
        }
        for action in &self.action_types {
            if action.inputs.is_empty() {
                return Err(ConfigurationError::NoInputs(action.name.clone()));
            }
            for behaviour in &action.behaviours {
                known(format!("action {:?}", action.name), &behaviour.source)?;
                if behaviour.destination != EMPTY {
                    known(format!("action {:?}", action.name), &behaviour.destination)?;
                }
            }
        }
        for placement in &self.level {
            known("level".into(), &placement.object)?;
        }
        Ok(())
    }

    /// Rule table for the resolver.
    #[must_use]
    pub fn action_rules(&self) -> ActionRules {
        ActionRules {
            avatar_object: self.avatar_object.clone(),
            action_types: self.action_types.clone(),
        }
    }

    /// Build a fresh grid holding the initial level.
    ///
    /// # Errors
    ///
    /// Fails when a placement is rejected by the grid, an object type exceeds
    /// its `max_count`, or a player does not own exactly one avatar.
    pub fn build_grid(&self) -> Result<GridState, ConfigurationError> {
        let mut grid = GridState::new(self.width, self.height, self.player_count)?;
        for placement in &self.level {
            let def = self
                .object(&placement.object)
                .ok_or_else(|| ConfigurationError::UnknownObject {
                    context: "level".into(),
                    name: placement.object.clone(),
                })?;
            grid.add_object(
                &def.name,
                placement.player,
                placement.location,
                def.z_index,
                placement.orientation,
            )
            .map_err(|source| ConfigurationError::Placement {
                object: def.name.clone(),
                source,
            })?;
            if let Some(max) = def.max_count {
                if grid.object_count(placement.player, &def.name) > max {
                    return Err(ConfigurationError::MaxCountExceeded {
                        object: def.name.clone(),
                        player: placement.player,
                        max,
                    });
                }
            }
        }

        if let Some(avatar) = &self.avatar_object {
            for player in 1..=self.player_count {
                let count = grid.object_count(player, avatar);
                if count != 1 {
                    return Err(ConfigurationError::AvatarCount {
                        avatar: avatar.clone(),
                        player,
                        count,
                    });
                }
            }
        }

        debug!(
            scenario = %self.name,
            objects = grid.num_objects(),
            "built grid from scenario"
        );
        Ok(grid)
    }
}
