//! Action rule tables: what each action type and value does to the grid.
//!
//! An action type owns a list of input mappings (value `n` selects mapping
//! `n - 1`, value `0` is always the no-op) and a list of behaviours keyed by
//! the source object type and the type of whatever sits on the destination
//! tile. The types derive `Deserialize` so scenario files can embed them.

use crate::types::Vector;
use serde::{Deserialize, Serialize};

/// Destination name used when the destination tile holds no object.
pub const EMPTY: &str = "_empty";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Move the source object onto the destination tile.
    Move,
    /// Turn the source object to the input's orientation.
    Rotate,
    /// Add to the acting player's reward for this step.
    Reward(i32),
    /// Remove the destination object (if any) before the other commands run.
    RemoveDestination,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMapping {
    #[serde(default)]
    pub description: Option<String>,
    pub vector: Vector,
    /// Facing applied by [`Command::Rotate`]; falls back to `vector` when zero.
    #[serde(default)]
    pub orientation_vector: Vector,
    /// Interpret `vector` in the source object's own frame.
    #[serde(default)]
    pub relative: bool,
}

impl InputMapping {
    #[must_use]
    pub fn new(description: &str, vector: Vector) -> Self {
        Self {
            description: Some(description.to_owned()),
            vector,
            orientation_vector: Vector::ZERO,
            relative: false,
        }
    }

    /// Left, up, right, down as values 1..=4.
    #[must_use]
    pub fn default_directional() -> Vec<InputMapping> {
        vec![
            InputMapping::new("left", Vector::new(-1, 0)),
            InputMapping::new("up", Vector::new(0, -1)),
            InputMapping::new("right", Vector::new(1, 0)),
            InputMapping::new("down", Vector::new(0, 1)),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Behaviour {
    pub source: String,
    #[serde(default = "empty_destination")]
    pub destination: String,
    pub commands: Vec<Command>,
}

fn empty_destination() -> String {
    EMPTY.to_owned()
}

impl Behaviour {
    #[must_use]
    pub fn moves(&self) -> bool {
        self.commands.contains(&Command::Move)
    }

    #[must_use]
    pub fn removes_destination(&self) -> bool {
        self.commands.contains(&Command::RemoveDestination)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionDefinition {
    pub name: String,
    #[serde(default = "InputMapping::default_directional")]
    pub inputs: Vec<InputMapping>,
    #[serde(default)]
    pub behaviours: Vec<Behaviour>,
}

impl ActionDefinition {
    /// Number of distinct action values, the no-op included.
    #[must_use]
    pub fn value_count(&self) -> u32 {
        u32::try_from(self.inputs.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    /// Input mapping selected by `value`, `None` for the no-op or out of range.
    #[must_use]
    pub fn input(&self, value: u32) -> Option<&InputMapping> {
        let idx = usize::try_from(value.checked_sub(1)?).ok()?;
        self.inputs.get(idx)
    }

    #[must_use]
    pub fn behaviour(&self, source: &str, destination: &str) -> Option<&Behaviour> {
        self.behaviours
            .iter()
            .find(|b| b.source == source && b.destination == destination)
    }
}

/// Everything the resolver needs to know about a scenario's actions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionRules {
    /// Object type acting implicitly for each player, if avatars are used.
    pub avatar_object: Option<String>,
    pub action_types: Vec<ActionDefinition>,
}

impl ActionRules {
    #[must_use]
    pub fn action_type(&self, id: u32) -> Option<&ActionDefinition> {
        self.action_types.get(usize::try_from(id).ok()?)
    }

    /// Largest value count over all action types.
    #[must_use]
    pub fn max_value_count(&self) -> u32 {
        self.action_types
            .iter()
            .map(ActionDefinition::value_count)
            .max()
            .unwrap_or(0)
    }
}
