//! # Action Space Descriptor
//!
//! Derives the encoding of a step input from the scenario. The positional
//! layout of one action is `[x?, y?, action_type?, action_value]`:
//!
//! - `x`/`y` are present when the scenario has no avatar, so the acting
//!   object must be selected by its tile;
//! - `action_type` is present when more than one action type is declared.
//!
//! With an avatar and a single action type the space collapses to a plain
//! discrete index.

use crate::space::{ActionSpace, PerPlayer};
use scenario::{ConfigurationError, ScenarioConfig};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionSpaceDescriptor {
    pub has_avatar: bool,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Value cardinality of each action type, no-op included.
    pub value_counts: Vec<u32>,
    pub player_count: u32,
    pub multiple_actions: bool,
}

impl ActionSpaceDescriptor {
    /// # Errors
    ///
    /// Returns [`ConfigurationError::NoActionTypes`] or
    /// [`ConfigurationError::NoPlayers`] for degenerate scenarios.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self, ConfigurationError> {
        if config.action_types.is_empty() {
            return Err(ConfigurationError::NoActionTypes);
        }
        if config.player_count == 0 {
            return Err(ConfigurationError::NoPlayers);
        }
        let value_counts: Vec<u32> = config
            .action_types
            .iter()
            .map(grid::ActionDefinition::value_count)
            .collect();
        Ok(Self {
            has_avatar: config.has_avatar(),
            grid_width: config.width,
            grid_height: config.height,
            value_counts,
            player_count: config.player_count,
            multiple_actions: config.multiple_actions,
        })
    }

    #[must_use]
    pub fn multi_action_type(&self) -> bool {
        self.value_counts.len() > 1
    }

    #[must_use]
    pub fn action_type_count(&self) -> u32 {
        u32::try_from(self.value_counts.len()).unwrap_or(u32::MAX)
    }

    /// Cardinality of the final dimension: the widest action type.
    #[must_use]
    pub fn max_value_count(&self) -> u32 {
        self.value_counts.iter().copied().max().unwrap_or(1)
    }

    /// Per-dimension cardinalities in positional order.
    #[must_use]
    pub fn dims(&self) -> Vec<u32> {
        let mut dims = Vec::with_capacity(4);
        if !self.has_avatar {
            dims.push(self.grid_width);
            dims.push(self.grid_height);
        }
        if self.multi_action_type() {
            dims.push(self.action_type_count());
        }
        dims.push(self.max_value_count());
        dims
    }

    /// Number of positional fields in one action.
    #[must_use]
    pub fn dimensionality(&self) -> usize {
        let mut n = 1;
        if !self.has_avatar {
            n += 2;
        }
        if self.multi_action_type() {
            n += 1;
        }
        n
    }

    /// The space of one player's action.
    #[must_use]
    pub fn action_space(&self) -> ActionSpace {
        let dims = self.dims();
        match dims.as_slice() {
            [n] => ActionSpace::Discrete { n: *n },
            _ => ActionSpace::MultiDiscrete { nvec: dims },
        }
    }

    /// One space for single-player scenarios, one per player otherwise.
    #[must_use]
    pub fn player_spaces(&self) -> PerPlayer<ActionSpace> {
        if self.player_count == 1 {
            PerPlayer::Single(self.action_space())
        } else {
            PerPlayer::Multi(vec![self.action_space(); self.player_count as usize])
        }
    }
}
