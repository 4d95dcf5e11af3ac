//! Observation and action spaces, and the single/per-player wrapper used for
//! everything the environment hands back.

use serde::Serialize;

/// A value for a single-player scenario, or one value per player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PerPlayer<T> {
    Single(T),
    Multi(Vec<T>),
}

impl<T> PerPlayer<T> {
    /// `Single` for one player, `Multi` otherwise.
    pub fn from_vec(mut values: Vec<T>) -> Self {
        if values.len() == 1 {
            if let Some(value) = values.pop() {
                return PerPlayer::Single(value);
            }
        }
        PerPlayer::Multi(values)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            PerPlayer::Single(_) => 1,
            PerPlayer::Multi(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The value of a single-player scenario.
    #[must_use]
    pub fn single(&self) -> Option<&T> {
        match self {
            PerPlayer::Single(value) => Some(value),
            PerPlayer::Multi(_) => None,
        }
    }

    /// Value by player index (0-based, i.e. `player_id - 1`).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self {
            PerPlayer::Single(value) => (index == 0).then_some(value),
            PerPlayer::Multi(values) => values.get(index),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            PerPlayer::Single(value) => std::slice::from_ref(value).iter(),
            PerPlayer::Multi(values) => values.iter(),
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            PerPlayer::Single(value) => vec![value],
            PerPlayer::Multi(values) => values,
        }
    }
}

/// Shape of an observation tensor: `(channels, width, height)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ObservationSpace {
    pub channels: usize,
    pub width: usize,
    pub height: usize,
}

impl ObservationSpace {
    #[must_use]
    pub const fn shape(&self) -> [usize; 3] {
        [self.channels, self.width, self.height]
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.channels * self.width * self.height
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionSpace {
    /// A single index in `0..n`.
    Discrete { n: u32 },
    /// One index per dimension, dimension `i` in `0..nvec[i]`.
    MultiDiscrete { nvec: Vec<u32> },
}

impl ActionSpace {
    /// Empty for `Discrete`, `[nvec.len()]` for `MultiDiscrete`.
    #[must_use]
    pub fn shape(&self) -> Vec<usize> {
        match self {
            ActionSpace::Discrete { .. } => Vec::new(),
            ActionSpace::MultiDiscrete { nvec } => vec![nvec.len()],
        }
    }

    #[must_use]
    pub fn contains(&self, fields: &[u32]) -> bool {
        match self {
            ActionSpace::Discrete { n } => matches!(fields, [v] if v < n),
            ActionSpace::MultiDiscrete { nvec } => {
                fields.len() == nvec.len() && fields.iter().zip(nvec).all(|(v, n)| v < n)
            }
        }
    }

    /// Draw uniformly from every dimension.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Vec<u32> {
        match self {
            ActionSpace::Discrete { n } => vec![rng.u32(0..*n)],
            ActionSpace::MultiDiscrete { nvec } => nvec.iter().map(|n| rng.u32(0..*n)).collect(),
        }
    }
}
