//! # Observation Builder
//!
//! Renders the grid into `u8` tensors of shape `(channels, width, height)`,
//! one channel per object type in scenario declaration order. A cell is 1
//! when an object of the channel's type sits on the tile. The channel map is
//! fixed at construction, so a type keeps its channel for the whole episode.

use crate::space::{ObservationSpace, PerPlayer};
use grid::{GridState, PlayerId};
use scenario::ScenarioConfig;
use serde::Serialize;
use std::collections::HashMap;

/// Who an observation is rendered for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Observer {
    Global,
    Player(PlayerId),
}

/// A dense observation tensor indexed `[channel][x][y]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Observation {
    space: ObservationSpace,
    data: Vec<u8>,
}

impl Observation {
    fn zeros(space: ObservationSpace) -> Self {
        Self {
            space,
            data: vec![0; space.len()],
        }
    }

    #[must_use]
    pub fn space(&self) -> ObservationSpace {
        self.space
    }

    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        self.space.shape()
    }

    /// Flat data, channel-major then x then y.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, channel: usize, x: usize, y: usize) -> Option<usize> {
        let s = self.space;
        (channel < s.channels && x < s.width && y < s.height)
            .then(|| (channel * s.width + x) * s.height + y)
    }

    #[must_use]
    pub fn get(&self, channel: usize, x: usize, y: usize) -> Option<u8> {
        self.offset(channel, x, y).map(|i| self.data[i])
    }

    fn set(&mut self, channel: usize, x: usize, y: usize, value: u8) {
        if let Some(i) = self.offset(channel, x, y) {
            self.data[i] = value;
        }
    }
}

#[derive(Clone, Debug)]
pub struct ObservationBuilder {
    channels: HashMap<String, usize>,
    space: ObservationSpace,
    player_count: u32,
}

impl ObservationBuilder {
    #[must_use]
    pub fn from_config(config: &ScenarioConfig) -> Self {
        let channels = config
            .objects
            .iter()
            .enumerate()
            .map(|(i, o)| (o.name.clone(), i))
            .collect();
        Self {
            channels,
            space: ObservationSpace {
                channels: config.objects.len(),
                width: config.width as usize,
                height: config.height as usize,
            },
            player_count: config.player_count,
        }
    }

    #[must_use]
    pub fn space(&self) -> ObservationSpace {
        self.space
    }

    #[must_use]
    pub fn channel(&self, object_name: &str) -> Option<usize> {
        self.channels.get(object_name).copied()
    }

    /// One space for single-player scenarios, one per player otherwise.
    #[must_use]
    pub fn player_spaces(&self) -> PerPlayer<ObservationSpace> {
        PerPlayer::from_vec(vec![self.space; self.player_count as usize])
    }

    /// Render the current grid for one observer.
    ///
    /// Without fog of war every observer sees the full grid.
    #[must_use]
    pub fn render(&self, grid: &GridState, _observer: Observer) -> Observation {
        let mut observation = Observation::zeros(self.space);
        for object in grid.objects() {
            if let Some(channel) = self.channel(&object.name) {
                observation.set(
                    channel,
                    object.location.x as usize,
                    object.location.y as usize,
                    1,
                );
            }
        }
        observation
    }

    /// Render one observation per player, in player id order.
    #[must_use]
    pub fn render_players(&self, grid: &GridState) -> PerPlayer<Observation> {
        PerPlayer::from_vec(
            (1..=self.player_count)
                .map(|player| self.render(grid, Observer::Player(player)))
                .collect(),
        )
    }
}
