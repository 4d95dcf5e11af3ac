//! # Action Decoder
//!
//! Normalizes a raw step input into the ordered list of [`Action`]s for the
//! step. The nesting level of the input is matched against the descriptor:
//!
//! | input | one player | several players |
//! |-------|------------|-----------------|
//! | `v` | one action | rejected |
//! | `[f..]` | one action from positional fields | one scalar per player (1-field spaces only, else an arity error) |
//! | `[[f..]..]` | simultaneous actions of player 1 | one action per player |
//! | `[[[f..]..]..]` | per player, simultaneous actions | per player, simultaneous actions |
//!
//! The output is ordered by player, then by submission order. Nothing is
//! returned unless every action in the input decodes.

use crate::descriptor::ActionSpaceDescriptor;
use crate::error::ActionFormatError;
use crate::space::ActionSpace;
use grid::{Action, ActionSource, Location, PlayerId};
use serde::Deserialize;

/// A raw step input.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ActionInput {
    Scalar(u32),
    Flat(Vec<u32>),
    PerAgent(Vec<Vec<u32>>),
    PerPlayerPerAgent(Vec<Vec<Vec<u32>>>),
}

impl From<u32> for ActionInput {
    fn from(value: u32) -> Self {
        ActionInput::Scalar(value)
    }
}

impl From<Vec<u32>> for ActionInput {
    fn from(fields: Vec<u32>) -> Self {
        ActionInput::Flat(fields)
    }
}

impl<const N: usize> From<[u32; N]> for ActionInput {
    fn from(fields: [u32; N]) -> Self {
        ActionInput::Flat(fields.to_vec())
    }
}

impl From<Vec<Vec<u32>>> for ActionInput {
    fn from(actions: Vec<Vec<u32>>) -> Self {
        ActionInput::PerAgent(actions)
    }
}

impl From<Vec<Vec<Vec<u32>>>> for ActionInput {
    fn from(actions: Vec<Vec<Vec<u32>>>) -> Self {
        ActionInput::PerPlayerPerAgent(actions)
    }
}

impl ActionSpaceDescriptor {
    /// Decode a raw input into actions, validating every field.
    ///
    /// # Errors
    ///
    /// Returns [`ActionFormatError`] when the nesting or arity does not match
    /// this descriptor, or any field exceeds its cardinality.
    pub fn decode(&self, input: &ActionInput) -> Result<Vec<Action>, ActionFormatError> {
        let players = self.player_count;
        match input {
            ActionInput::Scalar(value) => {
                if players != 1 {
                    return Err(ActionFormatError::PlayerCount {
                        expected: players,
                        got: 1,
                    });
                }
                Ok(vec![self.decode_fields(1, &[*value])?])
            }
            ActionInput::Flat(fields) => {
                if players == 1 {
                    return Ok(vec![self.decode_fields(1, fields)?]);
                }
                // One scalar per player, so each player's action must be a single field.
                let expected = self.dimensionality();
                if expected != 1 {
                    return Err(ActionFormatError::Arity { expected, got: 1 });
                }
                self.check_player_axis(fields.len())?;
                fields
                    .iter()
                    .zip(1..)
                    .map(|(value, player)| self.decode_fields(player, &[*value]))
                    .collect()
            }
            ActionInput::PerAgent(actions) => {
                if players == 1 {
                    return self.decode_player(1, actions);
                }
                self.check_player_axis(actions.len())?;
                actions
                    .iter()
                    .zip(1..)
                    .map(|(fields, player)| self.decode_fields(player, fields))
                    .collect()
            }
            ActionInput::PerPlayerPerAgent(per_player) => {
                self.check_player_axis(per_player.len())?;
                let mut decoded = Vec::new();
                for (actions, player) in per_player.iter().zip(1..) {
                    decoded.extend(self.decode_player(player, actions)?);
                }
                Ok(decoded)
            }
        }
    }

    fn check_player_axis(&self, got: usize) -> Result<(), ActionFormatError> {
        if got == self.player_count as usize {
            Ok(())
        } else {
            Err(ActionFormatError::PlayerCount {
                expected: self.player_count,
                got,
            })
        }
    }

    fn decode_player(
        &self,
        player: PlayerId,
        actions: &[Vec<u32>],
    ) -> Result<Vec<Action>, ActionFormatError> {
        if actions.len() > 1 && !self.multiple_actions {
            return Err(ActionFormatError::TooManyActions {
                player,
                got: actions.len(),
            });
        }
        actions
            .iter()
            .map(|fields| self.decode_fields(player, fields))
            .collect()
    }

    /// Decode one action from its positional fields.
    ///
    /// # Errors
    ///
    /// Fails on an arity mismatch or an out-of-range field.
    pub fn decode_fields(&self, player: PlayerId, fields: &[u32]) -> Result<Action, ActionFormatError> {
        let expected = self.dimensionality();
        if fields.len() != expected {
            return Err(ActionFormatError::Arity {
                expected,
                got: fields.len(),
            });
        }
        let mut fields = fields.iter().copied();
        let mut next = |field: &'static str, cardinality: u32| {
            let value = fields.next().unwrap_or_default();
            if value < cardinality {
                Ok(value)
            } else {
                Err(ActionFormatError::OutOfRange {
                    field,
                    value,
                    cardinality,
                })
            }
        };

        let source = if self.has_avatar {
            ActionSource::Avatar
        } else {
            let x = next("x", self.grid_width)?;
            let y = next("y", self.grid_height)?;
            ActionSource::Location(Location::new(x as i32, y as i32))
        };
        let action_type = if self.multi_action_type() {
            next("action_type", self.action_type_count())?
        } else {
            0
        };
        let action_value = next("action_value", self.value_counts[action_type as usize])?;

        Ok(Action {
            player_id: player,
            source,
            action_type,
            action_value,
        })
    }

    /// A random input every player can legally submit.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> ActionInput {
        let space = self.action_space();
        if self.player_count == 1 {
            return ActionInput::Flat(self.sample_fields(&space, rng));
        }
        ActionInput::PerAgent(
            (0..self.player_count)
                .map(|_| self.sample_fields(&space, rng))
                .collect(),
        )
    }

    fn sample_fields(&self, space: &ActionSpace, rng: &mut fastrand::Rng) -> Vec<u32> {
        let mut fields = space.sample(rng);
        // The last dimension is as wide as the widest action type; narrow it to the drawn type.
        if let [.., action_type, value] = fields.as_mut_slice() {
            if self.multi_action_type() {
                *value %= self.value_counts[*action_type as usize];
            }
        }
        fields
    }
}
