use crate::types::{Location, ObjectId, PlayerId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
    #[error("location {0:?} is outside the grid")]
    OutOfBounds(Location),
    #[error("player {player} does not exist (player count is {player_count})")]
    UnknownPlayer { player: PlayerId, player_count: u32 },
    #[error("layer {z_index} at {location:?} is already occupied by {occupant:?}")]
    Occupied {
        location: Location,
        z_index: u32,
        occupant: ObjectId,
    },
    #[error("object {0:?} does not exist")]
    UnknownObject(ObjectId),
}
