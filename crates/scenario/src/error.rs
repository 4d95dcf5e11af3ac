use grid::{GridError, PlayerId};
use std::path::PathBuf;
use thiserror::Error;

/// A scenario that cannot produce a consistent episode.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to read scenario {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid scenario json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scenario declares no action types")]
    NoActionTypes,
    #[error("action type {0:?} declares no inputs")]
    NoInputs(String),
    #[error("scenario needs at least one player")]
    NoPlayers,
    #[error("scenario declares no object types")]
    NoObjects,
    #[error("object type {0:?} is declared twice")]
    DuplicateObject(String),
    #[error("{context} refers to unknown object type {name:?}")]
    UnknownObject { context: String, name: String },
    #[error("player {player} has {count} {avatar:?} avatars, expected exactly one")]
    AvatarCount {
        avatar: String,
        player: PlayerId,
        count: usize,
    },
    #[error("player {player} has more than {max} {object:?} objects")]
    MaxCountExceeded {
        object: String,
        player: PlayerId,
        max: usize,
    },
    #[error("cannot place {object:?}: {source}")]
    Placement { object: String, source: GridError },
    #[error(transparent)]
    Grid(#[from] GridError),
}
