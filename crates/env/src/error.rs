use scenario::ConfigurationError;
use thiserror::Error;

/// A raw step input that does not fit the scenario's action space.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionFormatError {
    #[error("expected {expected} action fields, got {got}")]
    Arity { expected: usize, got: usize },
    #[error("expected actions for {expected} players, got {got}")]
    PlayerCount { expected: u32, got: usize },
    #[error("player {player} submitted {got} actions but the scenario allows one per step")]
    TooManyActions { player: u32, got: usize },
    #[error("{field} {value} is out of range (cardinality {cardinality})")]
    OutOfRange {
        field: &'static str,
        value: u32,
        cardinality: u32,
    },
}

#[derive(Error, Debug)]
pub enum EnvError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    ActionFormat(#[from] ActionFormatError),
    #[error("environment must be reset before it can step")]
    NotReset,
}
