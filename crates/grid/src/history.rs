use crate::resolver::ActionOutcome;
use crate::types::{Location, PlayerId};
use serde::Serialize;

/// Record of one resolved action. Only kept when history is enabled on the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GridEvent {
    pub player_id: PlayerId,
    pub action_name: String,
    pub tick: u64,
    pub source_object_name: Option<String>,
    pub destination_object_name: Option<String>,
    pub source_object_player_id: PlayerId,
    pub destination_object_player_id: PlayerId,
    pub source_location: Location,
    pub destination_location: Location,
    pub outcome: ActionOutcome,
    pub reward: i32,
}
