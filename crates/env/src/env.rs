use crate::space::{ActionSpace, ObservationSpace, PerPlayer};
use grid::{ActionOutcome, ActionSource, PlayerId};
use serde::Serialize;

/// Reinforcement learning environment trait.
///
/// Modelled on the classic Gym interface: [`reset`] starts an episode and
/// returns the first observation, each call to [`step`] applies one step's
/// actions and returns the next observation with rewards and the done flag.
/// Multi-player environments return one observation and reward per player.
///
/// [`step`]: Env::step
/// [`reset`]: Env::reset
pub trait Env {
    type Action;
    type Observation;
    type Error;

    /// Reset the environment to its starting state and return the initial
    /// observation(s).
    fn reset(&mut self) -> Result<PerPlayer<Self::Observation>, Self::Error>;

    /// Advance the environment by one step.
    fn step(
        &mut self,
        action: Self::Action,
    ) -> Result<StepResult<PerPlayer<Self::Observation>>, Self::Error>;

    /// Shape of each player's observation.
    fn observation_space(&self) -> PerPlayer<ObservationSpace>;

    /// Encoding of each player's action.
    fn action_space(&self) -> PerPlayer<ActionSpace>;
}

/// What happened to one action during a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionInfo {
    pub player_id: PlayerId,
    #[serde(skip)]
    pub source: ActionSource,
    pub action_type: u32,
    pub action_value: u32,
    pub outcome: ActionOutcome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    /// Tick after the step was applied.
    pub tick: u64,
    /// Applied actions in resolution order.
    pub actions: Vec<ActionInfo>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepResult<O> {
    pub observation: O,
    pub reward: PerPlayer<i32>,
    pub done: bool,
    pub info: StepInfo,
}
