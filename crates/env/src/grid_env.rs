//! # Step Orchestrator
//!
//! [`GridEnv`] ties the pieces together. It starts uninitialized; [`GridEnv::reset`]
//! builds a fresh grid from the scenario and makes it ready, after which each
//! [`GridEnv::step`] decodes the input, resolves the actions and renders the
//! observations. Decoding happens before anything touches the grid, so a
//! rejected input leaves the episode exactly as it was.

use crate::decoder::ActionInput;
use crate::descriptor::ActionSpaceDescriptor;
use crate::env::{ActionInfo, Env, StepInfo, StepResult};
use crate::error::EnvError;
use crate::observation::{Observation, ObservationBuilder, Observer};
use crate::space::{ActionSpace, ObservationSpace, PerPlayer};
use grid::{ActionRules, GridEvent, GridSnapshot, GridState};
use scenario::{ConfigurationError, ScenarioConfig};
use std::path::Path;
use tracing::{debug, info};

pub struct GridEnv {
    config: ScenarioConfig,
    rules: ActionRules,
    descriptor: ActionSpaceDescriptor,
    observer: ObservationBuilder,
    // `None` until the first reset.
    grid: Option<GridState>,
    record_history: bool,
}

impl GridEnv {
    /// Create an environment for a scenario. Call [`GridEnv::reset`] before stepping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the scenario is inconsistent.
    pub fn new(config: ScenarioConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let descriptor = ActionSpaceDescriptor::from_config(&config)?;
        let observer = ObservationBuilder::from_config(&config);
        Ok(Self {
            rules: config.action_rules(),
            descriptor,
            observer,
            config,
            grid: None,
            record_history: false,
        })
    }

    /// Load a scenario file and create an environment for it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if the file cannot be read or is inconsistent.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        Self::new(ScenarioConfig::from_path(path)?)
    }

    #[must_use]
    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    #[must_use]
    pub fn descriptor(&self) -> &ActionSpaceDescriptor {
        &self.descriptor
    }

    #[must_use]
    pub fn player_count(&self) -> u32 {
        self.config.player_count
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.grid.is_some()
    }

    /// The live grid, once reset.
    #[must_use]
    pub fn grid(&self) -> Option<&GridState> {
        self.grid.as_ref()
    }

    pub fn observation_space(&self) -> PerPlayer<ObservationSpace> {
        self.observer.player_spaces()
    }

    pub fn action_space(&self) -> PerPlayer<ActionSpace> {
        self.descriptor.player_spaces()
    }

    /// Rebuild the grid from the scenario and return the initial observations.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::Configuration`] if the level cannot be built.
    pub fn reset(&mut self) -> Result<PerPlayer<Observation>, EnvError> {
        let mut grid = self.config.build_grid()?;
        grid.enable_history(self.record_history);
        info!(
            scenario = %self.config.name,
            width = grid.width(),
            height = grid.height(),
            players = grid.player_count(),
            objects = grid.num_objects(),
            "environment reset"
        );
        let observation = self.observe(&mut grid);
        self.grid = Some(grid);
        Ok(observation)
    }

    /// Apply one step's actions.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotReset`] before the first reset, whatever the
    /// input, and [`EnvError::ActionFormat`] for inputs that do not fit the
    /// action space. In both cases the grid is left untouched.
    pub fn step(
        &mut self,
        action: impl Into<ActionInput>,
    ) -> Result<StepResult<PerPlayer<Observation>>, EnvError> {
        if self.grid.is_none() {
            return Err(EnvError::NotReset);
        }
        let actions = self.descriptor.decode(&action.into())?;
        let mut grid = self.grid.take().ok_or(EnvError::NotReset)?;

        let resolution = grid.perform_actions(&self.rules, &actions);
        let tick = grid.tick();
        let done = self.config.max_steps.is_some_and(|max| tick >= max);
        debug!(tick, actions = actions.len(), rewards = ?resolution.rewards, done, "step");

        let observation = self.observe(&mut grid);
        self.grid = Some(grid);

        let info = StepInfo {
            tick,
            actions: resolution
                .applied
                .iter()
                .map(|(action, outcome)| ActionInfo {
                    player_id: action.player_id,
                    source: action.source,
                    action_type: action.action_type,
                    action_value: action.action_value,
                    outcome: *outcome,
                })
                .collect(),
        };
        Ok(StepResult {
            observation,
            reward: PerPlayer::from_vec(resolution.rewards),
            done,
            info,
        })
    }

    fn observe(&self, grid: &mut GridState) -> PerPlayer<Observation> {
        let observation = self.observer.render_players(grid);
        // Full renders consume every pending update.
        for player in 0..=grid.player_count() {
            grid.purge_updated_locations(player);
        }
        observation
    }

    /// Render the grid from the neutral viewpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotReset`] before the first reset.
    pub fn global_observation(&self) -> Result<Observation, EnvError> {
        let grid = self.grid.as_ref().ok_or(EnvError::NotReset)?;
        Ok(self.observer.render(grid, Observer::Global))
    }

    /// Snapshot of every object on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::NotReset`] before the first reset.
    pub fn state(&self) -> Result<GridSnapshot, EnvError> {
        self.grid
            .as_ref()
            .map(GridState::snapshot)
            .ok_or(EnvError::NotReset)
    }

    /// Record a [`GridEvent`] for every resolved action, from now and across resets.
    pub fn enable_history(&mut self, enable: bool) {
        self.record_history = enable;
        if let Some(grid) = self.grid.as_mut() {
            grid.enable_history(enable);
        }
    }

    #[must_use]
    pub fn history(&self) -> &[GridEvent] {
        match &self.grid {
            Some(grid) => grid.history(),
            None => &[],
        }
    }
}

impl Env for GridEnv {
    type Action = ActionInput;
    type Observation = Observation;
    type Error = EnvError;

    fn reset(&mut self) -> Result<PerPlayer<Observation>, EnvError> {
        GridEnv::reset(self)
    }

    fn step(&mut self, action: ActionInput) -> Result<StepResult<PerPlayer<Observation>>, EnvError> {
        GridEnv::step(self, action)
    }

    fn observation_space(&self) -> PerPlayer<ObservationSpace> {
        GridEnv::observation_space(self)
    }

    fn action_space(&self) -> PerPlayer<ActionSpace> {
        GridEnv::action_space(self)
    }
}
