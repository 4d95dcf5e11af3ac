//! # Action Resolution
//!
//! Applies a batch of decoded actions to the store. Actions are applied in
//! player-id order, then in submission order within a player, so a batch
//! always resolves the same way. Every action is validated before anything is
//! mutated; an action that cannot take effect is reported through its
//! [`ActionOutcome`] and leaves the grid untouched.

use crate::history::GridEvent;
use crate::rules::{ActionDefinition, ActionRules, Command, InputMapping, EMPTY};
use crate::types::{Direction, Location, Object, ObjectId, PlayerId, Vector};
use crate::GridState;
use serde::Serialize;
use tracing::trace;

/// Which object performs an action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActionSource {
    /// The acting player's avatar.
    Avatar,
    /// The acting player's topmost object on this tile.
    Location(Location),
}

/// A fully decoded action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    pub player_id: PlayerId,
    pub source: ActionSource,
    pub action_type: u32,
    pub action_value: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOutcome {
    Applied,
    /// Value 0, or a behaviour whose commands changed nothing.
    NoOp,
    /// No object of the acting player at the source.
    NoSource,
    OutOfBounds,
    /// No behaviour for this source/destination pair, or the destination layer is taken.
    Blocked,
    /// Action type or value not declared by the rules.
    UnknownAction,
}

/// Result of resolving one batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// One entry per action, in the order the actions were applied.
    pub applied: Vec<(Action, ActionOutcome)>,
    /// Reward per player, index `player_id - 1`.
    pub rewards: Vec<i32>,
}

// Everything needed to apply one action, gathered before mutating.
struct Plan<'a> {
    source: ObjectId,
    source_name: String,
    source_location: Location,
    destination: Location,
    destination_object: Option<(ObjectId, String, PlayerId)>,
    commands: &'a [Command],
    facing: Direction,
}

impl GridState {
    /// Resolve one step's actions and advance the tick.
    pub fn perform_actions(&mut self, rules: &ActionRules, actions: &[Action]) -> Resolution {
        let mut order: Vec<usize> = (0..actions.len()).collect();
        order.sort_by_key(|&i| actions[i].player_id);

        let mut resolution = Resolution {
            applied: Vec::with_capacity(actions.len()),
            rewards: vec![0; self.player_count as usize],
        };
        for i in order {
            let action = actions[i];
            let (outcome, reward) = self.execute_action(rules, &action);
            trace!(?action, ?outcome, reward, tick = self.tick, "resolved action");
            if let Some(slot) = (action.player_id as usize)
                .checked_sub(1)
                .and_then(|idx| resolution.rewards.get_mut(idx))
            {
                *slot = slot.saturating_add(reward);
            }
            resolution.applied.push((action, outcome));
        }
        self.advance_tick();
        resolution
    }

    /// Resolve a single action. Returns its outcome and the reward it produced.
    pub fn execute_action(&mut self, rules: &ActionRules, action: &Action) -> (ActionOutcome, i32) {
        let Some(definition) = rules.action_type(action.action_type) else {
            return (ActionOutcome::UnknownAction, 0);
        };
        if action.action_value == 0 {
            return (ActionOutcome::NoOp, 0);
        }
        let Some(source) = self.find_source(rules, action) else {
            return (ActionOutcome::NoSource, 0);
        };
        let Some(input) = definition.input(action.action_value) else {
            return (ActionOutcome::UnknownAction, 0);
        };

        let plan = match self.plan(definition, input, source) {
            Ok(plan) => plan,
            Err((outcome, destination)) => {
                let (name, location) = self
                    .object(source)
                    .map_or((None, Location::default()), |o| (Some(o.name.clone()), o.location));
                self.record(action, definition, name, location, destination, None, outcome, 0);
                return (outcome, 0);
            }
        };
        let (outcome, reward) = self.apply(&plan);
        self.record(
            action,
            definition,
            Some(plan.source_name.clone()),
            plan.source_location,
            plan.destination,
            plan.destination_object.as_ref(),
            outcome,
            reward,
        );
        (outcome, reward)
    }

    fn find_source(&self, rules: &ActionRules, action: &Action) -> Option<ObjectId> {
        match action.source {
            ActionSource::Avatar => {
                let avatar = rules.avatar_object.as_deref()?;
                self.avatar(action.player_id, avatar).map(|o| o.id)
            }
            ActionSource::Location(location) => self
                .player_object_at(location, action.player_id)
                .map(|o| o.id),
        }
    }

    fn plan<'a>(
        &self,
        definition: &'a ActionDefinition,
        input: &'a InputMapping,
        source: ObjectId,
    ) -> Result<Plan<'a>, (ActionOutcome, Location)> {
        let object = self
            .object(source)
            .ok_or((ActionOutcome::NoSource, Location::default()))?;
        let vector = oriented(input.vector, input.relative, object.orientation);
        let destination = object
            .location
            .checked_offset(vector)
            .ok_or((ActionOutcome::OutOfBounds, object.location))?;
        if !self.in_bounds(destination) {
            return Err((ActionOutcome::OutOfBounds, destination));
        }

        let destination_object = self
            .objects_at(destination)
            .filter(|o| o.id != source)
            .last()
            .map(|o| (o.id, o.name.clone(), o.player_id));
        let destination_name = destination_object
            .as_ref()
            .map_or(EMPTY, |(_, name, _)| name.as_str());
        let behaviour = definition
            .behaviour(&object.name, destination_name)
            .ok_or((ActionOutcome::Blocked, destination))?;

        let removes = behaviour.removes_destination();
        if behaviour.moves()
            && !self.layer_free_after(object, destination, removes, destination_object.as_ref())
        {
            return Err((ActionOutcome::Blocked, destination));
        }

        let facing_vector = if input.orientation_vector.is_zero() {
            input.vector
        } else {
            input.orientation_vector
        };
        Ok(Plan {
            source,
            source_name: object.name.clone(),
            source_location: object.location,
            destination,
            destination_object,
            commands: &behaviour.commands,
            facing: Direction::from_vector(oriented(facing_vector, input.relative, object.orientation)),
        })
    }

    fn layer_free_after(
        &self,
        object: &Object,
        destination: Location,
        removes_destination: bool,
        destination_object: Option<&(ObjectId, String, PlayerId)>,
    ) -> bool {
        let Some(cell) = self.cell_index(destination) else {
            return false;
        };
        match self.cells[cell].get(&object.z_index) {
            None => true,
            Some(occupant) if *occupant == object.id => true,
            Some(occupant) => {
                removes_destination && destination_object.is_some_and(|(id, _, _)| id == occupant)
            }
        }
    }

    fn apply(&mut self, plan: &Plan<'_>) -> (ActionOutcome, i32) {
        let mut changed = false;
        let mut reward: i32 = 0;

        if plan.commands.contains(&Command::RemoveDestination) {
            if let Some((id, _, _)) = &plan.destination_object {
                changed |= self.remove_object(*id).is_ok();
            }
        }
        for command in plan.commands {
            match command {
                Command::Move => {
                    let moved = self.move_object(plan.source, plan.destination);
                    debug_assert!(moved.is_ok(), "move validated before apply");
                    changed |= moved.unwrap_or(false);
                }
                Command::Rotate => {
                    if plan.facing != Direction::None {
                        changed |= self.set_orientation(plan.source, plan.facing).unwrap_or(false);
                    }
                }
                Command::Reward(value) => {
                    reward = reward.saturating_add(*value);
                    changed = true;
                }
                Command::RemoveDestination => {}
            }
        }

        let outcome = if changed {
            ActionOutcome::Applied
        } else {
            ActionOutcome::NoOp
        };
        (outcome, reward)
    }

    #[allow(clippy::too_many_arguments)]
    fn record(
        &mut self,
        action: &Action,
        definition: &ActionDefinition,
        source_name: Option<String>,
        source_location: Location,
        destination: Location,
        destination_object: Option<&(ObjectId, String, PlayerId)>,
        outcome: ActionOutcome,
        reward: i32,
    ) {
        if !self.record_events {
            return;
        }
        self.history.push(GridEvent {
            player_id: action.player_id,
            action_name: definition.name.clone(),
            tick: self.tick,
            source_object_name: source_name,
            destination_object_name: destination_object.map(|(_, name, _)| name.clone()),
            source_object_player_id: action.player_id,
            destination_object_player_id: destination_object.map_or(0, |(_, _, p)| *p),
            source_location,
            destination_location: destination,
            outcome,
            reward,
        });
    }
}

fn oriented(vector: Vector, relative: bool, facing: Direction) -> Vector {
    if relative {
        vector.rotate(facing)
    } else {
        vector
    }
}
