//! # Grid State Store
//!
//! This module provides the container that owns every object of an episode.
//! Objects live in a slab addressed by [`ObjectId`]; two indices sit on top of
//! it: one cell per tile (z-index → object) and the owner/type index in
//! [`crate::index`]. Mutation goes through the methods in [`crate::builder`]
//! and [`crate::resolver`], which keep both indices and the per-player
//! updated-location sets in step.

use crate::history::GridEvent;
use crate::index::ObjectIndex;
use crate::types::{GridSnapshot, Location, Object, ObjectId, ObjectState, PlayerId};
use crate::GridError;
use std::collections::{BTreeMap, BTreeSet};

/// Counters describing the store, mainly for logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridDebugInfo {
    pub width: u32,
    pub height: u32,
    pub player_count: u32,
    pub num_objects: usize,
    pub occupied_tiles: usize,
    pub index_groups: usize,
    pub tick: u64,
}

/// Main grid state container
#[derive(Clone, Debug)]
pub struct GridState {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) player_count: u32,

    // Slab of objects; removed objects leave a hole so ids stay stable.
    pub(crate) objects: Vec<Option<Object>>,
    // One entry per tile, row-major, z-index → occupant.
    pub(crate) cells: Vec<BTreeMap<u32, ObjectId>>,
    pub(crate) index: ObjectIndex,

    pub(crate) tick: u64,
    // Index 0 is the global observer, then one set per player.
    pub(crate) updated_locations: Vec<BTreeSet<Location>>,

    pub(crate) record_events: bool,
    pub(crate) history: Vec<GridEvent>,
}

impl GridState {
    /// Create an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] when either dimension is zero.
    pub fn new(width: u32, height: u32, player_count: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let tiles = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            player_count,
            objects: Vec::new(),
            cells: vec![BTreeMap::new(); tiles],
            index: ObjectIndex::default(),
            tick: 0,
            updated_locations: vec![BTreeSet::new(); player_count as usize + 1],
            record_events: false,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn player_count(&self) -> u32 {
        self.player_count
    }

    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub(crate) fn advance_tick(&mut self) {
        self.tick += 1;
    }

    #[must_use]
    pub fn in_bounds(&self, location: Location) -> bool {
        location.x >= 0
            && location.y >= 0
            && (location.x as u32) < self.width
            && (location.y as u32) < self.height
    }

    pub(crate) fn cell_index(&self, location: Location) -> Option<usize> {
        if self.in_bounds(location) {
            Some(location.y as usize * self.width as usize + location.x as usize)
        } else {
            None
        }
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(id.0).and_then(Option::as_ref)
    }

    /// Iterate over live objects in id order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter().flatten()
    }

    #[must_use]
    pub fn num_objects(&self) -> usize {
        self.objects().count()
    }

    /// All objects on a tile, lowest z-index first.
    pub fn objects_at(&self, location: Location) -> impl Iterator<Item = &Object> {
        self.cell_index(location)
            .map(|idx| &self.cells[idx])
            .into_iter()
            .flat_map(|cell| cell.values())
            .filter_map(|id| self.object(*id))
    }

    /// The object with the highest z-index on a tile.
    #[must_use]
    pub fn object_at(&self, location: Location) -> Option<&Object> {
        let idx = self.cell_index(location)?;
        let (_, id) = self.cells[idx].iter().next_back()?;
        self.object(*id)
    }

    /// Topmost object on a tile that belongs to `player`.
    #[must_use]
    pub fn player_object_at(&self, location: Location, player: PlayerId) -> Option<&Object> {
        let idx = self.cell_index(location)?;
        self.cells[idx]
            .values()
            .rev()
            .filter_map(|id| self.object(*id))
            .find(|o| o.player_id == player)
    }

    /// Objects of one type owned by one player, in placement order.
    pub fn objects_of(&self, player: PlayerId, name: &str) -> impl Iterator<Item = &Object> {
        self.index
            .get(player, name)
            .iter()
            .filter_map(|id| self.object(*id))
    }

    #[must_use]
    pub fn object_count(&self, player: PlayerId, name: &str) -> usize {
        self.index.count(player, name)
    }

    /// Per-player counts of one object type.
    #[must_use]
    pub fn object_counter(&self, name: &str) -> BTreeMap<PlayerId, usize> {
        self.index.counts_by_player(name)
    }

    /// The avatar of `player`: its single object of type `avatar_name`.
    #[must_use]
    pub fn avatar(&self, player: PlayerId, avatar_name: &str) -> Option<&Object> {
        self.objects_of(player, avatar_name).next()
    }

    /// Snapshot of every live object, ordered by id.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            width: self.width,
            height: self.height,
            tick: self.tick,
            objects: self.objects().map(ObjectState::from).collect(),
        }
    }

    /// Mark a tile to be repainted by every observer.
    pub fn invalidate_location(&mut self, location: Location) -> bool {
        if !self.in_bounds(location) {
            return false;
        }
        for set in &mut self.updated_locations {
            set.insert(location);
        }
        true
    }

    /// Tiles changed since the last purge for `player` (0 = global observer).
    #[must_use]
    pub fn updated_locations(&self, player: PlayerId) -> Option<&BTreeSet<Location>> {
        self.updated_locations.get(player as usize)
    }

    pub fn purge_updated_locations(&mut self, player: PlayerId) {
        if let Some(set) = self.updated_locations.get_mut(player as usize) {
            set.clear();
        }
    }

    pub fn enable_history(&mut self, enable: bool) {
        self.record_events = enable;
    }

    #[must_use]
    pub fn history(&self) -> &[GridEvent] {
        &self.history
    }

    pub fn purge_history(&mut self) {
        self.history.clear();
    }

    /// Get debug information
    #[must_use]
    pub fn debug_info(&self) -> GridDebugInfo {
        GridDebugInfo {
            width: self.width,
            height: self.height,
            player_count: self.player_count,
            num_objects: self.num_objects(),
            occupied_tiles: self.cells.iter().filter(|c| !c.is_empty()).count(),
            index_groups: self.index.stats().groups,
            tick: self.tick,
        }
    }
}
