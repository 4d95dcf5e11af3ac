//! Secondary object index keyed by owner and type name.
//!
//! The positional cells answer "what is on this tile"; this index answers
//! "which `avatar` objects does player 2 own" without scanning every tile.

use crate::types::{ObjectId, PlayerId};
use std::collections::BTreeMap;

/// Statistics about the index
pub struct ObjectIndexStats {
    pub groups: usize,
    pub total_entries: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ObjectIndex {
    groups: BTreeMap<(PlayerId, String), Vec<ObjectId>>,
}

impl ObjectIndex {
    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Append an object to its `(player, name)` group, keeping insertion order.
    pub fn insert(&mut self, player: PlayerId, name: &str, id: ObjectId) {
        self.groups
            .entry((player, name.to_owned()))
            .or_default()
            .push(id);
    }

    pub fn remove(&mut self, player: PlayerId, name: &str, id: ObjectId) {
        let key = (player, name.to_owned());
        if let Some(ids) = self.groups.get_mut(&key) {
            ids.retain(|existing| *existing != id);
            if ids.is_empty() {
                self.groups.remove(&key);
            }
        }
    }

    #[must_use]
    pub fn get(&self, player: PlayerId, name: &str) -> &[ObjectId] {
        self.groups
            .get(&(player, name.to_owned()))
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn count(&self, player: PlayerId, name: &str) -> usize {
        self.get(player, name).len()
    }

    /// Per-player counts of one object type, players without any omitted.
    #[must_use]
    pub fn counts_by_player(&self, name: &str) -> BTreeMap<PlayerId, usize> {
        self.groups
            .iter()
            .filter(|((_, n), _)| n == name)
            .map(|((player, _), ids)| (*player, ids.len()))
            .collect()
    }

    #[must_use]
    pub fn stats(&self) -> ObjectIndexStats {
        ObjectIndexStats {
            groups: self.groups.len(),
            total_entries: self.groups.values().map(Vec::len).sum(),
        }
    }
}
