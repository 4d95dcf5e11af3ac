//! # Grid Builder
//!
//! Methods for placing, moving and removing objects. Each one keeps the slab,
//! the tile cells, the owner index and the updated-location sets consistent.

use crate::types::{Direction, Location, Object, ObjectId, PlayerId};
use crate::{GridError, GridState};

/// Builder methods for adding objects to the grid
impl GridState {
    /// Place a new object.
    ///
    /// # Errors
    ///
    /// Fails when the location is outside the grid, the owner is not a player
    /// of this grid (0 is always accepted), or the z-layer of that tile is
    /// already taken.
    pub fn add_object(
        &mut self,
        name: &str,
        player_id: PlayerId,
        location: Location,
        z_index: u32,
        orientation: Direction,
    ) -> Result<ObjectId, GridError> {
        if player_id > self.player_count {
            return Err(GridError::UnknownPlayer {
                player: player_id,
                player_count: self.player_count,
            });
        }
        let cell = self
            .cell_index(location)
            .ok_or(GridError::OutOfBounds(location))?;
        if let Some(occupant) = self.cells[cell].get(&z_index) {
            return Err(GridError::Occupied {
                location,
                z_index,
                occupant: *occupant,
            });
        }

        let id = ObjectId(self.objects.len());
        self.objects.push(Some(Object {
            id,
            name: name.to_owned(),
            player_id,
            location,
            orientation,
            z_index,
        }));
        self.cells[cell].insert(z_index, id);
        self.index.insert(player_id, name, id);
        self.invalidate_location(location);
        Ok(id)
    }

    /// Remove an object from the grid.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownObject`] if the id is not live.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<Object, GridError> {
        let object = self
            .objects
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or(GridError::UnknownObject(id))?;
        if let Some(cell) = self.cell_index(object.location) {
            self.cells[cell].remove(&object.z_index);
        }
        self.index.remove(object.player_id, &object.name, id);
        self.invalidate_location(object.location);
        Ok(object)
    }

    /// Move an object to another tile, keeping its z-index.
    ///
    /// Moving onto the current location is a no-op that returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Fails if the object is unknown, the destination is outside the grid, or
    /// the destination layer is occupied.
    pub fn move_object(&mut self, id: ObjectId, to: Location) -> Result<bool, GridError> {
        let (from, z_index) = {
            let object = self.object(id).ok_or(GridError::UnknownObject(id))?;
            (object.location, object.z_index)
        };
        if from == to {
            return Ok(false);
        }
        let to_cell = self.cell_index(to).ok_or(GridError::OutOfBounds(to))?;
        if let Some(occupant) = self.cells[to_cell].get(&z_index) {
            return Err(GridError::Occupied {
                location: to,
                z_index,
                occupant: *occupant,
            });
        }
        if let Some(from_cell) = self.cell_index(from) {
            self.cells[from_cell].remove(&z_index);
        }
        self.cells[to_cell].insert(z_index, id);
        if let Some(object) = self.objects[id.0].as_mut() {
            object.location = to;
        }
        self.invalidate_location(from);
        self.invalidate_location(to);
        Ok(true)
    }

    /// Change the facing of an object. Returns whether it changed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownObject`] if the id is not live.
    pub fn set_orientation(&mut self, id: ObjectId, orientation: Direction) -> Result<bool, GridError> {
        let object = self
            .objects
            .get_mut(id.0)
            .and_then(Option::as_mut)
            .ok_or(GridError::UnknownObject(id))?;
        if object.orientation == orientation {
            return Ok(false);
        }
        object.orientation = orientation;
        let location = object.location;
        self.invalidate_location(location);
        Ok(true)
    }
}
