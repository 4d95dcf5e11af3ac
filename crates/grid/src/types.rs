use serde::{Deserialize, Serialize};

/// Player id. `0` is the environment (neutral objects), players are `1..=player_count`.
pub type PlayerId = u32;

/// The neutral owner used for walls, pickups and other environment objects.
pub const NEUTRAL_PLAYER: PlayerId = 0;

/// Stable handle of an object inside a [`crate::GridState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub usize);

/// A tile coordinate. `x` grows to the right, `y` grows downwards.
///
/// Coordinates are signed so that a destination one step past the boundary can
/// be expressed and rejected instead of wrapping around.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by `vector`, `None` if either coordinate overflows.
    #[must_use]
    pub fn checked_offset(self, vector: Vector) -> Option<Location> {
        Some(Location::new(
            self.x.checked_add(vector.x)?,
            self.y.checked_add(vector.y)?,
        ))
    }
}

impl From<[i32; 2]> for Location {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Location> for [i32; 2] {
    fn from(loc: Location) -> Self {
        [loc.x, loc.y]
    }
}

/// A tile offset, e.g. the effect of a directional input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0, y: 0 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Rotate a vector expressed in the "facing up" frame into the frame of
    /// an object facing `facing`.
    #[must_use]
    pub const fn rotate(self, facing: Direction) -> Vector {
        match facing {
            Direction::None | Direction::Up => self,
            Direction::Right => Vector::new(self.y.saturating_neg(), self.x),
            Direction::Down => Vector::new(self.x.saturating_neg(), self.y.saturating_neg()),
            Direction::Left => Vector::new(self.y, self.x.saturating_neg()),
        }
    }
}

impl From<[i32; 2]> for Vector {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector> for [i32; 2] {
    fn from(v: Vector) -> Self {
        [v.x, v.y]
    }
}

/// Discrete facing of an object.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The facing that corresponds to a unit vector, `None` for anything else.
    #[must_use]
    pub const fn from_vector(v: Vector) -> Direction {
        match (v.x, v.y) {
            (0, -1) => Direction::Up,
            (0, 1) => Direction::Down,
            (-1, 0) => Direction::Left,
            (1, 0) => Direction::Right,
            _ => Direction::None,
        }
    }

    #[must_use]
    pub const fn unit_vector(self) -> Vector {
        match self {
            Direction::None => Vector::ZERO,
            Direction::Up => Vector::new(0, -1),
            Direction::Down => Vector::new(0, 1),
            Direction::Left => Vector::new(-1, 0),
            Direction::Right => Vector::new(1, 0),
        }
    }
}

/// A single object living on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Object {
    pub id: ObjectId,
    pub name: String,
    pub player_id: PlayerId,
    pub location: Location,
    pub orientation: Direction,
    pub z_index: u32,
}

/// Read-only view of one object, as listed by [`crate::GridState::snapshot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectState {
    pub id: ObjectId,
    pub name: String,
    pub player_id: PlayerId,
    pub location: Location,
    pub orientation: Direction,
    pub z_index: u32,
}

impl From<&Object> for ObjectState {
    fn from(object: &Object) -> Self {
        Self {
            id: object.id,
            name: object.name.clone(),
            player_id: object.player_id,
            location: object.location,
            orientation: object.orientation,
            z_index: object.z_index,
        }
    }
}

/// Introspection snapshot of the whole store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: u32,
    pub height: u32,
    pub tick: u64,
    pub objects: Vec<ObjectState>,
}

impl GridSnapshot {
    /// First object with the given type name owned by `player_id`.
    #[must_use]
    pub fn find(&self, name: &str, player_id: PlayerId) -> Option<&ObjectState> {
        self.objects
            .iter()
            .find(|o| o.name == name && o.player_id == player_id)
    }
}
