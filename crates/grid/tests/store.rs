use grid::{Direction, GridError, GridState, Location, ObjectId};

#[test]
fn empty_grid_is_rejected() {
    assert_eq!(
        GridState::new(0, 4, 1).unwrap_err(),
        GridError::EmptyGrid { width: 0, height: 4 }
    );
}

#[test]
fn add_object_indexes_by_tile_and_owner() {
    let mut grid = GridState::new(5, 6, 2).unwrap();
    let a = grid.add_object("avatar", 1, Location::new(1, 3), 0, Direction::None).unwrap();
    let b = grid.add_object("avatar", 2, Location::new(3, 3), 0, Direction::None).unwrap();
    let wall = grid.add_object("wall", 0, Location::new(0, 0), 0, Direction::None).unwrap();

    assert_eq!(grid.num_objects(), 3);
    assert_eq!(grid.object_at(Location::new(1, 3)).unwrap().id, a);
    assert_eq!(grid.avatar(2, "avatar").unwrap().id, b);
    assert_eq!(grid.object_count(0, "wall"), 1);
    assert_eq!(grid.object(wall).unwrap().name, "wall");

    let counter = grid.object_counter("avatar");
    assert_eq!(counter.get(&1), Some(&1));
    assert_eq!(counter.get(&2), Some(&1));
}

#[test]
fn placement_errors() {
    let mut grid = GridState::new(3, 3, 1).unwrap();
    let first = grid.add_object("box", 0, Location::new(1, 1), 0, Direction::None).unwrap();

    assert_eq!(
        grid.add_object("box", 0, Location::new(3, 0), 0, Direction::None),
        Err(GridError::OutOfBounds(Location::new(3, 0)))
    );
    assert_eq!(
        grid.add_object("box", 0, Location::new(-1, 0), 0, Direction::None),
        Err(GridError::OutOfBounds(Location::new(-1, 0)))
    );
    assert_eq!(
        grid.add_object("avatar", 2, Location::new(0, 0), 0, Direction::None),
        Err(GridError::UnknownPlayer { player: 2, player_count: 1 })
    );
    assert_eq!(
        grid.add_object("box", 0, Location::new(1, 1), 0, Direction::None),
        Err(GridError::Occupied { location: Location::new(1, 1), z_index: 0, occupant: first })
    );
    // Another layer on the same tile is fine.
    assert!(grid.add_object("floor", 0, Location::new(1, 1), 1, Direction::None).is_ok());
}

#[test]
fn object_at_returns_highest_layer() {
    let mut grid = GridState::new(2, 2, 1).unwrap();
    let loc = Location::new(0, 1);
    grid.add_object("floor", 0, loc, 0, Direction::None).unwrap();
    let top = grid.add_object("avatar", 1, loc, 2, Direction::None).unwrap();

    assert_eq!(grid.object_at(loc).unwrap().id, top);
    let names: Vec<_> = grid.objects_at(loc).map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["floor", "avatar"]);
    assert_eq!(grid.player_object_at(loc, 0).unwrap().name, "floor");
}

#[test]
fn move_and_remove_keep_indices_consistent() {
    let mut grid = GridState::new(4, 4, 1).unwrap();
    let id = grid.add_object("avatar", 1, Location::new(0, 0), 0, Direction::None).unwrap();
    grid.add_object("rock", 0, Location::new(2, 0), 0, Direction::None).unwrap();

    assert_eq!(grid.move_object(id, Location::new(1, 0)), Ok(true));
    assert_eq!(grid.move_object(id, Location::new(1, 0)), Ok(false));
    assert!(matches!(
        grid.move_object(id, Location::new(2, 0)),
        Err(GridError::Occupied { .. })
    ));
    assert!(grid.object_at(Location::new(0, 0)).is_none());
    assert_eq!(grid.object(id).unwrap().location, Location::new(1, 0));

    let removed = grid.remove_object(id).unwrap();
    assert_eq!(removed.name, "avatar");
    assert!(grid.object_at(Location::new(1, 0)).is_none());
    assert_eq!(grid.object_count(1, "avatar"), 0);
    assert_eq!(grid.remove_object(id), Err(GridError::UnknownObject(id)));
    assert_eq!(grid.remove_object(ObjectId(99)), Err(GridError::UnknownObject(ObjectId(99))));
}

#[test]
fn updated_locations_are_tracked_per_player() {
    let mut grid = GridState::new(3, 3, 2).unwrap();
    let id = grid.add_object("avatar", 1, Location::new(0, 0), 0, Direction::None).unwrap();
    for player in 0..=2 {
        grid.purge_updated_locations(player);
    }

    grid.move_object(id, Location::new(0, 1)).unwrap();
    grid.purge_updated_locations(2);

    let global: Vec<_> = grid.updated_locations(0).unwrap().iter().copied().collect();
    assert_eq!(global, [Location::new(0, 0), Location::new(0, 1)]);
    assert_eq!(grid.updated_locations(1).unwrap().len(), 2);
    assert!(grid.updated_locations(2).unwrap().is_empty());
    assert!(grid.updated_locations(3).is_none());
}

#[test]
fn snapshot_lists_every_object() {
    let mut grid = GridState::new(5, 6, 1).unwrap();
    grid.add_object("avatar", 1, Location::new(2, 3), 0, Direction::Up).unwrap();
    grid.add_object("wall", 0, Location::new(0, 0), 0, Direction::None).unwrap();

    let snapshot = grid.snapshot();
    assert_eq!(snapshot.objects.len(), 2);
    let avatar = snapshot.find("avatar", 1).unwrap();
    assert_eq!(avatar.location, Location::new(2, 3));
    assert_eq!(avatar.orientation, Direction::Up);
    assert!(snapshot.find("avatar", 0).is_none());

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["objects"][0]["location"], serde_json::json!([2, 3]));
    assert_eq!(json["objects"][0]["orientation"], "up");
}

#[test]
fn debug_info_counts() {
    let mut grid = GridState::new(3, 2, 1).unwrap();
    grid.add_object("a", 1, Location::new(0, 0), 0, Direction::None).unwrap();
    grid.add_object("b", 0, Location::new(0, 0), 1, Direction::None).unwrap();
    let info = grid.debug_info();
    assert_eq!(info.num_objects, 2);
    assert_eq!(info.occupied_tiles, 1);
    assert_eq!(info.index_groups, 2);
    assert_eq!(info.tick, 0);
}
