use env::{ActionFormatError, ActionInput, ActionSpaceDescriptor};
use grid::{Action, ActionSource, Location};

fn descriptor(has_avatar: bool, value_counts: Vec<u32>, player_count: u32) -> ActionSpaceDescriptor {
    ActionSpaceDescriptor {
        has_avatar,
        grid_width: 5,
        grid_height: 6,
        value_counts,
        player_count,
        multiple_actions: false,
    }
}

#[test]
fn inputs_deserialize_by_nesting_level() {
    let parse = |json: &str| serde_json::from_str::<ActionInput>(json).unwrap();
    assert_eq!(parse("1"), ActionInput::Scalar(1));
    assert_eq!(parse("[2, 3, 1]"), ActionInput::Flat(vec![2, 3, 1]));
    assert_eq!(
        parse("[[2, 3, 1], [1, 4, 3]]"),
        ActionInput::PerAgent(vec![vec![2, 3, 1], vec![1, 4, 3]])
    );
    assert_eq!(
        parse("[[[1]], [[3]]]"),
        ActionInput::PerPlayerPerAgent(vec![vec![vec![1]], vec![vec![3]]])
    );
    assert!(serde_json::from_str::<ActionInput>("\"left\"").is_err());
}

#[test]
fn scalar_and_single_element_decode_alike() {
    let d = descriptor(true, vec![5], 1);
    let scalar = d.decode(&1_u32.into()).unwrap();
    let flat = d.decode(&[1].into()).unwrap();
    assert_eq!(scalar, flat);
    assert_eq!(
        scalar,
        [Action {
            player_id: 1,
            source: ActionSource::Avatar,
            action_type: 0,
            action_value: 1,
        }]
    );
}

#[test]
fn fields_are_positional() {
    let d = descriptor(false, vec![5, 5], 1);
    let actions = d.decode(&[4, 0, 1, 3].into()).unwrap();
    assert_eq!(
        actions,
        [Action {
            player_id: 1,
            source: ActionSource::Location(Location::new(4, 0)),
            action_type: 1,
            action_value: 3,
        }]
    );
}

#[test]
fn arity_must_match_dimensionality() {
    let d = descriptor(false, vec![5], 1);
    assert_eq!(
        d.decode(&[2, 3].into()),
        Err(ActionFormatError::Arity { expected: 3, got: 2 })
    );
    assert_eq!(
        d.decode(&1_u32.into()),
        Err(ActionFormatError::Arity { expected: 3, got: 1 })
    );
}

#[test]
fn fields_are_range_checked() {
    let d = descriptor(false, vec![5], 1);
    assert_eq!(
        d.decode(&[5, 3, 1].into()),
        Err(ActionFormatError::OutOfRange {
            field: "x",
            value: 5,
            cardinality: 5
        })
    );
    assert_eq!(
        d.decode(&[0, 6, 1].into()),
        Err(ActionFormatError::OutOfRange {
            field: "y",
            value: 6,
            cardinality: 6
        })
    );

    // Each action type is checked against its own value count.
    let d = descriptor(true, vec![5, 3], 1);
    assert!(d.decode(&[0, 4].into()).is_ok());
    assert_eq!(
        d.decode(&[1, 4].into()),
        Err(ActionFormatError::OutOfRange {
            field: "action_value",
            value: 4,
            cardinality: 3
        })
    );
    assert_eq!(
        d.decode(&[2, 1].into()),
        Err(ActionFormatError::OutOfRange {
            field: "action_type",
            value: 2,
            cardinality: 2
        })
    );
}

#[test]
fn outer_axis_indexes_players_when_several() {
    let d = descriptor(true, vec![5], 2);
    let flat = d.decode(&[1, 3].into()).unwrap();
    let nested = d.decode(&vec![vec![1], vec![3]].into()).unwrap();
    assert_eq!(flat, nested);
    assert_eq!(flat.iter().map(|a| a.player_id).collect::<Vec<_>>(), [1, 2]);
    assert_eq!(flat.iter().map(|a| a.action_value).collect::<Vec<_>>(), [1, 3]);

    assert_eq!(
        d.decode(&1_u32.into()),
        Err(ActionFormatError::PlayerCount { expected: 2, got: 1 })
    );
    assert_eq!(
        d.decode(&vec![vec![1], vec![3], vec![2]].into()),
        Err(ActionFormatError::PlayerCount { expected: 2, got: 3 })
    );
}

#[test]
fn flat_multi_player_needs_one_dimension() {
    // Each player would be handing over one field where two are needed.
    let d = descriptor(true, vec![5, 5], 2);
    assert_eq!(
        d.decode(&[0, 1].into()),
        Err(ActionFormatError::Arity { expected: 2, got: 1 })
    );

    // With one-field actions the list length is the player axis.
    let d = descriptor(true, vec![5], 2);
    assert_eq!(
        d.decode(&[1, 3, 2].into()),
        Err(ActionFormatError::PlayerCount { expected: 2, got: 3 })
    );
}

#[test]
fn simultaneous_actions_need_permission() {
    let mut d = descriptor(false, vec![5], 1);
    let input: ActionInput = vec![vec![2, 3, 1], vec![1, 4, 3]].into();
    assert_eq!(
        d.decode(&input),
        Err(ActionFormatError::TooManyActions { player: 1, got: 2 })
    );

    d.multiple_actions = true;
    let actions = d.decode(&input).unwrap();
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[1].source, ActionSource::Location(Location::new(1, 4)));
}

#[test]
fn three_level_nesting_orders_by_player_then_submission() {
    let mut d = descriptor(false, vec![5], 2);
    d.multiple_actions = true;
    let input: ActionInput = vec![
        vec![vec![2, 3, 1], vec![1, 4, 3]],
        vec![vec![2, 1, 4]],
    ]
    .into();
    let actions = d.decode(&input).unwrap();
    let summary: Vec<_> = actions.iter().map(|a| (a.player_id, a.action_value)).collect();
    assert_eq!(summary, [(1, 1), (1, 3), (2, 4)]);

    // One bad field rejects the whole input.
    let input: ActionInput = vec![vec![vec![2, 3, 1]], vec![vec![2, 1, 9]]].into();
    assert!(matches!(
        d.decode(&input),
        Err(ActionFormatError::OutOfRange { field: "action_value", .. })
    ));
}

#[test]
fn samples_always_decode() {
    let mut rng = fastrand::Rng::with_seed(11);
    for d in [
        descriptor(true, vec![5], 1),
        descriptor(false, vec![5, 3], 1),
        descriptor(true, vec![5, 3], 2),
    ] {
        for _ in 0..200 {
            let input = d.sample(&mut rng);
            assert!(d.decode(&input).is_ok(), "{input:?}");
        }
    }
}
