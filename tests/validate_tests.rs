use seabattle::{validate, Board, PlacedShip, ValidationError};

#[test]
fn test_diagonal_boat_rejected() {
    let board = Board::new(4, &[]).unwrap();
    let ship = PlacedShip::new("frigate", 2, 1, 1, 2, 2);
    assert_eq!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::Orientation { ship: "frigate" }
    );
}

#[test]
fn test_boat_out_of_bounds_names_the_field() {
    let board = Board::new(4, &[]).unwrap();

    let ship = PlacedShip::new("frigate", 2, 0, 1, 0, 2);
    match validate(&ship, &board).unwrap_err() {
        ValidationError::Bounds { field, value, board_size, .. } => {
            assert_eq!(field, "x1");
            assert_eq!(value, 0);
            assert_eq!(board_size, 4);
        }
        other => panic!("expected Bounds, got {other:?}"),
    }

    let ship = PlacedShip::new("frigate", 2, 2, 3, 2, 7);
    match validate(&ship, &board).unwrap_err() {
        ValidationError::Bounds { field, value, .. } => {
            assert_eq!(field, "y2");
            assert_eq!(value, 7);
        }
        other => panic!("expected Bounds, got {other:?}"),
    }
}

#[test]
fn test_unsorted_coordinates_rejected() {
    let board = Board::new(4, &[]).unwrap();
    let ship = PlacedShip::new("frigate", 2, 2, 1, 1, 1);
    assert_eq!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::Format { ship: "frigate" }
    );
}

#[test]
fn test_size_not_correlated_to_reserved_spaces() {
    let board = Board::new(4, &[]).unwrap();
    let ship = PlacedShip::new("frigate", 2, 1, 1, 4, 1);
    assert_eq!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::SizeMismatch {
            ship: "frigate",
            size: 2,
            footprint: 4,
        }
    );
}

#[test]
fn test_no_board_space_for_oversized_ship() {
    let board = Board::new(4, &[]).unwrap();
    let ship = PlacedShip::new("leviathan", 5, 1, 1, 1, 5);
    assert_eq!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::OutOfSpace {
            size: 5,
            largest_open_space: 4,
        }
    );
}

// On multiply-invalid input the earlier check in the pipeline surfaces.

#[test]
fn test_open_space_check_runs_first() {
    let board = Board::new(2, &[]).unwrap();
    // Diagonal, out of bounds, and too large; the admission check wins.
    let ship = PlacedShip::new("leviathan", 3, 0, 1, 2, 3);
    assert!(matches!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::OutOfSpace { .. }
    ));
}

#[test]
fn test_orientation_check_precedes_bounds() {
    let board = Board::new(4, &[]).unwrap();
    // Diagonal and out of bounds at x1.
    let ship = PlacedShip::new("frigate", 2, 0, 1, 1, 2);
    assert!(matches!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::Orientation { .. }
    ));
}

#[test]
fn test_bounds_check_precedes_format() {
    let board = Board::new(4, &[]).unwrap();
    // Unsorted and out of bounds at x1.
    let ship = PlacedShip::new("frigate", 2, 5, 1, 1, 1);
    assert!(matches!(
        validate(&ship, &board).unwrap_err(),
        ValidationError::Bounds { field: "x1", .. }
    ));
}

#[test]
fn test_valid_single_cell_ship() {
    let board = Board::new(4, &[]).unwrap();
    let ship = PlacedShip::new("dinghy", 1, 3, 3, 3, 3);
    assert!(validate(&ship, &board).is_ok());
}

#[test]
fn test_validator_is_read_only() {
    let board = Board::new(4, &[]).unwrap();
    let ship = PlacedShip::new("frigate", 2, 1, 1, 1, 2);
    validate(&ship, &board).unwrap();
    validate(&ship, &board).unwrap();
    // Validation alone never commits anything.
    use seabattle::BoardView;
    assert!(board.occupied_spaces().is_empty());
}
