//! Placement validation: an ordered, fail-fast pipeline of five independent
//! checks run before any board mutation.

use crate::board::BoardView;
use crate::common::{Coordinate, ValidationError};
use crate::ship::PlacedShip;

/// Validate a candidate placement against a read-only board view.
///
/// Checks run in a fixed order and the first failure is returned, so on
/// multiply-invalid input the earlier rule surfaces: open space, then
/// orientation, then bounds, then canonical format, then size/overlap.
pub fn validate(ship: &PlacedShip, board: &impl BoardView) -> Result<(), ValidationError> {
    validate_open_board_space(ship, board)?;
    validate_orientation(ship)?;
    validate_bounds(ship, board)?;
    validate_format(ship)?;
    validate_overlap(ship, board)?;
    Ok(())
}

/// The cached open-space metric is a necessary admission bound: a ship
/// larger than the longest empty run cannot fit anywhere. Passing this
/// check does not guarantee the specific placement fits.
fn validate_open_board_space(ship: &PlacedShip, board: &impl BoardView) -> Result<(), ValidationError> {
    if ship.size > board.largest_open_space() {
        return Err(ValidationError::OutOfSpace {
            size: ship.size,
            largest_open_space: board.largest_open_space(),
        });
    }
    Ok(())
}

fn validate_orientation(ship: &PlacedShip) -> Result<(), ValidationError> {
    if ship.x1 == ship.x2 || ship.y1 == ship.y2 {
        Ok(())
    } else {
        Err(ValidationError::Orientation { ship: ship.name })
    }
}

fn validate_bounds(ship: &PlacedShip, board: &impl BoardView) -> Result<(), ValidationError> {
    let fields = [
        ("x1", ship.x1),
        ("x2", ship.x2),
        ("y1", ship.y1),
        ("y2", ship.y2),
    ];
    for (field, value) in fields {
        if value < 1 || value > board.board_size() {
            return Err(ValidationError::Bounds {
                ship: ship.name,
                field,
                value,
                board_size: board.board_size(),
            });
        }
    }
    Ok(())
}

fn validate_format(ship: &PlacedShip) -> Result<(), ValidationError> {
    if ship.x1 > ship.x2 || ship.y1 > ship.y2 {
        Err(ValidationError::Format { ship: ship.name })
    } else {
        Ok(())
    }
}

fn validate_overlap(ship: &PlacedShip, board: &impl BoardView) -> Result<(), ValidationError> {
    let reserved: Vec<Coordinate> = ship.footprint().collect();
    if reserved.len() as u32 > ship.size {
        return Err(ValidationError::SizeMismatch {
            ship: ship.name,
            size: ship.size,
            footprint: reserved.len() as u32,
        });
    }
    let mut cells: Vec<Coordinate> = reserved
        .into_iter()
        .filter(|coord| board.occupied_spaces().contains(coord))
        .collect();
    if cells.is_empty() {
        Ok(())
    } else {
        cells.sort_unstable();
        Err(ValidationError::Overlap { cells })
    }
}
