//! Shared value types and the error taxonomy used across the board,
//! validator, and agents.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

/// A 1-indexed board coordinate. Placement-facing APIs speak this type;
/// the grid's 0-indexed storage is an implementation detail of [`crate::Board`].
pub type Coordinate = (u32, u32);

/// A 0-indexed cell selected by the targeting agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub x: u32,
    pub y: u32,
}

/// Outcome of a single fired shot, recorded by the targeting agent.
///
/// `sunk` is a placeholder: sink detection is not part of this core and the
/// flag is always false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub x: u32,
    pub y: u32,
    pub hit: bool,
    pub sunk: bool,
}

/// Invalid board size at construction. Fatal to board creation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("board size must be 2 or larger, got {size}")]
pub struct ConfigError {
    pub size: u32,
}

/// A ship placement rejected by the validation pipeline. Each variant names
/// the rule violated and the offending values; all are recoverable — an
/// agent may retry with a different candidate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No row or column run is long enough for a ship of this size.
    #[error("no room available on board for ship of size {size} (largest open space: {largest_open_space})")]
    OutOfSpace { size: u32, largest_open_space: u32 },

    /// Neither `x1 == x2` nor `y1 == y2` holds.
    #[error("ship {ship:?} must be placed horizontally or vertically")]
    Orientation { ship: &'static str },

    /// A coordinate field falls outside `[1, board_size]`.
    #[error("ship {ship:?} {field} value should be between 1 and {board_size}, got {value}")]
    Bounds {
        ship: &'static str,
        field: &'static str,
        value: u32,
        board_size: u32,
    },

    /// Coordinates are not in canonical order (`x1 <= x2`, `y1 <= y2`).
    #[error("ship {ship:?} dimensions invalid: make sure x1 <= x2 and y1 <= y2")]
    Format { ship: &'static str },

    /// The declared size does not match the footprint cell count.
    #[error("size of ship {ship:?} not correlated to reserved spaces ({size} declared, {footprint} covered)")]
    SizeMismatch {
        ship: &'static str,
        size: u32,
        footprint: u32,
    },

    /// The footprint intersects already-occupied cells.
    #[error("overlap detected at {cells:?}")]
    Overlap { cells: Vec<Coordinate> },
}

/// Errors surfaced by [`crate::Board::new`]: either the size check or a
/// failing initial-fleet placement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Build an agent RNG from an optional fixed seed; unseeded agents draw
/// their initial state from the thread RNG. Each agent owns its generator,
/// so seeding one never disturbs another.
pub(crate) fn rng_from_seed(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Every cell has been fired upon; terminal for the targeting loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("all spaces have been bombed, no moves left")]
pub struct TargetsExhaustedError;
