mod board;
mod common;
mod config;
mod logging;
mod placement;
mod ship;
mod targeting;
mod validate;

pub use board::{Board, BoardView, CellState};
pub use common::{
    BoardError, ConfigError, Coordinate, Shot, Target, TargetsExhaustedError, ValidationError,
};
pub use config::{DEFAULT_BOARD_SIZE, NUM_CLASSES, SHIP_CLASSES};
pub use logging::init_logging;
pub use placement::PlacementAgent;
pub use ship::{Orientation, PlacedShip, ShipClass};
pub use targeting::TargetingAgent;
pub use validate::validate;
