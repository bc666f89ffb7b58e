//! Grid state: cell matrix, occupancy set, and the cached open-space metric.

use std::collections::HashSet;
use std::fmt;

use log::{debug, info};

use crate::common::{BoardError, ConfigError, Coordinate, Target, ValidationError};
use crate::ship::PlacedShip;
use crate::validate;

/// State of a single grid cell. Transitions are one-way: Empty→Ship on
/// placement, Ship→Hit or Empty→Miss on a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// One-character rendering symbol.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::Ship => 'O',
            CellState::Hit => 'X',
            CellState::Miss => '-',
        }
    }
}

/// Read-only capability the validator needs from a board. Keeps the
/// validation pipeline reusable against any grid-shaped state.
pub trait BoardView {
    /// The fixed N of the N×N grid.
    fn board_size(&self) -> u32;

    /// 1-indexed coordinates currently covered by committed ships.
    fn occupied_spaces(&self) -> &HashSet<Coordinate>;

    /// Longest contiguous run of Empty cells across any row or column.
    fn largest_open_space(&self) -> u32;
}

/// An N×N game board. Sole mutator of cell state and the occupied set;
/// every placement goes through the validation pipeline before any write.
#[derive(Debug)]
pub struct Board {
    board_size: u32,
    // grid[y][x], 0-indexed; placement-facing APIs are 1-indexed and the
    // board owns the translation.
    grid: Vec<Vec<CellState>>,
    occupied_spaces: HashSet<Coordinate>,
    largest_open_space: u32,
}

impl Board {
    /// Create a board and place the initial fleet in order. Any validation
    /// failure aborts construction; a partially placed fleet is never
    /// observable.
    pub fn new(board_size: u32, fleet: &[PlacedShip]) -> Result<Self, BoardError> {
        if board_size < 2 {
            return Err(ConfigError { size: board_size }.into());
        }
        info!("initializing board with dimensions: {board_size} x {board_size}");
        let mut board = Board {
            board_size,
            grid: vec![vec![CellState::Empty; board_size as usize]; board_size as usize],
            occupied_spaces: HashSet::new(),
            // No ships yet, so the longest empty run spans the whole board.
            largest_open_space: board_size,
        };
        for ship in fleet {
            board.place_ship(ship)?;
        }
        info!("{board}");
        Ok(board)
    }

    /// Validate and commit a ship. Validation runs entirely before the
    /// first cell write, so a rejected ship leaves the board untouched.
    pub fn place_ship(&mut self, ship: &PlacedShip) -> Result<bool, ValidationError> {
        info!(
            "placing {} from x1: {} x2: {} y1: {} y2: {}",
            ship.name, ship.x1, ship.x2, ship.y1, ship.y2
        );
        validate::validate(ship, self)?;
        for (x, y) in ship.footprint() {
            self.grid[(y - 1) as usize][(x - 1) as usize] = CellState::Ship;
            self.occupied_spaces.insert((x, y));
        }
        self.recompute_open_space();
        Ok(true)
    }

    /// Record a shot at a 0-indexed target. Returns true and marks Hit when
    /// the cell is occupied, otherwise marks Miss. Coordinates are not
    /// bounds-checked: callers draw targets from the board's legal range.
    pub fn log_hit(&mut self, target: Target) -> bool {
        // The occupied set is 1-indexed, bomb coordinates are 0-indexed.
        if self.occupied_spaces.contains(&(target.x + 1, target.y + 1)) {
            self.grid[target.y as usize][target.x as usize] = CellState::Hit;
            true
        } else {
            self.grid[target.y as usize][target.x as usize] = CellState::Miss;
            false
        }
    }

    fn recompute_open_space(&mut self) {
        let n = self.board_size as usize;
        let mut longest = 0;
        for row in &self.grid {
            longest = longest.max(longest_empty_run(row.iter().copied()));
        }
        for x in 0..n {
            longest = longest.max(longest_empty_run(self.grid.iter().map(|row| row[x])));
        }
        self.largest_open_space = longest;
        debug!("largest open space: {}", self.largest_open_space);
    }

    /// State of the cell at a 1-indexed coordinate.
    pub fn cell(&self, coord: Coordinate) -> CellState {
        self.grid[(coord.1 - 1) as usize][(coord.0 - 1) as usize]
    }

    /// Textual snapshot of the grid, one symbol per cell, rows printed with
    /// y decreasing so the board reads bottom-left origin. Diagnostic only.
    pub fn render(&self) -> String {
        let mut out = String::from("current board state:\n");
        for row in self.grid.iter().rev() {
            out.push('|');
            for cell in row {
                out.push(cell.symbol());
            }
            out.push_str("|\n");
        }
        out
    }
}

impl BoardView for Board {
    fn board_size(&self) -> u32 {
        self.board_size
    }

    fn occupied_spaces(&self) -> &HashSet<Coordinate> {
        &self.occupied_spaces
    }

    fn largest_open_space(&self) -> u32 {
        self.largest_open_space
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Length of the longest maximal run of Empty cells in one row or column.
fn longest_empty_run(cells: impl Iterator<Item = CellState>) -> u32 {
    let mut longest = 0u32;
    let mut current = 0u32;
    for cell in cells {
        if cell == CellState::Empty {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}
