//! Random ship placement with collision avoidance.

use std::collections::HashSet;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, BoardView};
use crate::common::{rng_from_seed, ValidationError};
use crate::config::SHIP_CLASSES;
use crate::ship::{Orientation, PlacedShip, ShipClass};

/// Per-ship draw budget. Covers both duplicate redraws and candidates the
/// board rejects, so a packed board cannot spin the retry loop forever.
const MAX_DRAWS_PER_SHIP: u32 = 1000;

/// Draws candidate placements at random and commits them through the
/// board's placement operation, retrying rejected candidates with a fresh
/// draw. All state (RNG, class table, attempted-footprint cache) is owned
/// per instance.
pub struct PlacementAgent<'a> {
    board: &'a mut Board,
    rng: SmallRng,
    classes: Vec<ShipClass>,
    // Exact candidates already drawn; repeats are discarded without being
    // resubmitted to the board.
    attempted: HashSet<PlacedShip>,
}

impl<'a> PlacementAgent<'a> {
    /// Agent over the default ship class table. `seed` fixes the draw
    /// sequence for reproducible deployments.
    pub fn new(board: &'a mut Board, seed: Option<u64>) -> Self {
        Self::with_classes(board, seed, SHIP_CLASSES.to_vec())
    }

    pub fn with_classes(board: &'a mut Board, seed: Option<u64>, classes: Vec<ShipClass>) -> Self {
        Self {
            board,
            rng: rng_from_seed(seed),
            classes,
            attempted: HashSet::new(),
        }
    }

    /// Attempt to deploy `count` randomly drawn ships. Returns the number
    /// actually committed; an iteration that runs out of room (or out of
    /// draw budget) abandons its ship rather than looping forever.
    pub fn deploy(&mut self, count: u32) -> u32 {
        let mut placed = 0;
        for _ in 0..count {
            if self.deploy_one() {
                placed += 1;
            }
        }
        placed
    }

    fn deploy_one(&mut self) -> bool {
        for _ in 0..MAX_DRAWS_PER_SHIP {
            let candidate = self.draw_candidate();
            if !self.attempted.insert(candidate.clone()) {
                // Exact repeat of an earlier draw, redraw immediately.
                continue;
            }
            match self.board.place_ship(&candidate) {
                Ok(_) => return true,
                Err(ValidationError::OutOfSpace { size, .. }) => {
                    // No run anywhere fits this ship; retrying cannot help.
                    info!("no room left for {} (size {size}), abandoning", candidate.name);
                    return false;
                }
                Err(err) => {
                    debug!("candidate rejected, redrawing: {err}");
                }
            }
        }
        warn!("draw budget exhausted without a valid placement, abandoning ship");
        false
    }

    fn draw_candidate(&mut self) -> PlacedShip {
        let class = self.classes[self.rng.random_range(0..self.classes.len())];
        let orientation = if self.rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let n = self.board.board_size();
        let origin = (
            self.rng.random_range(1..=n),
            self.rng.random_range(1..=n),
        );
        PlacedShip::spanning(&class, origin, orientation)
    }
}
