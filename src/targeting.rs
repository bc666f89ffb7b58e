//! Exhaustive non-repeating bomb targeting.

use std::collections::HashSet;

use log::info;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::{Board, BoardView};
use crate::common::{rng_from_seed, Shot, Target, TargetsExhaustedError};

/// Samples the full coordinate space without replacement to choose bomb
/// targets, reporting each shot through the board and recording the
/// outcome locally.
pub struct TargetingAgent<'a> {
    board: &'a mut Board,
    rng: SmallRng,
    // Every 0-indexed coordinate of the grid, precomputed once.
    cell_opts: Vec<Target>,
    // Indices into `cell_opts` already fired upon.
    sampled: HashSet<usize>,
    shots: Vec<Shot>,
}

impl<'a> TargetingAgent<'a> {
    pub fn new(board: &'a mut Board, seed: Option<u64>) -> Self {
        let n = board.board_size();
        let mut cell_opts = Vec::with_capacity((n * n) as usize);
        for x in 0..n {
            for y in 0..n {
                cell_opts.push(Target { x, y });
            }
        }
        Self {
            board,
            rng: rng_from_seed(seed),
            cell_opts,
            sampled: HashSet::new(),
            shots: Vec::new(),
        }
    }

    /// Fire `count` shots at freshly selected targets. Fails with
    /// [`TargetsExhaustedError`] once every cell has been fired upon.
    pub fn fire(&mut self, count: u32) -> Result<(), TargetsExhaustedError> {
        for _ in 0..count {
            let target = self.suggest_target()?;
            let hit = self.board.log_hit(target);
            if hit {
                info!("bomb hits at x: {} y: {}", target.x + 1, target.y + 1);
            } else {
                info!("bomb miss at x: {} y: {}", target.x + 1, target.y + 1);
            }
            // Sink detection is not implemented; `sunk` stays false.
            self.shots.push(Shot {
                x: target.x,
                y: target.y,
                hit,
                sunk: false,
            });
        }
        Ok(())
    }

    /// Rejection sampling over the shrinking pool of untried cells: draw a
    /// uniform index, redraw on repeats, fail once the pool is empty.
    fn suggest_target(&mut self) -> Result<Target, TargetsExhaustedError> {
        while self.sampled.len() < self.cell_opts.len() {
            let guess = self.rng.random_range(0..self.cell_opts.len());
            if self.sampled.insert(guess) {
                return Ok(self.cell_opts[guess]);
            }
        }
        Err(TargetsExhaustedError)
    }

    /// Recorded outcome of every shot fired so far, in firing order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }
}
