//! Frequency-reinforcement ("probe") strategy
//!
//! Keeps a 3x3 table of weights indexed by (move played last round, candidate
//! move). Each round samples the candidate in proportion to its weight in the
//! row of the move just played, then reinforces that transition on a win or
//! boosts the two alternatives on a loss. Weights only ever grow, so no move's
//! probability collapses to zero.

use log::trace;
use crate::moves::Move;
use crate::random::SeededRng;
use crate::strategy::Strategy;

/// Starting weight of every transition cell
pub const INITIAL_WEIGHT: u64 = 2;

/// Weight matrix: `weights[previous][candidate]`
///
/// Cells are `u64` so a row that loses on every one of `u32::MAX` rounds
/// still cannot overflow.
pub type Weights = [[u64; 3]; 3];

#[derive(Clone, Debug)]
pub struct ProbeStrategy {
    rng: SeededRng,
    previous_rank: u32,
    current_rank: u32,
    weights: Weights,
}

impl ProbeStrategy {
    pub fn new(seed: i64) -> Self {
        Self {
            rng: SeededRng::new(seed),
            previous_rank: 0,
            current_rank: 0,
            weights: [[INITIAL_WEIGHT; 3]; 3],
        }
    }

    /// Read-only view of the learned transition weights
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    fn row_total(&self, row: u32) -> u64 {
        self.weights[row as usize].iter().sum()
    }

    /// Pick a rank from `row` given a draw in `[0, row_total)`.
    fn bucket(&self, row: u32, bet: u64) -> u32 {
        let w = &self.weights[row as usize];
        if bet < w[0] {
            0
        } else if bet < w[0] + w[1] {
            1
        } else {
            2
        }
    }
}

impl Strategy for ProbeStrategy {
    fn next_move(&mut self) -> Move {
        let row = self.current_rank;
        let bet = self.rng.next_range_u64(self.row_total(row));
        let chosen = Move::from_rank(self.bucket(row, bet)).unwrap_or(Move::Rock);

        self.previous_rank = self.current_rank;
        self.current_rank = chosen.rank();
        chosen
    }

    fn adapt(&mut self, won: bool) {
        let row = &mut self.weights[self.previous_rank as usize];
        let current = self.current_rank as usize;
        if won {
            row[current] += 1;
        } else {
            row[(current + 1) % 3] += 1;
            row[(current + 2) % 3] += 1;
        }
        trace!(
            "probe adapt won={} row={} weights={:?}",
            won,
            self.previous_rank,
            self.weights[self.previous_rank as usize]
        );
    }
}
