//! Moves and the dominance rule

use core::fmt;
use serde::{Deserialize, Serialize};
use crate::error::EngineError;

/// A hand in Rock-Paper-Scissors.
///
/// Discriminants are the move ranks used for dominance arithmetic:
/// rank `a` beats rank `b` iff `(a + 1) % 3 == b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Move {
    /// All moves in rank order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Scissors, Move::Paper];

    pub fn rank(self) -> u32 {
        self as u32
    }

    /// Inverse of [`Move::rank`].
    pub fn from_rank(rank: u32) -> Result<Self, EngineError> {
        match rank {
            0 => Ok(Move::Rock),
            1 => Ok(Move::Scissors),
            2 => Ok(Move::Paper),
            _ => Err(EngineError::InvalidRank(rank)),
        }
    }

    /// True iff `self` beats `other`.
    pub fn dominates(self, other: Move) -> bool {
        (self.rank() + 1) % 3 == other.rank()
    }

    /// True iff `other` beats `self`.
    pub fn is_dominated_by(self, other: Move) -> bool {
        other.dominates(self)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Scissors => write!(f, "Scissors"),
            Move::Paper => write!(f, "Paper"),
        }
    }
}

impl TryFrom<u32> for Move {
    type Error = EngineError;

    fn try_from(rank: u32) -> Result<Self, Self::Error> {
        Move::from_rank(rank)
    }
}
