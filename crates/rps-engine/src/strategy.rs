//! Strategy contract and the strategy registry

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::EngineError;
use crate::moves::Move;
use crate::probe::ProbeStrategy;
use crate::reactive::ReactiveStrategy;

/// An adaptive move-selection policy.
///
/// The match loop calls [`Strategy::next_move`] once per round and then, on a
/// decisive round only, [`Strategy::adapt`] with whether this strategy's
/// player won. Even rounds are never reported.
pub trait Strategy {
    /// Pick the move for the coming round.
    fn next_move(&mut self) -> Move;

    /// Absorb the outcome of the round just played.
    fn adapt(&mut self, won: bool);
}

/// Registered strategy kinds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Win-stay, lose-shift. Repeats a winning move, redraws otherwise.
    #[default]
    Reactive,
    /// Frequency reinforcement over move transitions.
    Probe,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Reactive, StrategyKind::Probe];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Reactive => "reactive",
            StrategyKind::Probe => "probe",
        }
    }

    /// Build a fresh strategy of this kind seeded with `seed`.
    pub fn build(self, seed: i64) -> AnyStrategy {
        match self {
            StrategyKind::Reactive => AnyStrategy::Reactive(ReactiveStrategy::new(seed)),
            StrategyKind::Probe => AnyStrategy::Probe(ProbeStrategy::new(seed)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| EngineError::UnknownStrategy(s.to_string()))
    }
}

/// Tagged dispatch over every registered strategy.
#[derive(Clone, Debug)]
pub enum AnyStrategy {
    Reactive(ReactiveStrategy),
    Probe(ProbeStrategy),
}

impl AnyStrategy {
    pub fn kind(&self) -> StrategyKind {
        match self {
            AnyStrategy::Reactive(_) => StrategyKind::Reactive,
            AnyStrategy::Probe(_) => StrategyKind::Probe,
        }
    }
}

impl Strategy for AnyStrategy {
    fn next_move(&mut self) -> Move {
        match self {
            AnyStrategy::Reactive(s) => s.next_move(),
            AnyStrategy::Probe(s) => s.next_move(),
        }
    }

    fn adapt(&mut self, won: bool) {
        match self {
            AnyStrategy::Reactive(s) => s.adapt(won),
            AnyStrategy::Probe(s) => s.adapt(won),
        }
    }
}

impl From<ReactiveStrategy> for AnyStrategy {
    fn from(s: ReactiveStrategy) -> Self {
        AnyStrategy::Reactive(s)
    }
}

impl From<ProbeStrategy> for AnyStrategy {
    fn from(s: ProbeStrategy) -> Self {
        AnyStrategy::Probe(s)
    }
}

/// Get a human-readable description of a strategy kind
pub fn describe_strategy(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::Reactive => {
            "Repeats the last move after a win. Draws a fresh random move after a loss; \
             ties leave the decision unchanged."
        }
        StrategyKind::Probe => {
            "Learns which move tends to win after each of its own previous moves and \
             plays in proportion to those weights."
        }
    }
}
