//! Rock-Paper-Scissors strategy engine
//!
//! Core logic for a repeated two-player Rock-Paper-Scissors tournament in
//! which each player delegates move selection to an adaptive strategy.
//! This crate is compiled to:
//! - Native (for the `rps-tournament` driver)
//! - WASM (for tournament replay in the browser)

mod error;
mod moves;
mod random;
mod strategy;
mod reactive;
mod probe;
mod player;
mod game;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{parse_seed, EngineError};
pub use moves::Move;
pub use random::SeededRng;
pub use strategy::{describe_strategy, AnyStrategy, Strategy, StrategyKind};
pub use reactive::ReactiveStrategy;
pub use probe::{ProbeStrategy, Weights, INITIAL_WEIGHT};
pub use player::{Player, PlayerConfig, PlayerStats};
pub use game::{
    run_match, summarize_match, MatchResult, MatchSummary, Outcome, RoundResult, Tournament,
    TournamentConfig,
};
