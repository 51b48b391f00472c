//! Match execution engine

use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::moves::Move;
use crate::player::{Player, PlayerConfig, PlayerStats};
use crate::strategy::{AnyStrategy, Strategy, StrategyKind};

/// How a round was decided
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    WinnerA,
    WinnerB,
    Even,
}

impl Outcome {
    /// Apply the dominance rule to one exchange of moves.
    pub fn resolve(move_a: Move, move_b: Move) -> Self {
        if move_a.dominates(move_b) {
            Outcome::WinnerA
        } else if move_b.dominates(move_a) {
            Outcome::WinnerB
        } else {
            Outcome::Even
        }
    }
}

/// Result of a single round, with both players' counters after it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub move_a: Move,
    pub move_b: Move,
    pub outcome: Outcome,
    pub player_a: PlayerStats,
    pub player_b: PlayerStats,
}

impl RoundResult {
    /// Stats of the round's winner, `None` on an even round.
    pub fn winner(&self) -> Option<&PlayerStats> {
        match self.outcome {
            Outcome::WinnerA => Some(&self.player_a),
            Outcome::WinnerB => Some(&self.player_b),
            Outcome::Even => None,
        }
    }
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub rounds: Vec<RoundResult>,
    pub player_a: PlayerStats,
    pub player_b: PlayerStats,
    pub round_count: u32,
}

/// Final standings without the round transcript
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub round_count: u32,
    pub evens: u32,
    pub strategy_a: StrategyKind,
    pub strategy_b: StrategyKind,
    pub seed_a: i64,
    pub seed_b: i64,
    pub player_a: PlayerStats,
    pub player_b: PlayerStats,
}

/// Tournament length
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub rounds: u32,
}

impl TournamentConfig {
    /// Reference run: 10,000 rounds
    pub fn standard() -> Self {
        Self { rounds: 10_000 }
    }

    pub fn with_rounds(rounds: u32) -> Self {
        Self { rounds }
    }
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Two players and a fixed number of rounds.
///
/// Rounds run strictly in order: both players pick (A first), the round is
/// resolved, and each player's strategy adapts before the next round starts.
pub struct Tournament<A = AnyStrategy, B = AnyStrategy> {
    player_a: Player<A>,
    player_b: Player<B>,
    config: TournamentConfig,
    played: u32,
}

impl Tournament {
    pub fn from_configs(config: TournamentConfig, a: &PlayerConfig, b: &PlayerConfig) -> Self {
        Tournament::new(Player::from_config(a), Player::from_config(b), config)
    }
}

impl<A: Strategy, B: Strategy> Tournament<A, B> {
    pub fn new(player_a: Player<A>, player_b: Player<B>, config: TournamentConfig) -> Self {
        Self {
            player_a,
            player_b,
            config,
            played: 0,
        }
    }

    pub fn player_a(&self) -> &Player<A> {
        &self.player_a
    }

    pub fn player_b(&self) -> &Player<B> {
        &self.player_b
    }

    pub fn rounds_played(&self) -> u32 {
        self.played
    }

    pub fn is_finished(&self) -> bool {
        self.played >= self.config.rounds
    }

    /// Play one round and report it.
    pub fn play_round(&mut self) -> RoundResult {
        let move_a = self.player_a.next_move();
        let move_b = self.player_b.next_move();
        let outcome = Outcome::resolve(move_a, move_b);

        match outcome {
            Outcome::WinnerA => {
                self.player_a.record_win();
                self.player_b.record_loss();
            }
            Outcome::WinnerB => {
                self.player_a.record_loss();
                self.player_b.record_win();
            }
            Outcome::Even => {
                self.player_a.record_even();
                self.player_b.record_even();
            }
        }

        let round = self.played;
        self.played += 1;
        debug!("round {}: {} vs {} -> {:?}", round, move_a, move_b, outcome);

        RoundResult {
            round,
            move_a,
            move_b,
            outcome,
            player_a: self.player_a.stats(),
            player_b: self.player_b.stats(),
        }
    }

    /// Play every remaining round, handing each result to `observer`.
    pub fn run<F>(&mut self, mut observer: F)
    where
        F: FnMut(&RoundResult),
    {
        info!(
            "tournament start: {} vs {}, {} rounds",
            self.player_a.name(),
            self.player_b.name(),
            self.config.rounds
        );

        while !self.is_finished() {
            let result = self.play_round();
            observer(&result);
        }

        info!(
            "tournament finished: {} / {}",
            self.player_a.describe(),
            self.player_b.describe()
        );
    }
}

/// Run a complete match and collect every round
///
/// # Arguments
/// * `config` - Number of rounds
/// * `a` - Player A's name, strategy and seed
/// * `b` - Player B's name, strategy and seed
///
/// # Returns
/// Complete match result with round-by-round details
pub fn run_match(config: &TournamentConfig, a: &PlayerConfig, b: &PlayerConfig) -> MatchResult {
    let mut tournament = Tournament::from_configs(config.clone(), a, b);
    let mut rounds = Vec::with_capacity(config.rounds as usize);
    tournament.run(|result| rounds.push(result.clone()));

    MatchResult {
        rounds,
        player_a: tournament.player_a().stats(),
        player_b: tournament.player_b().stats(),
        round_count: tournament.rounds_played(),
    }
}

/// Run a complete match keeping only the final standings
pub fn summarize_match(config: &TournamentConfig, a: &PlayerConfig, b: &PlayerConfig) -> MatchSummary {
    let mut tournament = Tournament::from_configs(config.clone(), a, b);
    let mut evens = 0;
    tournament.run(|result| {
        if result.outcome == Outcome::Even {
            evens += 1;
        }
    });

    MatchSummary {
        round_count: tournament.rounds_played(),
        evens,
        strategy_a: a.strategy,
        strategy_b: b.strategy,
        seed_a: a.seed,
        seed_b: b.seed,
        player_a: tournament.player_a().stats(),
        player_b: tournament.player_b().stats(),
    }
}
