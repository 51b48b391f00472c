//! Tournament participants

use core::fmt;
use serde::{Deserialize, Serialize};
use crate::moves::Move;
use crate::strategy::{AnyStrategy, Strategy, StrategyKind};

/// How to construct one player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub strategy: StrategyKind,
    pub seed: i64,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, strategy: StrategyKind, seed: i64) -> Self {
        Self {
            name: name.into(),
            strategy,
            seed,
        }
    }
}

/// Snapshot of a player's running counters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub games: u32,
}

impl fmt::Display for PlayerStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}: {} games, {} win, {} lose]",
            self.name, self.games, self.wins, self.losses
        )
    }
}

/// A named participant that owns its strategy and keeps score.
#[derive(Clone, Debug)]
pub struct Player<S = AnyStrategy> {
    name: String,
    strategy: S,
    wins: u32,
    losses: u32,
    games: u32,
}

impl Player<AnyStrategy> {
    pub fn from_config(config: &PlayerConfig) -> Self {
        Player::new(config.name.clone(), config.strategy.build(config.seed))
    }
}

impl<S: Strategy> Player<S> {
    pub fn new(name: impl Into<String>, strategy: S) -> Self {
        Self {
            name: name.into(),
            strategy,
            wins: 0,
            losses: 0,
            games: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    pub fn next_move(&mut self) -> Move {
        self.strategy.next_move()
    }

    pub fn record_win(&mut self) {
        self.strategy.adapt(true);
        self.wins += 1;
        self.games += 1;
    }

    pub fn record_loss(&mut self) {
        self.strategy.adapt(false);
        self.losses += 1;
        self.games += 1;
    }

    /// Ties count as a game but are not fed to the strategy.
    pub fn record_even(&mut self) {
        self.games += 1;
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn games(&self) -> u32 {
        self.games
    }

    pub fn stats(&self) -> PlayerStats {
        PlayerStats {
            name: self.name.clone(),
            wins: self.wins,
            losses: self.losses,
            games: self.games,
        }
    }

    /// `[<name>: <games> games, <wins> win, <losses> lose]`
    pub fn describe(&self) -> String {
        self.stats().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every adapt call instead of learning.
    #[derive(Default)]
    struct Recorder {
        adapted: Vec<bool>,
    }

    impl Strategy for Recorder {
        fn next_move(&mut self) -> Move {
            Move::Rock
        }

        fn adapt(&mut self, won: bool) {
            self.adapted.push(won);
        }
    }

    #[test]
    fn test_counters() {
        let mut player = Player::new("KIM", Recorder::default());
        player.record_win();
        player.record_loss();
        player.record_loss();
        player.record_even();

        assert_eq!(player.wins(), 1);
        assert_eq!(player.losses(), 2);
        assert_eq!(player.games(), 4);
    }

    #[test]
    fn test_even_is_not_fed_to_strategy() {
        let mut player = Player::new("LEE", Recorder::default());
        player.record_even();
        player.record_win();
        player.record_even();
        player.record_loss();

        assert_eq!(player.strategy().adapted, vec![true, false]);
    }

    #[test]
    fn test_describe() {
        let mut player = Player::new("KIM", Recorder::default());
        assert_eq!(player.describe(), "[KIM: 0 games, 0 win, 0 lose]");

        player.record_win();
        player.record_even();
        player.record_loss();
        assert_eq!(player.describe(), "[KIM: 3 games, 1 win, 1 lose]");
    }

    #[test]
    fn test_from_config() {
        let config = PlayerConfig::new("LEE", StrategyKind::Probe, 15);
        let mut player = Player::from_config(&config);
        let mut reference = StrategyKind::Probe.build(15);

        assert_eq!(player.name(), "LEE");
        assert_eq!(player.strategy().kind(), StrategyKind::Probe);
        assert_eq!(player.next_move(), reference.next_move());
    }

    #[test]
    fn test_stats_serde() {
        let mut player = Player::new("KIM", Recorder::default());
        player.record_win();
        let json = serde_json::to_string(&player.stats()).unwrap();
        assert_eq!(json, r#"{"name":"KIM","wins":1,"losses":0,"games":1}"#);
    }
}
