//! Win-stay, lose-shift strategy

use crate::moves::Move;
use crate::random::SeededRng;
use crate::strategy::Strategy;

/// Repeat the previous move after a win; otherwise draw a fresh uniform move.
///
/// Ties are never reported through [`Strategy::adapt`], so the outcome that
/// decides whether to stay is the last *decisive* round.
#[derive(Clone, Debug)]
pub struct ReactiveStrategy {
    rng: SeededRng,
    last_move: Option<Move>,
    last_result_was_win: bool,
}

impl ReactiveStrategy {
    pub fn new(seed: i64) -> Self {
        Self {
            rng: SeededRng::new(seed),
            last_move: None,
            last_result_was_win: false,
        }
    }

    /// The move returned by the most recent [`Strategy::next_move`].
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

impl Strategy for ReactiveStrategy {
    fn next_move(&mut self) -> Move {
        match self.last_move {
            Some(m) if self.last_result_was_win => m,
            _ => {
                // next_range(3) never leaves {0, 1, 2}
                let m = Move::from_rank(self.rng.next_range(3)).unwrap_or(Move::Rock);
                self.last_move = Some(m);
                m
            }
        }
    }

    fn adapt(&mut self, won: bool) {
        self.last_result_was_win = won;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Strategy;
    use proptest::prelude::*;

    #[test]
    fn test_first_move_is_drawn() {
        let mut strategy = ReactiveStrategy::new(314);
        let mut rng = SeededRng::new(314);

        assert_eq!(strategy.last_move(), None);
        let m = strategy.next_move();
        assert_eq!(m, Move::from_rank(rng.next_range(3)).unwrap());
        assert_eq!(strategy.last_move(), Some(m));
    }

    #[test]
    fn test_redraws_after_loss() {
        let mut strategy = ReactiveStrategy::new(15);
        strategy.next_move();
        strategy.adapt(false);

        let mut expected = strategy.rng.clone();
        assert_eq!(strategy.next_move(), Move::from_rank(expected.next_range(3)).unwrap());
    }

    #[test]
    fn test_stays_until_loss() {
        let mut strategy = ReactiveStrategy::new(99);
        let first = strategy.next_move();

        for _ in 0..10 {
            strategy.adapt(true);
            assert_eq!(strategy.next_move(), first);
        }

        // A win followed by a loss redraws from the source
        strategy.adapt(false);
        let mut expected = strategy.rng.clone();
        assert_eq!(strategy.next_move(), Move::from_rank(expected.next_range(3)).unwrap());
    }

    #[test]
    fn test_win_then_ties_keeps_move() {
        let mut strategy = ReactiveStrategy::new(314);
        let first = strategy.next_move();
        strategy.adapt(true);

        // Even rounds never reach adapt, so the win still stands
        for _ in 0..5 {
            assert_eq!(strategy.next_move(), first);
        }
    }

    #[test]
    fn test_without_feedback_keeps_drawing() {
        // No adapt calls at all (a run of ties) keeps drawing fresh moves
        let mut strategy = ReactiveStrategy::new(7);
        let mut rng = SeededRng::new(7);

        for _ in 0..50 {
            assert_eq!(strategy.next_move(), Move::from_rank(rng.next_range(3)).unwrap());
        }
    }

    proptest! {
        #[test]
        fn prop_win_repeats_previous_move(seed in any::<i64>(), outcomes in proptest::collection::vec(any::<bool>(), 0..32)) {
            let mut strategy = ReactiveStrategy::new(seed);
            for won in outcomes {
                strategy.next_move();
                strategy.adapt(won);
            }
            let previous = strategy.next_move();
            strategy.adapt(true);
            prop_assert_eq!(strategy.next_move(), previous);
        }
    }
}
