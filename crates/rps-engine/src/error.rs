//! Engine error codes

/// Errors surfaced by the strategy engine.
///
/// None of these occur once a tournament is running; they are raised while
/// decoding input (ranks, seed text, strategy names) before any round is played.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A move rank outside {0, 1, 2}.
    #[error("invalid move rank {0} (expected 0, 1 or 2)")]
    InvalidRank(u32),

    /// Seed text that is not a well-formed integer.
    #[error("invalid seed argument {0:?}: expected an integer")]
    InvalidSeedArgument(String),

    /// Strategy name with no registered implementation.
    #[error("unknown strategy {0:?} (expected \"reactive\" or \"probe\")")]
    UnknownStrategy(String),
}

/// Parse a player seed from its textual form.
pub fn parse_seed(text: &str) -> Result<i64, EngineError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| EngineError::InvalidSeedArgument(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed("314"), Ok(314));
        assert_eq!(parse_seed(" 15 "), Ok(15));
        assert_eq!(parse_seed("-7"), Ok(-7));
    }

    #[test]
    fn test_parse_seed_rejects_garbage() {
        for text in ["", "abc", "3.14", "12x", "99999999999999999999"] {
            assert_eq!(
                parse_seed(text),
                Err(EngineError::InvalidSeedArgument(text.to_string())),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::InvalidRank(3).to_string(),
            "invalid move rank 3 (expected 0, 1 or 2)"
        );
        assert!(EngineError::UnknownStrategy("nope".into())
            .to_string()
            .contains("\"nope\""));
    }
}
