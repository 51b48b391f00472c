//! WASM bindings for browser tournament replay

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{describe_strategy, run_match, summarize_match, PlayerConfig, StrategyKind, TournamentConfig};

fn parse_kind(name: &str, player: &str) -> Result<StrategyKind, JsError> {
    name.parse::<StrategyKind>()
        .map_err(|e| JsError::new(&format!("Invalid strategy {}: {}", player, e)))
}

fn player_configs(
    strategy_a: &str,
    strategy_b: &str,
    seed_a: i64,
    seed_b: i64,
) -> Result<(PlayerConfig, PlayerConfig), JsError> {
    let a = PlayerConfig::new("KIM", parse_kind(strategy_a, "A")?, seed_a);
    let b = PlayerConfig::new("LEE", parse_kind(strategy_b, "B")?, seed_b);
    Ok((a, b))
}

/// Replay a tournament with full round-by-round details
///
/// # Arguments
/// * `strategy_a` - Strategy name for player A (`"reactive"` or `"probe"`)
/// * `strategy_b` - Strategy name for player B
/// * `seed_a` - Player A's seed
/// * `seed_b` - Player B's seed
/// * `rounds` - Number of rounds to play
///
/// # Returns
/// Serialized MatchResult
#[wasm_bindgen]
pub fn replay_tournament(
    strategy_a: &str,
    strategy_b: &str,
    seed_a: i64,
    seed_b: i64,
    rounds: u32,
) -> Result<JsValue, JsError> {
    let (a, b) = player_configs(strategy_a, strategy_b, seed_a, seed_b)?;
    let result = run_match(&TournamentConfig::with_rounds(rounds), &a, &b);

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Final standings only, as a JSON string
#[wasm_bindgen]
pub fn summarize_tournament(
    strategy_a: &str,
    strategy_b: &str,
    seed_a: i64,
    seed_b: i64,
    rounds: u32,
) -> Result<String, JsError> {
    let (a, b) = player_configs(strategy_a, strategy_b, seed_a, seed_b)?;
    let summary = summarize_match(&TournamentConfig::with_rounds(rounds), &a, &b);

    serde_json::to_string(&summary)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Get human-readable description of a strategy
#[wasm_bindgen]
pub fn get_strategy_description(name: &str) -> Result<String, JsError> {
    let kind = parse_kind(name, "name")?;
    Ok(describe_strategy(kind).to_string())
}

#[derive(serde::Serialize)]
struct StrategyInfo {
    id: String,
    name: String,
    description: String,
}

/// Get all registered strategy types
#[wasm_bindgen]
pub fn get_strategy_types() -> Result<JsValue, JsError> {
    let types: Vec<StrategyInfo> = StrategyKind::ALL
        .into_iter()
        .map(|kind| StrategyInfo {
            id: kind.as_str().to_string(),
            name: match kind {
                StrategyKind::Reactive => "Win-Stay Lose-Shift".to_string(),
                StrategyKind::Probe => "Probe".to_string(),
            },
            description: describe_strategy(kind).to_string(),
        })
        .collect();

    serde_wasm_bindgen::to_value(&types)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
