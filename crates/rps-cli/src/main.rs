//! Tournament driver
//!
//! Plays two seeded players against each other and streams the
//! round-by-round standings to stdout.

use anyhow::Result;
use clap::Parser;
use rps_engine::{
    parse_seed, summarize_match, PlayerConfig, RoundResult, StrategyKind, Tournament, TournamentConfig,
};
use std::io::{self, BufWriter, Write};

#[derive(Parser, Debug)]
#[command(name = "rps-tournament")]
#[command(about = "Run a repeated Rock-Paper-Scissors tournament between two strategies", long_about = None)]
#[command(after_help = "Example: rps-tournament 314 15")]
struct Cli {
    /// Seed for player A's strategy
    #[arg(value_parser = parse_seed, allow_negative_numbers = true)]
    seed_a: i64,

    /// Seed for player B's strategy
    #[arg(value_parser = parse_seed, allow_negative_numbers = true)]
    seed_b: i64,

    /// Number of rounds to play
    #[arg(long, default_value_t = TournamentConfig::standard().rounds)]
    rounds: u32,

    /// Strategy for player A (reactive | probe)
    #[arg(long, default_value_t = StrategyKind::Reactive)]
    strategy_a: StrategyKind,

    /// Strategy for player B (reactive | probe)
    #[arg(long, default_value_t = StrategyKind::Reactive)]
    strategy_b: StrategyKind,

    /// Name of player A
    #[arg(long, default_value = "KIM")]
    name_a: String,

    /// Name of player B
    #[arg(long, default_value = "LEE")]
    name_b: String,

    /// Only print the final standings
    #[arg(long, default_value = "false")]
    quiet: bool,

    /// Print the final summary as JSON instead of the progress stream
    #[arg(long, default_value = "false")]
    json: bool,
}

impl Cli {
    fn configs(&self) -> (TournamentConfig, PlayerConfig, PlayerConfig) {
        (
            TournamentConfig::with_rounds(self.rounds),
            PlayerConfig::new(self.name_a.clone(), self.strategy_a, self.seed_a),
            PlayerConfig::new(self.name_b.clone(), self.strategy_b, self.seed_b),
        )
    }
}

fn print_round(out: &mut impl Write, round: &RoundResult) -> io::Result<()> {
    match round.winner() {
        Some(winner) => writeln!(out, "Winner: {}", winner)?,
        None => writeln!(out, "Even...")?,
    }
    writeln!(out, "Total result:")?;
    writeln!(out, "{}", round.player_a)?;
    writeln!(out, "{}", round.player_b)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("{:?}", cli);

    let (config, a, b) = cli.configs();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.json {
        let summary = summarize_match(&config, &a, &b);
        serde_json::to_writer_pretty(&mut out, &summary)?;
        writeln!(out)?;
        return Ok(out.flush()?);
    }

    let mut tournament = Tournament::from_configs(config, &a, &b);
    let mut failure = None;
    tournament.run(|round| {
        if cli.quiet || failure.is_some() {
            return;
        }
        let written = print_round(&mut out, round);
        if let Err(e) = written {
            failure = Some(e);
        }
    });
    if let Some(e) = failure {
        return Err(e.into());
    }

    if cli.quiet {
        writeln!(out, "Total result:")?;
        writeln!(out, "{}", tournament.player_a().describe())?;
        writeln!(out, "{}", tournament.player_b().describe())?;
    }
    Ok(out.flush()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_seeds() {
        let cli = Cli::try_parse_from(["rps-tournament", "314", "15"]).unwrap();
        assert_eq!(cli.seed_a, 314);
        assert_eq!(cli.seed_b, 15);
        assert_eq!(cli.rounds, 10_000);
        assert_eq!(cli.strategy_a, StrategyKind::Reactive);
        assert_eq!(cli.name_b, "LEE");
        assert!(!cli.quiet && !cli.json);
    }

    #[test]
    fn test_requires_exactly_two_seeds() {
        assert!(Cli::try_parse_from(["rps-tournament"]).is_err());
        assert!(Cli::try_parse_from(["rps-tournament", "314"]).is_err());
        assert!(Cli::try_parse_from(["rps-tournament", "314", "15", "9"]).is_err());
    }

    #[test]
    fn test_rejects_malformed_seed() {
        let err = Cli::try_parse_from(["rps-tournament", "314", "fifteen"]).unwrap_err();
        assert!(err.to_string().contains("invalid seed argument"));
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "rps-tournament",
            "-5",
            "15",
            "--rounds",
            "20",
            "--strategy-a",
            "probe",
            "--name-a",
            "PARK",
            "--quiet",
        ])
        .unwrap();
        let (config, a, b) = cli.configs();

        assert_eq!(config.rounds, 20);
        assert_eq!(a, PlayerConfig::new("PARK", StrategyKind::Probe, -5));
        assert_eq!(b, PlayerConfig::new("LEE", StrategyKind::Reactive, 15));
        assert!(cli.quiet);
    }

    #[test]
    fn test_unknown_strategy() {
        assert!(Cli::try_parse_from(["rps-tournament", "1", "2", "--strategy-b", "winning"]).is_err());
    }

    #[test]
    fn test_print_round() {
        let (config, a, b) = Cli::try_parse_from(["rps-tournament", "314", "15", "--rounds", "1"])
            .unwrap()
            .configs();
        let mut tournament = Tournament::from_configs(config, &a, &b);
        let round = tournament.play_round();

        let mut buf = Vec::new();
        print_round(&mut buf, &round).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0] == "Even..." || lines[0].starts_with("Winner: ["));
        assert_eq!(lines[1], "Total result:");
        assert!(lines[2].starts_with("[KIM: 1 games, "));
        assert!(lines[3].starts_with("[LEE: 1 games, "));
    }
}
