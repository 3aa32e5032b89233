//! Headless Combat Runner
//!
//! Runs a CPU vs CPU match and prints the match report.

use std::path::PathBuf;

use badman_kombat::core::config::CombatConfig;
use badman_kombat::core::error::Result;
use badman_kombat::duel::{play_cpu_match, CombatEvent, CpuController, Duel, MatchReport};
use badman_kombat::moves::{FrameDataTable, Roster};
use clap::Parser;
use serde::Serialize;

/// Headless Combat Runner - CPU vs CPU matches
#[derive(Parser, Debug)]
#[command(name = "combat_runner")]
#[command(about = "Run a CPU vs CPU match and output the match report")]
struct Args {
    /// Player one fighter name
    #[arg(long, default_value = "BadMan")]
    p1: String,

    /// Player two fighter name
    #[arg(long, default_value = "Jester")]
    p2: String,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds needed to win the match (overrides the config)
    #[arg(long)]
    rounds: Option<u8>,

    /// Combat config TOML (defaults to built-in values)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster TOML (defaults to the built-in roster)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Frame data TOML (defaults to the built-in table)
    #[arg(long)]
    frame_data: Option<PathBuf>,

    /// Maximum frames before the match is abandoned
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_frames: u64,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Print every combat event to stderr and enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunResult {
    seed: u64,
    report: MatchReport,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose {
        "badman_kombat=debug"
    } else {
        "badman_kombat=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);

    let mut config = match &args.config {
        Some(path) => CombatConfig::load_from_toml(path)?,
        None => CombatConfig::default(),
    };
    if let Some(rounds) = args.rounds {
        config.rounds_to_win = rounds;
    }

    let roster = match &args.roster {
        Some(path) => Roster::load_from_toml(path)?,
        None => Roster::builtin()?,
    };
    let frame_data = match &args.frame_data {
        Some(path) => FrameDataTable::load_from_toml(path)?,
        None => FrameDataTable::builtin()?,
    };

    let movesets = [
        roster.require(&args.p1)?.clone(),
        roster.require(&args.p2)?.clone(),
    ];
    let mut duel = Duel::new(config, frame_data, movesets)?;
    let mut cpus = [
        CpuController::new(seed),
        CpuController::new(seed.wrapping_add(1)),
    ];

    let events = play_cpu_match(&mut duel, &mut cpus, args.max_frames);

    if args.verbose {
        for event in &events {
            log_event(event);
        }
    }

    let result = RunResult {
        seed,
        report: duel.report(),
    };

    match args.format.as_str() {
        "text" => print_text(&result),
        "json" => print_json(&result)?,
        other => {
            eprintln!("Unknown format '{}', defaulting to json", other);
            print_json(&result)?;
        }
    }

    Ok(())
}

fn print_json(result: &RunResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_text(result: &RunResult) {
    let report = &result.report;
    println!("Match Result");
    println!("============");
    println!("{}", report.summary());
    println!();
    for round in &report.rounds {
        let winner = round
            .winner
            .map(|slot| report.fighters[slot.index()].as_str())
            .unwrap_or("draw");
        println!(
            "Round {}: {} ({:?}, {} frames)",
            round.round, winner, round.reason, round.frames
        );
    }
    println!();
    for (name, stats) in report.fighters.iter().zip(&report.stats) {
        println!(
            "{}: {} attacks, {} hits ({:.0}%), {} blocked, {} specials, {} supers, {} damage, max combo {}",
            name,
            stats.attacks,
            stats.hits,
            stats.hit_rate() * 100.0,
            stats.blocked,
            stats.specials,
            stats.supers,
            stats.damage_dealt,
            stats.max_combo
        );
    }
    println!();
    println!("Seed: {}", result.seed);
}

fn log_event(event: &CombatEvent) {
    match serde_json::to_string(event) {
        Ok(line) => eprintln!("  [{}] {}", event.frame(), line),
        Err(e) => eprintln!("  [{}] {:?} ({})", event.frame(), event, e),
    }
}
