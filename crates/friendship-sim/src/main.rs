//! Passive Friendship Simulator
//!
//! Plays a village scenario for a number of days and writes every friendship
//! grant to a JSONL log.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use friendship_core::{GrantLog, ModConfig};
use friendship_sim::{default_scenario, Scenario, Simulation};

/// Command line arguments for the simulator
#[derive(Parser, Debug)]
#[command(name = "friendship_sim")]
#[command(about = "Runs the passive friendship engine against a simulated village")]
struct Args {
    /// Scenario file (TOML); the built-in village is used when omitted
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Settings file; created with defaults if missing
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of days to simulate (overrides the scenario)
    #[arg(long)]
    days: Option<u32>,

    /// Random seed (overrides the scenario)
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the grant log
    #[arg(long, default_value = "output/grants.jsonl")]
    grants_out: PathBuf,

    /// Log every grant to the console
    #[arg(long)]
    notify: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut scenario = match &args.scenario {
        Some(path) => match Scenario::from_file(path) {
            Ok(scenario) => scenario,
            Err(e) => {
                tracing::error!("Failed to load scenario {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => default_scenario(),
    };
    if let Some(days) = args.days {
        scenario.days = days;
    }
    if let Some(seed) = args.seed {
        scenario.seed = seed;
    }

    let mut settings = match ModConfig::read_or_create(&args.config) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Using default settings, {} unreadable: {}", args.config.display(), e);
            ModConfig::default()
        }
    };
    if args.notify {
        settings.notify_about_friendship_in_console = true;
    }

    if let Some(parent) = args.grants_out.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            tracing::warn!("Could not create {}: {}", parent.display(), e);
        }
    }
    let grant_log = match GrantLog::new(&args.grants_out) {
        Ok(log) => log,
        Err(e) => {
            tracing::warn!("Grant log disabled, {} unwritable: {}", args.grants_out.display(), e);
            GrantLog::null()
        }
    };

    println!("Passive Friendship Simulator");
    println!("============================");
    println!("Seed: {}", scenario.seed);
    println!("Days: {}", scenario.days);

    let days = scenario.days;
    let mut sim = Simulation::new(scenario, settings, grant_log);
    let spawned = sim.spawned();
    println!(
        "Spawned {} villagers ({} tracked) across {} locations",
        spawned.villagers, spawned.tracked, spawned.locations
    );
    let config = sim.friendship().config();
    println!(
        "Radius {}, interval {} ticks, {} point(s) per interval",
        config.radius, config.interval_length, config.points_per_interval
    );
    println!();

    let summary = sim.run(days);

    println!(
        "Ran {} days ({} ticks, {} interval boundaries), {} grants",
        summary.days, summary.ticks, summary.boundaries, summary.grants
    );
    for (kind, count) in &summary.failures {
        println!("  {:?}: {}", kind, count);
    }
    println!();
    println!("Final relationships:");
    for (name, record) in &summary.final_points {
        println!(
            "  {:<12} {:>5} points ({} hearts, {:?})",
            name,
            record.points,
            record.hearts(),
            record.status
        );
    }
    println!();
    println!("Grant log: {}", args.grants_out.display());

    ExitCode::SUCCESS
}
