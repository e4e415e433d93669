use clap::Parser;
use color_eyre::eyre::WrapErr;
use database::RosterLoader;
use env_logger::Env;
use log::info;
use match_core::{MatchSettings, MatchSimulator};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tactical_match", about = "Simulates a 90 minute match between two CSV rosters")]
struct Args {
    /// Home team roster (columns: name, position, endurance)
    home: PathBuf,

    /// Away team roster
    away: PathBuf,

    /// Seed for a reproducible match; drawn at random when omitted
    #[arg(long, env = "MATCH_SEED")]
    seed: Option<u64>,

    /// JSON file overriding match settings
    #[arg(long, env = "MATCH_SETTINGS")]
    settings: Option<PathBuf>,

    /// Print the full result as JSON instead of the match report
    #[arg(long)]
    json: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("cannot read settings {}", path.display()))?;
            MatchSettings::from_json(&json)?
        }
        None => MatchSettings::default(),
    };

    let home = RosterLoader::load(&args.home)?;
    let away = RosterLoader::load(&args.away)?;

    let seed = args.seed.unwrap_or_else(rand::random);

    info!("match seed: {}", seed);

    let simulator = MatchSimulator::from_rosters(
        (&home.team_name, &home.players),
        (&away.team_name, &away.players),
        settings,
        ChaCha8Rng::seed_from_u64(seed),
    )?;

    let result = simulator.simulate();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    for line in &result.log {
        println!("{}", line);
    }

    println!();
    println!("FINAL SCORE: {}", result.score_line());

    match result.winner() {
        Some(team) => println!("Winner: {}", team.name()),
        None => println!("Draw"),
    }

    println!();
    println!("KEY EVENTS:");

    for event in &result.key_events {
        println!("  {}", event);
    }

    Ok(())
}
