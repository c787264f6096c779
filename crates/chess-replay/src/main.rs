//! Chess Replay - plays a TOML game script and reports the final status.

use anyhow::Context;
use chess_replay::replay::replay;
use chess_replay::script::GameScript;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

/// Chess Replay - plays a scripted game and reports how it ended.
#[derive(Parser)]
#[command(name = "chess-replay")]
#[command(about = "Replays a game script through the rules engine")]
struct Args {
    /// Path to the TOML game script
    script: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let script = GameScript::load(&args.script)
        .with_context(|| format!("loading {}", args.script.display()))?;
    let (_, report) = replay(&script).with_context(|| format!("replaying {}", script.name))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
