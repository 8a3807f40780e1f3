//! Tic-tac-toe - terminal front end for the minimax engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod cli;
mod config;
mod orchestrator;
mod players;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, ContestantKind};
use config::GameConfig;
use orchestrator::{Orchestrator, Tally};
use players::{Contestant, EnginePlayer, HumanPlayer, RandomPlayer};
use tictactoe_minimax::{Board, Player};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// Filter in effect until the config file has been read.
const BOOTSTRAP_LOG_FILTER: &str = "warn";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let log_filter = init_tracing();
    let config = GameConfig::load(&cli.config)?;
    apply_config_filter(&log_filter, config.log_filter())?;

    match cli.command {
        Command::Play { human } => run_play(&config, human.unwrap_or(*config.human_mark())),
        Command::Bout { x, o, games } => run_bout(&config, x, o, games.unwrap_or(*config.games())),
        Command::Best { board, json } => run_best(&board, json),
    }
}

/// Installs the fmt subscriber on stderr before any other work, so config
/// loading is logged too. The returned handle swaps the filter later.
fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
    let (filter, handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(BOOTSTRAP_LOG_FILTER)),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
    handle
}

/// Applies the config's filter; `RUST_LOG` wins when set.
fn apply_config_filter(handle: &reload::Handle<EnvFilter, Registry>, config_filter: &str) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        handle
            .reload(EnvFilter::new(config_filter))
            .context("Could not apply log filter from config")?;
    }
    Ok(())
}

/// Interactive game: the human on stdin/stdout against the engine.
#[instrument(skip(config))]
fn run_play(config: &GameConfig, human: Player) -> Result<()> {
    info!("Starting interactive game");

    let person: Box<dyn Contestant> =
        Box::new(HumanPlayer::new("You", std::io::stdin().lock(), std::io::stdout()));
    let engine: Box<dyn Contestant> = Box::new(EnginePlayer::new("Engine"));
    let (player_x, player_o) = match human {
        Player::X => (person, engine),
        Player::O => (engine, person),
    };

    let mut orchestrator =
        Orchestrator::new(player_x, player_o).with_show_values(*config.show_values());
    let record = orchestrator.run(&mut std::io::stdout())?;
    info!(outcome = %record.outcome(), "Interactive game finished");
    Ok(())
}

fn contestant(kind: ContestantKind, mark: Player) -> Box<dyn Contestant> {
    match kind {
        ContestantKind::Engine => Box::new(EnginePlayer::new(format!("Engine {}", mark))),
        ContestantKind::Random => {
            Box::new(RandomPlayer::new(format!("Random {}", mark), rand::thread_rng()))
        }
    }
}

/// Automated games between two computer contestants.
#[instrument(skip(config))]
fn run_bout(config: &GameConfig, x: ContestantKind, o: ContestantKind, games: usize) -> Result<()> {
    let mut tally = Tally::default();
    for game in 1..=games {
        let mut orchestrator = Orchestrator::new(contestant(x, Player::X), contestant(o, Player::O))
            .with_show_values(*config.show_values());
        let record = orchestrator.run(&mut std::io::sink())?;
        info!(game, outcome = %record.outcome(), board = %record.final_board(), "Bout game finished");
        println!("Game {}: {} ({})", game, record.outcome(), record.final_board());
        tally.record(*record.outcome());
    }
    println!("{}", tally);
    Ok(())
}

/// Best move and value for a single position.
#[instrument]
fn run_best(notation: &str, json: bool) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Could not parse board {:?}", notation))?;
    let report = analysis::analyze(&board)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
