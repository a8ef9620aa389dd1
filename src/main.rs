//! Mastermind - CLI
//!
//! Play Mastermind in the terminal, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{PlayOutcome, run_play, score_guess},
    config::{DEFAULT_MAX_ROUNDS, GameConfig},
    game::GameSession,
    output::print_score_result,
};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Crack a hidden code of 4 distinct colours (r, g, o, b, y, p)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of guesses before the game is lost
    #[arg(
        short = 'r',
        long,
        global = true,
        env = "MASTERMIND_MAX_ROUNDS",
        default_value_t = DEFAULT_MAX_ROUNDS
    )]
    max_rounds: u32,

    /// Seed for the secret code (reproducible games)
    #[arg(short, long, global = true, env = "MASTERMIND_SEED")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play,

    /// Score a guess against a known secret
    Score {
        /// The secret code, e.g. rgob
        secret: String,

        /// The guess to score, e.g. rogb
        guess: String,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.max_rounds, cli.seed),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

/// Log to stderr so diagnostics never mix with the game on stdout
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run_play_command(max_rounds: u32, seed: Option<u64>) -> Result<()> {
    let mut config = GameConfig::new(max_rounds);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut session = GameSession::new(&config).context("invalid game configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = run_play(&mut session, stdin.lock(), stdout.lock())
        .context("game loop failed")?;

    match outcome {
        PlayOutcome::Won { rounds } => info!(rounds, "player won"),
        PlayOutcome::Lost { .. } => info!("player lost"),
        PlayOutcome::Abandoned => info!("game abandoned"),
    }

    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_guess(secret, guess)
        .with_context(|| format!("cannot score guess '{guess}' against secret '{secret}'"))?;
    print_score_result(&result);
    Ok(())
}
