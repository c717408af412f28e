//! td-tictactoe CLI - self-play TD learning for Tic-Tac-Toe

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td-tictactoe")]
#[command(version, about = "Self-play temporal difference learning for Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train two agents by self-play and replay the final greedy match
    Train(td_tictactoe::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => td_tictactoe::cli::commands::train::execute(args),
    }
}
