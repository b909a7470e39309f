// crates/thorview-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "thorview")]
#[command(about = "Othello game archive browser: position search, openings, game replay", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show header fields, record counts and checksums of archive files
    Inspect(cmd::inspect::InspectArgs),

    /// Find archived games through a position and summarise their next moves
    Query(cmd::query::QueryArgs),

    /// Print one archived game, replayed
    Game(cmd::game::GameArgs),

    /// Name the opening of a move list
    Classify(cmd::classify::ClassifyArgs),
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Query(args) => cmd::query::run(args),
        Commands::Game(args) => cmd::game::run(args),
        Commands::Classify(args) => cmd::classify::run(args),
    }
}
