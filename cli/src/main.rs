use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use gridsweep_core::{BoardConfig, BoardEngine, RandomBombPlacer};
use rand::RngExt;

use session::GameSession;

mod io;
mod session;

/// Console minesweeper: uncover every safe cell without hitting a bomb.
#[derive(Debug, Parser)]
#[command(name = "gridsweep", version, about)]
struct GameArgs {
    /// Edge length of the square grid. Prompted for when omitted.
    #[arg(long)]
    size: Option<u8>,

    /// Number of bombs to hide. Prompted for when omitted.
    #[arg(long)]
    bombs: Option<u16>,

    /// Seed for bomb placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = GameArgs::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    println!("Welcome to gridsweep!");

    let grid_size = match args.size {
        Some(size) => size,
        None => io::prompt_number("Enter grid size: ")?,
    };
    let bombs = match args.bombs {
        Some(bombs) => bombs,
        None => io::prompt_number("Enter bombs number: ")?,
    };
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("placing {bombs} bombs on a {grid_size}x{grid_size} grid, seed {seed}");

    let config = BoardConfig::new(grid_size, bombs).context("board settings rejected")?;
    let engine =
        BoardEngine::new(config, RandomBombPlacer::new(seed)).context("bomb placement failed")?;

    GameSession::new(engine).play()
}
