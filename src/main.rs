use clap::Parser;
use seabattle::{init_logging, Board, PlacementAgent, TargetingAgent, DEFAULT_BOARD_SIZE};

/// Drive one simulated game: deploy a random fleet, then bombard it.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board dimension N for an N x N grid.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: u32,

    /// Number of ships the placement agent attempts to deploy.
    #[arg(long, default_value_t = 5)]
    ships: u32,

    /// Number of shots the targeting agent fires.
    #[arg(long, default_value_t = 20)]
    shots: u32,

    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut board = Board::new(cli.size, &[])?;

    let deployed = {
        let mut placer = PlacementAgent::new(&mut board, cli.seed);
        placer.deploy(cli.ships)
    };
    println!("deployed {deployed} of {} ships", cli.ships);
    print!("{board}");

    let mut gunner = TargetingAgent::new(&mut board, cli.seed);
    gunner.fire(cli.shots)?;
    let hits = gunner.shots().iter().filter(|shot| shot.hit).count();
    println!("fired {} shots, {hits} hits", cli.shots);
    print!("{board}");

    Ok(())
}
