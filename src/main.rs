use std::io;

use battleship::{init_logging, ConsoleApp};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Two-player hot-seat Battleship on the console", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible random placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Do not scroll the screen clear after pauses")]
    no_clear: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (random placement will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = io::stdin();
    let mut app = ConsoleApp::new(stdin.lock(), io::stdout(), rng).with_clear_screen(!cli.no_clear);
    app.run()
}
