//! Headless bot-vs-bot simulation for checking seeded reproducibility and
//! game-loop termination.

use std::io;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{init_logging, Combatant, GameSession, RandomPlayer, BOARD_DIMENSION, FLEET_SIZES};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let rng = SmallRng::seed_from_u64(seed);
    let a = Combatant::new("Bot A", BOARD_DIMENSION, Box::new(RandomPlayer::new()));
    let b = Combatant::new("Bot B", BOARD_DIMENSION, Box::new(RandomPlayer::new()));

    let mut session = GameSession::new(a, b, FLEET_SIZES.to_vec(), rng, io::sink());
    let winner = session.run()?;
    println!("seed {}: {:?} wins", seed, winner);
    Ok(())
}
