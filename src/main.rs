use std::io;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, Combatant, GameSession, HumanPlayer, RandomPlayer, BOARD_DIMENSION, FLEET_SIZES,
};

#[derive(Parser)]
#[command(author, version, about = "Turn-based Sea Battle against a random bot")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let human = HumanPlayer::new(io::stdin().lock(), io::stdout());
    let player = Combatant::new("Player", BOARD_DIMENSION, Box::new(human));
    let bot = Combatant::new("Bot", BOARD_DIMENSION, Box::new(RandomPlayer::new()));

    let mut session = GameSession::new(player, bot, FLEET_SIZES.to_vec(), rng, io::stdout());
    session.run()?;
    Ok(())
}
