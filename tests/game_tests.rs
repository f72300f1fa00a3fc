use std::io::{self, Cursor};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Combatant, GameSession, HumanPlayer, RandomPlayer, TurnState, Winner, BOARD_DIMENSION,
    FLEET_SIZES,
};

fn scripted_human(script: String) -> Box<HumanPlayer<Cursor<String>, io::Sink>> {
    Box::new(HumanPlayer::new(Cursor::new(script), io::sink()))
}

/// Legal manual layout for the full fleet on a 10x10 grid, one unit per
/// line pair (coordinates, then orientation).
fn placement_script() -> String {
    let placements = [
        (0, 0),
        (0, 5),
        (2, 0),
        (2, 4),
        (2, 7),
        (4, 0),
        (4, 3),
        (4, 5),
        (4, 7),
        (4, 9),
    ];
    let mut script = String::new();
    for (r, c) in placements {
        script.push_str(&format!("{} {}\ny\n", r, c));
    }
    script
}

#[test]
fn scripted_full_game_terminates_with_one_winner() {
    // The player fires at every cell in row-major order, so the bot fleet
    // is gone after at most 100 player turns regardless of where the
    // seeded random placement put it.
    let mut script = placement_script();
    for r in 0..BOARD_DIMENSION {
        for c in 0..BOARD_DIMENSION {
            script.push_str(&format!("{} {}\n", r, c));
        }
    }

    let player = Combatant::new("Player", BOARD_DIMENSION, scripted_human(script));
    let bot = Combatant::new("Bot", BOARD_DIMENSION, Box::new(RandomPlayer::new()));
    let rng = SmallRng::seed_from_u64(99);

    let mut session = GameSession::new(player, bot, FLEET_SIZES.to_vec(), rng, io::sink());
    let winner = session.run().unwrap();

    assert_eq!(session.state(), TurnState::GameOver);
    let player_alive = session.player().grid().has_units_remaining();
    let bot_alive = session.bot().grid().has_units_remaining();
    assert_ne!(player_alive, bot_alive, "exactly one fleet must survive");
    match winner {
        Winner::Player => assert!(!bot_alive),
        Winner::Bot => assert!(!player_alive),
    }
}

#[test]
fn invalid_and_malformed_input_never_consumes_the_turn() {
    // 1x1 grid with a single-cell fleet: the bot's unit is forced onto
    // (0, 0). If any of the bad lines consumed the player's turn, the bot
    // would fire back at (0, 0) and win instead.
    let script = concat!(
        "0 0\n", // placement coordinates
        "y\n",   // placement orientation
        "not numbers\n",
        "0\n",
        "1 1\n",
        "-1 0\n",
        "0 0\n", // the real shot
    )
    .to_string();

    let player = Combatant::new("Player", 1, scripted_human(script));
    let bot = Combatant::new("Bot", 1, Box::new(RandomPlayer::new()));
    let rng = SmallRng::seed_from_u64(1);

    let mut session = GameSession::new(player, bot, vec![1], rng, io::sink());
    let winner = session.run().unwrap();

    assert_eq!(winner, Winner::Player);
    assert!(session.player().grid().has_units_remaining());
    assert!(!session.bot().grid().has_units_remaining());
}

#[test]
fn illegal_placement_retries_same_unit() {
    // 4x4 board, two single-cell units. The second unit first tries to
    // touch the first one, is rejected with the reason, and the same
    // fleet slot is retried until it lands legally. A 4x4 board always
    // leaves the bot a legal spot for its second unit.
    let mut script = String::from(concat!(
        "0 0\n", "y\n", // unit 1 at (0, 0)
        "1 0\n", "y\n", // rejected: touches unit 1
        "2 2\n", "y\n", // legal
    ));
    // fire at every cell so the player wins within 16 turns at the latest
    for r in 0..4 {
        for c in 0..4 {
            script.push_str(&format!("{} {}\n", r, c));
        }
    }

    let player = Combatant::new("Player", 4, scripted_human(script));
    let bot = Combatant::new("Bot", 4, Box::new(RandomPlayer::new()));
    let rng = SmallRng::seed_from_u64(5);

    let mut session = GameSession::new(player, bot, vec![1, 1], rng, io::sink());
    session.run().unwrap();

    // Both player units were placed despite the rejected attempt: two
    // cells are unit segments (occupied or hit), whatever the outcome.
    let segments = session
        .player()
        .grid()
        .cells()
        .iter()
        .filter(|&&c| c == seabattle::Cell::Occupied || c == seabattle::Cell::Hit)
        .count();
    assert_eq!(segments, 2);
}

#[test]
fn bot_vs_bot_game_terminates() {
    for seed in [3u64, 17, 42] {
        let a = Combatant::new("Bot A", BOARD_DIMENSION, Box::new(RandomPlayer::new()));
        let b = Combatant::new("Bot B", BOARD_DIMENSION, Box::new(RandomPlayer::new()));
        let rng = SmallRng::seed_from_u64(seed);

        let mut session = GameSession::new(a, b, FLEET_SIZES.to_vec(), rng, io::sink());
        session.run().unwrap();

        let a_alive = session.player().grid().has_units_remaining();
        let b_alive = session.bot().grid().has_units_remaining();
        assert_ne!(a_alive, b_alive, "seed {}", seed);
    }
}

#[test]
fn exhausted_input_surfaces_as_error() {
    let player = Combatant::new("Player", BOARD_DIMENSION, scripted_human(String::new()));
    let bot = Combatant::new("Bot", BOARD_DIMENSION, Box::new(RandomPlayer::new()));
    let rng = SmallRng::seed_from_u64(2);

    let mut session = GameSession::new(player, bot, FLEET_SIZES.to_vec(), rng, io::sink());
    assert!(session.run().is_err());
}
