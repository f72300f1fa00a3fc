//! The turn controller: placement, alternating turns, win detection.

use std::io::Write;

use log::{debug, info};
use rand::rngs::SmallRng;

use crate::common::FireResult;
use crate::player::Combatant;

/// Phases of the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Placement,
    PlayerTurn,
    BotTurn,
    GameOver,
}

/// Which side destroyed the opposing fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Bot,
}

/// One game between a player and a bot. Owns both combatants, the fleet
/// definition, and the random generator; narration goes to `out`.
pub struct GameSession<W: Write> {
    player: Combatant,
    bot: Combatant,
    fleet: Vec<usize>,
    rng: SmallRng,
    out: W,
    state: TurnState,
}

impl<W: Write> GameSession<W> {
    pub fn new(player: Combatant, bot: Combatant, fleet: Vec<usize>, rng: SmallRng, out: W) -> Self {
        GameSession {
            player,
            bot,
            fleet,
            rng,
            out,
            state: TurnState::Placement,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn player(&self) -> &Combatant {
        &self.player
    }

    pub fn bot(&self) -> &Combatant {
        &self.bot
    }

    /// Drive the state machine to completion and announce the winner.
    pub fn run(&mut self) -> anyhow::Result<Winner> {
        writeln!(self.out, "Welcome to Sea Battle!")?;
        loop {
            self.state = match self.state {
                TurnState::Placement => self.placement_phase()?,
                TurnState::PlayerTurn => self.player_turn()?,
                TurnState::BotTurn => self.bot_turn()?,
                TurnState::GameOver => break,
            };
        }

        let winner = if self.bot.grid().has_units_remaining() {
            Winner::Bot
        } else {
            Winner::Player
        };
        writeln!(self.out, "\nGame over!")?;
        match winner {
            Winner::Player => {
                writeln!(self.out, "Congratulations, {} wins!", self.player.name())?
            }
            Winner::Bot => writeln!(self.out, "{} wins.", self.bot.name())?,
        }
        Ok(winner)
    }

    fn placement_phase(&mut self) -> anyhow::Result<TurnState> {
        info!("placement phase: {}", self.player.name());
        self.player.place_fleet(&mut self.rng, &self.fleet)?;
        info!("placement phase: {}", self.bot.name());
        self.bot.place_fleet(&mut self.rng, &self.fleet)?;
        Ok(TurnState::PlayerTurn)
    }

    /// One player turn. Out-of-range coordinates are reported and the
    /// turn is retried without passing to the bot; only a resolved shot
    /// advances the alternation.
    fn player_turn(&mut self) -> anyhow::Result<TurnState> {
        writeln!(self.out, "\nYour turn:")?;
        writeln!(self.out, "{}", self.bot.grid().render(true))?;
        loop {
            let dimension = self.bot.grid().dimension();
            let (row, col) = self.player.player_mut().next_target(&mut self.rng, dimension)?;
            let (row, col) = match self.bot.validate_target(row, col) {
                Some(coord) => coord,
                None => {
                    writeln!(self.out, "Invalid coordinates. Try again.")?;
                    continue;
                }
            };
            let result = self.bot.grid_mut().fire(row, col)?;
            debug!("{} fires at ({}, {}): {:?}", self.player.name(), row, col, result);
            match result {
                FireResult::Hit => {
                    writeln!(self.out, "Hit!")?;
                    if self.bot.grid().is_unit_destroyed_at(row, col) {
                        writeln!(self.out, "Unit destroyed!")?;
                        self.bot.grid_mut().mark_sunk_perimeter(row, col);
                    }
                }
                FireResult::Miss => writeln!(self.out, "Miss.")?,
            }
            break;
        }
        if self.bot.grid().has_units_remaining() {
            Ok(TurnState::BotTurn)
        } else {
            Ok(TurnState::GameOver)
        }
    }

    /// One bot turn. Bot targets are in range by construction and never
    /// loop; an out-of-range bot target is a programming error.
    fn bot_turn(&mut self) -> anyhow::Result<TurnState> {
        writeln!(self.out, "\n{}'s turn:", self.bot.name())?;
        let dimension = self.player.grid().dimension();
        let (row, col) = self.bot.player_mut().next_target(&mut self.rng, dimension)?;
        let (row, col) = self.player.validate_target(row, col).ok_or_else(|| {
            anyhow::anyhow!(
                "{} produced an out-of-range target ({}, {})",
                self.bot.name(),
                row,
                col
            )
        })?;
        writeln!(self.out, "{} fires at {} {}.", self.bot.name(), row, col)?;
        let result = self.player.grid_mut().fire(row, col)?;
        debug!("{} fires at ({}, {}): {:?}", self.bot.name(), row, col, result);
        match result {
            FireResult::Hit => {
                writeln!(self.out, "{} scores a hit!", self.bot.name())?;
                if self.player.grid().is_unit_destroyed_at(row, col) {
                    writeln!(self.out, "Your unit is destroyed!")?;
                    self.player.grid_mut().mark_sunk_perimeter(row, col);
                }
            }
            FireResult::Miss => writeln!(self.out, "{} misses.", self.bot.name())?,
        }
        writeln!(self.out, "{}", self.player.grid().render(false))?;
        if self.player.grid().has_units_remaining() {
            Ok(TurnState::PlayerTurn)
        } else {
            Ok(TurnState::GameOver)
        }
    }
}
