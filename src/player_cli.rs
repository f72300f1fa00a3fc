//! Interactive coordinate source reading line-oriented text input.
//!
//! The reader and writer are injected so tests can script a whole game;
//! the binary wires them to stdin/stdout.

use std::io::{BufRead, Write};

use anyhow::bail;
use rand::rngs::SmallRng;

use crate::grid::{Grid, Orientation};
use crate::player::Player;

/// Parse a target line: exactly two whitespace-separated base-10 integers.
pub fn parse_target(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Parse an orientation line: a leading `y` (case-insensitive) means
/// horizontal, anything else vertical.
pub fn parse_orientation(line: &str) -> Orientation {
    match line.trim().chars().next() {
        Some(c) if c.eq_ignore_ascii_case(&'y') => Orientation::Horizontal,
        _ => Orientation::Vertical,
    }
}

/// Human player driven by a line-oriented reader/writer pair.
pub struct HumanPlayer<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, out: W) -> Self {
        HumanPlayer { input, out }
    }

    fn read_line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        if n == 0 {
            bail!("input stream closed");
        }
        Ok(line)
    }

    /// Prompt until a line parses as two integers. Malformed input is
    /// reported and retried here; range checking happens at the caller.
    fn read_target(&mut self) -> anyhow::Result<(i32, i32)> {
        loop {
            write!(self.out, "Enter target coordinates (row col, e.g. 1 2): ")?;
            self.out.flush()?;
            let line = self.read_line()?;
            match parse_target(&line) {
                Some(target) => return Ok(target),
                None => writeln!(self.out, "Invalid input format. Try again.")?,
            }
        }
    }

    fn read_orientation(&mut self) -> anyhow::Result<Orientation> {
        write!(self.out, "Horizontal? (y/n): ")?;
        self.out.flush()?;
        let line = self.read_line()?;
        Ok(parse_orientation(&line))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn place_fleet(
        &mut self,
        _rng: &mut SmallRng,
        grid: &mut Grid,
        sizes: &[usize],
    ) -> anyhow::Result<()> {
        writeln!(self.out, "Place your units on the grid:")?;
        writeln!(self.out, "{}", grid.render(false))?;
        for &size in sizes {
            loop {
                writeln!(self.out, "Place a unit of length {}.", size)?;
                let (row, col) = self.read_target()?;
                let orientation = self.read_orientation()?;
                let (row, col) = match grid.checked_coord(row, col) {
                    Some(coord) => coord,
                    None => {
                        writeln!(self.out, "Invalid coordinates. Try again.")?;
                        continue;
                    }
                };
                match grid.place_unit(row, col, size, orientation) {
                    Ok(()) => {
                        writeln!(self.out, "{}", grid.render(false))?;
                        break;
                    }
                    Err(e) => writeln!(self.out, "Cannot place the unit here: {}. Try again.", e)?,
                }
            }
        }
        writeln!(self.out, "All units are in position!")?;
        Ok(())
    }

    fn next_target(
        &mut self,
        _rng: &mut SmallRng,
        _dimension: usize,
    ) -> anyhow::Result<(i32, i32)> {
        self.read_target()
    }
}
