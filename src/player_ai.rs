//! Uniform-random coordinate source for the computer side.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::grid::{Grid, Orientation};
use crate::player::Player;

/// Computer player that places and targets uniformly at random.
#[derive(Debug, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomPlayer {
    /// Samples row, col and orientation uniformly until each placement
    /// succeeds. There is no retry bound: termination is probabilistic,
    /// which holds up fine for the fixed fleet on a 10x10 grid but is not
    /// guaranteed for arbitrary board/fleet combinations.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        sizes: &[usize],
    ) -> anyhow::Result<()> {
        let dim = grid.dimension();
        for &size in sizes {
            loop {
                let row = rng.random_range(0..dim);
                let col = rng.random_range(0..dim);
                let orientation = if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                };
                if grid.place_unit(row, col, size, orientation).is_ok() {
                    log::debug!(
                        "random placement: size {} at ({}, {}) {:?}",
                        size,
                        row,
                        col,
                        orientation
                    );
                    break;
                }
            }
        }
        Ok(())
    }

    fn next_target(&mut self, rng: &mut SmallRng, dimension: usize) -> anyhow::Result<(i32, i32)> {
        Ok((
            rng.random_range(0..dimension) as i32,
            rng.random_range(0..dimension) as i32,
        ))
    }
}
