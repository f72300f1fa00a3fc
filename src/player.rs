//! Player trait and the combatant composition.
//!
//! A combatant pairs a display name with an owned [`Grid`] and a boxed
//! coordinate source. The source never sees the opposing grid; the game
//! session mediates every shot.

use rand::rngs::SmallRng;

use crate::grid::Grid;

/// Capability implemented by both coordinate sources: produce a legal
/// fleet placement and targets to fire at.
pub trait Player {
    /// Place the full fleet onto `grid`, one size at a time in order,
    /// retrying each size until a legal placement is found.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        grid: &mut Grid,
        sizes: &[usize],
    ) -> anyhow::Result<()>;

    /// Blocking acquisition of the next target. The returned pair is raw:
    /// it may lie outside the grid, and the session validates it before
    /// firing. The interactive source only returns once a line parses as
    /// two integers; the random source is always in range by construction.
    fn next_target(&mut self, rng: &mut SmallRng, dimension: usize) -> anyhow::Result<(i32, i32)>;
}

/// One side of the game: a name, an owned grid, and a coordinate source.
pub struct Combatant {
    name: String,
    grid: Grid,
    player: Box<dyn Player>,
}

impl Combatant {
    pub fn new(name: &str, dimension: usize, player: Box<dyn Player>) -> Self {
        Combatant {
            name: name.to_string(),
            grid: Grid::new(dimension),
            player,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player_mut(&mut self) -> &mut dyn Player {
        self.player.as_mut()
    }

    /// Run this combatant's placement strategy against its own grid.
    pub fn place_fleet(&mut self, rng: &mut SmallRng, sizes: &[usize]) -> anyhow::Result<()> {
        self.player.place_fleet(rng, &mut self.grid, sizes)
    }

    /// Check a raw target against this combatant's grid bounds without
    /// mutating anything.
    pub fn validate_target(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        self.grid.checked_coord(row, col)
    }
}
