//! The per-combatant grid: cell states, placement and firing logic.
//!
//! Cells are stored in a flat row-major buffer indexed by
//! `row * dimension + col`. Units are not tracked as separate entities;
//! a unit is whatever maximal straight run of [`Cell::Occupied`] /
//! [`Cell::Hit`] cells the placement phase produced.

use core::fmt;

use crate::common::{FireResult, GridError};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, never fired at.
    Empty,
    /// Unguessed unit segment.
    Occupied,
    /// Guessed unit segment.
    Hit,
    /// Guessed empty cell.
    Miss,
}

impl Cell {
    /// Glyph used when rendering the grid.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '~',
            Cell::Occupied => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// Orientation of a unit on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A square grid of cell states owned by one combatant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid. `dimension` must be at least 1.
    pub fn new(dimension: usize) -> Self {
        debug_assert!(dimension >= 1);
        Grid {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        }
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Row-major view of the cell buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Set every cell back to [`Cell::Empty`].
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// State of the cell at (row, col), or `None` when out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.dimension && col < self.dimension {
            Some(self.cells[row * self.dimension + col])
        } else {
            None
        }
    }

    /// Convert raw parsed coordinates into in-bounds indices.
    pub fn checked_coord(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        if row >= 0
            && col >= 0
            && (row as usize) < self.dimension
            && (col as usize) < self.dimension
        {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// True iff (row, col) is in bounds and empty.
    pub fn can_place(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Cell::Empty)
    }

    /// True iff no in-bounds cell of the 3x3 neighborhood around (row, col)
    /// holds a unit segment. Used only at placement time.
    pub fn is_zone_safe(&self, row: usize, col: usize) -> bool {
        self.neighborhood_clear_of(row, col, Cell::Occupied)
    }

    /// True iff no in-bounds cell of the 3x3 neighborhood around (row, col)
    /// holds an unguessed segment. Called right after a hit at (row, col);
    /// because units are straight lines, the last segment of a destroyed
    /// unit has no `Occupied` neighbor once the rest are `Hit`, so this
    /// local scan is a sufficient destruction test.
    pub fn is_unit_destroyed_at(&self, row: usize, col: usize) -> bool {
        self.neighborhood_clear_of(row, col, Cell::Occupied)
    }

    /// Scan the 3x3 neighborhood of (row, col), including the center, and
    /// report whether every in-bounds cell differs from `state`.
    fn neighborhood_clear_of(&self, row: usize, col: usize, state: Cell) -> bool {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if let Some((r, c)) = self.checked_coord(row as i32 + dr, col as i32 + dc) {
                    if self.cells[r * self.dimension + c] == state {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Place a contiguous run of `size` cells starting at (row, col),
    /// extending along columns when horizontal, rows when vertical.
    ///
    /// The whole run is validated before any cell is written: a failed
    /// placement leaves the grid unchanged.
    pub fn place_unit(
        &mut self,
        row: usize,
        col: usize,
        size: usize,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        let run: Vec<(usize, usize)> = (0..size)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();

        for &(r, c) in &run {
            if !self.can_place(r, c) {
                return if r < self.dimension && c < self.dimension {
                    Err(GridError::CellOccupied { row: r, col: c })
                } else {
                    Err(GridError::OutOfBounds { row: r, col: c })
                };
            }
            if !self.is_zone_safe(r, c) {
                return Err(GridError::ZoneUnsafe { row: r, col: c });
            }
        }
        for &(r, c) in &run {
            self.cells[r * self.dimension + c] = Cell::Occupied;
        }
        Ok(())
    }

    /// Fire at (row, col).
    ///
    /// `Occupied` becomes `Hit`, `Empty` becomes `Miss`. Firing at a cell
    /// that is already `Hit` or `Miss` leaves it unchanged and reports a
    /// miss: a duplicate shot is deliberately indistinguishable from a
    /// fresh miss rather than an error.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<FireResult, GridError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(GridError::OutOfBounds { row, col });
        }
        let idx = row * self.dimension + col;
        match self.cells[idx] {
            Cell::Occupied => {
                self.cells[idx] = Cell::Hit;
                Ok(FireResult::Hit)
            }
            Cell::Empty => {
                self.cells[idx] = Cell::Miss;
                Ok(FireResult::Miss)
            }
            Cell::Hit | Cell::Miss => Ok(FireResult::Miss),
        }
    }

    /// True while any unguessed unit segment remains. This is the sole
    /// win-condition signal.
    pub fn has_units_remaining(&self) -> bool {
        self.cells.iter().any(|&c| c == Cell::Occupied)
    }

    /// Number of unguessed unit segments.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Occupied).count()
    }

    /// Mark every still-empty neighbor of (row, col) as a miss. Cosmetic
    /// dead-zone marking around a destroyed unit; win detection does not
    /// depend on it.
    pub fn mark_sunk_perimeter(&mut self, row: usize, col: usize) {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if let Some((r, c)) = self.checked_coord(row as i32 + dr, col as i32 + dc) {
                    let idx = r * self.dimension + c;
                    if self.cells[idx] == Cell::Empty {
                        self.cells[idx] = Cell::Miss;
                    }
                }
            }
        }
    }

    /// Render the grid as text: a header row of column indices, then one
    /// row per grid row prefixed by its index. With `hide_occupied`,
    /// unguessed segments display as open water (the opponent's view).
    pub fn render(&self, hide_occupied: bool) -> String {
        let mut out = String::new();
        out.push_str("   ");
        for c in 0..self.dimension {
            out.push_str(&format!("{} ", c));
        }
        out.push('\n');
        for r in 0..self.dimension {
            out.push_str(&format!("{}  ", r));
            for c in 0..self.dimension {
                let mut cell = self.cells[r * self.dimension + c];
                if hide_occupied && cell == Cell::Occupied {
                    cell = Cell::Empty;
                }
                out.push(cell.glyph());
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}
