//! Common types: shot results and grid errors.

use core::fmt;

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireResult {
    /// Shot struck an unguessed unit segment.
    Hit,
    /// Shot struck open water, or a cell that was already resolved.
    Miss,
}

/// Errors returned by Grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside [0, dimension).
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a unit segment.
    CellOccupied { row: usize, col: usize },
    /// A neighboring cell holds a unit segment, violating the no-touch rule.
    ZoneUnsafe { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "coordinates ({}, {}) are outside the grid", row, col)
            }
            GridError::CellOccupied { row, col } => {
                write!(f, "cell ({}, {}) is already occupied", row, col)
            }
            GridError::ZoneUnsafe { row, col } => {
                write!(f, "cell ({}, {}) touches another unit", row, col)
            }
        }
    }
}

impl std::error::Error for GridError {}
