/// Side length of both grids.
pub const BOARD_DIMENSION: usize = 10;

/// Required unit lengths, placed in order during the placement phase.
pub const FLEET_SIZES: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of occupied cells once a full fleet is placed.
pub const TOTAL_FLEET_CELLS: usize = 20;
