/// board dimensions
pub const BOARD_WIDTH: u32 = 7;
pub const BOARD_HEIGHT: u32 = 6;

/// The number of discs on a full board
pub const BOARD_CELLS: u32 = BOARD_WIDTH * BOARD_HEIGHT;

/// The number of base-3 digits needed to encode a full board: one per disc and one column
/// marker per column
pub const CODE_DIGITS: u32 = BOARD_CELLS + BOARD_WIDTH;
