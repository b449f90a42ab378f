//! Fixed board and table constants shared by every session.

/// Number of tiles on the board.
pub const BOARD_SIZE: u8 = 100;
/// Tile every player starts on.
pub const START_TILE: u8 = 1;
/// Tile that ends the game. Also the overshoot threshold.
pub const WIN_TILE: u8 = BOARD_SIZE;

pub const BOARD_COLUMNS: u8 = 10;
pub const BOARD_ROWS: u8 = 10;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

/// Faces on the single die; rolls are drawn from `1..=DIE_FACES`.
pub const DIE_FACES: u8 = 6;

// Classic layout. Each pair is (start, end).
pub const CLASSIC_LADDERS: [(u8, u8); 11] = [
    (3, 22),
    (5, 8),
    (11, 26),
    (20, 29),
    (4, 14),
    (9, 31),
    (21, 42),
    (28, 84),
    (51, 67),
    (71, 91),
    (80, 100),
];

pub const CLASSIC_SNAKES: [(u8, u8); 8] = [
    (17, 7),
    (54, 34),
    (62, 19),
    (64, 60),
    (87, 24),
    (93, 73),
    (95, 75),
    (98, 79),
];
