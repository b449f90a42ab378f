//! Board geometry for the 10x10 serpentine grid.
//!
//! Row 0 is the top of the board (tiles 91..=100) and tile 1 sits at the
//! bottom-left. Counting rows from the bottom, even rows run left to right
//! and odd rows run right to left.

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_COLUMNS, BOARD_ROWS, BOARD_SIZE, START_TILE, WIN_TILE};

/// A grid position in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCell {
    pub row: u8,
    pub col: u8,
    pub tile: u8,
}

/// Tile number shown at `(row, col)`, or `None` outside the grid.
#[must_use]
pub const fn tile_at(row: u8, col: u8) -> Option<u8> {
    if row >= BOARD_ROWS || col >= BOARD_COLUMNS {
        return None;
    }
    let from_bottom = BOARD_ROWS - 1 - row;
    let tile = if from_bottom % 2 == 0 {
        from_bottom * BOARD_COLUMNS + col + 1
    } else {
        (from_bottom + 1) * BOARD_COLUMNS - col
    };
    Some(tile)
}

/// Grid position of `tile`, or `None` when the tile is not on the board.
#[must_use]
pub const fn cell_of(tile: u8) -> Option<BoardCell> {
    if tile < START_TILE || tile > BOARD_SIZE {
        return None;
    }
    let offset = tile - 1;
    let from_bottom = offset / BOARD_COLUMNS;
    let along = offset % BOARD_COLUMNS;
    let col = if from_bottom % 2 == 0 {
        along
    } else {
        BOARD_COLUMNS - 1 - along
    };
    Some(BoardCell {
        row: BOARD_ROWS - 1 - from_bottom,
        col,
        tile,
    })
}

/// Every cell, top row first, left to right within a row.
pub fn cells() -> impl Iterator<Item = BoardCell> {
    (0..BOARD_ROWS).flat_map(|row| {
        (0..BOARD_COLUMNS).filter_map(move |col| {
            tile_at(row, col).map(|tile| BoardCell { row, col, tile })
        })
    })
}

/// Caption drawn on the start and finish tiles.
#[must_use]
pub const fn tile_label(tile: u8) -> Option<&'static str> {
    match tile {
        START_TILE => Some("START"),
        WIN_TILE => Some("WIN"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn corners_match_serpentine_layout() {
        assert_eq!(tile_at(9, 0), Some(1));
        assert_eq!(tile_at(9, 9), Some(10));
        assert_eq!(tile_at(8, 9), Some(11));
        assert_eq!(tile_at(8, 0), Some(20));
        assert_eq!(tile_at(0, 0), Some(100));
        assert_eq!(tile_at(0, 9), Some(91));
    }

    #[test]
    fn cell_of_inverts_tile_at() {
        for tile in 1..=BOARD_SIZE {
            let cell = cell_of(tile).expect("tile on board");
            assert_eq!(tile_at(cell.row, cell.col), Some(tile));
        }
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        assert!(cell_of(0).is_none());
        assert!(cell_of(101).is_none());
        assert!(tile_at(10, 0).is_none());
        assert!(tile_at(0, 10).is_none());
    }

    #[test]
    fn cells_cover_each_tile_once_in_render_order() {
        let all: Vec<BoardCell> = cells().collect();
        assert_eq!(all.len(), usize::from(BOARD_SIZE));
        assert_eq!(all.first().map(|c| c.tile), Some(100));
        assert_eq!(all.last().map(|c| c.tile), Some(10));
        let unique: HashSet<u8> = all.iter().map(|c| c.tile).collect();
        assert_eq!(unique.len(), usize::from(BOARD_SIZE));
    }

    #[test]
    fn start_and_win_tiles_are_labelled() {
        assert_eq!(tile_label(1), Some("START"));
        assert_eq!(tile_label(100), Some("WIN"));
        assert_eq!(tile_label(50), None);
    }
}
