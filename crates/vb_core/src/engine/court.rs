//! Court grid coordinate system
//!
//! Maps ring positions onto a 3×3 display/validation grid.
//!
//! ## Layout
//!
//! Columns run 0..2 left→right, rows run 0..2 front→off-court:
//!
//! - row 0 (front row):  4 3 2
//! - row 1 (back row):   5 6 1
//! - row 2 (off-court):  7 8 9
//!
//! This table is the single source of truth for both visual placement and
//! overlap geometry; the mapping is total and bijective over the 9 positions.

use crate::models::RingPosition;

/// Cell in the 3×3 court grid.
/// - .0 = row (0 = front row, 1 = back row, 2 = off-court)
/// - .1 = col (0 = left, 2 = right)
///
/// Prefer `grid_row()` / `grid_col()` over `.0` / `.1` in new code to avoid
/// axis confusion.
pub type GridCell = (u8, u8);

/// Rows/columns per side of the grid.
pub const GRID_SIZE: u8 = 3;

/// Get the row component (depth) from a grid cell
/// - 0 = front row (attack line side)
/// - 2 = off-court
#[inline]
pub fn grid_row(cell: GridCell) -> u8 {
    cell.0
}

/// Get the column component (left-right) from a grid cell
/// - 0 = left sideline
/// - 2 = right sideline
#[inline]
pub fn grid_col(cell: GridCell) -> u8 {
    cell.1
}

/// Grid cell of a ring position. Fixed lookup, total over all 9 positions.
pub fn position_to_grid(pos: RingPosition) -> GridCell {
    match pos {
        RingPosition::P4 => (0, 0),
        RingPosition::P3 => (0, 1),
        RingPosition::P2 => (0, 2),
        RingPosition::P5 => (1, 0),
        RingPosition::P6 => (1, 1),
        RingPosition::P1 => (1, 2),
        RingPosition::P7 => (2, 0),
        RingPosition::P8 => (2, 1),
        RingPosition::P9 => (2, 2),
    }
}

/// Exact inverse of [`position_to_grid`]. `None` outside {0,1,2}×{0,1,2};
/// callers translating raw pointer coordinates should [`clamp_grid`] first.
pub fn grid_to_position(row: u8, col: u8) -> Option<RingPosition> {
    let pos = match (row, col) {
        (0, 0) => RingPosition::P4,
        (0, 1) => RingPosition::P3,
        (0, 2) => RingPosition::P2,
        (1, 0) => RingPosition::P5,
        (1, 1) => RingPosition::P6,
        (1, 2) => RingPosition::P1,
        (2, 0) => RingPosition::P7,
        (2, 1) => RingPosition::P8,
        (2, 2) => RingPosition::P9,
        _ => return None,
    };
    Some(pos)
}

/// Clamp raw (row, col) indices into the valid grid range.
pub fn clamp_grid(row: i32, col: i32) -> GridCell {
    (row.clamp(0, GRID_SIZE as i32 - 1) as u8, col.clamp(0, GRID_SIZE as i32 - 1) as u8)
}
