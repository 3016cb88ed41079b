//! Win detection over the 49 winning lines.
//!
//! The line table is fixed for the game's lifetime and enumerated in the
//! canonical order: for each (i, j) the three axis-aligned lines varying x,
//! y, then z; for each slice index the six planar diagonals; the four space
//! diagonals last. A line is won only when all three of its cells hold the
//! same collapsed symbol: tentative and entangled cells never count.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellState, Coord, SymbolKind};

/// The number of winning lines on the 3x3x3 board.
pub const LINE_COUNT: usize = 49;

/// A completed winning line: its two end cells and the winning symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub start: Coord,
    pub end: Coord,
    pub winner: SymbolKind,
}

/// All 49 winning lines in canonical enumeration order: 27 axis-aligned,
/// 18 planar diagonals, 4 space diagonals.
pub const LINES: [[Coord; 3]; LINE_COUNT] = [
    [Coord::new(0, 0, 0), Coord::new(1, 0, 0), Coord::new(2, 0, 0)],
    [Coord::new(0, 0, 0), Coord::new(0, 1, 0), Coord::new(0, 2, 0)],
    [Coord::new(0, 0, 0), Coord::new(0, 0, 1), Coord::new(0, 0, 2)],
    [Coord::new(0, 0, 1), Coord::new(1, 0, 1), Coord::new(2, 0, 1)],
    [Coord::new(0, 0, 1), Coord::new(0, 1, 1), Coord::new(0, 2, 1)],
    [Coord::new(0, 1, 0), Coord::new(0, 1, 1), Coord::new(0, 1, 2)],
    [Coord::new(0, 0, 2), Coord::new(1, 0, 2), Coord::new(2, 0, 2)],
    [Coord::new(0, 0, 2), Coord::new(0, 1, 2), Coord::new(0, 2, 2)],
    [Coord::new(0, 2, 0), Coord::new(0, 2, 1), Coord::new(0, 2, 2)],
    [Coord::new(0, 1, 0), Coord::new(1, 1, 0), Coord::new(2, 1, 0)],
    [Coord::new(1, 0, 0), Coord::new(1, 1, 0), Coord::new(1, 2, 0)],
    [Coord::new(1, 0, 0), Coord::new(1, 0, 1), Coord::new(1, 0, 2)],
    [Coord::new(0, 1, 1), Coord::new(1, 1, 1), Coord::new(2, 1, 1)],
    [Coord::new(1, 0, 1), Coord::new(1, 1, 1), Coord::new(1, 2, 1)],
    [Coord::new(1, 1, 0), Coord::new(1, 1, 1), Coord::new(1, 1, 2)],
    [Coord::new(0, 1, 2), Coord::new(1, 1, 2), Coord::new(2, 1, 2)],
    [Coord::new(1, 0, 2), Coord::new(1, 1, 2), Coord::new(1, 2, 2)],
    [Coord::new(1, 2, 0), Coord::new(1, 2, 1), Coord::new(1, 2, 2)],
    [Coord::new(0, 2, 0), Coord::new(1, 2, 0), Coord::new(2, 2, 0)],
    [Coord::new(2, 0, 0), Coord::new(2, 1, 0), Coord::new(2, 2, 0)],
    [Coord::new(2, 0, 0), Coord::new(2, 0, 1), Coord::new(2, 0, 2)],
    [Coord::new(0, 2, 1), Coord::new(1, 2, 1), Coord::new(2, 2, 1)],
    [Coord::new(2, 0, 1), Coord::new(2, 1, 1), Coord::new(2, 2, 1)],
    [Coord::new(2, 1, 0), Coord::new(2, 1, 1), Coord::new(2, 1, 2)],
    [Coord::new(0, 2, 2), Coord::new(1, 2, 2), Coord::new(2, 2, 2)],
    [Coord::new(2, 0, 2), Coord::new(2, 1, 2), Coord::new(2, 2, 2)],
    [Coord::new(2, 2, 0), Coord::new(2, 2, 1), Coord::new(2, 2, 2)],
    [Coord::new(0, 0, 0), Coord::new(0, 1, 1), Coord::new(0, 2, 2)],
    [Coord::new(0, 0, 2), Coord::new(0, 1, 1), Coord::new(0, 2, 0)],
    [Coord::new(0, 0, 0), Coord::new(1, 0, 1), Coord::new(2, 0, 2)],
    [Coord::new(2, 0, 0), Coord::new(1, 0, 1), Coord::new(0, 0, 2)],
    [Coord::new(0, 0, 0), Coord::new(1, 1, 0), Coord::new(2, 2, 0)],
    [Coord::new(2, 0, 0), Coord::new(1, 1, 0), Coord::new(0, 2, 0)],
    [Coord::new(1, 0, 0), Coord::new(1, 1, 1), Coord::new(1, 2, 2)],
    [Coord::new(1, 0, 2), Coord::new(1, 1, 1), Coord::new(1, 2, 0)],
    [Coord::new(0, 1, 0), Coord::new(1, 1, 1), Coord::new(2, 1, 2)],
    [Coord::new(2, 1, 0), Coord::new(1, 1, 1), Coord::new(0, 1, 2)],
    [Coord::new(0, 0, 1), Coord::new(1, 1, 1), Coord::new(2, 2, 1)],
    [Coord::new(2, 0, 1), Coord::new(1, 1, 1), Coord::new(0, 2, 1)],
    [Coord::new(2, 0, 0), Coord::new(2, 1, 1), Coord::new(2, 2, 2)],
    [Coord::new(2, 0, 2), Coord::new(2, 1, 1), Coord::new(2, 2, 0)],
    [Coord::new(0, 2, 0), Coord::new(1, 2, 1), Coord::new(2, 2, 2)],
    [Coord::new(2, 2, 0), Coord::new(1, 2, 1), Coord::new(0, 2, 2)],
    [Coord::new(0, 0, 2), Coord::new(1, 1, 2), Coord::new(2, 2, 2)],
    [Coord::new(2, 0, 2), Coord::new(1, 1, 2), Coord::new(0, 2, 2)],
    [Coord::new(0, 0, 0), Coord::new(1, 1, 1), Coord::new(2, 2, 2)],
    [Coord::new(2, 0, 0), Coord::new(1, 1, 1), Coord::new(0, 2, 2)],
    [Coord::new(0, 2, 0), Coord::new(1, 1, 1), Coord::new(2, 0, 2)],
    [Coord::new(0, 0, 2), Coord::new(1, 1, 1), Coord::new(2, 2, 0)],
];

/// Scans the line table in order and returns the first fully collapsed,
/// uniformly matching line, testing X before O on each line. Returns `None`
/// when no line is complete; repeated calls on an unchanged board return
/// equal results.
pub fn check_win(board: &Board) -> Option<WinResult> {
    for line in &LINES {
        for winner in [SymbolKind::X, SymbolKind::O] {
            if line
                .iter()
                .all(|&cell| board.cell_state(cell) == CellState::Collapsed(winner))
            {
                return Some(WinResult {
                    start: line[0],
                    end: line[2],
                    winner,
                });
            }
        }
    }
    None
}
