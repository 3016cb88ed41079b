//! The 3x3x3 coordinate space.
//!
//! All 27 cell positions are addressed by a `Coord` triple with each
//! component in `0..3`. Coordinates map to a flat `0..27` index for O(1)
//! cell lookup, enumerated in `ALL_COORDS` in index order.

use serde::{Deserialize, Serialize};

/// The board is a cube of this many cells per edge.
pub const GRID_SIZE: u8 = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = 27;

/// A position on the 3x3x3 board.
///
/// Components are guaranteed in `0..3`; both constructors enforce the range,
/// so an existing `Coord` is always a valid cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    x: u8,
    y: u8,
    z: u8,
}

impl Coord {
    /// Creates a coordinate from components known to be in range.
    ///
    /// # Panics
    ///
    /// Panics if any component is outside `0..3`. Coordinates come from a
    /// fixed enumerable set, so an out-of-range component is a caller bug,
    /// not a runtime condition. Untrusted input goes through [`Coord::try_new`].
    pub const fn new(x: u8, y: u8, z: u8) -> Coord {
        assert!(
            x < GRID_SIZE && y < GRID_SIZE && z < GRID_SIZE,
            "coordinate component out of range"
        );
        Coord { x, y, z }
    }

    /// Creates a coordinate from untrusted components.
    ///
    /// Returns `None` if any component is outside `0..3`.
    pub fn try_new(x: u8, y: u8, z: u8) -> Option<Coord> {
        if x < GRID_SIZE && y < GRID_SIZE && z < GRID_SIZE {
            Some(Coord { x, y, z })
        } else {
            None
        }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    pub const fn z(self) -> u8 {
        self.z
    }

    /// Returns the flat array index for this coordinate: `x*9 + y*3 + z`.
    pub const fn index(self) -> usize {
        self.x as usize * 9 + self.y as usize * 3 + self.z as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// All 27 coordinates in flat index order.
pub const ALL_COORDS: [Coord; CELL_COUNT] = [
    Coord::new(0, 0, 0), Coord::new(0, 0, 1), Coord::new(0, 0, 2),
    Coord::new(0, 1, 0), Coord::new(0, 1, 1), Coord::new(0, 1, 2),
    Coord::new(0, 2, 0), Coord::new(0, 2, 1), Coord::new(0, 2, 2),
    Coord::new(1, 0, 0), Coord::new(1, 0, 1), Coord::new(1, 0, 2),
    Coord::new(1, 1, 0), Coord::new(1, 1, 1), Coord::new(1, 1, 2),
    Coord::new(1, 2, 0), Coord::new(1, 2, 1), Coord::new(1, 2, 2),
    Coord::new(2, 0, 0), Coord::new(2, 0, 1), Coord::new(2, 0, 2),
    Coord::new(2, 1, 0), Coord::new(2, 1, 1), Coord::new(2, 1, 2),
    Coord::new(2, 2, 0), Coord::new(2, 2, 1), Coord::new(2, 2, 2),
];
