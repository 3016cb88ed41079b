//! Board representation and game-state types.
//!
//! Contains the coordinate space, cell and marker model, and the board
//! state that the rules engine operates on.

pub mod cell;
pub mod coord;
pub mod state;

pub use cell::{CellState, Marker, MarkerKind, SymbolKind};
pub use coord::{Coord, ALL_COORDS, CELL_COUNT, GRID_SIZE};
pub use state::Board;
