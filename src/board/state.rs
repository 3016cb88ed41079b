//! Board state: the 27 cells and the pending-marker registry.
//!
//! Uses a fixed-size array indexed by `Coord::index()` for O(1) cell lookup.
//! The board is the sole owner of both cells and markers; markers carry a
//! coordinate back-reference rather than a pointer, so there is no cyclic
//! ownership to manage.

use super::cell::{CellState, Marker, MarkerKind, SymbolKind};
use super::coord::{Coord, CELL_COUNT};

/// Complete game board at a point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [CellState; CELL_COUNT],
    /// All live marker records in insertion order. Pending entries have
    /// `collapsed == false`; collapsed entries are inert result records.
    markers: Vec<Marker>,
}

impl Board {
    /// Creates an empty board with no markers.
    pub fn new() -> Self {
        Board {
            cells: [CellState::Empty; CELL_COUNT],
            markers: Vec::new(),
        }
    }

    /// Returns the state of the cell at `c`. Total; never fails.
    pub fn cell_state(&self, c: Coord) -> CellState {
        self.cells[c.index()]
    }

    /// Applies a validated move by `player` at `c` and returns the new cell
    /// state together with the kind of marker the move registered.
    ///
    /// On an empty cell the move places a tentative marker; on the
    /// opponent's tentative marker it forms an entangled cell, replacing the
    /// prior registry entry with a single `PendingBoth` marker.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal for the current cell state. Callers
    /// gate moves through [`can_place`](crate::rules::can_place) first, so
    /// reaching this is an internal invariant violation.
    pub fn apply_move(&mut self, c: Coord, player: SymbolKind) -> (CellState, MarkerKind) {
        let idx = c.index();
        match self.cells[idx] {
            CellState::Empty => {
                let kind = MarkerKind::pending(player);
                self.cells[idx] = CellState::Tentative(player);
                self.markers.push(Marker {
                    kind,
                    cell: c,
                    collapsed: false,
                });
                (CellState::Tentative(player), kind)
            }
            CellState::Tentative(s) if s == player.opponent() => {
                self.cells[idx] = CellState::Entangled;
                self.detach_pending(c);
                self.markers.push(Marker {
                    kind: MarkerKind::PendingBoth,
                    cell: c,
                    collapsed: false,
                });
                (CellState::Entangled, MarkerKind::PendingBoth)
            }
            state => panic!(
                "illegal move by {:?} at {}: cell is {:?}",
                player, c, state
            ),
        }
    }

    /// Resets the cell at `c` to empty, detaching and dropping its pending
    /// marker.
    pub fn reset_cell(&mut self, c: Coord) {
        self.cells[c.index()] = CellState::Empty;
        self.detach_pending(c);
    }

    /// Collapses the cell at `c` to a permanent symbol, flipping its owning
    /// marker into an inert collapsed record.
    ///
    /// # Panics
    ///
    /// Panics if the cell has no pending marker; only the collapse resolver
    /// calls this, and it only targets cells it found in the pending view.
    pub fn collapse_cell(&mut self, c: Coord, symbol: SymbolKind) {
        self.cells[c.index()] = CellState::Collapsed(symbol);
        let marker = self
            .markers
            .iter_mut()
            .find(|m| m.cell == c && !m.collapsed)
            .unwrap_or_else(|| panic!("no pending marker at {} to collapse", c));
        marker.collapsed = true;
    }

    /// All marker records in insertion order, collapsed results included.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// The pending markers awaiting the next collapse, in insertion order.
    pub fn pending_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| !m.collapsed)
    }

    /// Removes the pending marker owned by `c`, if any. Collapsed records
    /// stay untouched.
    fn detach_pending(&mut self, c: Coord) {
        self.markers.retain(|m| m.collapsed || m.cell != c);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
