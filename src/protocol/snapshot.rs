//! JSON state snapshots for the `state` command.
//!
//! A snapshot is the read-only view a presentation layer needs to render a
//! frame: every cell's state, the ordered pending markers, whose turn it
//! is, and the winning line once one exists.

use serde::{Deserialize, Serialize};

use crate::board::{CellState, Coord, Marker, SymbolKind, ALL_COORDS};
use crate::rules::WinResult;
use crate::session::Session;

/// One cell's coordinate and state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellEntry {
    pub coord: Coord,
    pub state: CellState,
}

/// A full game-state snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All 27 cells in flat index order.
    pub cells: Vec<CellEntry>,
    /// Pending markers in registry order.
    pub pending: Vec<Marker>,
    pub turn: SymbolKind,
    pub winner: Option<WinResult>,
}

impl Snapshot {
    /// Captures the session's current state.
    pub fn capture(session: &Session) -> Snapshot {
        let board = session.board();
        Snapshot {
            cells: ALL_COORDS
                .iter()
                .map(|&coord| CellEntry {
                    coord,
                    state: board.cell_state(coord),
                })
                .collect(),
            pending: board.pending_markers().copied().collect(),
            turn: session.current_player(),
            winner: session.winner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CELL_COUNT;
    use crate::random::ScriptedRandom;

    #[test]
    fn snapshot_of_fresh_session() {
        let session = Session::with_random(Box::new(ScriptedRandom::default()));
        let snapshot = Snapshot::capture(&session);
        assert_eq!(snapshot.cells.len(), CELL_COUNT);
        assert!(snapshot.cells.iter().all(|e| e.state == CellState::Empty));
        assert!(snapshot.pending.is_empty());
        assert_eq!(snapshot.turn, SymbolKind::X);
        assert_eq!(snapshot.winner, None);
    }

    #[test]
    fn snapshot_tracks_pending_markers() {
        let mut session = Session::with_random(Box::new(ScriptedRandom::default()));
        session.place(Coord::new(0, 1, 2)).unwrap();
        let snapshot = Snapshot::capture(&session);
        assert_eq!(snapshot.pending.len(), 1);
        assert_eq!(snapshot.pending[0].cell, Coord::new(0, 1, 2));
        assert_eq!(snapshot.turn, SymbolKind::O);
    }

    #[test]
    fn snapshot_json_roundtrip() {
        let mut session = Session::with_random(Box::new(ScriptedRandom::default()));
        session.place(Coord::new(0, 0, 0)).unwrap();
        session.place(Coord::new(0, 0, 0)).unwrap();

        let snapshot = Snapshot::capture(&session);
        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
