//! Move legality.
//!
//! A pure predicate over a cell's current state: a player may take an empty
//! cell or entangle with the opponent's tentative marker, and nothing else.

use crate::board::{CellState, SymbolKind};

/// Returns whether `player` may legally target a cell in `state`.
///
/// Re-stacking one's own tentative symbol is forbidden; entangled and
/// collapsed cells are closed to both players.
pub fn can_place(state: CellState, player: SymbolKind) -> bool {
    match state {
        CellState::Empty => true,
        CellState::Tentative(s) => s != player,
        CellState::Entangled | CellState::Collapsed(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_open_to_both() {
        assert!(can_place(CellState::Empty, SymbolKind::X));
        assert!(can_place(CellState::Empty, SymbolKind::O));
    }

    #[test]
    fn own_tentative_is_blocked() {
        assert!(!can_place(CellState::Tentative(SymbolKind::X), SymbolKind::X));
        assert!(!can_place(CellState::Tentative(SymbolKind::O), SymbolKind::O));
    }

    #[test]
    fn opposing_tentative_allows_entanglement() {
        assert!(can_place(CellState::Tentative(SymbolKind::X), SymbolKind::O));
        assert!(can_place(CellState::Tentative(SymbolKind::O), SymbolKind::X));
    }

    #[test]
    fn entangled_is_closed() {
        assert!(!can_place(CellState::Entangled, SymbolKind::X));
        assert!(!can_place(CellState::Entangled, SymbolKind::O));
    }

    #[test]
    fn collapsed_is_closed() {
        for winner in [SymbolKind::X, SymbolKind::O] {
            assert!(!can_place(CellState::Collapsed(winner), SymbolKind::X));
            assert!(!can_place(CellState::Collapsed(winner), SymbolKind::O));
        }
    }
}
