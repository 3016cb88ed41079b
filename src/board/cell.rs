//! Cell states and pending markers.
//!
//! A cell is always in exactly one of four states; the pending-marker
//! registry tracks unresolved claims awaiting the next collapse. Entanglement
//! is a single combined cell state, never two stacked markers.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A player symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    X,
    O,
}

impl SymbolKind {
    /// Returns the other player's symbol.
    pub const fn opponent(self) -> SymbolKind {
        match self {
            SymbolKind::X => SymbolKind::O,
            SymbolKind::O => SymbolKind::X,
        }
    }

    /// Returns the lowercase protocol character.
    pub const fn protocol_char(self) -> char {
        match self {
            SymbolKind::X => 'x',
            SymbolKind::O => 'o',
        }
    }

    /// Parses a symbol from its lowercase protocol character.
    pub fn from_protocol_char(c: char) -> Option<SymbolKind> {
        match c {
            'x' => Some(SymbolKind::X),
            'o' => Some(SymbolKind::O),
            _ => None,
        }
    }
}

/// The state of a single cell.
///
/// Transitions: `Empty -> Tentative(s)` on a first move,
/// `Tentative(s) -> Entangled` when the opposing symbol is played on it, and
/// `Tentative | Entangled -> Collapsed(s) | Empty` only through a collapse
/// event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    Empty,
    Tentative(SymbolKind),
    Entangled,
    Collapsed(SymbolKind),
}

impl CellState {
    /// Returns the protocol token: `empty`, lowercase `x`/`o` for tentative
    /// markers, `both` for entangled cells, uppercase `X`/`O` for collapsed
    /// symbols.
    pub const fn token(self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Tentative(SymbolKind::X) => "x",
            CellState::Tentative(SymbolKind::O) => "o",
            CellState::Entangled => "both",
            CellState::Collapsed(SymbolKind::X) => "X",
            CellState::Collapsed(SymbolKind::O) => "O",
        }
    }
}

/// The kind of a pending marker in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    PendingX,
    PendingO,
    PendingBoth,
}

impl MarkerKind {
    /// Returns the pending-marker kind for a single player's symbol.
    pub const fn pending(symbol: SymbolKind) -> MarkerKind {
        match symbol {
            SymbolKind::X => MarkerKind::PendingX,
            SymbolKind::O => MarkerKind::PendingO,
        }
    }

    /// Returns the protocol token: `x`, `o`, or `both`.
    pub const fn token(self) -> &'static str {
        match self {
            MarkerKind::PendingX => "x",
            MarkerKind::PendingO => "o",
            MarkerKind::PendingBoth => "both",
        }
    }
}

/// A registry entry for one cell's unresolved (or just-resolved) claim.
///
/// The `cell` field is a back-reference for routing collapse results, never
/// ownership; the board owns both cells and markers. Records with
/// `collapsed` set are inert results kept for a renderer, excluded from the
/// pending view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub cell: Coord,
    pub collapsed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_swaps() {
        assert_eq!(SymbolKind::X.opponent(), SymbolKind::O);
        assert_eq!(SymbolKind::O.opponent(), SymbolKind::X);
    }

    #[test]
    fn symbol_protocol_roundtrip() {
        for s in [SymbolKind::X, SymbolKind::O] {
            assert_eq!(SymbolKind::from_protocol_char(s.protocol_char()), Some(s));
        }
        assert_eq!(SymbolKind::from_protocol_char('b'), None);
    }

    #[test]
    fn cell_state_tokens_are_distinct() {
        let states = [
            CellState::Empty,
            CellState::Tentative(SymbolKind::X),
            CellState::Tentative(SymbolKind::O),
            CellState::Entangled,
            CellState::Collapsed(SymbolKind::X),
            CellState::Collapsed(SymbolKind::O),
        ];
        let mut seen = std::collections::HashSet::new();
        for s in states {
            assert!(seen.insert(s.token()), "duplicate token {}", s.token());
        }
    }

    #[test]
    fn pending_kind_for_symbol() {
        assert_eq!(MarkerKind::pending(SymbolKind::X), MarkerKind::PendingX);
        assert_eq!(MarkerKind::pending(SymbolKind::O), MarkerKind::PendingO);
    }
}
