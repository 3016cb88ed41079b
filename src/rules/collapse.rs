//! The collapse resolver.
//!
//! Runs once per completed round over the board's entire pending-marker
//! registry. The resolver first scans the registry and decides every
//! marker's fate, then applies the decisions to the board, so draws never
//! observe a half-mutated registry.
//!
//! Survivor selection: one candidate is drawn per single-symbol bucket, and
//! one from the entangled bucket when it is non-empty. Without an entangled
//! candidate the two single-symbol draws collapse to their own symbols.
//! With one, a branch roll in `[0, 1)` picks between three outcomes:
//! `< 0.25` the entangled cell dies and both single-symbol draws collapse;
//! `< 0.5` the entangled cell resolves to O alongside the X draw;
//! otherwise it resolves to X alongside the O draw. Every pending marker not
//! rescued is destroyed and its cell reverts to empty.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, MarkerKind, SymbolKind};
use crate::random::RandomSource;

/// The result of one collapse event, in board application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollapseOutcome {
    /// Fewer than one pending X and one pending O: nothing to adjudicate,
    /// the board is untouched.
    Skipped,
    /// The event ran: these cells collapsed to permanent symbols and these
    /// cells were wiped back to empty.
    Resolved {
        collapsed: Vec<(Coord, SymbolKind)>,
        destroyed: Vec<Coord>,
    },
}

/// Thresholds for the entangled-cell branch roll.
const INDEPENDENT_COLLAPSE: f64 = 0.25;
const BOTH_RESOLVES_O: f64 = 0.5;

/// Performs one collapse event over the board's pending-marker registry.
///
/// Draw order is fixed: the X bucket, the O bucket, the entangled bucket
/// when present, then the branch roll. A deterministic [`RandomSource`]
/// therefore reproduces the whole event.
pub fn perform_collapse(board: &mut Board, random: &mut dyn RandomSource) -> CollapseOutcome {
    let mut xs: Vec<Coord> = Vec::new();
    let mut os: Vec<Coord> = Vec::new();
    let mut both: Vec<Coord> = Vec::new();
    for marker in board.pending_markers() {
        match marker.kind {
            MarkerKind::PendingX => xs.push(marker.cell),
            MarkerKind::PendingO => os.push(marker.cell),
            MarkerKind::PendingBoth => both.push(marker.cell),
        }
    }

    // Nothing to adjudicate until both players have a pending claim.
    if xs.is_empty() || os.is_empty() {
        return CollapseOutcome::Skipped;
    }

    let rx = xs[random.pick(xs.len())];
    let ro = os[random.pick(os.len())];
    let rb = if both.is_empty() {
        None
    } else {
        Some(both[random.pick(both.len())])
    };

    // At most two markers survive; everything else is destroyed.
    let survivors: [(Coord, SymbolKind); 2] = match rb {
        None => [(rx, SymbolKind::X), (ro, SymbolKind::O)],
        Some(rb) => {
            let roll = random.roll();
            if roll < INDEPENDENT_COLLAPSE {
                [(rx, SymbolKind::X), (ro, SymbolKind::O)]
            } else if roll < BOTH_RESOLVES_O {
                [(rx, SymbolKind::X), (rb, SymbolKind::O)]
            } else {
                [(ro, SymbolKind::O), (rb, SymbolKind::X)]
            }
        }
    };

    let candidates: Vec<Coord> = board.pending_markers().map(|m| m.cell).collect();
    let mut collapsed = Vec::new();
    let mut destroyed = Vec::new();
    for cell in candidates {
        match survivors.iter().find(|(c, _)| *c == cell) {
            Some(&(_, symbol)) => {
                board.collapse_cell(cell, symbol);
                collapsed.push((cell, symbol));
            }
            None => {
                board.reset_cell(cell);
                destroyed.push(cell);
            }
        }
    }

    CollapseOutcome::Resolved {
        collapsed,
        destroyed,
    }
}
