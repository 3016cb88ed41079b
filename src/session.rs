//! Game session management.
//!
//! Drives the rules engine through a two-player game: X moves first, the
//! players alternate one move each, and a collapse event runs whenever the
//! turn returns to X (every second successful move). Win detection runs
//! after every move and again after every collapse; the first hit ends the
//! game.

use crate::board::{Board, CellState, Coord, MarkerKind, SymbolKind};
use crate::random::{RandomSource, RngSource};
use crate::rules::{can_place, check_win, perform_collapse, CollapseOutcome, WinResult};

/// A rejected move request. These are driver-facing conditions; board-level
/// contract violations panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game over")]
    GameOver,

    #[error("cell {cell} ({}) is not playable by {}", .state.token(), .player.protocol_char())]
    Blocked {
        cell: Coord,
        player: SymbolKind,
        state: CellState,
    },
}

/// What one successful move did, for a presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// The moved-on cell's new state.
    pub cell_state: CellState,
    /// The marker kind the move registered.
    pub marker: MarkerKind,
    /// The collapse outcome, when this move completed a round.
    pub collapse: Option<CollapseOutcome>,
    /// The winning line, when this move (or its collapse) ended the game.
    pub win: Option<WinResult>,
}

/// Holds the mutable state of one game between moves.
pub struct Session {
    board: Board,
    turn: SymbolKind,
    winner: Option<WinResult>,
    random: Box<dyn RandomSource>,
}

impl Session {
    /// Creates a session with an entropy-seeded random source.
    pub fn new() -> Self {
        Session::with_random(Box::new(RngSource::from_entropy()))
    }

    /// Creates a reproducible session from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Session::with_random(Box::new(RngSource::seeded(seed)))
    }

    /// Creates a session drawing from the given source.
    pub fn with_random(random: Box<dyn RandomSource>) -> Self {
        Session {
            board: Board::new(),
            turn: SymbolKind::X,
            winner: None,
            random,
        }
    }

    /// Applies the current player's move at `c`.
    ///
    /// On success the turn advances, and when it returns to X the round's
    /// collapse event runs. The report carries everything that happened;
    /// once it contains a win, the session accepts no further moves.
    pub fn place(&mut self, c: Coord) -> Result<MoveReport, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let player = self.turn;
        let state = self.board.cell_state(c);
        if !can_place(state, player) {
            return Err(MoveError::Blocked {
                cell: c,
                player,
                state,
            });
        }

        let (cell_state, marker) = self.board.apply_move(c, player);

        // Win check after every move is the authority for ending the game.
        if let Some(win) = check_win(&self.board) {
            self.winner = Some(win);
            return Ok(MoveReport {
                cell_state,
                marker,
                collapse: None,
                win: Some(win),
            });
        }

        self.turn = player.opponent();
        let mut collapse = None;
        if self.turn == SymbolKind::X {
            // Round complete: both players have moved since the last event.
            let outcome = perform_collapse(&mut self.board, self.random.as_mut());
            if let Some(win) = check_win(&self.board) {
                self.winner = Some(win);
            }
            collapse = Some(outcome);
        }

        Ok(MoveReport {
            cell_state,
            marker,
            collapse,
            win: self.winner,
        })
    }

    /// The player whose move is next.
    pub fn current_player(&self) -> SymbolKind {
        self.turn
    }

    /// The winning line, once the game has ended.
    pub fn winner(&self) -> Option<WinResult> {
        self.winner
    }

    /// Returns true once a winning line exists.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Read access to the board for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts a fresh game, keeping the random source.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = SymbolKind::X;
        self.winner = None;
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
