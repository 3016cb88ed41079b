//! Cubit engine library.
//!
//! A rules/state engine for two-player quantum tic-tac-toe on a 3x3x3
//! board. Moves place tentative markers; playing onto the opponent's
//! tentative marker entangles the cell, and a per-round collapse event
//! resolves pending markers into permanent symbols or destroys them. Wins
//! are detected over 49 fixed lines, counting collapsed cells only.
//!
//! Exposes the board model, rules engine, randomness seam, session driver,
//! and the text protocol used by the binary entry point.

pub mod board;
pub mod protocol;
pub mod random;
pub mod rules;
pub mod session;
