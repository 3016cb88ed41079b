//! The rules engine: move legality, collapse resolution, win detection.

pub mod collapse;
pub mod validate;
pub mod win;

pub use collapse::{perform_collapse, CollapseOutcome};
pub use validate::can_place;
pub use win::{check_win, WinResult, LINES, LINE_COUNT};
