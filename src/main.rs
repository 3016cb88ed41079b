//! cubit -- a quantum tic-tac-toe engine for the 3x3x3 board.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! A driving process (typically a rendering front end) sends `newgame`,
//! `place`, and `state` commands and renders from the responses.

use std::io::{self, BufRead, Write};

use cubit::board::Coord;
use cubit::protocol::{parse_command, Command, Snapshot};
use cubit::rules::CollapseOutcome;
use cubit::session::Session;

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame { seed } => {
                session = match seed {
                    Some(seed) => Session::seeded(seed),
                    None => Session::new(),
                };
                writeln!(out, "newgameok").unwrap();
            }
            Command::Place { x, y, z } => {
                handle_place(&mut session, x, y, z, &mut out);
            }
            Command::State => {
                let snapshot = Snapshot::capture(&session);
                writeln!(out, "{}", serde_json::to_string(&snapshot).unwrap()).unwrap();
            }
            Command::Quit => break,
        }
        out.flush().unwrap();
    }
}

/// Handles a `place` command: range check, move application, and the
/// placed/collapse/win/turn response lines.
fn handle_place<W: Write>(session: &mut Session, x: u8, y: u8, z: u8, out: &mut W) {
    let coord = match Coord::try_new(x, y, z) {
        Some(c) => c,
        None => {
            writeln!(out, "illegal coordinate out of range").unwrap();
            return;
        }
    };

    let report = match session.place(coord) {
        Ok(r) => r,
        Err(e) => {
            writeln!(out, "illegal {}", e).unwrap();
            return;
        }
    };

    writeln!(
        out,
        "placed {} {}",
        report.cell_state.token(),
        report.marker.token()
    )
    .unwrap();

    if let Some(outcome) = &report.collapse {
        writeln!(out, "collapse {}", format_collapse(outcome)).unwrap();
    }

    match report.win {
        Some(win) => {
            writeln!(
                out,
                "win {} {} {}",
                win.winner.protocol_char(),
                win.start,
                win.end
            )
            .unwrap();
        }
        None => {
            writeln!(out, "turn {}", session.current_player().protocol_char()).unwrap();
        }
    }
}

/// Formats a collapse outcome as `none` or a list of `<coord>=<sym>` for
/// collapsed cells followed by `<coord>=.` for destroyed ones, each group
/// in registry order.
fn format_collapse(outcome: &CollapseOutcome) -> String {
    match outcome {
        CollapseOutcome::Skipped => "none".to_string(),
        CollapseOutcome::Resolved {
            collapsed,
            destroyed,
        } => {
            let mut parts: Vec<String> = collapsed
                .iter()
                .map(|(cell, symbol)| format!("{}={}", cell, symbol.protocol_char()))
                .collect();
            parts.extend(destroyed.iter().map(|cell| format!("{}=.", cell)));
            parts.join(" ")
        }
    }
}
