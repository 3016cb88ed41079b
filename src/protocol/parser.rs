//! Command parser for the line protocol.
//!
//! Parses incoming text commands from a driving process into structured
//! `Command` variants that the main loop can dispatch on.

/// A parsed driver-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh game: `newgame [seed]`.
    NewGame { seed: Option<u64> },

    /// Place the current player's marker: `place <x> <y> <z>`.
    Place { x: u8, y: u8, z: u8 },

    /// Emit a JSON snapshot of the full game state.
    State,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "newgame" => parse_newgame(&tokens),
        "place" => parse_place(&tokens),
        "state" => Some(Command::State),
        "quit" => Some(Command::Quit),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `newgame [seed]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    match tokens.len() {
        1 => Some(Command::NewGame { seed: None }),
        2 => match tokens[1].parse::<u64>() {
            Ok(seed) => Some(Command::NewGame { seed: Some(seed) }),
            Err(_) => {
                eprintln!("malformed newgame: seed must be an unsigned integer");
                None
            }
        },
        _ => {
            eprintln!("malformed newgame: expected 'newgame [seed]'");
            None
        }
    }
}

/// Parses `place <x> <y> <z>`. Range checking against the board happens in
/// the main loop, where out-of-range coordinates get an `illegal` response.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 4 {
        eprintln!("malformed place: expected 'place <x> <y> <z>'");
        return None;
    }
    let parse = |t: &str| t.parse::<u8>().ok();
    match (parse(tokens[1]), parse(tokens[2]), parse(tokens[3])) {
        (Some(x), Some(y), Some(z)) => Some(Command::Place { x, y, z }),
        _ => {
            eprintln!("malformed place: coordinates must be unsigned integers");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_newgame_without_seed() {
        assert_eq!(parse_command("newgame"), Some(Command::NewGame { seed: None }));
    }

    #[test]
    fn parses_newgame_with_seed() {
        assert_eq!(
            parse_command("newgame 42"),
            Some(Command::NewGame { seed: Some(42) })
        );
    }

    #[test]
    fn rejects_newgame_with_bad_seed() {
        assert_eq!(parse_command("newgame abc"), None);
        assert_eq!(parse_command("newgame 1 2"), None);
    }

    #[test]
    fn parses_place() {
        assert_eq!(
            parse_command("place 0 1 2"),
            Some(Command::Place { x: 0, y: 1, z: 2 })
        );
    }

    #[test]
    fn place_keeps_out_of_range_for_main_loop() {
        // Range is the session's concern; the parser only demands integers.
        assert_eq!(
            parse_command("place 9 9 9"),
            Some(Command::Place { x: 9, y: 9, z: 9 })
        );
    }

    #[test]
    fn rejects_malformed_place() {
        assert_eq!(parse_command("place"), None);
        assert_eq!(parse_command("place 1 2"), None);
        assert_eq!(parse_command("place a b c"), None);
        assert_eq!(parse_command("place -1 0 0"), None);
    }

    #[test]
    fn parses_state_and_quit() {
        assert_eq!(parse_command("state"), Some(Command::State));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
    }

    #[test]
    fn ignores_blank_and_unknown_lines() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("frobnicate"), None);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        assert_eq!(
            parse_command("  place 1 1 1  "),
            Some(Command::Place { x: 1, y: 1, z: 1 })
        );
    }
}
