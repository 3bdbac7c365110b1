//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

use crate::puzzle::normalize;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    /// Collect the named item; holds everything after the verb.
    Get(String),
    /// Move in a direction; holds the first token after the verb.
    MoveTo(String),
    Quit,
    /// Anything unparseable, kept for the error report.
    Unknown(String),
}

/// Parses an input line and returns the corresponding `Command`.
///
/// The line is trimmed and lower-cased first, so callers may pass raw input.
pub fn parse_command(input: &str) -> Command {
    let line = normalize(input);
    if line == "exit" {
        return Command::Quit;
    }
    if let Some(rest) = line.strip_prefix("go ") {
        let direction = rest.split(' ').next().unwrap_or_default();
        return Command::MoveTo(direction.to_string());
    }
    if let Some(rest) = line.strip_prefix("get ") {
        return Command::Get(rest.to_string());
    }
    Command::Unknown(line)
}

/// True when `requested` names `item` exactly, once both sides are case-folded.
///
/// The full command is rebuilt from the declared item name and compared as a whole, so
/// partial names or stray inner spacing do not match.
pub fn names_item(requested: &str, item: &str) -> bool {
    format!("get {}", requested.to_lowercase()) == format!("get {}", item.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_exact() {
        assert!(parse_command("exit").is_quit());
        assert!(parse_command("  EXIT ").is_quit());
        assert_eq!(parse_command("exit now"), Command::Unknown("exit now".into()));
    }

    #[test]
    fn go_takes_first_token() {
        assert_eq!(parse_command("go east"), Command::MoveTo("east".into()));
        assert_eq!(parse_command("Go North please"), Command::MoveTo("north".into()));
        assert_eq!(parse_command("go  west"), Command::MoveTo(String::new()));
        assert_eq!(parse_command("go"), Command::Unknown("go".into()));
    }

    #[test]
    fn get_keeps_full_remainder() {
        assert_eq!(parse_command("get Stellar Core"), Command::Get("stellar core".into()));
        assert_eq!(parse_command("get  stellar core"), Command::Get(" stellar core".into()));
    }

    #[test]
    fn unknown_verbs_fall_through() {
        assert_eq!(parse_command("dance"), Command::Unknown("dance".into()));
        assert_eq!(parse_command(""), Command::Unknown(String::new()));
        assert!(parse_command("take orb").is_unknown());
    }

    #[test]
    fn item_names_must_match_whole() {
        assert!(names_item("holo-key", "Holo-Key"));
        assert!(names_item("BIOLUMINESCENT ORB", "Bioluminescent Orb"));
        assert!(!names_item("orb", "Bioluminescent Orb"));
        assert!(!names_item(" stellar core", "Stellar Core"));
        assert!(!names_item("stellar core please", "Stellar Core"));
    }
}
