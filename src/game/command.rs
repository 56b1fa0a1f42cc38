//! Player commands and where they come from
//!
//! The engine never reads the console itself. It asks a `CommandSource`,
//! which is the terminal when playing and a script in tests.

use std::collections::VecDeque;

use super::state::GameMessage;
use crate::world::Direction;

/// One player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Attack,
    Help,
    ToggleDebug,
    Quit,
    /// Anything unrecognised; ignored
    Unknown,
}

impl Command {
    /// Parse a single-letter command, case-insensitively
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'n' => Command::Move(Direction::North),
            's' => Command::Move(Direction::South),
            'e' => Command::Move(Direction::East),
            'w' => Command::Move(Direction::West),
            'f' => Command::Attack,
            'h' => Command::Help,
            'd' => Command::ToggleDebug,
            'q' => Command::Quit,
            _ => Command::Unknown,
        }
    }

    /// Parse the first non-blank character of a line
    pub fn parse(line: &str) -> Self {
        line.trim()
            .chars()
            .next()
            .map(Command::from_char)
            .unwrap_or(Command::Unknown)
    }
}

/// Supplies one command per turn
pub trait CommandSource {
    /// Show `messages` (everything since the last call) and return the next
    /// command, or `None` when input has run out.
    fn next_command(&mut self, messages: &[GameMessage]) -> Option<Command>;
}

/// Replays a fixed list of commands and keeps everything it was shown
#[derive(Debug, Default)]
pub struct ScriptedCommands {
    commands: VecDeque<Command>,
    seen: Vec<GameMessage>,
    /// Number of messages seen before each command was handed out
    prompts: Vec<usize>,
}

impl ScriptedCommands {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Script from command letters, e.g. `"eef"`
    pub fn from_keys(keys: &str) -> Self {
        Self::new(keys.chars().map(Command::from_char))
    }

    /// Every message shown so far, in order
    pub fn seen(&self) -> &[GameMessage] {
        &self.seen
    }

    /// How many messages had been shown when the `n`th command was given
    pub fn seen_before_command(&self, n: usize) -> Option<usize> {
        self.prompts.get(n).copied()
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for ScriptedCommands {
    fn next_command(&mut self, messages: &[GameMessage]) -> Option<Command> {
        self.seen.extend_from_slice(messages);
        let command = self.commands.pop_front()?;
        self.prompts.push(self.seen.len());
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters() {
        assert_eq!(Command::parse("n"), Command::Move(Direction::North));
        assert_eq!(Command::parse("  S\n"), Command::Move(Direction::South));
        assert_eq!(Command::parse("east"), Command::Move(Direction::East));
        assert_eq!(Command::parse("W"), Command::Move(Direction::West));
        assert_eq!(Command::parse("f"), Command::Attack);
        assert_eq!(Command::parse("h"), Command::Help);
        assert_eq!(Command::parse("d"), Command::ToggleDebug);
        assert_eq!(Command::parse("Q"), Command::Quit);
    }

    #[test]
    fn test_unknown_input() {
        assert_eq!(Command::parse(""), Command::Unknown);
        assert_eq!(Command::parse("   "), Command::Unknown);
        assert_eq!(Command::parse("x"), Command::Unknown);
        assert_eq!(Command::parse("?"), Command::Unknown);
    }

    #[test]
    fn test_script_runs_out() {
        let mut script = ScriptedCommands::from_keys("nq");
        assert_eq!(script.next_command(&[]), Some(Command::Move(Direction::North)));
        assert_eq!(script.next_command(&[]), Some(Command::Quit));
        assert_eq!(script.next_command(&[]), None);
        assert_eq!(script.remaining(), 0);
    }
}
