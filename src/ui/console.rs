//! Line-based terminal front end
//!
//! Prints the game log with a colour per message category and reads one
//! command per line.

use std::io::{self, BufRead, Stdin, Stdout, Write};

use crossterm::style::{Color, Stylize};

use crate::game::{Command, CommandSource, GameMessage, GameOutcome, GameState, MessageCategory};

const PROMPT: &str = "Action: N)orth, S)outh, E)ast, W)est, F)ire, H)elp, Q)uit: ";

/// Terminal command source over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    /// Emit ANSI colours
    color: bool,
}

impl Console<io::StdinLock<'static>, Stdout> {
    /// Console on the process's stdin/stdout
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: true,
        }
    }

    /// Turn colour output on or off
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Spaceship Survival Game!\n")?;
        writeln!(self.output, "{}", super::help_text())
    }

    pub fn print_messages(&mut self, messages: &[GameMessage]) -> io::Result<()> {
        for message in messages {
            if self.color {
                let styled = message.text.as_str().with(category_color(message.category));
                writeln!(self.output, "{}", styled)?;
            } else {
                writeln!(self.output, "{}", message.text)?;
            }
        }
        self.output.flush()
    }

    pub fn print_outcome(&mut self, outcome: &GameOutcome) -> io::Result<()> {
        let banner = match outcome.state {
            GameState::AlienDefeated => "*** The ship is safe. You win! ***",
            GameState::PlayerDead => "*** You did not survive. ***",
            GameState::Quit => "*** Mission abandoned. ***",
            GameState::Ongoing => return Ok(()),
        };
        writeln!(self.output)?;
        if self.color {
            writeln!(self.output, "{}", banner.bold())?;
        } else {
            writeln!(self.output, "{}", banner)?;
        }
        writeln!(
            self.output,
            "Turns: {}  Health: {}  Survivors rescued: {}",
            outcome.turns, outcome.health, outcome.survivors_rescued
        )?;
        self.output.flush()
    }

    fn read_command(&mut self) -> io::Result<Option<Command>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(Command::parse(&line)))
    }
}

impl<R: BufRead, W: Write> CommandSource for Console<R, W> {
    fn next_command(&mut self, messages: &[GameMessage]) -> Option<Command> {
        let result = self
            .print_messages(messages)
            .and_then(|_| self.read_command());
        match result {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Console I/O failed: {}", e);
                None
            }
        }
    }
}

fn category_color(category: MessageCategory) -> Color {
    match category {
        MessageCategory::Combat => Color::Red,
        MessageCategory::Item => Color::Yellow,
        MessageCategory::Hazard => Color::DarkYellow,
        MessageCategory::Hint => Color::Magenta,
        MessageCategory::System => Color::Cyan,
        MessageCategory::Map => Color::Grey,
    }
}
