//! Game module - Core game logic and state management

mod command;
mod state;

pub use command::{Command, CommandSource, ScriptedCommands};
pub use state::{Game, GameMessage, GameOutcome, GameState, MessageCategory};
