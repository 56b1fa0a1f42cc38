//! Game state machine
//!
//! Owns the ship and the player and runs the turn loop until the player
//! dies, kills the alien or quits.

use super::command::{Command, CommandSource};
use crate::config::{ConfigError, GameConfig};
use crate::entities::{AttackOutcome, Person};
use crate::world::{Direction, ShipGrid};

/// The main game struct that holds all game data
pub struct Game {
    /// Current game state
    state: GameState,
    /// The ship, sole owner of every room
    grid: ShipGrid,
    /// The one and only player
    player: Person,
    /// Message log for this run
    messages: Vec<GameMessage>,
    /// Messages before this index have been handed to the command source
    delivered: usize,
    /// Turns started so far
    turn: u32,
    /// Render the whole ship at the start of each turn
    debug_view: bool,
}

/// All possible game states
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameState {
    /// Still playing
    Ongoing,
    /// Health reached zero
    PlayerDead,
    /// The alien is dead
    AlienDefeated,
    /// The player gave up
    Quit,
}

impl GameState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameState::Ongoing)
    }
}

/// A message to display in the game log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMessage {
    pub text: String,
    /// Turn the message was produced on
    pub turn: u32,
    pub category: MessageCategory,
}

impl GameMessage {
    pub fn new(text: impl Into<String>, category: MessageCategory) -> Self {
        Self {
            text: text.into(),
            turn: 0,
            category,
        }
    }
}

/// Categories for message filtering/coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageCategory {
    Combat,
    Item,
    Hazard,
    Hint,
    System,
    /// Debug rendering of the ship
    Map,
}

/// Summary of a finished (or abandoned) run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub state: GameState,
    pub turns: u32,
    pub health: i32,
    pub survivors_rescued: u32,
}

impl Game {
    /// Build the ship from the configured layout
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::from_map(&ShipGrid::from_layout(&config.layout), config)
    }

    /// Build the ship from an explicit symbol map
    pub fn from_map(map: &[Vec<char>], config: &GameConfig) -> Result<Self, ConfigError> {
        let (grid, player) = ShipGrid::build(map, config)?;
        Ok(Self {
            state: GameState::Ongoing,
            grid,
            player,
            messages: Vec::new(),
            delivered: 0,
            turn: 0,
            debug_view: false,
        })
    }

    /// Play turns until the game ends
    pub fn run(&mut self, source: &mut dyn CommandSource) -> GameOutcome {
        while !self.state.is_terminal() {
            self.play_turn(source);
        }
        let outcome = self.outcome();
        log::info!(
            "Game ended after {} turns: {:?} ({} health, {} survivors rescued)",
            outcome.turns,
            outcome.state,
            outcome.health,
            outcome.survivors_rescued
        );
        outcome
    }

    /// Play a single turn: room effect, death check, hints, one command
    pub fn play_turn(&mut self, source: &mut dyn CommandSource) -> GameState {
        if self.state.is_terminal() {
            return self.state;
        }
        self.turn += 1;

        if self.debug_view {
            let view = format!("Current map:\n{}", self.grid.render());
            self.add_message(view, MessageCategory::Map);
        }

        self.resolve_room();

        if self.player.is_dead() {
            self.add_message("Your health has dropped to zero.", MessageCategory::Combat);
            self.add_message(
                "You were tragically killed! Game Over!",
                MessageCategory::System,
            );
            self.set_state(GameState::PlayerDead);
            return self.state;
        }

        self.emit_hints();

        let command = source
            .next_command(&self.messages[self.delivered..])
            .unwrap_or(Command::Quit);
        self.delivered = self.messages.len();

        self.apply(command);
        self.state
    }

    /// Let the current room's entity act on the player
    fn resolve_room(&mut self) {
        let room = self.player.room();
        if let Some(message) = self.grid.room_mut(room).interact(&mut self.player) {
            self.push(message);
        }
    }

    /// Warn about whatever sits in the adjacent rooms
    fn emit_hints(&mut self) {
        let here = self.player.room();
        let hints: Vec<&'static str> = Direction::HINT_ORDER
            .iter()
            .filter_map(|&direction| self.grid.neighbor(here, direction))
            .filter_map(|room| room.entity().map(|entity| entity.hint()))
            .collect();

        if hints.is_empty() {
            self.add_message("No dangers detected nearby.", MessageCategory::Hint);
        }
        for hint in hints {
            self.add_message(hint, MessageCategory::Hint);
        }
    }

    /// Carry out one command
    pub fn apply(&mut self, command: Command) {
        log::debug!("Turn {}: {:?}", self.turn, command);
        match command {
            Command::Move(direction) => {
                if !self.player.move_to(direction, &mut self.grid) {
                    log::debug!("No room to the {}", direction.name());
                }
            }
            Command::Attack => self.attack(),
            Command::Help => self.add_message(crate::ui::help_text(), MessageCategory::System),
            Command::ToggleDebug => {
                self.debug_view = !self.debug_view;
                self.add_message("Toggling debug mode", MessageCategory::System);
            }
            Command::Quit => {
                self.add_message("You abandon the mission.", MessageCategory::System);
                self.set_state(GameState::Quit);
            }
            Command::Unknown => {}
        }
    }

    fn attack(&mut self) {
        let room = self.player.room();
        let outcome = self.player.attack(self.grid.room_mut(room));
        let text = match &outcome {
            AttackOutcome::NoTarget => "There is nothing here to attack.".to_string(),
            AttackOutcome::Unarmed => "You have no weapon to fight with!".to_string(),
            AttackOutcome::OutOfAmmo { weapon } => {
                format!("Click. Your {} is out of ammo!", weapon)
            }
            AttackOutcome::Ineffective { weapon } => {
                format!("Your {} barely scratches the alien!", weapon)
            }
            AttackOutcome::AlienDefeated { weapon } => {
                format!("Congratulations! You killed the alien with your {}!", weapon)
            }
        };
        self.add_message(text, MessageCategory::Combat);

        if outcome.is_victory() {
            self.set_state(GameState::AlienDefeated);
        }
    }

    /// Get the current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Set a new game state
    fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    pub fn grid(&self) -> &ShipGrid {
        &self.grid
    }

    pub fn player(&self) -> &Person {
        &self.player
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn debug_view(&self) -> bool {
        self.debug_view
    }

    /// Every message of this run
    pub fn messages(&self) -> &[GameMessage] {
        &self.messages
    }

    /// Messages not yet handed to a command source; marks them delivered
    pub fn take_pending(&mut self) -> &[GameMessage] {
        let start = self.delivered;
        self.delivered = self.messages.len();
        &self.messages[start..]
    }

    /// Add a message to the log
    pub fn add_message(&mut self, text: impl Into<String>, category: MessageCategory) {
        self.push(GameMessage::new(text, category));
    }

    fn push(&mut self, mut message: GameMessage) {
        message.turn = self.turn;
        self.messages.push(message);
    }

    pub fn outcome(&self) -> GameOutcome {
        GameOutcome {
            state: self.state,
            turns: self.turn,
            health: self.player.health(),
            survivors_rescued: self.player.survivors_rescued(),
        }
    }
}
