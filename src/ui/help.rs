//! Instructions screen

const HELP_TEXT: &str = "\
=== Spaceship Survival Game Instructions ===
Navigate through the spaceship, avoiding hazards and defeating the alien.

Controls:
  - 'n': Move North
  - 's': Move South
  - 'e': Move East
  - 'w': Move West
  - 'f': Attack (Use your equipped weapon)
  - 'h': Display this help message
  - 'd': Toggle the debug map
  - 'q': Quit the game

Hazards:
  - Alien: Encounter it without preparation, and it's game over.
  - Exposed Wires: Staying in the room shocks you every turn.
  - Low Oxygen Rooms: Damage your health over time.

Weapons:
  - Knife: Close-range weapon. Too weak to kill the alien.
  - Gun: Medium-range weapon (requires ammo).
  - Flamethrower: Long-range and powerful (requires ammo).

Supplies:
  - Ammo: Reloads your ranged weapon.
  - Medkit: Restores some health.

Objectives:
  - Find weapons and treasures.
  - Rescue any survivors you find.
  - Avoid hazards.
  - Defeat the alien to win the game.
===========================================";

pub fn help_text() -> &'static str {
    HELP_TEXT
}
