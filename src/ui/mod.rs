//! User Interface module
//!
//! Plain line-based terminal front end.

pub mod console;
mod help;

pub use console::Console;
pub use help::help_text;
