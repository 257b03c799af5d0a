//! Keyboard input handling.
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> App::execute_command()
//! ```
//!
//! - [`command`] - every user action as a [`Command`]
//! - [`context`] - the [`InputContext`] the registry consults
//! - [`keybindings`] - default key bindings
//! - [`registry`] - [`CommandRegistry`] mapping keys to commands

pub mod command;
pub mod context;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::{InputContext, InputMode};
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
