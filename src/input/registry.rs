//! Command registry for dispatching keyboard input to commands.
//!
//! Priority:
//! 1. Global bindings (Ctrl+C)
//! 2. Bindings for the current [`InputMode`]
//! 3. Mode fallbacks: digits jump the menu while browsing, editing keys
//!    go to the focused field or search box, and an open dialog swallows
//!    everything else.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::context::{InputContext, InputMode};
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::forms::FieldInput;

#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &KeybindingConfig {
        &self.config
    }

    /// Map a key event to a command for the current context.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, context: &InputContext) -> Option<Command> {
        let combo = KeyCombo::from_event(&key);

        if let Some(command) = self.config.get_global(&combo) {
            return Some(*command);
        }
        if let Some(command) = self.config.get_mode(context.mode, &combo) {
            return Some(*command);
        }

        match context.mode {
            InputMode::Confirm => Some(Command::Noop),
            InputMode::Form => field_input(&key).map(Command::Input),
            InputMode::Search => field_input(&key).map(Command::SearchInput),
            InputMode::Browse => match combo.code {
                KeyCode::Char(c @ '1'..='9') if combo.modifiers.is_empty() => {
                    let index = c as usize - '1' as usize;
                    (index < context.menu_len).then_some(Command::JumpMenu(index))
                }
                _ => None,
            },
        }
    }
}

/// Editing keys for a text or select field.
fn field_input(key: &KeyEvent) -> Option<FieldInput> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(FieldInput::Char(c)),
        KeyCode::Backspace => Some(FieldInput::Backspace),
        KeyCode::Delete => Some(FieldInput::Delete),
        KeyCode::Left => Some(FieldInput::Left),
        KeyCode::Right => Some(FieldInput::Right),
        KeyCode::Home => Some(FieldInput::Home),
        KeyCode::End => Some(FieldInput::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn dispatch(code: KeyCode, modifiers: KeyModifiers, mode: InputMode) -> Option<Command> {
        let context = InputContext::new().with_mode(mode).with_menu_len(4);
        CommandRegistry::new().dispatch(make_key_event(code, modifiers), &context)
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        for mode in [
            InputMode::Browse,
            InputMode::Search,
            InputMode::Form,
            InputMode::Confirm,
        ] {
            assert_eq!(
                dispatch(KeyCode::Char('c'), KeyModifiers::CONTROL, mode),
                Some(Command::Quit)
            );
        }
    }

    #[test]
    fn test_letters_type_in_forms() {
        assert_eq!(
            dispatch(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::Form),
            Some(Command::Input(FieldInput::Char('q')))
        );
        assert_eq!(
            dispatch(KeyCode::Char('Q'), KeyModifiers::SHIFT, InputMode::Search),
            Some(Command::SearchInput(FieldInput::Char('Q')))
        );
        assert_eq!(
            dispatch(KeyCode::Char('q'), KeyModifiers::NONE, InputMode::Browse),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_digits_jump_within_menu() {
        assert_eq!(
            dispatch(KeyCode::Char('2'), KeyModifiers::NONE, InputMode::Browse),
            Some(Command::JumpMenu(1))
        );
        assert_eq!(
            dispatch(KeyCode::Char('7'), KeyModifiers::NONE, InputMode::Browse),
            None
        );
    }

    #[test]
    fn test_confirm_swallows_other_keys() {
        assert_eq!(
            dispatch(KeyCode::Char('Y'), KeyModifiers::SHIFT, InputMode::Confirm),
            Some(Command::ConfirmYes)
        );
        assert_eq!(
            dispatch(KeyCode::Esc, KeyModifiers::NONE, InputMode::Confirm),
            Some(Command::ConfirmNo)
        );
        assert_eq!(
            dispatch(KeyCode::Char('d'), KeyModifiers::NONE, InputMode::Confirm),
            Some(Command::Noop)
        );
    }

    #[test]
    fn test_esc_clears_search_but_leaves_form() {
        assert_eq!(
            dispatch(KeyCode::Esc, KeyModifiers::NONE, InputMode::Search),
            Some(Command::ClearSearch)
        );
        assert_eq!(
            dispatch(KeyCode::Esc, KeyModifiers::NONE, InputMode::Form),
            Some(Command::Back)
        );
    }
}
