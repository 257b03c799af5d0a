//! Default keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use super::context::InputMode;

/// A key code with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Combo for a key event. Shift is dropped where it is already part
    /// of the code, as with uppercase letters and BackTab.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        Self::new(key.code, modifiers)
    }
}

#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Active in every mode
    pub global: HashMap<KeyCombo, Command>,
    pub mode: HashMap<InputMode, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            mode: HashMap::new(),
        };
        config
            .global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);

        config.setup_browse_bindings();
        config.setup_search_bindings();
        config.setup_form_bindings();
        config.setup_confirm_bindings();
        config
    }

    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    pub fn get_mode(&self, mode: InputMode, combo: &KeyCombo) -> Option<&Command> {
        self.mode.get(&mode).and_then(|bindings| bindings.get(combo))
    }

    fn bind(&mut self, mode: InputMode, combo: KeyCombo, command: Command) {
        self.mode.entry(mode).or_default().insert(combo, command);
    }

    fn setup_browse_bindings(&mut self) {
        use Command::*;
        let mode = InputMode::Browse;
        self.bind(mode, KeyCombo::ctrl(KeyCode::Char('l')), Logout);
        self.bind(mode, KeyCombo::plain(KeyCode::Tab), NextMenu);
        self.bind(mode, KeyCombo::plain(KeyCode::BackTab), PrevMenu);
        self.bind(mode, KeyCombo::plain(KeyCode::Esc), Back);
        self.bind(mode, KeyCombo::plain(KeyCode::Enter), Open);
        self.bind(mode, KeyCombo::plain(KeyCode::Up), MoveUp);
        self.bind(mode, KeyCombo::plain(KeyCode::Down), MoveDown);

        let letters = [
            ('q', Quit),
            ('r', Reload),
            ('k', MoveUp),
            ('j', MoveDown),
            ('/', StartSearch),
            ('n', New),
            ('e', Edit),
            ('d', Delete),
            ('c', CancelLeave),
            ('a', Approve),
            ('x', Reject),
            ('p', Process),
            ('s', NextSort),
            ('o', FlipSort),
            ('f', CycleFilter),
            ('m', CycleMonth),
            ('y', CycleYear),
        ];
        for (c, command) in letters {
            self.bind(mode, KeyCombo::plain(KeyCode::Char(c)), command);
        }
    }

    fn setup_search_bindings(&mut self) {
        let mode = InputMode::Search;
        self.bind(mode, KeyCombo::plain(KeyCode::Esc), Command::ClearSearch);
        self.bind(mode, KeyCombo::plain(KeyCode::Enter), Command::EndSearch);
        self.bind(mode, KeyCombo::plain(KeyCode::Up), Command::MoveUp);
        self.bind(mode, KeyCombo::plain(KeyCode::Down), Command::MoveDown);
    }

    fn setup_form_bindings(&mut self) {
        let mode = InputMode::Form;
        self.bind(mode, KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        self.bind(mode, KeyCombo::plain(KeyCode::Down), Command::FocusNext);
        self.bind(mode, KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        self.bind(mode, KeyCombo::plain(KeyCode::Up), Command::FocusPrev);
        self.bind(mode, KeyCombo::plain(KeyCode::Enter), Command::Submit);
        self.bind(mode, KeyCombo::plain(KeyCode::Esc), Command::Back);
        self.bind(
            mode,
            KeyCombo::ctrl(KeyCode::Char('r')),
            Command::SwitchAuthScreen,
        );
    }

    fn setup_confirm_bindings(&mut self) {
        let mode = InputMode::Confirm;
        for c in ['y', 'Y'] {
            self.bind(mode, KeyCombo::plain(KeyCode::Char(c)), Command::ConfirmYes);
        }
        self.bind(mode, KeyCombo::plain(KeyCode::Enter), Command::ConfirmYes);
        for c in ['n', 'N'] {
            self.bind(mode, KeyCombo::plain(KeyCode::Char(c)), Command::ConfirmNo);
        }
        self.bind(mode, KeyCombo::plain(KeyCode::Esc), Command::ConfirmNo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_folded_into_code() {
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeyCombo::from_event(&key), KeyCombo::plain(KeyCode::BackTab));
        let key = KeyEvent::new(KeyCode::Char('Y'), KeyModifiers::SHIFT);
        assert_eq!(KeyCombo::from_event(&key), KeyCombo::plain(KeyCode::Char('Y')));
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(KeyCombo::from_event(&key), KeyCombo::ctrl(KeyCode::Char('r')));
    }

    #[test]
    fn test_browse_letters_bound() {
        let config = KeybindingConfig::new();
        assert_eq!(
            config.get_mode(InputMode::Browse, &KeyCombo::plain(KeyCode::Char('d'))),
            Some(&Command::Delete)
        );
        assert_eq!(
            config.get_mode(InputMode::Form, &KeyCombo::plain(KeyCode::Char('d'))),
            None
        );
    }
}
