//! Input context for determining which commands are available.

/// Which part of the screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputMode {
    /// Screen-level shortcuts and list navigation
    #[default]
    Browse,
    /// Typing into a list's search box
    Search,
    /// Editing a form field
    Form,
    /// A yes/no dialog is open
    Confirm,
}

/// State the registry needs to map a key to a command.
#[derive(Debug, Clone, Default)]
pub struct InputContext {
    pub mode: InputMode,
    /// Number of sidebar entries, for the digit shortcuts.
    pub menu_len: usize,
}

impl InputContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_menu_len(mut self, menu_len: usize) -> Self {
        self.menu_len = menu_len;
        self
    }

    /// Whether typed characters go to a text input.
    pub fn captures_text(&self) -> bool {
        matches!(self.mode, InputMode::Search | InputMode::Form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_browse() {
        let ctx = InputContext::new();
        assert_eq!(ctx.mode, InputMode::Browse);
        assert!(!ctx.captures_text());
        assert!(InputContext::new().with_mode(InputMode::Search).captures_text());
    }
}
