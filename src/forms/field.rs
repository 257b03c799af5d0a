//! Editable form fields and the focus model shared by every form.

use chrono::NaiveDate;

use crate::error::ValidationError;

/// Single-line text input with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    content: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let mut field = Self::new();
        field.set_content(content);
        field
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the content and move the cursor to the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Returns true if the content changed.
    pub fn apply(&mut self, input: FieldInput) -> bool {
        match input {
            FieldInput::Char(c) => self.insert_char(c),
            FieldInput::Backspace => self.backspace(),
            FieldInput::Delete => self.delete_char(),
            FieldInput::Left => {
                self.move_cursor_left();
                return false;
            }
            FieldInput::Right => {
                self.move_cursor_right();
                return false;
            }
            FieldInput::Home => {
                self.move_cursor_home();
                return false;
            }
            FieldInput::End => {
                self.move_cursor_end();
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: i64,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: i64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// Choice among loaded options; `None` means nothing selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectField {
    options: Vec<SelectOption>,
    selected: Option<usize>,
    /// Value asked for before its option was loaded.
    pending: Option<i64>,
    /// Whether cycling can return to "nothing selected".
    optional: bool,
}

impl SelectField {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            selected: None,
            pending: None,
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Replace the options, keeping the selected value if it still exists.
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        let keep = self.value().or(self.pending);
        self.options = options;
        self.select_value(keep);
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn select_value(&mut self, value: Option<i64>) {
        self.selected = value.and_then(|v| self.options.iter().position(|o| o.value == v));
        self.pending = if self.selected.is_none() { value } else { None };
    }

    pub fn value(&self) -> Option<i64> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.value)
    }

    pub fn label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.label.as_str())
    }

    /// Cycle forward; optional fields pass through "nothing selected".
    pub fn next(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.pending = None;
        self.selected = match self.selected {
            None => Some(0),
            Some(i) if i + 1 < self.options.len() => Some(i + 1),
            Some(_) if self.optional => None,
            Some(_) => Some(0),
        };
    }

    pub fn previous(&mut self) {
        if self.options.is_empty() {
            return;
        }
        let last = self.options.len() - 1;
        self.pending = None;
        self.selected = match self.selected {
            None => Some(last),
            Some(0) if self.optional => None,
            Some(0) => Some(last),
            Some(i) => Some(i - 1),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(TextField),
    Select(SelectField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Stable key used by validation errors and lookups.
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub masked: bool,
    pub placeholder: Option<&'static str>,
}

impl Field {
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(TextField::new()),
            masked: false,
            placeholder: None,
        }
    }

    pub fn date(name: &'static str, label: &'static str) -> Self {
        Self::text(name, label).with_placeholder("YYYY-MM-DD")
    }

    pub fn password(name: &'static str, label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::text(name, label)
        }
    }

    pub fn select(name: &'static str, label: &'static str, select: SelectField) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Select(select),
            masked: false,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        if let FieldValue::Text(field) = &mut self.value {
            field.set_content(text);
        }
        self
    }
}

/// Key input routed to the focused field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldInput {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Ordered fields, focus, and the last validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: Vec<Field>,
    pub focus: usize,
    pub error: Option<ValidationError>,
    pub submitting: bool,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focus: 0,
            error: None,
            submitting: false,
        }
    }

    fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Text content of a text field; empty for unknown or select fields.
    pub fn text(&self, name: &str) -> &str {
        match self.field(name).map(|f| &f.value) {
            Some(FieldValue::Text(text)) => text.content(),
            _ => "",
        }
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        if let Some(FieldValue::Text(text)) = self.field_mut(name).map(|f| &mut f.value) {
            text.set_content(value);
        }
    }

    pub fn select(&self, name: &str) -> Option<&SelectField> {
        match self.field(name).map(|f| &f.value) {
            Some(FieldValue::Select(select)) => Some(select),
            _ => None,
        }
    }

    pub fn select_mut(&mut self, name: &str) -> Option<&mut SelectField> {
        match self.field_mut(name).map(|f| &mut f.value) {
            Some(FieldValue::Select(select)) => Some(select),
            _ => None,
        }
    }

    pub fn selected(&self, name: &str) -> Option<i64> {
        self.select(name).and_then(SelectField::value)
    }

    pub fn set_selected(&mut self, name: &str, value: Option<i64>) {
        if let Some(select) = self.select_mut(name) {
            select.select_value(value);
        }
    }

    pub fn set_options(&mut self, name: &str, options: Vec<SelectOption>) {
        if let Some(select) = self.select_mut(name) {
            select.set_options(options);
        }
    }

    pub fn focused_name(&self) -> Option<&'static str> {
        self.fields.get(self.focus).map(|f| f.name)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn focus_field(&mut self, name: &str) {
        if let Some(index) = self.fields.iter().position(|f| f.name == name) {
            self.focus = index;
        }
    }

    /// Apply a key to the focused field. Returns true if a value changed.
    pub fn handle_input(&mut self, input: FieldInput) -> bool {
        let Some(field) = self.fields.get_mut(self.focus) else {
            return false;
        };
        let changed = match &mut field.value {
            FieldValue::Text(text) => text.apply(input),
            FieldValue::Select(select) => match input {
                FieldInput::Right | FieldInput::Char(' ') => {
                    select.next();
                    true
                }
                FieldInput::Left => {
                    select.previous();
                    true
                }
                _ => false,
            },
        };
        if changed {
            self.error = None;
        }
        changed
    }

    /// Record a validation failure and focus its field.
    pub fn fail(&mut self, error: ValidationError) {
        self.focus_field(error.field);
        self.error = Some(error);
    }
}

/// Parse an optional `YYYY-MM-DD` field.
///
/// Blank is `Ok(None)`; anything unparsable is an error naming the field.
pub fn parse_date(
    raw: &str,
    field: &'static str,
    label: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::new(field, format!("{} must be a date in YYYY-MM-DD format", label)))
}

/// Parse an optional amount; blank is zero.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
