//! Input Field Component
//!
//! A labelled form field with focus handling, password masking, select
//! arrows, and inline error display.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::forms::{Field, FieldValue};
use crate::ui::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_INPUT_BG};

/// Configuration for rendering an input field
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    pub field: &'a Field,
    pub focused: bool,
    /// Optional error message to display below the input
    pub error: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    pub fn new(field: &'a Field) -> Self {
        Self {
            field,
            focused: false,
            error: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }
}

/// Rows needed: label, bordered box, and the error line if present.
pub fn calculate_input_field_height(config: &InputFieldConfig) -> u16 {
    let mut height = 4;
    if config.error.is_some() {
        height += 1;
    }
    height
}

/// The text shown inside the box, and whether it is a placeholder.
fn display_value(config: &InputFieldConfig) -> (String, bool) {
    let field = config.field;
    match &field.value {
        FieldValue::Text(text) => {
            if text.content().is_empty() {
                return (field.placeholder.unwrap_or("").to_string(), true);
            }
            let mut shown: Vec<char> = if field.masked {
                vec!['\u{2022}'; text.content().chars().count()]
            } else {
                text.content().chars().collect()
            };
            if config.focused {
                shown.insert(text.cursor().min(shown.len()), '\u{2588}');
            }
            (shown.into_iter().collect(), false)
        }
        FieldValue::Select(select) => match select.label() {
            Some(label) if config.focused => (format!("\u{2039} {} \u{203a}", label), false),
            Some(label) => (label.to_string(), false),
            None if select.options().is_empty() => ("Loading...".to_string(), true),
            None => ("Select...".to_string(), true),
        },
    }
}

/// Render the field and return the height it consumed.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) -> u16 {
    let mut y_offset = 0;

    let label_style = if config.focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let label_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let label = Paragraph::new(Line::from(Span::styled(config.field.label, label_style)));
    frame.render_widget(label, label_area);
    y_offset += 1;

    let input_area = Rect {
        x: area.x + 2,
        y: area.y + y_offset,
        width: area.width.saturating_sub(4),
        height: 3,
    };

    let border_color = if config.error.is_some() {
        COLOR_ERROR
    } else if config.focused {
        Color::White
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let (content, is_placeholder) = display_value(config);
    let text_style = if is_placeholder || !config.focused {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(Color::White)
    };

    let input_text = Paragraph::new(Line::from(Span::styled(content, text_style))).block(block);
    frame.render_widget(input_text, input_area);
    y_offset += 3;

    if let Some(error) = config.error {
        let error_area = Rect {
            x: area.x + 2,
            y: area.y + y_offset,
            width: area.width.saturating_sub(4),
            height: 1,
        };

        let error_text = Paragraph::new(Line::from(vec![
            Span::styled("\u{2717} ", Style::default().fg(COLOR_ERROR)),
            Span::styled(error, Style::default().fg(COLOR_ERROR)),
        ]));

        frame.render_widget(error_text, error_area);
        y_offset += 1;
    }

    y_offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{SelectField, SelectOption, TextField};

    #[test]
    fn test_calculate_height_with_error() {
        let field = Field::text("reason", "Reason");
        let config = InputFieldConfig::new(&field);
        assert_eq!(calculate_input_field_height(&config), 4);
        let config = config.error(Some("Reason is required"));
        assert_eq!(calculate_input_field_height(&config), 5);
    }

    #[test]
    fn test_password_is_masked_with_cursor() {
        let mut field = Field::password("password", "Password");
        field.value = FieldValue::Text(TextField::with_content("abc"));
        let (shown, placeholder) = display_value(&InputFieldConfig::new(&field).focused(true));
        assert_eq!(shown, "\u{2022}\u{2022}\u{2022}\u{2588}");
        assert!(!placeholder);
    }

    #[test]
    fn test_empty_date_shows_placeholder() {
        let field = Field::date("startDate", "Start Date");
        let (shown, placeholder) = display_value(&InputFieldConfig::new(&field));
        assert_eq!(shown, "YYYY-MM-DD");
        assert!(placeholder);
    }

    #[test]
    fn test_select_shows_arrows_when_focused() {
        let mut select = SelectField::new(vec![SelectOption::new(1, "Engineering")]);
        select.select_value(Some(1));
        let field = Field::select("departmentId", "Department", select);
        let (shown, _) = display_value(&InputFieldConfig::new(&field).focused(true));
        assert_eq!(shown, "\u{2039} Engineering \u{203a}");
        let (shown, _) = display_value(&InputFieldConfig::new(&field));
        assert_eq!(shown, "Engineering");
    }
}
