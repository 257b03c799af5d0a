//! Status Indicator Component
//!
//! Renders the loading, failed, not-found and empty states a screen shows
//! in place of its content.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::app::ScreenStatus;
use crate::ui::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PENDING};

const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

#[derive(Debug, Clone)]
pub enum StatusIndicatorType {
    /// Spinning indicator with a message
    Spinner { message: String, frame: usize },
    /// Failure with a recovery hint
    Error { header: String, hint: Option<String> },
    /// Info line, e.g. an empty table
    Info { message: String },
}

impl StatusIndicatorType {
    pub fn spinner(message: impl Into<String>, frame: usize) -> Self {
        Self::Spinner {
            message: message.into(),
            frame,
        }
    }

    pub fn error(header: impl Into<String>, hint: Option<String>) -> Self {
        Self::Error {
            header: header.into(),
            hint,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::Info {
            message: message.into(),
        }
    }

    /// The indicator for a screen that is not ready, if any.
    pub fn for_status(status: &ScreenStatus, frame: usize) -> Option<Self> {
        match status {
            ScreenStatus::Ready => None,
            ScreenStatus::Loading => Some(Self::spinner("Loading...", frame)),
            ScreenStatus::Failed { message, category } => Some(Self::error(
                message.clone(),
                Some(category.recovery_hint().to_string()),
            )),
            ScreenStatus::NotFound(message) => Some(Self::error(
                *message,
                Some("Press Esc to go back".to_string()),
            )),
        }
    }
}

pub fn get_spinner_char(frame: usize) -> char {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

/// Render a status indicator as lines
pub fn render_status_indicator(indicator: &StatusIndicatorType) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];

    match indicator {
        StatusIndicatorType::Spinner { message, frame } => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", get_spinner_char(*frame)),
                    Style::default().fg(COLOR_PENDING),
                ),
                Span::styled(
                    message.clone(),
                    Style::default()
                        .fg(COLOR_PENDING)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }

        StatusIndicatorType::Error { header, hint } => {
            lines.push(Line::from(vec![
                Span::styled("  \u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(
                    header.clone(),
                    Style::default()
                        .fg(COLOR_ERROR)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            if let Some(hint) = hint {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("    {}", hint),
                    Style::default().fg(Color::White),
                )));
            }
        }

        StatusIndicatorType::Info { message } => {
            lines.push(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines
}
