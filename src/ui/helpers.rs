//! Rendering helpers shared by the screens.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_INFO, COLOR_PENDING, COLOR_SUCCESS};
use crate::models::{LeaveStatus, PayrollStatus};

/// Shrink a rect by `margin` on every side.
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Cut `s` to at most `max_width` display columns, ending in `...` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

pub fn leave_status_style(status: LeaveStatus) -> Style {
    Style::default().fg(match status {
        LeaveStatus::Pending => COLOR_PENDING,
        LeaveStatus::Approved => COLOR_SUCCESS,
        LeaveStatus::Rejected => COLOR_ERROR,
        LeaveStatus::Unknown => COLOR_DIM,
    })
}

pub fn payroll_status_style(status: PayrollStatus) -> Style {
    Style::default().fg(match status {
        PayrollStatus::Pending => COLOR_PENDING,
        PayrollStatus::Processed => COLOR_INFO,
        PayrollStatus::Paid => COLOR_SUCCESS,
        PayrollStatus::Unknown => COLOR_DIM,
    })
}

/// Style for a value that may be missing.
pub fn value_style(present: bool) -> Style {
    if present {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(COLOR_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_columns() {
        assert_eq!(truncate_to_width("Engineering", 20), "Engineering");
        assert_eq!(truncate_to_width("Finance & Accounting", 10), "Finance...");
        // Wide characters take two columns each.
        assert_eq!(truncate_to_width("日本語テキスト", 9), "日本語...");
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(area, 80, 40), area);
    }

    #[test]
    fn test_inner_rect() {
        assert_eq!(inner_rect(Rect::new(2, 2, 10, 6), 1), Rect::new(3, 3, 8, 4));
    }
}
