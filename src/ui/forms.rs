//! Form screens: the field stack plus per-form summary lines.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};
use crate::forms::FormState;
use crate::helpers::format_currency;

use super::components::{calculate_input_field_height, render_input_field, InputFieldConfig};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_PENDING};

/// Index of the first field to draw so the focused one fits in `height`.
pub fn first_visible_field(form: &FormState, height: u16) -> usize {
    let heights: Vec<u16> = form
        .fields
        .iter()
        .map(|field| {
            let error = form
                .error
                .as_ref()
                .filter(|e| e.field == field.name)
                .map(|e| e.message.as_str());
            calculate_input_field_height(&InputFieldConfig::new(field).error(error))
        })
        .collect();

    let mut first = 0;
    let focus = form.focus.min(heights.len().saturating_sub(1));
    while first < focus && heights[first..=focus].iter().sum::<u16>() > height {
        first += 1;
    }
    first
}

/// Draw the fields of `form` top to bottom, scrolled to the focused one.
pub fn render_form_fields(frame: &mut Frame, area: Rect, form: &FormState) {
    let mut y = area.y;
    let bottom = area.y + area.height;

    // Errors for fields this form does not show go above the stack.
    if let Some(error) = &form.error {
        if !form.has_field(error.field) {
            let line = Line::from(vec![
                Span::styled("  \u{2717} ", Style::default().fg(COLOR_ERROR)),
                Span::styled(error.message.clone(), Style::default().fg(COLOR_ERROR)),
            ]);
            frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, 1));
            y += 2;
        }
    }

    let first = first_visible_field(form, bottom.saturating_sub(y));
    for (index, field) in form.fields.iter().enumerate().skip(first) {
        let error = form
            .error
            .as_ref()
            .filter(|e| e.field == field.name)
            .map(|e| e.message.as_str());
        let config = InputFieldConfig::new(field)
            .focused(index == form.focus)
            .error(error);
        let height = calculate_input_field_height(&config);
        if y + height > bottom {
            break;
        }
        y += render_input_field(frame, Rect::new(area.x, y, area.width, height), &config);
    }
}

/// Lines shown under the form heading, such as the net salary preview.
pub fn form_summary(app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    match &app.screen.view {
        View::LeaveForm(view) => {
            let days = view.form.leave_days();
            lines.push(Line::from(vec![
                Span::styled("  Days requested: ", Style::default().fg(COLOR_DIM)),
                Span::styled(days.to_string(), Style::default().fg(COLOR_ACCENT)),
            ]));
            let available = if app.capabilities().unlimited_leave_balance {
                "\u{221E}".to_string()
            } else {
                view.own_employee
                    .as_ref()
                    .map(|e| format!("{} days", e.displayed_leave_balance()))
                    .unwrap_or_else(|| "-".to_string())
            };
            lines.push(Line::from(vec![
                Span::styled("  Available balance: ", Style::default().fg(COLOR_DIM)),
                Span::styled(available, Style::default().fg(COLOR_ACCENT)),
            ]));
        }
        View::PayrollForm(form) => {
            lines.push(Line::from(vec![
                Span::styled("  Net salary: ", Style::default().fg(COLOR_DIM)),
                Span::styled(
                    format_currency(form.net_preview()),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        }
        _ => {}
    }
    lines
}

pub fn render_form_screen(frame: &mut Frame, area: Rect, app: &App) {
    let summary = form_summary(app);
    let Some(form) = app.form_state() else {
        return;
    };

    let mut top = area.y + 1;
    if form.submitting {
        frame.render_widget(
            Paragraph::new(Span::styled("  Saving...", Style::default().fg(COLOR_PENDING))),
            Rect::new(area.x, top, area.width, 1),
        );
        top += 1;
    }
    if !summary.is_empty() {
        let height = summary.len() as u16;
        frame.render_widget(
            Paragraph::new(summary),
            Rect::new(area.x, top, area.width, height.min(area.height)),
        );
        top += height + 1;
    }

    let fields_area = Rect::new(
        area.x,
        top.min(area.y + area.height),
        area.width.min(72),
        (area.y + area.height).saturating_sub(top),
    );
    render_form_fields(frame, fields_area, form);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{DepartmentForm, EmployeeForm};

    #[test]
    fn test_first_field_when_everything_fits() {
        let form = DepartmentForm::create();
        assert_eq!(first_visible_field(&form.state, 40), 0);
    }

    #[test]
    fn test_scrolls_to_focused_field() {
        let mut form = EmployeeForm::create();
        let last = form.state.fields.len() - 1;
        form.state.focus = last;
        let first = first_visible_field(&form.state, 8);
        // Two four-row fields fit in eight rows.
        assert_eq!(first, last - 1);
    }
}
