//! Organisation and personal dashboards.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::views::{AdminDashboardView, EmployeeDashboardView};
use crate::helpers::{format_currency, format_date, period_label};

use super::helpers::{leave_status_style, payroll_status_style};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// A bordered card with a big number and a caption.
fn render_stat_card(frame: &mut Frame, area: Rect, title: &str, value: String, caption: &str) {
    let block = Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption.to_string(), Style::default().fg(COLOR_DIM))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Split `area` into card slots, two or four per row.
fn card_slots(area: Rect, count: usize, ctx: &LayoutContext) -> Vec<Rect> {
    let per_row = if ctx.should_stack_cards() { 2 } else { 4 };
    let rows = count.div_ceil(per_row);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(4); rows])
        .split(area);
    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, per_row as u32); per_row])
                .split(*row)
                .to_vec()
        })
        .take(count)
        .collect()
}

fn welcome_line(welcome: &Option<String>) -> Paragraph<'static> {
    let text = welcome.clone().unwrap_or_default();
    Paragraph::new(Span::styled(text, Style::default().fg(COLOR_ACCENT))).wrap(Wrap { trim: true })
}

fn cards_height(count: usize, ctx: &LayoutContext) -> u16 {
    let per_row = if ctx.should_stack_cards() { 2 } else { 4 };
    count.div_ceil(per_row) as u16 * 4
}

pub fn render_admin_dashboard(
    frame: &mut Frame,
    area: Rect,
    view: &AdminDashboardView,
    ctx: &LayoutContext,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(cards_height(4, ctx)),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(welcome_line(&view.welcome), chunks[0]);

    let stats = &view.stats;
    let cards = [
        ("Employees", stats.total_employees, "total on record"),
        ("Active", stats.active_employees, "with leave balance"),
        ("Pending Leaves", stats.pending_leaves, "awaiting approval"),
        ("Recent Payrolls", stats.recent_payrolls, "in the last 30 days"),
    ];
    for ((title, value, caption), slot) in cards.into_iter().zip(card_slots(chunks[1], 4, ctx)) {
        render_stat_card(frame, slot, title, value.to_string(), caption);
    }

    let tips = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Use the menu to manage employees, approve leave and run payroll.",
            Style::default().fg(COLOR_DIM),
        )),
    ]);
    frame.render_widget(tips, chunks[2]);
}

pub fn render_employee_dashboard(
    frame: &mut Frame,
    area: Rect,
    view: &EmployeeDashboardView,
    ctx: &LayoutContext,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(cards_height(4, ctx)),
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(welcome_line(&view.welcome), chunks[0]);

    let stats = &view.stats;
    let cards = [
        ("Leave Balance", stats.leave_balance.to_string(), "days available"),
        ("Pending", stats.pending_leaves.to_string(), "leave requests"),
        ("Leaves Taken", stats.leaves_taken.to_string(), "approved"),
        ("Payslips", stats.recent_payrolls.to_string(), "in the last 30 days"),
    ];
    for ((title, value, caption), slot) in cards.into_iter().zip(card_slots(chunks[1], 4, ctx)) {
        render_stat_card(frame, slot, title, value, caption);
    }

    let mut lines = vec![Line::from("")];
    if view.employee.is_none() {
        lines.push(Line::from(Span::styled(
            "  No employee profile is linked to this account yet.",
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines.push(Line::from(Span::styled(
        "  Recent leave requests",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if view.recent_leaves.is_empty() {
        lines.push(Line::from(Span::styled("    None yet", Style::default().fg(COLOR_DIM))));
    }
    for leave in &view.recent_leaves {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "    {:<8} {} - {}  ",
                leave.leave_type.as_str(),
                format_date(leave.start_date),
                format_date(leave.end_date)
            )),
            Span::styled(leave.status.as_str(), leave_status_style(leave.status)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Recent payslips",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    if view.recent_payrolls.is_empty() {
        lines.push(Line::from(Span::styled("    None yet", Style::default().fg(COLOR_DIM))));
    }
    for payroll in &view.recent_payrolls {
        lines.push(Line::from(vec![
            Span::raw(format!(
                "    {:<16} {:>14}  ",
                period_label(payroll.month, payroll.year),
                format_currency(payroll.net_salary)
            )),
            Span::styled(payroll.status.as_str(), payroll_status_style(payroll.status)),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);
}
