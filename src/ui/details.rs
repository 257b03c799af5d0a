//! Read-only record screens: employee profile and payslip.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::views::{PayrollDetailsView, ProfileView};
use crate::helpers::{
    calculate_leave_days, format_currency, format_date, format_optional_date,
    format_optional_date_time, period_label,
};

use super::helpers::{leave_status_style, payroll_status_style, value_style};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

const LABEL_WIDTH: usize = 16;

/// "Label: value" with a dimmed dash for missing values.
fn field_line(label: &str, value: Option<String>) -> Line<'static> {
    let present = value.as_deref().is_some_and(|v| !v.is_empty());
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", format!("{}:", label), width = LABEL_WIDTH),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            value.filter(|_| present).unwrap_or_else(|| "-".to_string()),
            value_style(present),
        ),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ))
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

fn dim(text: &str) -> Line<'static> {
    Line::from(Span::styled(format!("    {}", text), Style::default().fg(COLOR_DIM)))
}

pub fn render_profile(frame: &mut Frame, area: Rect, view: &ProfileView, ctx: &LayoutContext) {
    let Some(employee) = &view.employee else {
        frame.render_widget(Paragraph::new(dim("No employee record.")), area);
        return;
    };

    let direction = if ctx.is_narrow() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let info = vec![
        Line::from(Span::styled(
            format!("  {}", employee.full_name()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Email", employee.email.clone()),
        field_line("Phone", employee.phone_number.clone()),
        field_line("Address", employee.address.clone()),
        field_line("Date of birth", employee.date_of_birth.map(format_date)),
        field_line("Hire date", Some(format_optional_date(employee.hire_date))),
        field_line("Department", employee.department_name.clone()),
        field_line("Job title", employee.job_title.clone()),
        field_line(
            "Leave balance",
            Some(format!("{} days", employee.displayed_leave_balance())),
        ),
    ];
    frame.render_widget(
        Paragraph::new(info).block(panel("Profile")).wrap(Wrap { trim: false }),
        chunks[0],
    );

    let mut history = vec![heading("Leave history")];
    if view.leaves.is_empty() {
        history.push(dim("No leave requests"));
    }
    for leave in &view.leaves {
        let days = calculate_leave_days(Some(leave.start_date), Some(leave.end_date));
        history.push(Line::from(vec![
            Span::raw(format!(
                "    {:<8} {} - {} ({}d)  ",
                leave.leave_type.as_str(),
                format_date(leave.start_date),
                format_date(leave.end_date),
                days
            )),
            Span::styled(leave.status.as_str(), leave_status_style(leave.status)),
        ]));
    }
    history.push(Line::from(""));
    history.push(heading("Payroll history"));
    if view.payrolls.is_empty() {
        history.push(dim("No payroll records"));
    }
    for payroll in &view.payrolls {
        history.push(Line::from(vec![
            Span::raw(format!(
                "    {:<16} {:>14}  ",
                period_label(payroll.month, payroll.year),
                format_currency(payroll.net_salary)
            )),
            Span::styled(payroll.status.as_str(), payroll_status_style(payroll.status)),
        ]));
    }
    frame.render_widget(Paragraph::new(history).block(panel("History")), chunks[1]);
}

fn amount_line(label: &str, amount: f64, sign: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw(format!("{}{:>16}", sign, format_currency(amount))),
    ])
}

/// Lines of a payslip, without the frame.
pub fn payslip_lines(view: &PayrollDetailsView) -> Vec<Line<'static>> {
    let Some(payroll) = &view.payroll else {
        return vec![dim("No payroll record.")];
    };
    let employee = view
        .employee
        .as_ref()
        .map(|e| e.full_name())
        .unwrap_or_else(|| format!("Employee #{}", payroll.employee_id));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  Payslip for {}", period_label(payroll.month, payroll.year)),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Employee", Some(employee)),
        field_line(
            "Department",
            view.employee.as_ref().and_then(|e| e.department_name.clone()),
        ),
        field_line(
            "Job title",
            view.employee.as_ref().and_then(|e| e.job_title.clone()),
        ),
        Line::from(""),
        heading("Earnings"),
        amount_line("Base salary", payroll.base_salary, " "),
        amount_line("Allowances", payroll.allowances, "+"),
        amount_line("Deductions", payroll.deductions, "-"),
        Line::from(Span::styled(
            format!("  {}", "\u{2500}".repeat(LABEL_WIDTH + 17)),
            Style::default().fg(COLOR_BORDER),
        )),
        Line::from(vec![
            Span::styled(
                format!("  {:<width$}", "Net salary", width = LABEL_WIDTH),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {:>16}", format_currency(payroll.net_salary)),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {:<width$}", "Status:", width = LABEL_WIDTH),
                Style::default().fg(COLOR_DIM),
            ),
            Span::styled(payroll.status.as_str(), payroll_status_style(payroll.status)),
        ]),
        field_line("Generated", Some(format_optional_date_time(payroll.generated_date))),
        field_line("Processed", Some(format_optional_date_time(payroll.processed_date))),
    ];
    if let Some(message) = payroll.ai_message.as_deref().filter(|m| !m.is_empty()) {
        lines.push(Line::from(""));
        lines.push(heading("Note"));
        lines.push(Line::from(format!("    {}", message)));
    }
    lines
}

pub fn render_payroll_details(frame: &mut Frame, area: Rect, view: &PayrollDetailsView) {
    let width = area.width.min(64);
    let area = Rect::new(area.x, area.y, width, area.height);
    frame.render_widget(
        Paragraph::new(payslip_lines(view))
            .block(panel("Payslip"))
            .wrap(Wrap { trim: false }),
        area,
    );
}
