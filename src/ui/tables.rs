//! List screens rendered as tables with a search line and filters.

use std::collections::HashMap;

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::views::{ApprovalView, EmployeesView, LeavesView, ListView, PayrollsView};
use crate::helpers::{calculate_leave_days, format_currency, format_date, format_optional_date, month_name};
use crate::models::{Department, JobRole, LeaveRequest};

use super::components::{render_status_indicator, StatusIndicatorType};
use super::helpers::{leave_status_style, payroll_status_style, truncate_to_width, value_style};
use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_SELECTED_BG};

/// One table: headings, widths and body rows.
struct TableSpec<'a> {
    headers: Vec<&'static str>,
    widths: Vec<Constraint>,
    rows: Vec<Row<'a>>,
}

/// The "/ search" line plus any filter labels, one row tall.
fn render_toolbar<T>(frame: &mut Frame, area: Rect, list: &ListView<T>, filters: Vec<Span<'static>>) {
    let mut spans = Vec::new();
    if list.searching || !list.search_term().is_empty() {
        let mut term = list.search_term().to_string();
        if list.searching {
            term.push('\u{2588}');
        }
        spans.push(Span::styled(" Search: ", Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(term, Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::raw("   "));
    }
    spans.extend(filters);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn filter_span(label: &str, value: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(COLOR_DIM)),
        Span::styled(value.to_string(), Style::default().fg(COLOR_ACCENT)),
    ]
}

/// Draw the table, or an empty-state line, under a one-row toolbar.
fn render_table(frame: &mut Frame, area: Rect, spec: TableSpec, selected: usize, ctx: &LayoutContext) {
    let body = Rect::new(area.x, area.y + 1, area.width, area.height.saturating_sub(1));
    if spec.rows.is_empty() {
        let lines = render_status_indicator(&StatusIndicatorType::info("No records found"));
        frame.render_widget(Paragraph::new(lines), body);
        return;
    }

    let header = Row::new(
        spec.headers
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .style(Style::default().fg(COLOR_DIM));

    let table = Table::new(spec.rows, spec.widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER)),
        )
        .row_highlight_style(Style::default().bg(COLOR_SELECTED_BG).fg(COLOR_ACCENT))
        .highlight_symbol("\u{25B8} ");

    let visible = ctx.max_visible_rows(body.height).max(1);
    let mut state = TableState::default()
        .with_selected(Some(selected))
        .with_offset((selected + 1).saturating_sub(visible));
    frame.render_stateful_widget(table, body, &mut state);
}

fn cell(text: impl AsRef<str>, ctx: &LayoutContext) -> Cell<'static> {
    Cell::from(truncate_to_width(text.as_ref(), ctx.max_cell_length()))
}

fn optional_cell(text: Option<&str>, ctx: &LayoutContext) -> Cell<'static> {
    match text {
        Some(text) if !text.is_empty() => cell(text, ctx),
        _ => Cell::from("-").style(value_style(false)),
    }
}

/// Employee name for a leave or payroll row.
fn employee_label(names: &HashMap<i64, String>, id: i64, fallback: Option<&str>) -> String {
    names
        .get(&id)
        .cloned()
        .or_else(|| fallback.map(str::to_string))
        .unwrap_or_else(|| format!("#{}", id))
}

pub fn render_employees(frame: &mut Frame, area: Rect, view: &EmployeesView, ctx: &LayoutContext) {
    let sort = format!("{} {}", view.sort.key.label(), view.sort.direction.arrow());
    render_toolbar(frame, area, &view.list, filter_span("Sort", &sort));

    let secondary = ctx.should_show_secondary_columns();
    let mut headers = vec!["Name", "Department", "Job Title", "Balance"];
    let mut widths = vec![
        Constraint::Percentage(28),
        Constraint::Percentage(24),
        Constraint::Percentage(24),
        Constraint::Length(8),
    ];
    if secondary {
        headers.extend(["Email", "Hired"]);
        widths = vec![
            Constraint::Percentage(20),
            Constraint::Percentage(16),
            Constraint::Percentage(16),
            Constraint::Length(8),
            Constraint::Percentage(24),
            Constraint::Length(13),
        ];
    }

    let rows = view
        .rows()
        .into_iter()
        .map(|e| {
            let mut cells = vec![
                cell(e.full_name(), ctx),
                optional_cell(e.department_name.as_deref(), ctx),
                optional_cell(e.job_title.as_deref(), ctx),
                Cell::from(e.displayed_leave_balance().to_string()),
            ];
            if secondary {
                cells.push(optional_cell(e.email.as_deref(), ctx));
                cells.push(Cell::from(format_optional_date(e.hire_date)));
            }
            Row::new(cells)
        })
        .collect();

    render_table(frame, area, TableSpec { headers, widths, rows }, view.list.selected, ctx);
}

pub fn render_departments(frame: &mut Frame, area: Rect, list: &ListView<Department>, ctx: &LayoutContext) {
    render_toolbar(frame, area, list, Vec::new());
    let rows = list
        .visible()
        .into_iter()
        .map(|d| {
            Row::new(vec![
                cell(&d.department_name, ctx),
                optional_cell(d.description.as_deref(), ctx),
            ])
        })
        .collect();
    let spec = TableSpec {
        headers: vec!["Department", "Description"],
        widths: vec![Constraint::Percentage(35), Constraint::Percentage(65)],
        rows,
    };
    render_table(frame, area, spec, list.selected, ctx);
}

pub fn render_job_roles(frame: &mut Frame, area: Rect, list: &ListView<JobRole>, ctx: &LayoutContext) {
    render_toolbar(frame, area, list, Vec::new());
    let rows = list
        .visible()
        .into_iter()
        .map(|r| {
            Row::new(vec![
                cell(&r.job_title, ctx),
                Cell::from(format_currency(r.base_salary)),
                optional_cell(r.description.as_deref(), ctx),
            ])
        })
        .collect();
    let spec = TableSpec {
        headers: vec!["Job Title", "Base Salary", "Description"],
        widths: vec![
            Constraint::Percentage(30),
            Constraint::Length(16),
            Constraint::Percentage(50),
        ],
        rows,
    };
    render_table(frame, area, spec, list.selected, ctx);
}

fn leave_cells(leave: &LeaveRequest, ctx: &LayoutContext) -> Vec<Cell<'static>> {
    let days = calculate_leave_days(Some(leave.start_date), Some(leave.end_date));
    vec![
        Cell::from(leave.leave_type.as_str()),
        Cell::from(format_date(leave.start_date)),
        Cell::from(format_date(leave.end_date)),
        Cell::from(days.to_string()),
        optional_cell(leave.reason.as_deref(), ctx),
    ]
}

const LEAVE_WIDTHS: [Constraint; 5] = [
    Constraint::Length(8),
    Constraint::Length(13),
    Constraint::Length(13),
    Constraint::Length(5),
    Constraint::Min(10),
];

pub fn render_leaves(
    frame: &mut Frame,
    area: Rect,
    view: &LeavesView,
    show_employee: bool,
    ctx: &LayoutContext,
) {
    let status = view.status_filter.map_or("All", |s| s.as_str());
    render_toolbar(frame, area, &view.list, filter_span("Status", status));

    let mut headers = Vec::new();
    let mut widths = Vec::new();
    if show_employee {
        headers.push("Employee");
        widths.push(Constraint::Percentage(20));
    }
    headers.extend(["Type", "From", "To", "Days", "Reason", "Status"]);
    widths.extend(LEAVE_WIDTHS);
    widths.push(Constraint::Length(9));

    let rows = view
        .rows()
        .into_iter()
        .map(|leave| {
            let mut cells = Vec::new();
            if show_employee {
                let name = employee_label(&view.names, leave.employee_id, leave.employee_name.as_deref());
                cells.push(cell(name, ctx));
            }
            cells.extend(leave_cells(leave, ctx));
            cells.push(Cell::from(leave.status.as_str()).style(leave_status_style(leave.status)));
            Row::new(cells)
        })
        .collect();

    render_table(frame, area, TableSpec { headers, widths, rows }, view.list.selected, ctx);
}

pub fn render_approvals(frame: &mut Frame, area: Rect, view: &ApprovalView, ctx: &LayoutContext) {
    let pending = format!("{} pending", view.list.items.len());
    render_toolbar(frame, area, &view.list, filter_span("Queue", &pending));

    let mut widths = vec![Constraint::Percentage(20)];
    widths.extend(LEAVE_WIDTHS);
    let rows = view
        .list
        .visible()
        .into_iter()
        .map(|leave| {
            let name = employee_label(&view.names, leave.employee_id, leave.employee_name.as_deref());
            let mut cells = vec![cell(name, ctx)];
            cells.extend(leave_cells(leave, ctx));
            Row::new(cells)
        })
        .collect();
    let spec = TableSpec {
        headers: vec!["Employee", "Type", "From", "To", "Days", "Reason"],
        widths,
        rows,
    };
    render_table(frame, area, spec, view.list.selected, ctx);
}

pub fn render_payrolls(
    frame: &mut Frame,
    area: Rect,
    view: &PayrollsView,
    show_employee: bool,
    ctx: &LayoutContext,
) {
    let month = view.month.map_or("All", month_name);
    let year = view.year.map_or_else(|| "All".to_string(), |y| y.to_string());
    let mut filters = filter_span("Month", month);
    filters.extend(filter_span("Year", &year));
    render_toolbar(frame, area, &view.list, filters);

    let secondary = ctx.should_show_secondary_columns();
    let mut headers = Vec::new();
    let mut widths = Vec::new();
    if show_employee {
        headers.push("Employee");
        widths.push(Constraint::Percentage(20));
    }
    headers.extend(["Period", "Base"]);
    widths.extend([Constraint::Length(15), Constraint::Length(14)]);
    if secondary {
        headers.extend(["Allowances", "Deductions"]);
        widths.extend([Constraint::Length(14), Constraint::Length(14)]);
    }
    headers.extend(["Net", "Status"]);
    widths.extend([Constraint::Length(14), Constraint::Length(10)]);

    let rows = view
        .rows()
        .into_iter()
        .map(|p| {
            let mut cells = Vec::new();
            if show_employee {
                cells.push(cell(employee_label(&view.names, p.employee_id, None), ctx));
            }
            cells.push(Cell::from(crate::helpers::period_label(p.month, p.year)));
            cells.push(Cell::from(format_currency(p.base_salary)));
            if secondary {
                cells.push(Cell::from(format_currency(p.allowances)));
                cells.push(Cell::from(format_currency(p.deductions)));
            }
            cells.push(Cell::from(format_currency(p.net_salary)));
            cells.push(Cell::from(p.status.as_str()).style(payroll_status_style(p.status)));
            Row::new(cells)
        })
        .collect();

    render_table(frame, area, TableSpec { headers, widths, rows }, view.list.selected, ctx);
}
