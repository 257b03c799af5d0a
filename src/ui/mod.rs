//! UI rendering for paydesk.
//!
//! Signed-out routes draw a centered auth card. Every other route draws the
//! shell: a header, the sidebar menu, an alert banner, the screen body and
//! a line of key hints. A confirm dialog, when open, is drawn last over
//! everything else.
//!
//! ## Responsive Layout System
//!
//! Render functions receive a [`LayoutContext`] built from the frame size
//! and ask it for sizing decisions: whether to collapse the sidebar, drop
//! secondary table columns or stack dashboard cards.

mod auth;
mod components;
mod dashboards;
mod details;
mod forms;
mod helpers;
mod layout;
mod shell;
mod tables;
mod theme;

pub use layout::{breakpoints, LayoutContext, SizeCategory};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, View};
use components::{render_dialog_frame, render_status_indicator, DialogFrameConfig, StatusIndicatorType};
use theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let ctx = LayoutContext::from_rect(area);

    if app.screen.route.is_public() {
        auth::render_auth_screen(frame, app, &ctx);
    } else {
        render_shell(frame, area, app, &ctx);
    }

    render_confirm(frame, area, app, &ctx);
}

fn render_shell(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ctx.header_height()),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    shell::render_header(frame, rows[0], app);
    shell::render_footer(frame, rows[2], app, ctx);

    let sidebar_width = ctx.sidebar_width();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(rows[1]);
    if sidebar_width > 0 {
        shell::render_sidebar(frame, columns[0], app);
    }

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(shell::alert_height(app)),
            Constraint::Min(1),
        ])
        .split(columns[1]);
    shell::render_alert(frame, main[0], app);

    let body = helpers::inner_rect(main[1], 1);
    match StatusIndicatorType::for_status(&app.screen.status, app.tick_count as usize) {
        Some(indicator) => {
            frame.render_widget(Paragraph::new(render_status_indicator(&indicator)), body);
        }
        None => render_body(frame, body, app, ctx),
    }
}

fn render_body(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let caps = app.capabilities();
    match &app.screen.view {
        View::AdminDashboard(view) => dashboards::render_admin_dashboard(frame, area, view, ctx),
        View::EmployeeDashboard(view) => {
            dashboards::render_employee_dashboard(frame, area, view, ctx)
        }
        View::Employees(view) => tables::render_employees(frame, area, view, ctx),
        View::EmployeeProfile(view) => details::render_profile(frame, area, view, ctx),
        View::Departments(list) => tables::render_departments(frame, area, list, ctx),
        View::JobRoles(list) => tables::render_job_roles(frame, area, list, ctx),
        View::Leaves(view) => {
            tables::render_leaves(frame, area, view, caps.view_all_leaves, ctx)
        }
        View::LeaveApproval(view) => tables::render_approvals(frame, area, view, ctx),
        View::Payrolls(view) => {
            tables::render_payrolls(frame, area, view, caps.view_all_payrolls, ctx)
        }
        View::PayrollDetails(view) => details::render_payroll_details(frame, area, view),
        View::EmployeeForm(_)
        | View::DepartmentForm(_)
        | View::JobRoleForm(_)
        | View::LeaveForm(_)
        | View::PayrollForm(_) => forms::render_form_screen(frame, area, app),
        // Auth views only appear on public routes.
        View::Login(_) | View::Register(_) => {}
    }
}

fn render_confirm(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let Some(confirm) = &app.confirm else {
        return;
    };
    let config = DialogFrameConfig::new("Confirm", 4).min_width(36).max_width(56);
    let inner = render_dialog_frame(frame, area, ctx, &config);
    let lines = vec![
        Line::from(format!(" {}", confirm.prompt)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" [y]", Style::default().fg(COLOR_ACCENT)),
            Span::styled(" yes   ", Style::default().fg(COLOR_DIM)),
            Span::styled("[n]", Style::default().fg(COLOR_ACCENT)),
            Span::styled(" no", Style::default().fg(COLOR_DIM)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
