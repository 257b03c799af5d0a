//! The signed-in frame: header, sidebar menu, alert banner and key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{AlertKind, App, View};
use crate::input::InputMode;

use super::layout::LayoutContext;
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS,
};

// ============================================================================
// Header Section
// ============================================================================

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(10),
            Constraint::Min(1),
            Constraint::Length(40),
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        "paydesk",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(brand, chunks[1]);

    let title = Paragraph::new(Span::styled(
        app.screen.route.title(),
        Style::default().fg(COLOR_ACCENT),
    ));
    frame.render_widget(title, chunks[2]);

    if let Some(user) = app.session.user() {
        let info = Paragraph::new(Line::from(vec![
            Span::styled(user.username.clone(), Style::default().fg(COLOR_ACCENT)),
            Span::styled(format!(" ({})", user.role), Style::default().fg(COLOR_DIM)),
        ]))
        .alignment(ratatui::layout::Alignment::Right);
        frame.render_widget(info, chunks[3]);
    }
}

// ============================================================================
// Sidebar
// ============================================================================

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let active = app.active_menu_index();
    let lines: Vec<Line> = app
        .menu()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let selected = active == Some(i);
            let marker = if selected { "\u{25B8} " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(format!("{} ", i + 1), Style::default().fg(COLOR_DIM)),
                Span::styled(item.label, style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Alert Banner
// ============================================================================

/// Height of the banner row; zero when there is nothing to show.
pub fn alert_height(app: &App) -> u16 {
    u16::from(app.alert.is_some())
}

pub fn render_alert(frame: &mut Frame, area: Rect, app: &App) {
    let Some(alert) = &app.alert else {
        return;
    };
    let (icon, color) = match alert.kind {
        AlertKind::Success => ("\u{2713}", COLOR_SUCCESS),
        AlertKind::Error => ("\u{2717}", COLOR_ERROR),
    };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", icon), Style::default().fg(color)),
        Span::styled(alert.message.clone(), Style::default().fg(color)),
        Span::styled("  [Esc] dismiss", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Keybind Hints
// ============================================================================

/// Key hints for the current screen and input mode.
pub fn keybind_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let caps = app.capabilities();
    match app.build_input_context().mode {
        InputMode::Confirm => return vec![("y", "confirm"), ("n", "cancel")],
        InputMode::Search => {
            return vec![("Enter", "keep filter"), ("Esc", "clear"), ("\u{2191}\u{2193}", "move")]
        }
        InputMode::Form => {
            let mut hints = vec![("Tab", "next field"), ("\u{2190}\u{2192}", "choose"), ("Enter", "submit")];
            match app.screen.view {
                View::Login(_) => hints.push(("Ctrl+R", "register")),
                View::Register(_) => hints.push(("Ctrl+R", "sign in")),
                _ => hints.push(("Esc", "cancel")),
            }
            return hints;
        }
        InputMode::Browse => {}
    }

    let mut hints: Vec<(&'static str, &'static str)> = Vec::new();
    match &app.screen.view {
        View::Employees(_) => {
            hints.extend([("/", "search"), ("Enter", "profile"), ("n", "new"), ("e", "edit")]);
            hints.extend([("d", "delete"), ("s", "sort"), ("o", "order")]);
        }
        View::Departments(_) | View::JobRoles(_) => {
            hints.extend([("/", "search"), ("n", "new"), ("e", "edit"), ("d", "delete")]);
        }
        View::Leaves(_) => {
            hints.extend([("/", "search"), ("f", "status"), ("n", "apply")]);
            if !caps.view_all_leaves {
                hints.push(("c", "cancel request"));
            }
        }
        View::LeaveApproval(_) => hints.extend([("a", "approve"), ("x", "reject")]),
        View::Payrolls(_) => {
            hints.extend([("Enter", "details"), ("m", "month"), ("y", "year")]);
            if caps.generate_payroll {
                hints.push(("n", "generate"));
            }
            if caps.process_payroll {
                hints.push(("p", "process"));
            }
        }
        View::PayrollDetails(_) if caps.process_payroll => hints.push(("p", "process")),
        View::EmployeeProfile(_) => hints.push(("e", "edit")),
        _ => {}
    }
    hints.extend([("Tab", "menu"), ("r", "reload"), ("Ctrl+L", "sign out"), ("q", "quit")]);
    hints
}

pub fn render_footer(frame: &mut Frame, area: Rect, app: &App, ctx: &LayoutContext) {
    let mut spans = Vec::new();
    for (key, action) in keybind_hints(app) {
        if ctx.is_extra_small() && spans.len() >= 8 {
            break;
        }
        spans.push(Span::styled(format!(" [{}]", key), Style::default().fg(COLOR_ACCENT)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(COLOR_DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
