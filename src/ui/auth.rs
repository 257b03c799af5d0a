//! Sign-in and registration screens.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::forms::render_form_fields;
use super::helpers::centered_rect;
use super::layout::LayoutContext;
use super::shell::{render_alert, render_footer};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_PENDING};

pub const PAYDESK_LOGO: &[&str] = &[
    "┌─┐┌─┐┬ ┬┌┬┐┌─┐┌─┐┬┌─",
    "├─┘├─┤└┬┘ ││├┤ └─┐├┴┐",
    "┴  ┴ ┴ ┴ ─┴┘└─┘└─┘┴ ┴",
];

pub fn render_auth_screen(frame: &mut Frame, app: &App, ctx: &LayoutContext) {
    let area = frame.area();
    let Some(form) = app.form_state() else {
        return;
    };
    let subtitle = match app.screen.view {
        View::Register(_) => "Create an employee account",
        _ => "Sign in to your account",
    };

    let field_rows: u16 = form.fields.len() as u16 * 4 + u16::from(form.error.is_some()) * 2;
    let card_height = field_rows + 6;
    let card_width = ctx.bounded_width(50, 36, 60);
    let logo_height = if ctx.is_short() { 0 } else { PAYDESK_LOGO.len() as u16 + 1 };

    let outer = centered_rect(area, card_width, card_height + logo_height + 2);

    if logo_height > 0 {
        let logo = Paragraph::new(PAYDESK_LOGO.join("\n"))
            .style(Style::default().fg(COLOR_HEADER))
            .alignment(Alignment::Center);
        frame.render_widget(logo, Rect::new(outer.x, outer.y, outer.width, logo_height));
    }

    let card = Rect::new(
        outer.x,
        outer.y + logo_height,
        outer.width,
        card_height.min(outer.height.saturating_sub(logo_height)),
    );
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.screen.route.title()),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut header = vec![Line::from(Span::styled(subtitle, Style::default().fg(COLOR_DIM)))];
    if form.submitting {
        header.push(Line::from(Span::styled(
            "Please wait...",
            Style::default().fg(COLOR_PENDING),
        )));
    }
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        Rect::new(inner.x, inner.y, inner.width, 2),
    );
    render_form_fields(
        frame,
        Rect::new(
            inner.x,
            inner.y + 2,
            inner.width,
            inner.height.saturating_sub(2),
        ),
        form,
    );

    let below = card.y + card.height;
    if below < area.y + area.height {
        render_alert(frame, Rect::new(card.x, below, card.width, 1), app);
    }
    if area.height > 0 {
        render_footer(
            frame,
            Rect::new(area.x, area.y + area.height - 1, area.width, 1),
            app,
            ctx,
        );
    }
}
