//! Bordered frame for modal dialogs, centered over whatever is beneath.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_BORDER, COLOR_DIALOG_BG, COLOR_HEADER};

/// Title and sizing bounds for a dialog.
#[derive(Debug, Clone)]
pub struct DialogFrameConfig<'a> {
    pub title: &'a str,
    /// Rows inside the border.
    pub content_height: u16,
    pub min_width: u16,
    pub max_width: u16,
}

impl<'a> DialogFrameConfig<'a> {
    pub fn new(title: &'a str, content_height: u16) -> Self {
        Self {
            title,
            content_height,
            min_width: 30,
            max_width: 60,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    fn width(&self, ctx: &LayoutContext, area_width: u16) -> u16 {
        let width = if ctx.is_extra_small() {
            area_width.saturating_sub(4).min(self.max_width)
        } else if ctx.is_narrow() {
            ctx.bounded_width(80, self.min_width, self.max_width)
        } else {
            ctx.bounded_width(50, self.min_width, self.max_width)
        };
        width.min(area_width)
    }

    /// Outer rectangle of the dialog, centered in `area`.
    fn placement(&self, ctx: &LayoutContext, area: Rect) -> Rect {
        let width = self.width(ctx, area.width);
        let height = (self.content_height + 2).min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

/// Clear the dialog's area, draw its border, and return the inner area.
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    config: &DialogFrameConfig,
) -> Rect {
    let dialog_area = config.placement(ctx, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);
    inner
}
