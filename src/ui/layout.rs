//! Responsive layout system.
//!
//! [`LayoutContext`] wraps the terminal dimensions and answers the sizing
//! questions the screens ask: how wide the sidebar is, whether it is shown
//! at all, how many table rows fit, and which columns to drop on a narrow
//! terminal.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Extra small terminal height (< 16 rows)
    pub const XS_HEIGHT: u16 = 16;
    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// < 60 columns
    ExtraSmall,
    /// < 80 columns
    Small,
    /// < 120 columns
    Medium,
    /// >= 120 columns
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions for responsive calculations.
///
/// ```ignore
/// let ctx = LayoutContext::new(120, 40);
/// let sidebar = ctx.sidebar_width();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.width, rect.height)
    }

    // ========================================================================
    // Percentage-Based Calculations
    // ========================================================================

    /// A width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage.min(100) as u32) / 100).max(1) as u16
    }

    /// Proportional width clamped to `min..=max`.
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        self.percent_width(percentage).clamp(min, max)
    }

    // ========================================================================
    // Size Category Detection
    // ========================================================================

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Less than 80 columns.
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    /// Less than 24 rows.
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_extra_small(&self) -> bool {
        self.width < breakpoints::XS_WIDTH || self.height < breakpoints::XS_HEIGHT
    }

    // ========================================================================
    // Layout Mode Decisions
    // ========================================================================

    /// Hide the sidebar below 60 columns; the digit keys still work.
    pub fn should_collapse_sidebar(&self) -> bool {
        self.width < breakpoints::XS_WIDTH
    }

    /// Drop secondary table columns (email, dates) on narrow terminals.
    pub fn should_show_secondary_columns(&self) -> bool {
        !self.is_narrow()
    }

    /// Stack dashboard cards two per row instead of four.
    pub fn should_stack_cards(&self) -> bool {
        self.width < breakpoints::MD_WIDTH
    }

    // ========================================================================
    // Component Sizes
    // ========================================================================

    pub fn sidebar_width(&self) -> u16 {
        if self.should_collapse_sidebar() {
            0
        } else {
            self.bounded_width(20, 18, 26)
        }
    }

    /// Header rows: title line plus border.
    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            2
        }
    }

    /// Table rows that fit in `body_height` after the header row and borders.
    pub fn max_visible_rows(&self, body_height: u16) -> usize {
        body_height.saturating_sub(3) as usize
    }

    /// Longest cell text for a primary column.
    pub fn max_cell_length(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 14,
            SizeCategory::Small => 20,
            SizeCategory::Medium => 28,
            SizeCategory::Large => 40,
        }
    }
}
