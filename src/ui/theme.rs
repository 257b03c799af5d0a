//! Color theme constants for the paydesk UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights and the focused element
pub const COLOR_ACCENT: Color = Color::White;

pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Selected table row
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 35, 55);

// ============================================================================
// Status Colors
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_ERROR: Color = Color::Red;

/// Pending leave and payroll records
pub const COLOR_PENDING: Color = Color::Yellow;

/// Processed payroll records
pub const COLOR_INFO: Color = Color::Rgb(0, 122, 204); // blue #007ACC

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for the confirm dialog
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
