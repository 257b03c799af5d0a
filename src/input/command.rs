//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects. Which
//! screen a command applies to is decided when it executes.

use crate::forms::FieldInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application (Ctrl+C, q)
    Quit,
    /// Ask to sign out (Ctrl+L)
    Logout,
    /// Dismiss the banner, or leave for the parent screen (Esc)
    Back,
    /// Re-run the current screen's load (r)
    Reload,
    /// Consume the key without effect
    Noop,

    // =========================================================================
    // Menu Navigation
    // =========================================================================
    /// Next sidebar entry (Tab)
    NextMenu,
    /// Previous sidebar entry (Shift+Tab)
    PrevMenu,
    /// Sidebar entry by position (1-9)
    JumpMenu(usize),

    // =========================================================================
    // List Commands
    // =========================================================================
    MoveUp,
    MoveDown,
    /// Open the selected row (Enter)
    Open,
    /// Create a record on the current screen (n)
    New,
    /// Edit the selected or displayed record (e)
    Edit,
    /// Delete the selected row (d)
    Delete,
    /// Withdraw an own pending leave request (c)
    CancelLeave,
    /// Approve the selected leave request (a)
    Approve,
    /// Reject the selected leave request (x)
    Reject,
    /// Mark the selected payroll processed (p)
    Process,
    /// Sort by the next column (s)
    NextSort,
    /// Flip the sort direction (o)
    FlipSort,
    /// Cycle the status filter (f)
    CycleFilter,
    /// Cycle the month filter (m)
    CycleMonth,
    /// Cycle the year filter (y)
    CycleYear,

    // =========================================================================
    // Search Commands
    // =========================================================================
    /// Focus the search box (/)
    StartSearch,
    /// Leave the search box, keeping the filter (Enter)
    EndSearch,
    /// Clear the filter and leave the search box (Esc)
    ClearSearch,
    SearchInput(FieldInput),

    // =========================================================================
    // Form Commands
    // =========================================================================
    FocusNext,
    FocusPrev,
    Submit,
    Input(FieldInput),
    /// Swap between sign-in and registration (Ctrl+R)
    SwitchAuthScreen,

    // =========================================================================
    // Confirm Dialog
    // =========================================================================
    ConfirmYes,
    ConfirmNo,
}

impl Command {
    /// Whether executing this command can change what is drawn.
    pub fn marks_dirty(&self) -> bool {
        !matches!(self, Command::Noop)
    }
}
