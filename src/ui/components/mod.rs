//! Reusable UI Components
//!
//! - `InputField` - labelled form field with focus, masking and errors
//! - `StatusIndicator` - loading spinner, failure and empty states
//! - `DialogFrame` - centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{render_status_indicator, StatusIndicatorType};
