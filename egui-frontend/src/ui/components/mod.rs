//! # UI Components Module
//!
//! ## Module Organization:
//! - `month_range_picker` - The month range picker widget (trigger, popover, grids, presets)
//! - `styling` - Global egui style and shared drawing helpers
//! - `theme` - Color configuration

pub mod month_range_picker;
pub mod styling;
pub mod theme;

pub use month_range_picker::MonthRangePicker;
pub use styling::{draw_pane_divider, popover_frame, setup_picker_style};
pub use theme::*;
