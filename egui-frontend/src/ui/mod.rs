//! # UI Module
//!
//! Re-exports the picker widget, its state and styling so hosts can simply
//! `use month_range_picker_egui::ui::*`.

pub mod components;
pub mod state;

pub use components::*;
pub use state::*;
