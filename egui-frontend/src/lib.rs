//! egui month range picker: a popover for choosing a start and end month,
//! plus the YAML-backed configuration store used by the demo host.

pub mod config_store;
pub mod ui;

pub use ui::components::MonthRangePicker;
