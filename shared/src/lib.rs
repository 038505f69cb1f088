//! Toolkit-independent pieces of the month range picker: `YYYY-MM` helpers,
//! quick-select presets, layout resolution, configuration and the per-frame
//! view model the egui widget renders from.

pub mod config;
pub mod layout;
pub mod month;
pub mod preset;
pub mod view;

pub use config::{ConfigError, PickerConfig};
pub use layout::{DividerEdge, PaneDirection, PopoverLayout, ViewportClass};
pub use month::{display_year, is_selected_month, MonthParseError, YearMonth, FALLBACK_YEAR, MONTH_LABELS};
pub use preset::QuickSelectPreset;
pub use view::{trigger_label, ButtonVariant, MonthCell, MonthGridView, PickerView, RangeSide};
