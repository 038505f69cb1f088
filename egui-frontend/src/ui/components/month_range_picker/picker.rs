//! # Month Range Picker Widget
//!
//! A trigger button showing `"{start} to {end}"` that opens a popover with a
//! Start and an End month grid plus a quick-select list.
//!
//! ## Usage:
//! ```rust,ignore
//! let mut picker = MonthRangePicker::new("report_range");
//! picker.show(ui, &self.start, &self.end, |start, end| {
//!     self.pending_range = Some((start.to_string(), end.to_string()));
//! });
//! ```
//!
//! The caller owns the range. The picker only keeps its open/closed flag and
//! reports changes through `on_change_dates`.

use eframe::egui;
use shared::{PickerConfig, PickerView, ViewportClass};

use crate::ui::state::{PickerEvent, PickerState};

/// Popover-based start/end month picker
#[derive(Debug)]
pub struct MonthRangePicker {
    pub(super) id: egui::Id,
    pub(super) state: PickerState,
    pub(super) config: PickerConfig,
}

impl MonthRangePicker {
    /// Create a closed picker with the default configuration
    pub fn new(id_source: impl std::hash::Hash) -> Self {
        Self::with_config(id_source, PickerConfig::default())
    }

    /// Create a closed picker with explicit layout configuration
    pub fn with_config(id_source: impl std::hash::Hash, config: PickerConfig) -> Self {
        Self {
            id: egui::Id::new(id_source),
            state: PickerState::new(),
            config,
        }
    }

    /// Whether the popover is currently visible
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Render the picker for the caller's current range.
    ///
    /// `start` and `end` are expected in `YYYY-MM` form but are never
    /// validated. Returns the trigger button's response.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        start: &str,
        end: &str,
        mut on_change_dates: impl FnMut(&str, &str),
    ) -> egui::Response {
        let viewport = ViewportClass::from_width(ui.ctx().screen_rect().width(), &self.config);
        let view = PickerView::new(start, end, viewport, &self.config);
        let mut events = Vec::new();

        let trigger = self.render_trigger(ui, &view, &mut events);

        if self.state.is_open() {
            let popover = self.render_popover(ui.ctx(), trigger.rect, &view, &mut events);
            if Self::should_dismiss(ui.ctx(), &trigger, &popover) {
                events.push(PickerEvent::Dismissed);
            }
        }

        if !events.is_empty() {
            ui.ctx().request_repaint();
        }
        self.dispatch_events(events, &mut on_change_dates);

        trigger
    }
}
