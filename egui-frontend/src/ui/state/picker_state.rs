//! # Picker State Module
//!
//! The month range picker's only persistent state: whether its popover is
//! open. Everything else is recomputed from the caller's range each frame.
//!
//! ## Responsibilities:
//! - Popover open/closed flag
//! - Applying interaction events collected during a frame
//! - Reporting range changes for the caller's `on_change_dates` callback

use log::{debug, info};
use shared::{QuickSelectPreset, RangeSide};

/// Direction of a year stepper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStep {
    Previous,
    Next,
}

impl YearStep {
    /// Arrow glyph shown on the stepper button
    pub fn glyph(self) -> &'static str {
        match self {
            YearStep::Previous => "←",
            YearStep::Next => "→",
        }
    }
}

/// Interactions the picker can receive during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The range trigger button was pressed
    TriggerPressed,
    /// Click outside the popover or an explicit close request
    Dismissed,
    /// A month button in one of the grids was pressed (zero-based index)
    MonthPressed { side: RangeSide, month_index: usize },
    /// A year stepper was pressed
    YearStepped { side: RangeSide, step: YearStep },
    /// A quick-select preset was pressed
    PresetPressed(QuickSelectPreset),
}

/// New range to hand to the caller's `on_change_dates`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeChange {
    pub start: String,
    pub end: String,
}

/// Widget-local state for one picker instance
#[derive(Debug, Default)]
pub struct PickerState {
    /// Whether the popover is currently visible
    is_open: bool,
}

impl PickerState {
    /// Create picker state with the popover closed
    pub fn new() -> Self {
        Self { is_open: false }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Apply one interaction, returning a range change if the caller should
    /// be notified.
    ///
    /// Month buttons, year steppers and presets are not connected to any
    /// range computation yet, so they never produce a change.
    pub fn apply(&mut self, event: PickerEvent) -> Option<RangeChange> {
        match event {
            PickerEvent::TriggerPressed => {
                self.is_open = !self.is_open;
                info!("📅 Month range popover {}", if self.is_open { "opened" } else { "closed" });
                None
            }
            PickerEvent::Dismissed => {
                if self.is_open {
                    info!("📅 Month range popover dismissed");
                }
                self.is_open = false;
                None
            }
            PickerEvent::MonthPressed { side, month_index } => {
                debug!("Month {} pressed in {:?} grid (not wired)", month_index + 1, side);
                None
            }
            PickerEvent::YearStepped { side, step } => {
                debug!("Year stepper {:?} pressed for {:?} (not wired)", step, side);
                None
            }
            PickerEvent::PresetPressed(preset) => {
                debug!("Preset '{}' pressed (not wired)", preset.label());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!PickerState::new().is_open());
        assert!(!PickerState::default().is_open());
    }

    #[test]
    fn test_trigger_toggles_open_and_closed() {
        let mut state = PickerState::new();

        assert_eq!(state.apply(PickerEvent::TriggerPressed), None);
        assert!(state.is_open());

        assert_eq!(state.apply(PickerEvent::TriggerPressed), None);
        assert!(!state.is_open());
    }

    #[test]
    fn test_dismiss_always_closes() {
        let mut state = PickerState::new();
        state.apply(PickerEvent::Dismissed);
        assert!(!state.is_open());

        state.apply(PickerEvent::TriggerPressed);
        assert!(state.is_open());
        state.apply(PickerEvent::Dismissed);
        assert!(!state.is_open());

        state.apply(PickerEvent::Dismissed);
        assert!(!state.is_open());
    }

    #[test]
    fn test_unwired_controls_report_no_change() {
        let mut state = PickerState::new();
        state.apply(PickerEvent::TriggerPressed);

        for side in [RangeSide::Start, RangeSide::End] {
            for month_index in 0..12 {
                assert_eq!(state.apply(PickerEvent::MonthPressed { side, month_index }), None);
            }
            for step in [YearStep::Previous, YearStep::Next] {
                assert_eq!(state.apply(PickerEvent::YearStepped { side, step }), None);
            }
        }
        for preset in QuickSelectPreset::ALL {
            assert_eq!(state.apply(PickerEvent::PresetPressed(preset)), None);
        }

        // None of those presses should close the popover either
        assert!(state.is_open());
    }

    #[test]
    fn test_year_step_glyphs() {
        assert_eq!(YearStep::Previous.glyph(), "←");
        assert_eq!(YearStep::Next.glyph(), "→");
    }
}
