//! # View Model
//!
//! Everything the month range picker draws, derived from the caller's
//! `start`/`end` strings on every frame. Nothing here is stored between
//! frames; the only persistent widget state is whether the popover is open.

use crate::config::PickerConfig;
use crate::layout::{PopoverLayout, ViewportClass};
use crate::month::{display_year, is_selected_month, MONTH_LABELS};
use crate::preset::QuickSelectPreset;

/// Which end of the range a control belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeSide {
    Start,
    End,
}

impl RangeSide {
    /// Section title, rendered uppercase
    pub fn title(self) -> &'static str {
        match self {
            RangeSide::Start => "Start",
            RangeSide::End => "End",
        }
    }
}

/// Visual variant of a picker button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled, used for the selected month
    Primary,
    /// Frameless, used for everything else
    Bare,
}

/// One month button in a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    /// Zero-based month index
    pub index: usize,
    pub label: &'static str,
    pub variant: ButtonVariant,
}

/// A year stepper plus its 4x3 month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGridView<'a> {
    pub side: RangeSide,
    pub year: &'a str,
    pub cells: [MonthCell; 12],
}

impl<'a> MonthGridView<'a> {
    /// Grid for one side of the range, highlighting the month `date` ends in
    pub fn new(side: RangeSide, date: &'a str) -> Self {
        let cells = std::array::from_fn(|index| MonthCell {
            index,
            label: MONTH_LABELS[index],
            variant: if is_selected_month(date, index) {
                ButtonVariant::Primary
            } else {
                ButtonVariant::Bare
            },
        });

        Self {
            side,
            year: display_year(date),
            cells,
        }
    }

    /// Index of the highlighted month, if any
    pub fn selected_index(&self) -> Option<usize> {
        self.cells
            .iter()
            .find(|cell| cell.variant == ButtonVariant::Primary)
            .map(|cell| cell.index)
    }
}

/// Complete description of one picker render
#[derive(Debug, Clone, PartialEq)]
pub struct PickerView<'a> {
    pub trigger_label: String,
    pub start_grid: MonthGridView<'a>,
    pub end_grid: MonthGridView<'a>,
    pub presets: &'static [QuickSelectPreset],
    pub layout: PopoverLayout,
}

impl<'a> PickerView<'a> {
    pub fn new(start: &'a str, end: &'a str, viewport: ViewportClass, config: &PickerConfig) -> Self {
        Self {
            trigger_label: trigger_label(start, end),
            start_grid: MonthGridView::new(RangeSide::Start, start),
            end_grid: MonthGridView::new(RangeSide::End, end),
            presets: &QuickSelectPreset::ALL,
            layout: PopoverLayout::for_viewport(viewport, config),
        }
    }

    /// Grids in render order
    pub fn grids(&self) -> [&MonthGridView<'a>; 2] {
        [&self.start_grid, &self.end_grid]
    }
}

/// Text on the trigger button
pub fn trigger_label(start: &str, end: &str) -> String {
    format!("{} to {}", start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PaneDirection;

    fn wide_view<'a>(start: &'a str, end: &'a str) -> PickerView<'a> {
        PickerView::new(start, end, ViewportClass::Wide, &PickerConfig::default())
    }

    #[test]
    fn test_trigger_label() {
        assert_eq!(trigger_label("2024-01", "2024-06"), "2024-01 to 2024-06");
        assert_eq!(trigger_label("", ""), " to ");
    }

    #[test]
    fn test_march_is_the_only_selected_start_month() {
        let view = wide_view("2024-03", "2024-09");

        for cell in view.start_grid.cells.iter() {
            let expected = if cell.index == 2 { ButtonVariant::Primary } else { ButtonVariant::Bare };
            assert_eq!(cell.variant, expected, "unexpected variant for {}", cell.label);
        }
        assert_eq!(view.start_grid.selected_index(), Some(2));
        assert_eq!(view.end_grid.selected_index(), Some(8));
    }

    #[test]
    fn test_years_come_from_date_prefixes() {
        let view = wide_view("2021-05", "2023-02");
        assert_eq!(view.start_grid.year, "2021");
        assert_eq!(view.end_grid.year, "2023");
    }

    #[test]
    fn test_empty_dates_fall_back_without_selection() {
        let view = wide_view("", "");
        assert_eq!(view.start_grid.year, "2024");
        assert_eq!(view.end_grid.year, "2024");
        assert_eq!(view.start_grid.selected_index(), None);
        assert_eq!(view.end_grid.selected_index(), None);
    }

    #[test]
    fn test_malformed_dates_select_nothing() {
        let view = wide_view("March", "2024/04");
        assert_eq!(view.start_grid.year, "Marc");
        assert_eq!(view.start_grid.selected_index(), None);
        assert_eq!(view.end_grid.selected_index(), None);
    }

    #[test]
    fn test_grids_are_ordered_and_labelled() {
        let view = wide_view("2024-01", "2024-02");
        let [first, second] = view.grids();
        assert_eq!(first.side, RangeSide::Start);
        assert_eq!(second.side, RangeSide::End);
        assert_eq!(first.cells[0].label, "Jan");
        assert_eq!(first.cells[11].label, "Dec");
        assert_eq!(view.presets.len(), 8);
    }

    #[test]
    fn test_layout_follows_viewport() {
        let narrow = PickerView::new("2024-01", "2024-02", ViewportClass::Narrow, &PickerConfig::default());
        assert_eq!(narrow.layout.direction, PaneDirection::Column);
        assert_eq!(wide_view("2024-01", "2024-02").layout.direction, PaneDirection::Row);
    }
}
