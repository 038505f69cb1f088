//! # Layout Module
//!
//! Maps a viewport classification to the popover's layout metrics. Kept free
//! of any UI toolkit types so the renderer only has to read numbers off a
//! [`PopoverLayout`].

use crate::config::PickerConfig;

/// Responsiveness classification of the host viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Narrow,
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width against the configured breakpoint
    pub fn from_width(width: f32, config: &PickerConfig) -> Self {
        if width < config.narrow_breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }
}

/// Direction the two popover panes are stacked in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneDirection {
    /// Month pane above the preset pane
    Column,
    /// Month pane left of the preset pane
    Row,
}

/// Edge of the month pane that carries the divider line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DividerEdge {
    Bottom,
    Right,
}

/// Fixed spacing shared by both viewport classes
pub mod metrics {
    /// Inner padding of each pane
    pub const PANE_PADDING: f32 = 15.0;
    /// Gap between the Start and End sections
    pub const SECTION_GAP: f32 = 20.0;
    /// Space below a section title
    pub const TITLE_MARGIN: f32 = 8.0;
    /// Font size of section titles
    pub const TITLE_FONT_SIZE: f32 = 12.0;
    /// Space below the year stepper row
    pub const YEAR_NAV_MARGIN: f32 = 10.0;
    /// Month grid columns (12 months -> 3 rows)
    pub const GRID_COLUMNS: usize = 4;
    /// Gap between month buttons and between preset buttons
    pub const GRID_GAP: f32 = 4.0;
    /// Font size of month buttons
    pub const MONTH_FONT_SIZE: f32 = 12.0;
    /// Vertical and horizontal padding inside a month button
    pub const MONTH_BUTTON_PADDING: (f32, f32) = (8.0, 4.0);
    /// Font size of preset buttons
    pub const PRESET_FONT_SIZE: f32 = 13.0;
}

/// Resolved layout for one render of the popover
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverLayout {
    pub popover_width: f32,
    pub direction: PaneDirection,
    pub divider: DividerEdge,
    /// Fixed preset pane width, `None` to size to the available space
    pub preset_pane_width: Option<f32>,
}

impl PopoverLayout {
    /// Layout for the given viewport class
    pub fn for_viewport(viewport: ViewportClass, config: &PickerConfig) -> Self {
        match viewport {
            ViewportClass::Narrow => Self {
                popover_width: config.narrow_popover_width,
                direction: PaneDirection::Column,
                divider: DividerEdge::Bottom,
                preset_pane_width: None,
            },
            ViewportClass::Wide => Self {
                popover_width: config.wide_popover_width,
                direction: PaneDirection::Row,
                divider: DividerEdge::Right,
                preset_pane_width: Some(config.wide_preset_pane_width),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_classification() {
        let config = PickerConfig::default();
        assert_eq!(ViewportClass::from_width(320.0, &config), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(729.9, &config), ViewportClass::Narrow);
        assert_eq!(ViewportClass::from_width(730.0, &config), ViewportClass::Wide);
        assert_eq!(ViewportClass::from_width(1600.0, &config), ViewportClass::Wide);
    }

    #[test]
    fn test_narrow_layout_stacks_panes() {
        let layout = PopoverLayout::for_viewport(ViewportClass::Narrow, &PickerConfig::default());
        assert_eq!(layout.popover_width, 300.0);
        assert_eq!(layout.direction, PaneDirection::Column);
        assert_eq!(layout.divider, DividerEdge::Bottom);
        assert_eq!(layout.preset_pane_width, None);
    }

    #[test]
    fn test_wide_layout_places_panes_side_by_side() {
        let layout = PopoverLayout::for_viewport(ViewportClass::Wide, &PickerConfig::default());
        assert_eq!(layout.popover_width, 500.0);
        assert_eq!(layout.direction, PaneDirection::Row);
        assert_eq!(layout.divider, DividerEdge::Right);
        assert_eq!(layout.preset_pane_width, Some(140.0));
    }

    #[test]
    fn test_layout_follows_config_overrides() {
        let config = PickerConfig {
            wide_popover_width: 620.0,
            wide_preset_pane_width: 180.0,
            ..PickerConfig::default()
        };
        let layout = PopoverLayout::for_viewport(ViewportClass::Wide, &config);
        assert_eq!(layout.popover_width, 620.0);
        assert_eq!(layout.preset_pane_width, Some(180.0));
    }
}
