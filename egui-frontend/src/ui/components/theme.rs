//! # Theme Configuration
//!
//! Centralized color configuration for the month range picker. All painting
//! code reads colors from [`CURRENT_THEME`] so the picker can be reskinned in
//! one place.
//!
//! ## Usage
//! ```rust,ignore
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let fill = CURRENT_THEME.interactive.primary_background;
//! ```

use eframe::egui::Color32;
use shared::ButtonVariant;

/// Main theme configuration structure
#[derive(Debug, Clone)]
pub struct Theme {
    /// Button colors
    pub interactive: InteractiveColors,
    /// Popover container colors
    pub layout: LayoutColors,
    /// Text colors
    pub typography: TypographyColors,
}

/// Colors for buttons in their different variants
#[derive(Debug, Clone)]
pub struct InteractiveColors {
    /// Fill of a primary (selected) button
    pub primary_background: Color32,
    /// Text on a primary button
    pub primary_text: Color32,
    /// Text on a bare button
    pub bare_text: Color32,
    /// Background painted behind a hovered bare button
    pub hover_background: Color32,
    /// Outline of the trigger button
    pub trigger_border: Color32,
    /// Outline of the trigger button while the popover is open
    pub trigger_border_open: Color32,
}

/// Popover and divider colors
#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub popover_background: Color32,
    pub popover_border: Color32,
    pub popover_shadow: Color32,
    /// Line between the month pane and the preset pane
    pub table_border: Color32,
}

/// Text colors
#[derive(Debug, Clone)]
pub struct TypographyColors {
    /// Main text, including the year label
    pub primary: Color32,
    /// Section titles ("START", "END", "QUICK SELECT")
    pub subdued: Color32,
}

/// The active theme
pub const CURRENT_THEME: Theme = Theme {
    interactive: InteractiveColors {
        primary_background: Color32::from_rgb(79, 109, 245),
        primary_text: Color32::WHITE,
        bare_text: Color32::from_rgb(60, 60, 60),
        hover_background: Color32::from_rgb(238, 238, 244),
        trigger_border: Color32::from_rgb(220, 220, 220),
        trigger_border_open: Color32::from_rgb(126, 120, 229),
    },
    layout: LayoutColors {
        popover_background: Color32::WHITE,
        popover_border: Color32::from_rgb(220, 220, 220),
        popover_shadow: Color32::from_rgba_premultiplied(0, 0, 0, 20),
        table_border: Color32::from_rgb(229, 229, 234),
    },
    typography: TypographyColors {
        primary: Color32::from_rgb(60, 60, 60),
        subdued: Color32::from_rgb(130, 130, 140),
    },
};

impl Theme {
    /// Fill color for a button variant, `None` for frameless buttons
    pub fn button_fill(&self, variant: ButtonVariant) -> Option<Color32> {
        match variant {
            ButtonVariant::Primary => Some(self.interactive.primary_background),
            ButtonVariant::Bare => None,
        }
    }

    /// Text color for a button variant
    pub fn button_text(&self, variant: ButtonVariant) -> Color32 {
        match variant {
            ButtonVariant::Primary => self.interactive.primary_text,
            ButtonVariant::Bare => self.interactive.bare_text,
        }
    }

    /// Outline color of the trigger button
    pub fn trigger_border(&self, is_open: bool) -> Color32 {
        if is_open {
            self.interactive.trigger_border_open
        } else {
            self.interactive.trigger_border
        }
    }
}

/// Convenience constants for the most commonly used colors
pub mod colors {
    use super::CURRENT_THEME;
    use eframe::egui::Color32;

    pub const TEXT_PRIMARY: Color32 = CURRENT_THEME.typography.primary;
    pub const TEXT_SUBDUED: Color32 = CURRENT_THEME.typography.subdued;
    pub const HOVER_BACKGROUND: Color32 = CURRENT_THEME.interactive.hover_background;
    pub const TABLE_BORDER: Color32 = CURRENT_THEME.layout.table_border;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_buttons_are_filled() {
        assert_eq!(
            CURRENT_THEME.button_fill(ButtonVariant::Primary),
            Some(CURRENT_THEME.interactive.primary_background)
        );
        assert_eq!(CURRENT_THEME.button_fill(ButtonVariant::Bare), None);
    }

    #[test]
    fn test_button_text_contrasts_with_fill() {
        assert_ne!(
            CURRENT_THEME.button_text(ButtonVariant::Primary),
            CURRENT_THEME.interactive.primary_background
        );
        assert_eq!(CURRENT_THEME.button_text(ButtonVariant::Bare), colors::TEXT_PRIMARY);
    }
}
