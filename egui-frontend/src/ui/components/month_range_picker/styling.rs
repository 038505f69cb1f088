use eframe::egui;
use shared::layout::metrics;
use shared::ButtonVariant;

use crate::ui::components::styling::BUTTON_ROUNDING;
use crate::ui::components::theme::{colors, CURRENT_THEME};

/// Height of a month button: font size plus vertical padding on both sides
pub const MONTH_BUTTON_HEIGHT: f32 = metrics::MONTH_FONT_SIZE + 2.0 * metrics::MONTH_BUTTON_PADDING.0;

/// Height of a quick-select preset row
pub const PRESET_BUTTON_HEIGHT: f32 = 24.0;

/// Size of a year stepper button
pub const STEPPER_SIZE: egui::Vec2 = egui::vec2(28.0, 24.0);

/// Horizontal inset of left-aligned button text
const TEXT_INSET: f32 = 8.0;

/// Uppercase, bold, subdued title above each popover section
pub fn section_title(title: &str) -> egui::RichText {
    egui::RichText::new(title.to_uppercase())
        .size(metrics::TITLE_FONT_SIZE)
        .strong()
        .color(colors::TEXT_SUBDUED)
}

/// Width of one month cell so four cells and their gaps fill `row_width`
pub fn month_cell_width(row_width: f32) -> f32 {
    let columns = metrics::GRID_COLUMNS as f32;
    ((row_width - metrics::GRID_GAP * (columns - 1.0)) / columns).max(0.0)
}

/// Paint a picker button in the given variant and return its response.
///
/// Primary buttons are always filled; bare buttons only show a background
/// while hovered.
pub fn picker_button(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    label: &str,
    variant: ButtonVariant,
    font_size: f32,
    align: egui::Align2,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let background = match CURRENT_THEME.button_fill(variant) {
            Some(fill) => fill,
            None if response.hovered() => colors::HOVER_BACKGROUND,
            None => egui::Color32::TRANSPARENT,
        };

        // Background first so the label stays on top
        ui.painter()
            .rect_filled(rect, egui::Rounding::same(BUTTON_ROUNDING), background);

        let text_pos = match align.x() {
            egui::Align::Min => egui::pos2(rect.left() + TEXT_INSET, rect.center().y),
            egui::Align::Center => rect.center(),
            egui::Align::Max => egui::pos2(rect.right() - TEXT_INSET, rect.center().y),
        };

        ui.painter().text(
            text_pos,
            align,
            label,
            egui::FontId::proportional(font_size),
            CURRENT_THEME.button_text(variant),
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_cells_fill_the_row() {
        let width = month_cell_width(330.0);
        assert_eq!(width * 4.0 + metrics::GRID_GAP * 3.0, 330.0);
    }

    #[test]
    fn test_month_cell_width_never_negative() {
        assert_eq!(month_cell_width(5.0), 0.0);
    }

    #[test]
    fn test_month_button_height() {
        assert_eq!(MONTH_BUTTON_HEIGHT, 28.0);
    }

    #[test]
    fn test_section_title_is_uppercase() {
        assert_eq!(section_title("Quick Select").text(), "QUICK SELECT");
    }
}
