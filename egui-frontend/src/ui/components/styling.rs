//! # Styling Module
//!
//! Global egui style setup and the drawing helpers shared by the picker's
//! trigger and popover.
//!
//! ## Key Functions:
//! - `setup_picker_style()` - Configure global egui spacing and rounding
//! - `popover_frame()` - Card-style frame the popover content sits in
//! - `draw_pane_divider()` - Border between the month pane and preset pane

use eframe::egui;
use shared::DividerEdge;

use super::theme::{colors, CURRENT_THEME};

/// Corner radius for the popover card
pub const POPOVER_ROUNDING: f32 = 6.0;

/// Corner radius for picker buttons
pub const BUTTON_ROUNDING: f32 = 4.0;

/// Setup the global style used by the picker and its host window
pub fn setup_picker_style(ctx: &egui::Context) {
    ctx.set_style({
        let mut style = (*ctx.style()).clone();

        style.visuals.button_frame = true;
        style.visuals.override_text_color = Some(colors::TEXT_PRIMARY);

        style.spacing.button_padding = egui::vec2(8.0, 4.0);
        style.spacing.item_spacing = egui::vec2(4.0, 4.0);
        style.visuals.widgets.inactive.rounding = egui::Rounding::same(BUTTON_ROUNDING);
        style.visuals.widgets.active.rounding = egui::Rounding::same(BUTTON_ROUNDING);
        style.visuals.widgets.hovered.rounding = egui::Rounding::same(BUTTON_ROUNDING);

        style
    });
}

/// Card-style frame for the popover body.
///
/// Padding is applied per pane, so the frame itself has no inner margin.
pub fn popover_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(CURRENT_THEME.layout.popover_background)
        .stroke(egui::Stroke::new(1.0, CURRENT_THEME.layout.popover_border))
        .rounding(egui::Rounding::same(POPOVER_ROUNDING))
        .shadow(egui::epaint::Shadow {
            offset: egui::vec2(2.0, 4.0),
            blur: 12.0,
            spread: 0.0,
            color: CURRENT_THEME.layout.popover_shadow,
        })
        .inner_margin(egui::Margin::same(0.0))
}

/// Draw the 1px border on one edge of the month pane
pub fn draw_pane_divider(painter: &egui::Painter, pane_rect: egui::Rect, edge: DividerEdge) {
    let stroke = egui::Stroke::new(1.0, colors::TABLE_BORDER);
    let points = match edge {
        DividerEdge::Bottom => [pane_rect.left_bottom(), pane_rect.right_bottom()],
        DividerEdge::Right => [pane_rect.right_top(), pane_rect.right_bottom()],
    };
    painter.line_segment(points, stroke);
}
