use eframe::egui;
use shared::layout::metrics;
use shared::{ButtonVariant, MonthGridView, PaneDirection, PickerView, PopoverLayout, QuickSelectPreset};

use super::picker::MonthRangePicker;
use super::styling::{
    month_cell_width, picker_button, section_title, MONTH_BUTTON_HEIGHT, PRESET_BUTTON_HEIGHT, STEPPER_SIZE,
};
use crate::ui::components::styling::{draw_pane_divider, popover_frame};
use crate::ui::components::theme::CURRENT_THEME;
use crate::ui::state::{PickerEvent, YearStep};

/// Gap between the trigger button and the popover
const POPOVER_OFFSET: f32 = 4.0;

impl MonthRangePicker {
    /// Render the "{start} to {end}" trigger button
    pub(super) fn render_trigger(
        &self,
        ui: &mut egui::Ui,
        view: &PickerView<'_>,
        events: &mut Vec<PickerEvent>,
    ) -> egui::Response {
        let button = egui::Button::new(view.trigger_label.as_str())
            .stroke(egui::Stroke::new(1.0, CURRENT_THEME.trigger_border(self.is_open())));

        let response = ui.add(button);
        if response.clicked() {
            events.push(PickerEvent::TriggerPressed);
        }
        response
    }

    /// Render the popover below the trigger, aligned to its left edge
    pub(super) fn render_popover(
        &self,
        ctx: &egui::Context,
        trigger_rect: egui::Rect,
        view: &PickerView<'_>,
        events: &mut Vec<PickerEvent>,
    ) -> egui::Response {
        let layout = view.layout;
        let anchor = trigger_rect.left_bottom() + egui::vec2(0.0, POPOVER_OFFSET);

        egui::Area::new(self.id.with("popover"))
            .order(egui::Order::Foreground)
            .fixed_pos(anchor)
            .constrain(true)
            .show(ctx, |ui| {
                popover_frame().show(ui, |ui| {
                    ui.set_width(layout.popover_width);

                    match layout.direction {
                        PaneDirection::Row => {
                            ui.horizontal_top(|ui| {
                                ui.spacing_mut().item_spacing.x = 0.0;
                                self.render_month_pane(ui, view, events);
                                self.render_preset_pane(ui, &layout, view.presets, events);
                            });
                        }
                        PaneDirection::Column => {
                            ui.vertical(|ui| {
                                ui.spacing_mut().item_spacing.y = 0.0;
                                self.render_month_pane(ui, view, events);
                                self.render_preset_pane(ui, &layout, view.presets, events);
                            });
                        }
                    }
                });
            })
            .response
    }

    /// Start and End sections, with the divider on the edge facing the presets
    fn render_month_pane(&self, ui: &mut egui::Ui, view: &PickerView<'_>, events: &mut Vec<PickerEvent>) {
        let layout = view.layout;
        let pane_width = match (layout.direction, layout.preset_pane_width) {
            (PaneDirection::Row, Some(preset_width)) => layout.popover_width - preset_width,
            _ => layout.popover_width,
        };
        let content_width = (pane_width - 2.0 * metrics::PANE_PADDING).max(0.0);

        let pane = egui::Frame::none()
            .inner_margin(egui::Margin::same(metrics::PANE_PADDING))
            .show(ui, |ui| {
                ui.set_width(content_width);
                ui.spacing_mut().item_spacing.y = 0.0;

                let [start_grid, end_grid] = view.grids();
                self.render_month_section(ui, start_grid, content_width, events);
                ui.add_space(metrics::SECTION_GAP);
                self.render_month_section(ui, end_grid, content_width, events);
            });

        draw_pane_divider(ui.painter(), pane.response.rect, layout.divider);
    }

    /// Title, year stepper and month grid for one side of the range
    fn render_month_section(
        &self,
        ui: &mut egui::Ui,
        grid: &MonthGridView<'_>,
        content_width: f32,
        events: &mut Vec<PickerEvent>,
    ) {
        ui.label(section_title(grid.side.title()));
        ui.add_space(metrics::TITLE_MARGIN);

        self.render_year_navigation(ui, grid, events);
        ui.add_space(metrics::YEAR_NAV_MARGIN);

        self.render_month_grid(ui, grid, content_width, events);
    }

    /// "← 2024 →" row. The steppers report presses but change nothing.
    fn render_year_navigation(&self, ui: &mut egui::Ui, grid: &MonthGridView<'_>, events: &mut Vec<PickerEvent>) {
        let side = grid.side;
        let bare = ButtonVariant::Bare;

        ui.horizontal(|ui| {
            let stepper = |ui: &mut egui::Ui, step: YearStep, events: &mut Vec<PickerEvent>| {
                let response = picker_button(
                    ui,
                    STEPPER_SIZE,
                    step.glyph(),
                    bare,
                    metrics::MONTH_FONT_SIZE,
                    egui::Align2::CENTER_CENTER,
                );
                if response.clicked() {
                    events.push(PickerEvent::YearStepped { side, step });
                }
            };

            stepper(ui, YearStep::Previous, events);

            let label_width = (ui.available_width() - STEPPER_SIZE.x - ui.spacing().item_spacing.x).max(0.0);
            ui.allocate_ui_with_layout(
                egui::vec2(label_width, STEPPER_SIZE.y),
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    ui.label(
                        egui::RichText::new(grid.year)
                            .strong()
                            .color(CURRENT_THEME.typography.primary),
                    );
                },
            );

            stepper(ui, YearStep::Next, events);
        });
    }

    /// 4x3 grid of month buttons, the selected month drawn as primary
    fn render_month_grid(
        &self,
        ui: &mut egui::Ui,
        grid: &MonthGridView<'_>,
        content_width: f32,
        events: &mut Vec<PickerEvent>,
    ) {
        let cell_size = egui::vec2(month_cell_width(content_width), MONTH_BUTTON_HEIGHT);

        egui::Grid::new(self.id.with(("month_grid", grid.side)))
            .num_columns(metrics::GRID_COLUMNS)
            .spacing(egui::vec2(metrics::GRID_GAP, metrics::GRID_GAP))
            .show(ui, |ui| {
                for cell in grid.cells.iter() {
                    let response = picker_button(
                        ui,
                        cell_size,
                        cell.label,
                        cell.variant,
                        metrics::MONTH_FONT_SIZE,
                        egui::Align2::CENTER_CENTER,
                    );
                    if response.clicked() {
                        events.push(PickerEvent::MonthPressed {
                            side: grid.side,
                            month_index: cell.index,
                        });
                    }

                    if (cell.index + 1) % metrics::GRID_COLUMNS == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    /// "Quick Select" list of preset buttons
    fn render_preset_pane(
        &self,
        ui: &mut egui::Ui,
        layout: &PopoverLayout,
        presets: &[QuickSelectPreset],
        events: &mut Vec<PickerEvent>,
    ) {
        let pane_width = layout.preset_pane_width.unwrap_or(layout.popover_width);
        let content_width = (pane_width - 2.0 * metrics::PANE_PADDING).max(0.0);

        egui::Frame::none()
            .inner_margin(egui::Margin::same(metrics::PANE_PADDING))
            .show(ui, |ui| {
                ui.set_width(content_width);
                ui.spacing_mut().item_spacing.y = 0.0;

                ui.label(section_title("Quick Select"));
                ui.add_space(metrics::TITLE_MARGIN);

                for (i, preset) in presets.iter().enumerate() {
                    if i > 0 {
                        ui.add_space(metrics::GRID_GAP);
                    }
                    let response = picker_button(
                        ui,
                        egui::vec2(content_width, PRESET_BUTTON_HEIGHT),
                        preset.label(),
                        ButtonVariant::Bare,
                        metrics::PRESET_FONT_SIZE,
                        egui::Align2::LEFT_CENTER,
                    );
                    if response.clicked() {
                        events.push(PickerEvent::PresetPressed(*preset));
                    }
                }
            });
    }
}
