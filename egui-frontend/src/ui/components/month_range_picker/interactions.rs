use eframe::egui;

use super::picker::MonthRangePicker;
use crate::ui::state::PickerEvent;

impl MonthRangePicker {
    /// Whether the open popover should close this frame.
    ///
    /// A click anywhere outside the popover counts, except on the trigger
    /// itself, which toggles instead. Escape is an explicit close request.
    pub(super) fn should_dismiss(ctx: &egui::Context, trigger: &egui::Response, popover: &egui::Response) -> bool {
        if trigger.clicked() {
            return false;
        }

        let close_requested = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        close_requested || popover.clicked_elsewhere()
    }

    /// Apply this frame's events in order, forwarding range changes to the
    /// caller's callback
    pub(crate) fn dispatch_events(&mut self, events: Vec<PickerEvent>, on_change_dates: &mut dyn FnMut(&str, &str)) {
        for event in events {
            if let Some(change) = self.state.apply(event) {
                log::info!("📅 Range changed: {} to {}", change.start, change.end);
                on_change_dates(&change.start, &change.end);
            }
        }
    }
}
