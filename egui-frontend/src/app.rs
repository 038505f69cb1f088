//! # App Module
//!
//! Demo host for the month range picker. Owns the selected range the way a
//! report page would and hands it to the picker every frame.

use eframe::egui;
use log::info;
use month_range_picker_egui::ui::{setup_picker_style, MonthRangePicker};
use shared::{PickerConfig, YearMonth};

/// Main application struct for the picker demo
pub struct MonthRangeDemoApp {
    picker: MonthRangePicker,

    /// Range owned by the host, in `YYYY-MM` form
    start: String,
    end: String,
}

impl MonthRangeDemoApp {
    /// Create the demo with a year-to-date range.
    ///
    /// Nothing here fails yet. The `Result` is where restoring a saved range
    /// from eframe storage will report a bad value.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PickerConfig) -> anyhow::Result<Self> {
        info!("🚀 Initializing MonthRangeDemoApp");

        setup_picker_style(&cc.egui_ctx);

        let current = YearMonth::current();

        Ok(Self {
            picker: MonthRangePicker::with_config("report_range", config),
            start: current.start_of_year().to_string(),
            end: current.to_string(),
        })
    }

    /// Store a range reported by the picker
    fn apply_range(&mut self, start: String, end: String) {
        info!("📅 Applying range {} to {}", start, end);
        self.start = start;
        self.end = end;
    }
}

/// "Mar 2024" for a valid `YYYY-MM`, otherwise the raw string
fn describe_month(date: &str) -> String {
    match date.parse::<YearMonth>() {
        Ok(month) => format!("{} {}", month.label(), month.year()),
        Err(_) => date.to_string(),
    }
}

impl eframe::App for MonthRangeDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut changed: Option<(String, String)> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Reports");
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.label("Date range:");
                self.picker.show(ui, &self.start, &self.end, |start, end| {
                    changed = Some((start.to_string(), end.to_string()));
                });
            });

            ui.add_space(12.0);
            ui.label(format!(
                "Showing {} through {}",
                describe_month(&self.start),
                describe_month(&self.end)
            ));
        });

        if let Some((start, end)) = changed {
            self.apply_range(start, end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_month() {
        assert_eq!(describe_month("2024-03"), "Mar 2024");
        assert_eq!(describe_month("1999-12"), "Dec 1999");
        assert_eq!(describe_month("2024-00"), "2024-00");
        assert_eq!(describe_month(""), "");
    }
}
