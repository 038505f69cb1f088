use eframe::egui;
use log::{error, info, warn};
use month_range_picker_egui::config_store::ConfigStore;
use shared::PickerConfig;

mod app;

use app::MonthRangeDemoApp;

/// Load the picker config, falling back to defaults on any problem
fn load_picker_config() -> PickerConfig {
    let loaded = ConfigStore::from_project_dirs().and_then(|store| store.load_or_create());

    match loaded {
        Ok(config) => config,
        Err(e) => {
            warn!("Using default picker config: {:#}", e);
            PickerConfig::default()
        }
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting month range picker demo");

    let config = load_picker_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([320.0, 480.0])
            .with_title("Month Range Picker")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Month Range Picker",
        options,
        Box::new(|cc| match MonthRangeDemoApp::new(cc, config) {
            Ok(app) => {
                info!("Successfully initialized demo app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
