//! Entry point for the egui-based TruthLens UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use truthlens::config::{self, AppSettings};
use truthlens::egui_app::controller::AnalyzerController;
use truthlens::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use truthlens::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_title("TruthLens AI")
        .with_inner_size([960.0, 820.0])
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "TruthLens",
        native_options,
        Box::new(|_cc| match load_settings() {
            Ok(settings) => {
                let controller = AnalyzerController::with_mock_engine(&settings);
                Ok(Box::new(EguiApp::new(controller)))
            }
            Err(err) => Ok(Box::new(LaunchError { message: err })),
        }),
    )?;
    Ok(())
}

/// Unreadable settings fall back to defaults; only an invalid file blocks startup.
fn load_settings() -> Result<AppSettings, String> {
    match config::load_or_default() {
        Ok(settings) => Ok(settings),
        Err(err @ config::ConfigError::ParseToml { .. }) => {
            Err(format!("Failed to load config: {err}"))
        }
        Err(err) => {
            tracing::warn!("Using default settings: {err}");
            Ok(AppSettings::default())
        }
    }
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start TruthLens");
                ui.label(&self.message);
            });
        });
    }
}
