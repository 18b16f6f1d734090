//! Library exports for the TruthLens UI, the headless CLI and tests.
/// Canonical records and the analysis engine.
pub mod analysis;
/// Application directory resolution.
pub mod app_dirs;
/// TOML settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Tracing subscriber setup.
pub mod logging;
/// Analysis session state machine.
pub mod session;
