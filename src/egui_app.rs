//! egui front end for the credibility analyzer.

/// Session controller and background analysis jobs.
pub mod controller;
/// Fixed guidance shown before the first analysis.
pub mod quick_tips;
/// UI-only state such as the status bar.
pub mod state;
/// egui renderer.
pub mod ui;
/// Session data mapped into view structs.
pub mod view_model;
