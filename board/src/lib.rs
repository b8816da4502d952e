//! HTTP host for the neighborhood watch board.

pub mod config;
pub mod logging;
pub mod web;

pub use config::Config;
pub use logging::init_logging;
pub use web::{app, spawn_initial_tip, AppState};
