mod app;
pub mod config;
mod effects;
mod location;
pub mod logging;
mod ui;

pub use app::run_app;
pub use location::{Location, DEFAULT_LOCATION};
