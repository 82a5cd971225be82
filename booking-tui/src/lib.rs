//! Booking TUI - terminal client for the Dongguk Restaurant reservation service
//!
//! Screens live in [`views`] as plain state machines, [`app`] routes between
//! them and runs backend calls, [`ui`] draws, and [`tui`] owns the terminal.

pub mod app;
pub mod config;
pub mod logger;
pub mod tui;
pub mod ui;
pub mod views;

pub use app::App;
pub use config::Cli;
pub use logger::{cleanup_old_logs, init_logger};
