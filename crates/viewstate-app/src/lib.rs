//! Viewstate demo shell
//!
//! Builds panels of view states from a JSON config and drives them with
//! key-style commands, keeping indicators and the hierarchy overlay in sync.

mod app;
mod commands;
mod config;

pub use app::{AppError, Session};
pub use commands::{Command, CommandRegistry, Shortcut};
pub use config::{AppConfig, ConfigError, PanelConfig};
