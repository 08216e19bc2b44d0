//! The `argv-demo` program: option menu, defaults file and dispatch

pub mod config_file;
pub mod demo;

// Re-export types for convenient access
pub use config_file::DemoConfig;
pub use demo::{ColorWhen, DemoError, DemoOptions, HELP_TEXT, OutputFormat};
