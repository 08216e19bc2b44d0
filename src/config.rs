//! Scanner settings and help-text rendering

pub mod settings;

pub use settings::{DEFAULT_PLACEHOLDER, Settings};
