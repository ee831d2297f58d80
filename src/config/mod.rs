//! Configuration loading.

pub mod settings;

pub use settings::{ApiSettings, Settings, SettingsError};
