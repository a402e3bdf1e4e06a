pub mod config;
pub mod loader;

pub use config::{PathSettings, Settings, SpeechSettings};
pub use loader::{load_settings, load_settings_from};

#[cfg(test)]
mod tests;
