//! Configuration management for the mediasweep CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Settings;
