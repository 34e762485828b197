//! Platform-specific configuration paths

use crate::error::{CliError, CliResult};
use std::path::PathBuf;

/// Configuration paths for the mediasweep CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base configuration directory
    pub config_dir: PathBuf,
    /// Path to config.json
    pub config_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the current platform
    ///
    /// Paths:
    /// - Linux: ~/.config/mediasweep/
    /// - macOS: ~/Library/Application Support/mediasweep/
    /// - Windows: %APPDATA%\mediasweep\
    pub fn new() -> CliResult<Self> {
        let config_dir = Self::get_config_dir()?;

        Ok(Self {
            config_file: config_dir.join("config.json"),
            config_dir,
        })
    }

    /// Get the configuration directory, respecting MEDIASWEEP_CONFIG_DIR env var
    fn get_config_dir() -> CliResult<PathBuf> {
        if let Ok(dir) = std::env::var("MEDIASWEEP_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            CliError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(base_dir.join("mediasweep"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_override() {
        std::env::set_var("MEDIASWEEP_CONFIG_DIR", "/tmp/mediasweep-test");
        let paths = ConfigPaths::new().unwrap();
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/mediasweep-test"));
        assert!(paths.config_file.ends_with("config.json"));
        std::env::remove_var("MEDIASWEEP_CONFIG_DIR");
    }
}
