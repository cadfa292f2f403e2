//! Platform directory resolution for config and log files.

use std::io;
use std::path::PathBuf;

/// Errors that can occur during platform operations.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    #[error("platform I/O error: {0}")]
    Io(#[from] io::Error),
}

/// OS-specific directories for the demo.
///
/// XDG on Linux, Known Folders on Windows, Library on macOS.
#[derive(Debug, Clone)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "deep-void";

impl PlatformDirs {
    /// Resolve directories without touching the filesystem.
    ///
    /// An explicit `config_override` replaces the OS config location; logs then
    /// go to a `logs` directory beside it.
    pub fn resolve(config_override: Option<PathBuf>) -> Result<Self, PlatformError> {
        if let Some(config_dir) = config_override {
            let log_dir = config_dir.join("logs");
            return Ok(Self {
                config_dir,
                log_dir,
            });
        }

        let app_config = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);
        let log_dir = dirs::cache_dir()
            .map(|cache| cache.join(APP_NAME))
            .unwrap_or_else(|| app_config.clone())
            .join("logs");

        Ok(Self {
            config_dir: app_config,
            log_dir,
        })
    }

    /// Resolve and create both directories.
    pub fn resolve_and_create(config_override: Option<PathBuf>) -> Result<Self, PlatformError> {
        let dirs = Self::resolve(config_override)?;
        std::fs::create_dir_all(&dirs.config_dir)?;
        std::fs::create_dir_all(&dirs.log_dir)?;
        Ok(dirs)
    }
}
