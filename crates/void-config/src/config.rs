//! Configuration structs with defaults, validation, and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use void_scene::DisplayMode;

use crate::error::ConfigError;

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scene: SceneConfig,
    pub demo: DemoConfig,
    pub debug: DebugConfig,
}

/// The scene's only external parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub mode: DisplayMode,
}

/// Headless demo run settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames to run before exiting (0 = run until interrupted).
    pub frames: u64,
    /// Frame pacing target in frames per second.
    pub target_fps: u32,
    /// Revolutions per second of the synthetic pointer path.
    pub pointer_orbit_hz: f32,
    /// Log camera state every this many frames (0 = never).
    pub report_every: u64,
    /// Re-read `config.ron` every this many frames (0 = never).
    pub reload_every: u64,
}

/// Debug/development settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g. "debug", "info,void_scene=trace").
    pub log_level: String,
    /// Seed for a reproducible star field. `None` draws from the thread RNG.
    pub star_seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 600,
            target_fps: 60,
            pointer_orbit_hz: 0.1,
            report_every: 60,
            reload_every: 60,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            star_seed: None,
        }
    }
}

impl Config {
    /// Check ranges that the type system cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.demo.target_fps == 0 {
            return Err(ConfigError::InvalidValue {
                field: "demo.target_fps",
                reason: "must be at least 1".to_string(),
            });
        }
        let hz = self.demo.pointer_orbit_hz;
        if !hz.is_finite() || hz < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "demo.pointer_orbit_hz",
                reason: format!("{hz} is not a finite non-negative rate"),
            });
        }
        Ok(())
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::ReadError {
                path: config_path.to_path_buf(),
                source,
            })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: config_path.to_path_buf(),
            source,
        })
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let write_error = |source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        };

        std::fs::create_dir_all(config_dir).map_err(write_error)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(write_error)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
