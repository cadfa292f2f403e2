//! Configuration for the deep void demo.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and detect
//! on-disk changes for hot reload. Every section falls back to defaults for
//! missing fields.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, DemoConfig, SceneConfig};
pub use error::ConfigError;
