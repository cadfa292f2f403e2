//! The binary entry point for the deep void demo.

use clap::Parser;
use tracing::error;
use void_app::demo;
use void_app::platform::{PlatformDirs, PlatformError};
use void_config::{CliArgs, Config, ConfigError};

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        error!("{e}");
        eprintln!("deep-void: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = PlatformDirs::resolve_and_create(args.config.clone())?;

    let on_disk = Config::load_or_create(&dirs.config_dir)?;
    let mut config = on_disk.clone();
    config.apply_cli_overrides(args);
    config.validate()?;

    void_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));
    tracing::info!(
        config = %dirs.config_dir.display(),
        logs = %dirs.log_dir.display(),
        "deep void starting"
    );

    let watcher = demo::ConfigWatcher::new(&dirs.config_dir, on_disk);
    demo::run(&config, Some(watcher));
    Ok(())
}
