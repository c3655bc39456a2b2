use crate::config::AppConfig;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Logs go to the configured file. Without one they go to stderr in headless
/// mode and are dropped otherwise, since the TUI owns the terminal.
pub fn init(config: &AppConfig, headless: bool) -> Result<()> {
    let default_level = if config.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| eyre!("Failed to install logger: {e}"))?;
    } else if headless {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| eyre!("Failed to install logger: {e}"))?;
    }

    Ok(())
}
