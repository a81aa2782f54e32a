use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// File logging for the session.
///
/// The terminal belongs to the TUI while the app runs, so log records only
/// ever go to a file. With logging disabled no logger is installed and the
/// `log` macros are no-ops.
#[derive(Debug, Clone, Default)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Install the global logger according to `[logging]`.
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        if config.enabled {
            Self::to_file(Self::get_log_file_path()?)
        } else {
            Ok(Self::default())
        }
    }

    /// Install a `fern` dispatch appending to `path`.
    pub fn to_file(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Debug)
            .level_for("reqwest", log::LevelFilter::Warn)
            .level_for("hyper", log::LevelFilter::Warn)
            .level_for("hyper_util", log::LevelFilter::Warn)
            .level_for("rustls", log::LevelFilter::Warn)
            .chain(file)
            .apply()
            .context("A global logger is already installed")?;

        log::info!("Logging to {}", path.display());
        Ok(Self { log_file: Some(path) })
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default log location under the XDG cache directory
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join("pexelist").join("pexelist.log"))
    }
}
