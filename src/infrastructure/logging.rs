use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::Settings;
use crate::domain::{SiteError, SiteResult};

/// Installs the global tracing subscriber when a log file is configured.
///
/// The terminal belongs to the UI, so records only ever go to the file.
/// Returns whether a subscriber was installed.
pub fn init_logging(settings: &Settings) -> SiteResult<bool> {
    let Some(path) = &settings.log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| SiteError::Config(format!("logging: {err}")))?;

    Ok(true)
}
