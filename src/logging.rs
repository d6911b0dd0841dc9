// used to install a global subscriber for the tracing macros
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Settings;
use crate::error::{DbAssayError, Result};

/// Installs a formatting subscriber; fails if one is already installed.
pub fn init(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter).map_err(|e| DbAssayError::Logging(e.to_string()))?;
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| DbAssayError::Logging(e.to_string()))
}

pub fn init_from(settings: &Settings) -> Result<()> {
    init(&settings.log_filter)
}
