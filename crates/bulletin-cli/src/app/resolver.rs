//! Path and setting resolution.

use std::path::PathBuf;

use chrono_tz::Tz;

use crate::config::{default_config_path, default_store_path, BulletinConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Config file path: `BULLETIN_CONFIG`, else the XDG default.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Store directory: `--store`/`BULLETIN_STORE`, then config, then the XDG default.
pub fn resolve_store_path(
    flag: Option<&PathBuf>,
    config: &BulletinConfig,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_store_path()
}

pub fn parse_timezone(name: &str) -> Result<Tz, CliError> {
    name.trim().parse::<Tz>().map_err(|_| {
        CliError::invalid_input(format!(
            "Unknown timezone in config: {} (expected an IANA name such as Europe/Berlin)",
            name
        ))
    })
}
