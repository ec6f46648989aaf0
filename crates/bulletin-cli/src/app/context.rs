//! Application context: CLI arguments plus lazily loaded config.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use bulletin_core::storage::{FileStore, PostStore};

use crate::cli::Cli;
use crate::config::{read_config, BulletinConfig};
use crate::ui::{OutputFormat, UiContext};

use super::resolver::{parse_timezone, resolve_config_path, resolve_store_path};

/// Bundles the parsed arguments with the config they select.
///
/// A missing config file is the same as an empty one; a malformed one is
/// an error for any command that needs settings.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<BulletinConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    pub fn config(&self) -> anyhow::Result<&BulletinConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(BulletinConfig::default());
            }
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        resolve_store_path(self.cli.store.as_ref(), self.config()?)
    }

    /// Open the post store, creating its directory when needed.
    pub fn open_store(&self) -> anyhow::Result<PostStore<FileStore>> {
        let path = self.store_path()?;
        let store = FileStore::open(&path)
            .map_err(|e| anyhow::anyhow!("Cannot open store at {}: {}", path.display(), e))?;
        Ok(PostStore::new(store))
    }

    /// UI context for a command, with the configured display zone.
    pub fn ui(&self, json: bool, format: Option<OutputFormat>) -> anyhow::Result<UiContext> {
        let timezone = self
            .config()?
            .ui
            .timezone
            .as_deref()
            .map(parse_timezone)
            .transpose()?;
        Ok(
            UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
                .with_timezone(timezone),
        )
    }

    pub fn editor(&self) -> anyhow::Result<Option<&str>> {
        Ok(self.config()?.ui.editor.as_deref())
    }
}
