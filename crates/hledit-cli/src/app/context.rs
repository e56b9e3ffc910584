//! Application context for the hledit CLI.
//!
//! Bundles CLI arguments with lazily-loaded configuration.

use once_cell::unsync::OnceCell;
use tracing::debug;

use hledit_core::{DirStore, Session};

use crate::cli::Cli;
use crate::config::HleditConfig;

use super::resolver::{load_config, resolve_store_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<HleditConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Check if color was disabled on the command line.
    pub fn no_color(&self) -> bool {
        self.cli.no_color
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&HleditConfig> {
        self.config.get_or_try_init(load_config)
    }

    /// Open the store and load the session from it.
    pub fn open_session(&self) -> anyhow::Result<Session<DirStore>> {
        let config = self.config()?;
        let root = resolve_store_path(self.cli, config)?;
        debug!(store = %root.display(), "opening store");
        let store = DirStore::open(root)?;
        Ok(Session::load(store, config.rewrite_options())?)
    }
}
