//! CLI route: single route table and run context. Dispatches to the config store.

use crate::codec::{read_document, Format};
use crate::error::ConfigError;
use crate::store::ConfigStore;
use tracing::info;

use crate::cli::command_name;
use crate::cli::output::{parse_format, render_document, render_value};
use crate::cli::parse::{Cli, Commands};

/// Runtime context for CLI execution: the opened store for the selected application.
pub struct RunContext {
    store: ConfigStore,
}

impl RunContext {
    /// Open the store named by the global flags.
    pub fn new(cli: &Cli) -> Result<Self, ConfigError> {
        let template = cli.template.as_deref();
        let store = match cli.dir {
            Some(ref dir) => ConfigStore::open_in(dir, template, &cli.file)?,
            None => ConfigStore::open(&cli.app, template, &cli.file)?,
        };
        Ok(Self { store })
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&mut self, command: &Commands) -> Result<String, ConfigError> {
        info!(command = command_name(command), path = %self.store.path().display(), "Running command");
        match command {
            Commands::Show { format } => {
                let format = parse_format(format)?;
                render_document(&self.store.get(), format)
            }
            Commands::Get { key } => match self.store.value_at(key) {
                Some(value) => render_value(&value),
                None => Ok(String::new()),
            },
            Commands::Merge { patch } => {
                let document = read_document(patch, Format::from_path(patch))?;
                self.store.update(&document)?;
                self.store.try_write()?;
                Ok(format!(
                    "Merged {} into {}",
                    patch.display(),
                    self.store.path().display()
                ))
            }
            Commands::Path => Ok(self.store.path().display().to_string()),
            Commands::Refresh => {
                self.store.refresh()?;
                Ok(format!(
                    "Reloaded {} ({:?})",
                    self.store.path().display(),
                    self.store.last_load()
                ))
            }
            Commands::Delete => {
                self.store.delete();
                Ok(format!("Deleted {}", self.store.path().display()))
            }
        }
    }
}
