//! CLI commands.

pub mod config;
pub mod generate;

use std::path::PathBuf;

use clap::Args;
use ifacegen_core::{ConfigError, GeneratorConfig};

/// Options shared by commands that need a generator configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOptions {
    /// Path to an ifacegen.toml (defaults to ./ifacegen.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Collapse import directives with identical text
    #[arg(long)]
    pub dedup_imports: bool,
    /// Never emit `#nullable enable`
    #[arg(long)]
    pub no_nullable_directive: bool,
    /// Spaces per indentation level
    #[arg(long, value_name = "N")]
    pub indent: Option<u8>,
    /// Fully qualified name of the root object type
    #[arg(long, value_name = "TYPE")]
    pub root_object_type: Option<String>,
}

impl ConfigOptions {
    /// Load the configuration file and apply flag overrides.
    pub fn resolve(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::read(path)?,
            None => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                GeneratorConfig::discover(&cwd)?
            }
        };

        if self.dedup_imports {
            config.dedup_imports = true;
        }
        if self.no_nullable_directive {
            config.nullable_directive = false;
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if let Some(root) = &self.root_object_type {
            config.root_object_type.clone_from(root);
        }
        Ok(config)
    }
}
