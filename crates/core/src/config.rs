//! Generator configuration.
//!
//! Settings live in an optional `ifacegen.toml`:
//!
//! ```toml
//! root-object-type = "System.Object"
//! dedup-imports = false
//! nullable-directive = true
//! indent = 4
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILENAME: &str = "ifacegen.toml";

/// Default root object type; its members never reach an interface.
pub const DEFAULT_ROOT_OBJECT_TYPE: &str = "System.Object";

const ROOT_OBJECT_KEYWORD: &str = "object";
const DEFAULT_INDENT: u8 = 4;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for [`GeneratorConfig`].
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Options controlling extraction and emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Fully qualified name of the universal base type.
    pub root_object_type: String,
    /// Collapse import directives with identical text.
    pub dedup_imports: bool,
    /// Emit `#nullable enable` when a member uses a nullable annotation.
    pub nullable_directive: bool,
    /// Spaces per indentation level.
    pub indent: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_object_type: DEFAULT_ROOT_OBJECT_TYPE.to_string(),
            dedup_imports: false,
            nullable_directive: true,
            indent: DEFAULT_INDENT,
        }
    }
}

impl GeneratorConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Read a configuration file.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `ifacegen.toml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file found, using defaults.");
            return Ok(Self::default());
        }
        Self::read(&path)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Whether `type_name` names the configured root object type.
    ///
    /// The `object` keyword alias always matches, as does the configured
    /// name with or without a `global::` qualifier.
    pub fn is_root_object(&self, type_name: &str) -> bool {
        let name = type_name.strip_prefix("global::").unwrap_or(type_name);
        name == ROOT_OBJECT_KEYWORD || name == self.root_object_type
    }
}
