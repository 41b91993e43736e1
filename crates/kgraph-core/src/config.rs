//! Configuration for knowledge graphs.
//!
//! Sources are layered with figment, lowest priority first:
//!
//! 1. built-in defaults
//! 2. an optional TOML file (`kgraph.toml` by convention)
//! 3. environment variables prefixed with `KGRAPH_` (`__` separates nested
//!    keys, e.g. `KGRAPH_TRAVERSAL__MAX_DEPTH=4`)

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "kgraph.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "KGRAPH_";

/// Result returned by common-ancestor resolution when nothing qualifies.
pub const NO_COMMON_ANCESTOR: &str = "No common ancestor";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or did not match the schema.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    /// A value is out of range.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// Dotted key of the offending value.
        key: String,
        /// What is wrong with it.
        message: String,
    },
}

/// Traversal defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalSettings {
    /// Depth used by `all_related_entities`; `None` means unbounded.
    pub max_depth: Option<usize>,
}

/// Knowledge graph configuration.
///
/// # Example
///
/// ```rust
/// use kgraph_core::config::KnowledgeGraphConfig;
///
/// let config = KnowledgeGraphConfig::from_toml_str("default_relation_weight = 2.0").unwrap();
/// assert_eq!(config.default_relation_weight, 2.0);
/// assert_eq!(config.no_common_ancestor, "No common ancestor");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeGraphConfig {
    /// Weight given to relations added without an explicit weight.
    pub default_relation_weight: f32,
    /// Returned by `find_common_ancestors` when no ancestor exists.
    pub no_common_ancestor: String,
    /// Traversal defaults.
    pub traversal: TraversalSettings,
}

impl Default for KnowledgeGraphConfig {
    fn default() -> Self {
        Self {
            default_relation_weight: 1.0,
            no_common_ancestor: NO_COMMON_ANCESTOR.to_string(),
            traversal: TraversalSettings::default(),
        }
    }
}

impl KnowledgeGraphConfig {
    /// Builds the default provider chain: defaults, optional file, environment.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from defaults, an optional TOML file and the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }

    /// Loads configuration from a TOML string layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Self::from_figment(
            &Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml)),
        )
    }

    /// Extracts and validates configuration from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(Box::new)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_relation_weight.is_finite() {
            return Err(ConfigError::InvalidValue {
                key: "default_relation_weight".to_string(),
                message: "must be a finite number".to_string(),
            });
        }
        if self.no_common_ancestor.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "no_common_ancestor".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
