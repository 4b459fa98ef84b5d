//! # Configuration
//!
//! Container behavior is configured through [`BagConfig`], loaded with
//! [`confique`] from layered sources.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ATTRBAG_NORMALIZE`, `ATTRBAG_STRICT`.
//! 2. **TOML file**: passed explicitly to [`BagConfig::load`].
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `normalize` | `false` | Fold keys through [`crate::normalizer::normalize`] |
//! | `strict` | `true` | Missing attributes are errors rather than `None` |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::normalizer::KeyMode;

/// Settings shared by attribute stores and option sets.
#[derive(Config, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagConfig {
    /// Compare keys by their normalized form (`fooBar` == `foo_bar`).
    #[config(default = false, env = "ATTRBAG_NORMALIZE")]
    pub normalize: bool,

    /// Reading a missing attribute without a default fails instead of
    /// returning `None`.
    #[config(default = true, env = "ATTRBAG_STRICT")]
    pub strict: bool,
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            normalize: false,
            strict: true,
        }
    }
}

impl BagConfig {
    /// Load from the environment, then `path` (if given), then defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = BagConfig::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }

    /// A config with normalization turned on and everything else default.
    pub fn normalized() -> Self {
        Self {
            normalize: true,
            ..Default::default()
        }
    }

    pub fn key_mode(&self) -> KeyMode {
        if self.normalize {
            KeyMode::Normalized
        } else {
            KeyMode::Verbatim
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BagConfig::default();
        assert!(!config.normalize);
        assert!(config.strict);
        assert_eq!(config.key_mode(), KeyMode::Verbatim);
    }

    #[test]
    fn test_normalized_config() {
        let config = BagConfig::normalized();
        assert!(config.normalize);
        assert!(config.strict);
        assert_eq!(config.key_mode(), KeyMode::Normalized);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = BagConfig {
            normalize: true,
            strict: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"normalize":true,"strict":false}"#);
        let loaded: BagConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, config);
    }
}
