// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generator configuration.
//!
//! Supports programmatic, file-based (YAML) and environment configuration.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
#[cfg(feature = "config-loaders")]
use std::path::Path;

/// Environment variable overriding [`GeneratorConfig::max_depth`].
pub const ENV_MAX_DEPTH: &str = "FIXGEN_MAX_DEPTH";
/// Environment variable overriding [`GeneratorConfig::max_collection_size`].
pub const ENV_MAX_COLLECTION_SIZE: &str = "FIXGEN_MAX_COLLECTION_SIZE";
/// Environment variable overriding [`GeneratorConfig::seed`].
pub const ENV_SEED: &str = "FIXGEN_SEED";

/// Generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Ceiling on recursive composite descent (at least 1).
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Ceiling on collection sizing. Maps use `min(2, max(1, n))`.
    #[serde(default = "default_max_collection_size")]
    pub max_collection_size: usize,

    /// Fixed seed for reproducible output; `None` seeds from the process.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_depth() -> usize {
    3
}

fn default_max_collection_size() -> usize {
    3
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_collection_size: default_max_collection_size(),
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Set maximum depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set maximum collection size.
    pub fn max_collection_size(mut self, size: usize) -> Self {
        self.max_collection_size = size;
        self
    }

    /// Use a fixed seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Upper bound on generated map sizes.
    pub fn max_map_size(&self) -> usize {
        self.max_collection_size.clamp(1, 2)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a YAML file.
    #[cfg(feature = "config-loaders")]
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Apply `FIXGEN_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, then validate.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(depth) = parse_var(&lookup, ENV_MAX_DEPTH)? {
            self.max_depth = depth;
        }
        if let Some(size) = parse_var(&lookup, ENV_MAX_COLLECTION_SIZE)? {
            self.max_collection_size = size;
        }
        if let Some(seed) = parse_var(&lookup, ENV_SEED)? {
            self.seed = Some(seed);
        }
        self.validate()?;
        Ok(self)
    }
}

fn parse_var<F, T>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: raw,
        }),
    }
}
