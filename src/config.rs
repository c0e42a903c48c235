// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Stratbook-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stratbook and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! TOML configuration.
//!
//! ```toml
//! [storage]
//! data_dir = ".stratbook"
//! durable_writes = false
//!
//! [migration]
//! premiere_slots = 3
//! competitive_slots = 3
//! required_premiere_maps = ["Dust 2", "Inferno", "Mirage", "Nuke", "Vertigo", "Ancient", "Anubis", "Train"]
//! ```
//!
//! Every key is optional.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::store::{MigrationConfig, WriteDurability};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub migration: MigrationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per storage key.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// fsync values and their directory after every write.
    #[serde(default)]
    pub durable_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            durable_writes: false,
        }
    }
}

impl StorageConfig {
    pub fn durability(&self) -> WriteDurability {
        if self.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".stratbook")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }
}
