/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context as _, Result, anyhow};
use connector::error::{ConnectorError, ConnectorResult};
use connector::session::{Session, SessionStore, StoredSession};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    AuthToken,
    Role,
    Server,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| key.to_string() == s.to_lowercase())
            .ok_or_else(|| {
                let valid = ConfigKey::iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("Invalid key: {}. Valid keys are: {}", s, valid)
            })
    }
}

/// Unset keys are simply absent.
pub type Config = HashMap<ConfigKey, String>;

/// The TOML file holding the server URL and the session.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn open() -> Result<Self> {
        let mut path = dirs::config_dir().ok_or_else(|| anyhow!("Could not find configuration directory"))?;
        path.push("agency");
        path.push("config.toml");
        Ok(ConfigFile { path })
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        ConfigFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> Result<Config> {
        if !self.path.exists() {
            return Ok(Config::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        toml::from_str(&contents).with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    pub fn write(&self, config: &Config) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).context("Failed to create configuration directory")?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(&self.path, contents).with_context(|| format!("Failed to write {}", self.path.display()))
    }

    pub fn get(&self, key: ConfigKey) -> Result<Option<String>> {
        Ok(self.read()?.remove(&key).filter(|v| !v.is_empty()))
    }

    pub fn set(&self, key: ConfigKey, value: Option<String>) -> Result<()> {
        self.update(|config| match value {
            Some(value) => {
                config.insert(key, value);
            }
            None => {
                config.remove(&key);
            }
        })
    }

    fn update(&self, f: impl FnOnce(&mut Config)) -> Result<()> {
        let mut config = self.read()?;
        f(&mut config);
        self.write(&config)
    }
}

fn storage_error(err: anyhow::Error) -> ConnectorError {
    ConnectorError::Storage(format!("{:#}", err))
}

impl SessionStore for ConfigFile {
    fn load(&self) -> ConnectorResult<StoredSession> {
        let mut config = self.read().map_err(storage_error)?;

        Ok(StoredSession {
            token: config.remove(&ConfigKey::AuthToken),
            role: config.remove(&ConfigKey::Role),
        })
    }

    fn save(&self, session: &Session) -> ConnectorResult<()> {
        self.update(|config| {
            config.insert(ConfigKey::AuthToken, session.token.clone());
            config.insert(ConfigKey::Role, session.role.to_string());
        })
        .map_err(storage_error)
    }

    fn clear(&self) -> ConnectorResult<()> {
        self.update(|config| {
            config.remove(&ConfigKey::AuthToken);
            config.remove(&ConfigKey::Role);
        })
        .map_err(storage_error)
    }
}

/// Backs `agency config <key> [value]`: prints the value when none is
/// given, stores it otherwise.
pub fn set_get_value(file: &ConfigFile, key: &str, value: Option<String>) -> Result<()> {
    let key: ConfigKey = key.parse().map_err(|e: String| anyhow!(e))?;

    match value {
        Some(value) => {
            file.set(key, Some(value.clone()))?;
            println!("{} set to \"{}\"", key, value);
        }
        None => match file.get(key)? {
            Some(value) => println!("{}", value),
            None => println!("[unset]"),
        },
    }

    Ok(())
}
