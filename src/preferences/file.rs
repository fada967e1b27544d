// SPDX-License-Identifier: MPL-2.0
//! File-backed preference store.
//!
//! Preferences are kept as a flat TOML table:
//!
//! ```toml
//! app_language = "sw"
//! ```
//!
//! Only string values are read and written through the store. Keys of other
//! types, written by other tools, are left untouched.

use super::PreferenceStore;
use crate::app::paths;
use crate::config::Config;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use toml::{Table, Value};

/// A preference store persisted to a TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store reading and writing `path`.
    ///
    /// The file and its parent directories are created on the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store in the resolved config directory, using the file name
    /// from `config`. Returns `None` when no config directory can be found.
    pub fn in_config_dir(config: &Config, base_dir: Option<PathBuf>) -> Option<Self> {
        paths::get_app_config_dir_with_override(base_dir)
            .map(|dir| Self::new(dir.join(config.storage.preferences_file())))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_table(&self) -> Result<Table> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Table::new()),
            Err(err) => return Err(err.into()),
        };
        toml::from_str::<Table>(&content)
            .map_err(|err| Error::Storage(format!("{}: {err}", self.path.display())))
    }

    /// Sibling file the new contents are staged in before the rename.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Replaces the file in one rename so readers never see a partial write.
    async fn write_table(&self, table: &Table) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = toml::to_string(table)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, content).await?;
        if let Err(err) = tokio::fs::rename(&staging, &self.path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(err.into());
        }
        Ok(())
    }
}

#[async_trait]
impl PreferenceStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let table = self.read_table().await?;
        Ok(table.get(key).and_then(Value::as_str).map(str::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut table = match self.read_table().await {
            Ok(table) => table,
            Err(Error::Storage(reason)) => {
                tracing::warn!(%reason, "preference file unreadable, rewriting it");
                Table::new()
            }
            Err(err) => return Err(err),
        };
        table.insert(key.to_string(), Value::String(value.to_string()));
        self.write_table(&table).await?;
        tracing::debug!(path = %self.path.display(), key, "preference written");
        Ok(())
    }
}
