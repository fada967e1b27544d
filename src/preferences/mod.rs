// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage for small user preferences.
//!
//! The localization provider only needs two operations, both asynchronous and
//! fallible. Callers treat every failure as "use the default"; nothing here
//! is allowed to take the UI down.
//!
//! # Implementations
//!
//! - [`FileStore`] - a flat TOML table on disk, the on-device storage
//! - [`MemoryStore`] - in-process map shared between clones, with failure
//!   injection for previews and tests

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use async_trait::async_trait;

/// Persistent key-value storage for preference scalars.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads the value stored under `key`, `None` if it was never written.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
