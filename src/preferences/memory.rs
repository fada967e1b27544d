// SPDX-License-Identifier: MPL-2.0
//! In-memory preference store.

use super::PreferenceStore;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct Inner {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

/// A preference store backed by a shared in-process map.
///
/// Clones share the same map, so a store handed to a second provider
/// instance behaves like device storage surviving an app restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let store = Self::new();
        store
            .inner
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        store
    }

    /// Makes every subsequent `get` fail until reset.
    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `set` fail until reset.
    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Synchronous peek at a stored value, bypassing failure injection.
    #[must_use]
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.inner
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }
}

#[async_trait]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("read of '{key}' rejected")));
        }
        Ok(self.snapshot(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Storage(format!("write of '{key}' rejected")));
        }
        self.inner
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let store = MemoryStore::new();
        store.set("app_language", "sw").await.unwrap();
        assert_eq!(store.get("app_language").await.unwrap().as_deref(), Some("sw"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").await.unwrap();
        assert_eq!(other.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn injected_write_failure_keeps_previous_value() {
        let store = MemoryStore::with_entries([("k", "old")]);
        store.set_fail_writes(true);

        assert!(matches!(store.set("k", "new").await, Err(Error::Storage(_))));
        assert_eq!(store.snapshot("k").as_deref(), Some("old"));

        store.set_fail_writes(false);
        store.set("k", "new").await.unwrap();
        assert_eq!(store.snapshot("k").as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn injected_read_failure_is_reported() {
        let store = MemoryStore::with_entries([("k", "v")]);
        store.set_fail_reads(true);
        assert!(store.get("k").await.is_err());
    }
}
