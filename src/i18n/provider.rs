// SPDX-License-Identifier: MPL-2.0
//! Active-language state on top of the static dictionaries.

use super::fluent::I18n;
use super::language::{LanguageCode, LanguageDescriptor, LANGUAGES};
use crate::config::LANGUAGE_KEY;
use crate::preferences::PreferenceStore;
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot of the localization state, published on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageState {
    pub active: LanguageCode,
    /// Whether the initial preference load has resolved.
    pub loaded: bool,
}

/// Localization provider.
///
/// Cheap to clone; clones share the active selection. Until [`load`] has
/// resolved, the active language is [`LanguageCode::BASE`] and
/// [`is_loaded`] is `false`.
///
/// [`load`]: Localization::load
/// [`is_loaded`]: Localization::is_loaded
#[derive(Clone)]
pub struct Localization {
    i18n: Arc<I18n>,
    store: Arc<dyn PreferenceStore>,
    state: Arc<watch::Sender<LanguageState>>,
}

impl std::fmt::Debug for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localization")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}

impl Localization {
    /// Creates a provider over the embedded dictionaries.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self::with_dictionaries(Arc::new(I18n::new()), store)
    }

    pub fn with_dictionaries(i18n: Arc<I18n>, store: Arc<dyn PreferenceStore>) -> Self {
        let (state, _) = watch::channel(LanguageState::default());
        Self {
            i18n,
            store,
            state: Arc::new(state),
        }
    }

    /// Reads the persisted language once and marks the provider loaded.
    ///
    /// Any failure (storage error, unknown stored code) leaves the base
    /// language active; loading itself never fails.
    pub async fn load(&self) {
        let active = match self.store.get(LANGUAGE_KEY).await {
            Ok(Some(raw)) => raw.parse::<LanguageCode>().unwrap_or_else(|err| {
                tracing::warn!(stored = %raw, error = %err, "ignoring stored language");
                LanguageCode::BASE
            }),
            Ok(None) => LanguageCode::BASE,
            Err(err) => {
                tracing::warn!(error = %err, "language preference unreadable, using base language");
                LanguageCode::BASE
            }
        };

        self.state.send_replace(LanguageState {
            active,
            loaded: true,
        });
        tracing::info!(language = %active, "localization loaded");
    }

    /// Switches the active language.
    ///
    /// The code is validated, then persisted, and only after the write
    /// succeeds is the in-memory selection updated. Returns `false` (with
    /// state untouched) for unknown codes and failed writes.
    ///
    /// Calls are not serialized: overlapping changes update memory in the
    /// order they commit, which may differ from the order their writes land.
    pub async fn set_language(&self, code: &str) -> bool {
        let language = match code.parse::<LanguageCode>() {
            Ok(language) => language,
            Err(err) => {
                tracing::warn!(error = %err, "rejected language change");
                return false;
            }
        };

        if let Err(err) = self.store.set(LANGUAGE_KEY, language.as_str()).await {
            tracing::warn!(language = %language, error = %err, "failed to persist language");
            return false;
        }

        self.state.send_modify(|state| state.active = language);
        tracing::info!(language = %language, "language changed");
        true
    }

    #[must_use]
    pub fn active_language(&self) -> LanguageCode {
        self.state.borrow().active
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    #[must_use]
    pub fn is_right_to_left(&self) -> bool {
        self.active_language().is_right_to_left()
    }

    #[must_use]
    pub fn state(&self) -> LanguageState {
        *self.state.borrow()
    }

    /// Selectable languages in display order.
    #[must_use]
    pub fn languages(&self) -> &'static [LanguageDescriptor] {
        &LANGUAGES
    }

    /// Translates `key` in the active language; never fails.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.i18n.tr(self.active_language(), key)
    }

    #[must_use]
    pub fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.i18n.tr_with_args(self.active_language(), key, args)
    }

    /// Receiver notified whenever the active language or load flag changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LanguageState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn dictionaries(&self) -> &I18n {
        &self.i18n
    }
}
