// SPDX-License-Identifier: MPL-2.0
//! Composition root shared by every screen.
//!
//! `AppContext` wires together localization, theme and toasts. Screens receive
//! it (or a clone) at construction; there is no global lookup, so a screen can
//! never run without its providers.

pub mod paths;

use crate::config::{self, Config};
use crate::i18n::{LanguageCode, Localization};
use crate::notifications::{ToastId, ToastManager};
use crate::preferences::{FileStore, MemoryStore, PreferenceStore};
use crate::theme::Theme;
use std::path::PathBuf;
use std::sync::Arc;

/// Providers available to every screen.
#[derive(Debug, Clone)]
pub struct AppContext {
    localization: Localization,
    theme: Theme,
    toasts: ToastManager,
    config: Config,
}

impl AppContext {
    /// Builds a context whose language preference has not been read yet.
    ///
    /// Until [`AppContext::load`] resolves, translations use the base
    /// language and `localization().is_loaded()` is `false`.
    pub fn new(store: Arc<dyn PreferenceStore>, config: Config) -> Self {
        Self {
            localization: Localization::new(store),
            theme: Theme::new(),
            toasts: ToastManager::new(&config.notifications),
            config,
        }
    }

    /// Builds a context and reads the persisted language.
    ///
    /// `warning` is an i18n key from [`config::load`]; when present it is
    /// shown as a warning toast once the language is known.
    pub async fn bootstrap(
        store: Arc<dyn PreferenceStore>,
        config: Config,
        warning: Option<String>,
    ) -> Self {
        let context = Self::new(store, config);
        context.load().await;
        if let Some(key) = warning {
            context.toasts.warning(context.localization.translate(&key));
        }
        context
    }

    /// Loads `settings.toml` and the file-backed preference store from the
    /// config directory (see [`paths`] for resolution order).
    ///
    /// Without a resolvable config directory, preferences are kept in memory
    /// for the lifetime of the process.
    pub async fn from_config_dir(base_dir: Option<PathBuf>) -> Self {
        let (config, warning) = config::load_with_override(base_dir.clone());
        let store: Arc<dyn PreferenceStore> = match FileStore::in_config_dir(&config, base_dir) {
            Some(store) => {
                tracing::debug!(path = %store.path().display(), "using file preference store");
                Arc::new(store)
            }
            None => {
                tracing::warn!("no config directory, preferences will not persist");
                Arc::new(MemoryStore::new())
            }
        };
        Self::bootstrap(store, config, warning).await
    }

    /// Reads the persisted language once.
    pub async fn load(&self) {
        self.localization.load().await;
    }

    #[must_use]
    pub fn localization(&self) -> &Localization {
        &self.localization
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shorthand for `localization().translate(key)`.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.localization.translate(key)
    }

    /// Switches language on behalf of the settings screen.
    ///
    /// On success a confirmation toast is shown in the new language. On
    /// failure the selection is untouched and an error toast explains why.
    /// Returns the id of the toast that was shown along with the outcome.
    pub async fn change_language(&self, code: &str) -> (bool, ToastId) {
        if code.parse::<LanguageCode>().is_err() {
            let id = self.toasts.error(self.tr("language-unsupported"));
            return (false, id);
        }

        if self.localization.set_language(code).await {
            (true, self.toasts.success(self.tr("language-changed")))
        } else {
            (false, self.toasts.error(self.tr("language-change-failed")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LANGUAGE_KEY;
    use crate::notifications::Severity;
    use tempfile::tempdir;

    fn context(store: &MemoryStore) -> AppContext {
        AppContext::new(Arc::new(store.clone()), Config::default())
    }

    #[tokio::test(start_paused = true)]
    async fn bootstrap_applies_stored_language() {
        let store = MemoryStore::with_entries([(LANGUAGE_KEY, "fr")]);
        let context = AppContext::bootstrap(Arc::new(store), Config::default(), None).await;

        assert!(context.localization().is_loaded());
        assert_eq!(context.localization().active_language(), LanguageCode::Fr);
        assert!(context.toasts().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn config_warning_becomes_localized_toast() {
        let store = MemoryStore::with_entries([(LANGUAGE_KEY, "sw")]);
        let context = AppContext::bootstrap(
            Arc::new(store),
            Config::default(),
            Some("notification-config-load-error".to_string()),
        )
        .await;

        let toasts = context.toasts().toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Warning);
        assert_eq!(
            toasts[0].text(),
            context.localization().dictionaries().tr(LanguageCode::Sw, "notification-config-load-error")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn successful_change_confirms_in_new_language() {
        let store = MemoryStore::new();
        let context = context(&store);
        context.load().await;

        let (changed, id) = context.change_language("sw").await;

        assert!(changed);
        let toast = &context.toasts().toasts()[0];
        assert_eq!(toast.id(), id);
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.text(), context.tr("language-changed"));
        assert_eq!(store.snapshot(LANGUAGE_KEY).as_deref(), Some("sw"));
    }

    #[tokio::test(start_paused = true)]
    async fn unsupported_code_raises_error_toast() {
        let store = MemoryStore::new();
        let context = context(&store);
        context.load().await;

        let (changed, _) = context.change_language("tlh").await;

        assert!(!changed);
        let toast = &context.toasts().toasts()[0];
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.text(), "This language is not available");
        assert_eq!(store.snapshot(LANGUAGE_KEY), None);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_write_raises_error_toast_and_keeps_language() {
        let store = MemoryStore::new();
        let context = context(&store);
        context.load().await;
        store.set_fail_writes(true);

        let (changed, _) = context.change_language("ar").await;

        assert!(!changed);
        assert_eq!(context.localization().active_language(), LanguageCode::En);
        let toast = &context.toasts().toasts()[0];
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.text(), context.tr("language-change-failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn change_toasts_expire_with_configured_duration() {
        let config = Config {
            notifications: config::NotificationConfig {
                default_duration_ms: Some(1000),
            },
            ..Config::default()
        };
        let context = AppContext::new(Arc::new(MemoryStore::new()), config);
        context.load().await;

        context.change_language("es").await;
        assert_eq!(context.toasts().len(), 1);

        tokio::time::sleep(std::time::Duration::from_millis(1001)).await;
        assert!(context.toasts().is_empty());
    }

    #[tokio::test]
    async fn from_config_dir_persists_across_instances() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let first = AppContext::from_config_dir(Some(base_dir.clone())).await;
        assert_eq!(first.localization().active_language(), LanguageCode::En);
        assert!(first.change_language("pt").await.0);

        let second = AppContext::from_config_dir(Some(base_dir)).await;
        assert_eq!(second.localization().active_language(), LanguageCode::Pt);
    }

    #[test]
    fn clones_share_toasts() {
        let context = AppContext::new(Arc::new(MemoryStore::new()), Config::default());
        let screen = context.clone();
        screen.toasts().info("hello");
        assert_eq!(context.toasts().len(), 1);
    }
}
