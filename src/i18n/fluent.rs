// SPDX-License-Identifier: MPL-2.0
//! Fluent dictionaries embedded at build time.
//!
//! [`I18n`] is immutable once built and knows nothing about which language
//! is active; that lives in [`Localization`](super::Localization).

use super::language::LanguageCode;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use fluent_syntax::ast::Entry;
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageCode, FluentBundle<FluentResource>>,
    /// Message ids of the base dictionary, in file order.
    base_keys: Vec<String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("languages", &self.bundles.keys().collect::<Vec<_>>())
            .field("base_keys", &self.base_keys.len())
            .finish()
    }
}

impl I18n {
    /// Builds bundles from the `.ftl` files embedded under `assets/i18n/`.
    pub fn new() -> Self {
        let sources = LanguageCode::ALL.into_iter().filter_map(|code| {
            let filename = format!("{}.ftl", code.as_str());
            match Asset::get(&filename) {
                Some(content) => Some((
                    code,
                    String::from_utf8_lossy(content.data.as_ref()).into_owned(),
                )),
                None => {
                    tracing::warn!(%code, "no embedded dictionary, falling back to base");
                    None
                }
            }
        });
        Self::from_sources(sources)
    }

    /// Builds bundles from in-memory Fluent sources.
    ///
    /// Languages without a source resolve every key through the base
    /// dictionary. Keys present in the base but missing elsewhere are
    /// reported with `tracing::warn!`.
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (LanguageCode, String)>,
    {
        let mut bundles = HashMap::new();
        let mut base_keys = Vec::new();

        for (code, source) in sources {
            let resource = FluentResource::try_new(source).unwrap_or_else(|(resource, errors)| {
                tracing::warn!(%code, errors = errors.len(), "dictionary has syntax errors");
                resource
            });
            if code == LanguageCode::BASE {
                base_keys = message_ids(&resource);
            }

            let mut bundle = FluentBundle::new_concurrent(vec![code.langid()]);
            // Isolation marks would leak into plain-text consumers.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(%code, errors = errors.len(), "duplicate messages in dictionary");
            }
            bundles.insert(code, bundle);
        }

        let i18n = Self { bundles, base_keys };
        for code in LanguageCode::ALL {
            let missing = i18n.missing_keys(code);
            if !missing.is_empty() {
                tracing::warn!(%code, ?missing, "dictionary is missing base keys");
            }
        }
        tracing::debug!(languages = i18n.bundles.len(), keys = i18n.base_keys.len(), "dictionaries loaded");
        i18n
    }

    /// Keys defined by the base dictionary.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.base_keys
    }

    /// Base keys that `code`'s dictionary does not define.
    #[must_use]
    pub fn missing_keys(&self, code: LanguageCode) -> Vec<&str> {
        let bundle = self.bundles.get(&code);
        self.base_keys
            .iter()
            .filter(|key| !bundle.is_some_and(|b| b.has_message(key)))
            .map(String::as_str)
            .collect()
    }

    /// Resolves `key` in `code`, then in the base language, then returns the
    /// key itself.
    #[must_use]
    pub fn tr(&self, code: LanguageCode, key: &str) -> String {
        self.tr_with_args(code, key, &[])
    }

    /// Like [`I18n::tr`], with Fluent variables.
    ///
    /// Values that parse as numbers are passed as numbers so plural
    /// selectors work (`{ $count -> [one] ... *[other] ... }`).
    #[must_use]
    pub fn tr_with_args(&self, code: LanguageCode, key: &str, args: &[(&str, &str)]) -> String {
        let fluent_args = build_args(args);
        self.format(code, key, fluent_args.as_ref())
            .or_else(|| {
                if code == LanguageCode::BASE {
                    None
                } else {
                    self.format(LanguageCode::BASE, key, fluent_args.as_ref())
                }
            })
            .unwrap_or_else(|| key.to_string())
    }

    fn format(&self, code: LanguageCode, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&code)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            tracing::debug!(%code, key, errors = errors.len(), "formatting errors");
        }
        if value.trim().is_empty() {
            None
        } else {
            Some(value.into_owned())
        }
    }
}

fn build_args<'a>(args: &[(&'a str, &'a str)]) -> Option<FluentArgs<'a>> {
    if args.is_empty() {
        return None;
    }
    let mut fluent_args = FluentArgs::new();
    for (name, value) in args {
        let value = if let Ok(n) = value.parse::<i64>() {
            FluentValue::from(n)
        } else if let Ok(n) = value.parse::<f64>() {
            FluentValue::from(n)
        } else {
            FluentValue::from(*value)
        };
        fluent_args.set(*name, value);
    }
    Some(fluent_args)
}

/// Ids of the messages the parser accepted, in file order.
///
/// Terms and entries dropped as junk are not messages.
fn message_ids(resource: &FluentResource) -> Vec<String> {
    resource
        .entries()
        .filter_map(|entry| match entry {
            Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}
