// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization using the Fluent localization system.
//!
//! # Features
//!
//! - Dictionaries embedded at build time from `assets/i18n/<code>.ftl`
//! - Runtime language switching, persisted through a
//!   [`PreferenceStore`](crate::preferences::PreferenceStore)
//! - Fallback chain: active language, then English, then the raw key
//! - Right-to-left detection for Arabic

pub mod fluent;
pub mod language;
mod provider;

pub use fluent::I18n;
pub use language::{LanguageCode, LanguageDescriptor, LANGUAGES};
pub use provider::{LanguageState, Localization};
