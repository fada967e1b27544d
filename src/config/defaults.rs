// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast display duration and its bounds
//! - **Storage**: Preference store file and keys

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default display duration for a toast (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Smallest default duration accepted from `settings.toml` (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Largest default duration accepted from `settings.toml` (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Storage Defaults
// ==========================================================================

/// File name of the on-disk preference store, relative to the config dir.
pub const DEFAULT_PREFERENCES_FILE: &str = "preferences.toml";

/// Key under which the selected UI language is persisted.
pub const LANGUAGE_KEY: &str = "app_language";
