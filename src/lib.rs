// SPDX-License-Identifier: MPL-2.0
//! `yoombaa_core` is the presentation-support core of the Yoombaa agent app.
//!
//! It provides localization with Fluent and a persisted language preference,
//! the app's static color palette, and self-expiring toast notifications.
//! Screens reach all three through an [`app::AppContext`].

#![doc(html_root_url = "https://docs.rs/yoombaa_core/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod notifications;
pub mod preferences;
pub mod theme;

pub use app::AppContext;
