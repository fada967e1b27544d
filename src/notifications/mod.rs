// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for transient user feedback.
//!
//! Toasts appear for a fixed duration and then remove themselves. Hosts
//! render the current list and may dismiss entries early.
//!
//! # Components
//!
//! - [`Toast`] - A single message with severity and display duration
//! - [`ToastManager`] - Ordered list plus per-toast expiry timers
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() {
//! use std::time::Duration;
//! use yoombaa_core::config::NotificationConfig;
//! use yoombaa_core::notifications::{Severity, ToastManager};
//!
//! let toasts = ToastManager::new(&NotificationConfig::default());
//! let id = toasts.show("Saved", Severity::Success, Duration::from_secs(2));
//!
//! // Early dismissal is always safe, even after expiry.
//! toasts.dismiss(id);
//! # }
//! ```
//!
//! # Behavior
//!
//! - Default duration: 3s, configurable via `[notifications]` in `settings.toml`
//! - No cap on visible toasts and no de-duplication
//! - Insertion order is preserved

mod manager;
mod notification;

pub use manager::{Message as ToastMessage, ToastManager};
pub use notification::{Severity, Toast, ToastId};
