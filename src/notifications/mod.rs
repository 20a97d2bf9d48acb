// SPDX-License-Identifier: MPL-2.0
//! Toast notification surface for user feedback.
//!
//! This module provides a single transient message surface following the
//! toast UX pattern. A toast appears, stays for a while, fades out and is
//! gone; showing a new one replaces the current one instead of queuing.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with its `ToastKind`
//! - [`state`] - `ToastMachine`, the Hidden/Showing/Hiding state machine
//! - [`controller`] - `NotificationController` running the machine on a task
//!
//! # Usage
//!
//! ```ignore
//! use portfolio_telemetry::notifications::{NotificationController, ToastKind};
//!
//! let controller = NotificationController::spawn(config.toast_duration(), config.toast_fade());
//! let toasts = controller.handle();
//! toasts.show("Message sent!", ToastKind::Success);
//!
//! // In the renderer
//! let snapshot = controller.snapshot();
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 5s by default, per call override with `show_for`
//! - Fade-out: 300ms between dismissal and removal
//! - Max visible toasts: 1 (last call wins)

mod controller;
mod notification;
mod state;

pub use controller::{NotificationController, NotificationHandle};
pub use notification::{Notification, ToastKind};
pub use state::{ToastMachine, ToastPhase, ToastSnapshot, ToastState};
