// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `ToastKind` enum
//! shown by the notification surface.

use std::time::Duration;

use crate::config::DEFAULT_TOAST_DURATION_MS;

/// Kind determines the visual styling of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Operation completed successfully.
    #[default]
    Success,
    /// Operation failed; the message explains what went wrong.
    Error,
}

/// A message to be displayed on the toast surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text rendered in the toast.
    message: String,
    /// Styling of the toast.
    kind: ToastKind,
    /// Time the toast stays visible before it starts fading out. `None`
    /// defers to the surface it is shown on.
    auto_dismiss_after: Option<Duration>,
}

impl Notification {
    /// Creates a notification that uses the surface's default duration.
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            auto_dismiss_after: None,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    /// Sets a custom auto-dismiss duration.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.auto_dismiss_after = Some(duration);
        self
    }

    /// Fills in `duration` unless one was set explicitly.
    #[must_use]
    pub(crate) fn or_auto_dismiss(mut self, duration: Duration) -> Self {
        self.auto_dismiss_after.get_or_insert(duration);
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Visible time before the fade starts. Falls back to the built-in
    /// default when neither the caller nor a surface set one.
    #[must_use]
    pub fn auto_dismiss_after(&self) -> Duration {
        self.auto_dismiss_after
            .unwrap_or(Duration::from_millis(DEFAULT_TOAST_DURATION_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_correct_kind() {
        assert_eq!(Notification::success("").kind(), ToastKind::Success);
        assert_eq!(Notification::error("").kind(), ToastKind::Error);
    }

    #[test]
    fn default_duration_is_five_seconds() {
        assert_eq!(
            Notification::success("saved").auto_dismiss_after(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn auto_dismiss_overrides_default() {
        let notification = Notification::error("oops").auto_dismiss(Duration::from_secs(8));
        assert_eq!(notification.auto_dismiss_after(), Duration::from_secs(8));
        assert_eq!(notification.message(), "oops");
    }

    #[test]
    fn surface_default_only_fills_unset_duration() {
        let unset = Notification::success("saved").or_auto_dismiss(Duration::from_secs(2));
        assert_eq!(unset.auto_dismiss_after(), Duration::from_secs(2));

        let explicit = Notification::success("saved")
            .auto_dismiss(Duration::from_secs(8))
            .or_auto_dismiss(Duration::from_secs(2));
        assert_eq!(explicit.auto_dismiss_after(), Duration::from_secs(8));
    }
}
