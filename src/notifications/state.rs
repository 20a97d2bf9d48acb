// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle state machine.
//!
//! A surface is `Hidden`, `Showing` a notification until its expiry, or
//! `Hiding` it while the fade-out runs. All transitions take the current
//! instant as an argument, so the machine can be stepped without a clock.

use super::notification::{Notification, ToastKind};
use std::time::Duration;
use tokio::time::Instant;

/// Observable phase of a toast surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPhase {
    #[default]
    Hidden,
    Showing,
    Hiding,
}

/// The one toast a surface can hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ToastState {
    #[default]
    Hidden,
    Showing {
        notification: Notification,
        expires_at: Instant,
    },
    /// Still rendered while it fades out.
    Hiding {
        notification: Notification,
        hidden_at: Instant,
    },
}

/// Read-only view of a surface, published to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastSnapshot {
    pub phase: ToastPhase,
    /// The notification being shown or faded out; `None` when hidden.
    pub notification: Option<Notification>,
}

impl ToastSnapshot {
    /// Whether the toast is fully visible (not fading, not hidden).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == ToastPhase::Showing
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.notification.as_ref().map(Notification::message)
    }

    #[must_use]
    pub fn kind(&self) -> Option<ToastKind> {
        self.notification.as_ref().map(Notification::kind)
    }
}

/// Drives a [`ToastState`] through show, auto-dismiss, manual hide and fade.
#[derive(Debug, Clone)]
pub struct ToastMachine {
    state: ToastState,
    fade: Duration,
}

impl ToastMachine {
    #[must_use]
    pub fn new(fade: Duration) -> Self {
        Self {
            state: ToastState::Hidden,
            fade,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ToastState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> ToastPhase {
        match self.state {
            ToastState::Hidden => ToastPhase::Hidden,
            ToastState::Showing { .. } => ToastPhase::Showing,
            ToastState::Hiding { .. } => ToastPhase::Hiding,
        }
    }

    /// Shows `notification`, replacing whatever the surface held.
    ///
    /// A pending fade-out is dropped along with the old state and the
    /// auto-dismiss timer restarts from `now`.
    pub fn show(&mut self, notification: Notification, now: Instant) {
        let expires_at = now + notification.auto_dismiss_after();
        self.state = ToastState::Showing {
            notification,
            expires_at,
        };
    }

    /// Starts fading out a showing toast.
    ///
    /// Returns `false` when there was nothing to hide (already hidden or
    /// already fading).
    pub fn hide(&mut self, now: Instant) -> bool {
        match std::mem::take(&mut self.state) {
            ToastState::Showing { notification, .. } => {
                self.begin_fade(notification, now);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Applies every transition whose deadline is at or before `now`.
    ///
    /// Returns whether the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.phase();

        if let ToastState::Showing { expires_at, .. } = self.state {
            if now >= expires_at {
                if let ToastState::Showing { notification, .. } = std::mem::take(&mut self.state) {
                    // The fade is anchored on the expiry so a late tick keeps the timeline.
                    self.begin_fade(notification, expires_at);
                }
            }
        }

        if let ToastState::Hiding { hidden_at, .. } = self.state {
            if now >= hidden_at {
                self.state = ToastState::Hidden;
            }
        }

        self.phase() != before
    }

    /// Instant of the next timed transition, if one is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.state {
            ToastState::Hidden => None,
            ToastState::Showing { expires_at, .. } => Some(*expires_at),
            ToastState::Hiding { hidden_at, .. } => Some(*hidden_at),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ToastSnapshot {
        let notification = match &self.state {
            ToastState::Hidden => None,
            ToastState::Showing { notification, .. } | ToastState::Hiding { notification, .. } => {
                Some(notification.clone())
            }
        };
        ToastSnapshot {
            phase: self.phase(),
            notification,
        }
    }

    fn begin_fade(&mut self, notification: Notification, from: Instant) {
        self.state = if self.fade.is_zero() {
            ToastState::Hidden
        } else {
            ToastState::Hiding {
                notification,
                hidden_at: from + self.fade,
            }
        };
    }
}
