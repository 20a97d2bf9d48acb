// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationController` owns one toast surface. It runs the
//! [`ToastMachine`] on a background task whose only timer is a
//! `sleep_until` on the machine's next deadline, and publishes every change
//! as a [`ToastSnapshot`] on a watch channel.

use super::notification::{Notification, ToastKind};
use super::state::{ToastMachine, ToastSnapshot};
use crate::domain::timing::{FadeDelay, ToastDuration};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Commands for notification state changes.
#[derive(Debug)]
enum Command {
    Show(Notification, Instant),
    Hide(Instant),
}

/// Cloneable sender side of a toast surface.
///
/// Commands are stamped with the instant they were issued, so the timeline
/// does not depend on when the controller task gets to run.
#[derive(Debug, Clone)]
pub struct NotificationHandle {
    commands: mpsc::UnboundedSender<Command>,
    default_duration: Duration,
}

impl NotificationHandle {
    /// Shows `message` for the surface's default duration.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind) {
        self.show_for(message, kind, self.default_duration);
    }

    /// Shows `message` for an explicit duration.
    pub fn show_for(&self, message: impl Into<String>, kind: ToastKind, duration: Duration) {
        let notification = Notification::new(kind, message).auto_dismiss(duration);
        self.push(notification);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    /// Shows a prepared notification, replacing the current one.
    ///
    /// A notification without an explicit `auto_dismiss` gets the surface's
    /// default duration.
    pub fn push(&self, notification: Notification) {
        let notification = notification.or_auto_dismiss(self.default_duration);
        self.send(Command::Show(notification, Instant::now()));
    }

    /// Dismisses the current toast. No effect if nothing is showing.
    pub fn hide(&self) {
        self.send(Command::Hide(Instant::now()));
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::trace!("notification surface already torn down, command dropped");
        }
    }
}

/// Owner of a toast surface.
///
/// Dropping the controller aborts its task, which cancels any pending
/// auto-dismiss or fade timer. Handles that outlive it become no-ops.
#[derive(Debug)]
pub struct NotificationController {
    handle: NotificationHandle,
    snapshots: watch::Receiver<ToastSnapshot>,
    task: JoinHandle<()>,
}

impl NotificationController {
    /// Starts a surface on the current tokio runtime.
    #[must_use]
    pub fn spawn(default_duration: ToastDuration, fade: FadeDelay) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(ToastSnapshot::default());
        let machine = ToastMachine::new(fade.as_duration());
        let task = tokio::spawn(run(machine, commands_rx, snapshot_tx));

        Self {
            handle: NotificationHandle {
                commands: commands_tx,
                default_duration: default_duration.as_duration(),
            },
            snapshots: snapshot_rx,
            task,
        }
    }

    #[must_use]
    pub fn handle(&self) -> NotificationHandle {
        self.handle.clone()
    }

    /// Current state of the surface.
    #[must_use]
    pub fn snapshot(&self) -> ToastSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that is notified on every phase or content change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ToastSnapshot> {
        self.snapshots.clone()
    }
}

impl Drop for NotificationController {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut machine: ToastMachine,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<ToastSnapshot>,
) {
    loop {
        let deadline = machine.next_deadline();
        tokio::select! {
            biased;
            command = commands.recv() => match command {
                Some(Command::Show(notification, at)) => {
                    tracing::debug!(kind = ?notification.kind(), "showing toast");
                    machine.show(notification, at);
                }
                Some(Command::Hide(at)) => {
                    if machine.hide(at) {
                        tracing::debug!("toast dismissed");
                    }
                }
                None => break,
            },
            () = wait_until(deadline) => {
                if machine.tick(Instant::now()) {
                    tracing::trace!(phase = ?machine.phase(), "toast timer fired");
                }
            }
        }

        let next = machine.snapshot();
        snapshots.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
