// SPDX-License-Identifier: MPL-2.0
//! Debounced section view tracking.

use crate::application::port::AnalyticsSink;
use crate::config::Config;
use crate::diagnostics::{sanitize_message, FailureKind};
use crate::domain::analytics::{SectionId, SectionViewEvent};
use crate::domain::timing::DwellDelay;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

/// Records which sections a visitor actually looks at.
///
/// Cheap to clone; clones share the sink.
#[derive(Clone)]
pub struct EngagementTracker {
    sink: Arc<dyn AnalyticsSink>,
    client_context: Arc<str>,
    dwell: Duration,
}

impl EngagementTracker {
    pub fn new(
        sink: Arc<dyn AnalyticsSink>,
        client_context: impl Into<String>,
        dwell: DwellDelay,
    ) -> Self {
        Self {
            sink,
            client_context: Arc::from(client_context.into()),
            dwell: dwell.as_duration(),
        }
    }

    pub fn from_config(sink: Arc<dyn AnalyticsSink>, config: &Config) -> Self {
        Self::new(sink, config.user_agent.clone(), config.section_dwell())
    }

    #[must_use]
    pub fn dwell(&self) -> Duration {
        self.dwell
    }

    /// Starts observing `section`.
    ///
    /// If the returned guard is still alive once the dwell window has passed,
    /// exactly one view event is delivered. Dropping or cancelling the guard
    /// earlier discards the timer without emitting anything.
    pub fn observe_section(&self, section: impl Into<SectionId>) -> SectionObservation {
        let section = section.into();
        let deadline = Instant::now() + self.dwell;
        let event = self.event_for(section.clone());
        let sink = Arc::clone(&self.sink);

        tracing::trace!(%section, "observing section");
        let timer = tokio::spawn(async move {
            sleep_until(deadline).await;
            // Delivery is detached so a late cancel cannot cut an emitted event short.
            tokio::spawn(deliver(sink, event));
        });

        SectionObservation { section, timer }
    }

    /// Records a view of `section` right away, without a dwell window.
    pub fn track_now(&self, section: impl Into<SectionId>) {
        let event = self.event_for(section.into());
        tokio::spawn(deliver(Arc::clone(&self.sink), event));
    }

    fn event_for(&self, section: SectionId) -> SectionViewEvent {
        SectionViewEvent::new(section, &*self.client_context)
    }
}

impl std::fmt::Debug for EngagementTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngagementTracker")
            .field("client_context", &self.client_context)
            .field("dwell", &self.dwell)
            .finish_non_exhaustive()
    }
}

/// A pending section observation.
///
/// Releasing the guard, by `cancel` or by drop, cancels the dwell timer.
#[derive(Debug)]
#[must_use = "dropping the observation cancels it immediately"]
pub struct SectionObservation {
    section: SectionId,
    timer: JoinHandle<()>,
}

impl SectionObservation {
    #[must_use]
    pub fn section(&self) -> &SectionId {
        &self.section
    }

    /// Whether the dwell window has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    /// Stops the observation. Equivalent to dropping the guard.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for SectionObservation {
    fn drop(&mut self) {
        if !self.timer.is_finished() {
            tracing::trace!(section = %self.section, "section observation cancelled");
        }
        self.timer.abort();
    }
}

async fn deliver(sink: Arc<dyn AnalyticsSink>, event: SectionViewEvent) {
    match sink.record_event(&event).await {
        Ok(()) => tracing::debug!(section = %event.section, "section view recorded"),
        Err(err) => tracing::debug!(
            section = %event.section,
            kind = FailureKind::AnalyticsDelivery.as_str(),
            error = %sanitize_message(&err.to_string()),
            "analytics tracking failed"
        ),
    }
}
