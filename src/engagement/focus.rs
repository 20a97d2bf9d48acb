// SPDX-License-Identifier: MPL-2.0
//! Single-focus section tracking.
//!
//! A page only has one section in view at a time. `SectionFocus` keeps the
//! observation for that section and swaps it when the focus moves.

use super::tracker::{EngagementTracker, SectionObservation};
use crate::domain::analytics::SectionId;

#[derive(Debug)]
pub struct SectionFocus {
    tracker: EngagementTracker,
    current: Option<SectionObservation>,
}

impl SectionFocus {
    #[must_use]
    pub fn new(tracker: EngagementTracker) -> Self {
        Self {
            tracker,
            current: None,
        }
    }

    /// Moves the focus to `section`.
    ///
    /// The previous section's observation is cancelled. Focusing the section
    /// that already has the focus keeps its running observation.
    pub fn focus(&mut self, section: impl Into<SectionId>) {
        let section = section.into();
        if self.current() == Some(&section) {
            return;
        }
        // Assigning drops, and so cancels, the previous observation.
        self.current = Some(self.tracker.observe_section(section));
    }

    /// Drops the focus; nothing is observed until the next `focus`.
    pub fn clear(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&SectionId> {
        self.current.as_ref().map(SectionObservation::section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::{AnalyticsError, AnalyticsSink};
    use crate::domain::analytics::SectionViewEvent;
    use crate::domain::timing::DwellDelay;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::advance;

    #[derive(Default)]
    struct Sections(Mutex<Vec<String>>);

    #[async_trait]
    impl AnalyticsSink for Sections {
        async fn record_event(&self, event: &SectionViewEvent) -> Result<(), AnalyticsError> {
            self.0.lock().unwrap().push(event.section.to_string());
            Ok(())
        }
    }

    impl Sections {
        fn seen(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    async fn step(ms: u64) {
        advance(Duration::from_millis(ms)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn focus(sink: &Arc<Sections>) -> SectionFocus {
        let tracker = EngagementTracker::new(sink.clone(), "agent", DwellDelay::default());
        SectionFocus::new(tracker)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_scrolling_only_records_where_the_visitor_stops() {
        let sink = Arc::new(Sections::default());
        let mut focus = focus(&sink);

        for section in ["hero", "about", "skills", "experience"] {
            focus.focus(section);
            step(200).await;
        }
        focus.focus("projects");
        step(1000).await;

        assert_eq!(sink.seen(), vec!["projects"]);
        assert_eq!(focus.current().map(SectionId::as_str), Some("projects"));
    }

    #[tokio::test(start_paused = true)]
    async fn refocusing_same_section_keeps_the_timer() {
        let sink = Arc::new(Sections::default());
        let mut focus = focus(&sink);

        focus.focus("about");
        step(600).await;
        focus.focus("about");
        step(400).await;

        assert_eq!(sink.seen(), vec!["about"]);
    }

    #[tokio::test(start_paused = true)]
    async fn clear_cancels_pending_observation() {
        let sink = Arc::new(Sections::default());
        let mut focus = focus(&sink);

        focus.focus("contact");
        step(500).await;
        focus.clear();
        step(2000).await;

        assert!(sink.seen().is_empty());
        assert!(focus.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn returning_to_a_section_records_it_again() {
        let sink = Arc::new(Sections::default());
        let mut focus = focus(&sink);

        focus.focus("about");
        step(1000).await;
        focus.focus("skills");
        step(1000).await;
        focus.focus("about");
        step(1000).await;

        assert_eq!(sink.seen(), vec!["about", "skills", "about"]);
    }
}
