// SPDX-License-Identifier: MPL-2.0
//! Analytics collaborator port.
//!
//! This module defines the [`AnalyticsSink`] trait the engagement tracker
//! delivers [`SectionViewEvent`]s to.
//!
//! # Design Notes
//!
//! - Delivery is best-effort: the tracker logs and drops every error
//! - The trait is `Send + Sync` so delivery can run on a spawned task

use crate::domain::analytics::SectionViewEvent;
use async_trait::async_trait;
use thiserror::Error;

// =============================================================================
// AnalyticsError
// =============================================================================

/// Errors that can occur while recording a view event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    /// The request never got a response.
    #[error("analytics request failed: {0}")]
    Transport(String),

    /// The collaborator answered with a non-success status.
    #[error("analytics endpoint returned HTTP {status}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
    },
}

// =============================================================================
// AnalyticsSink Trait
// =============================================================================

/// Destination of engagement events.
#[async_trait]
pub trait AnalyticsSink: Send + Sync {
    /// Records that `event.section` has been viewed.
    async fn record_event(&self, event: &SectionViewEvent) -> Result<(), AnalyticsError>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analytics_error_display() {
        assert_eq!(
            AnalyticsError::Rejected { status: 503 }.to_string(),
            "analytics endpoint returned HTTP 503"
        );
        assert!(AnalyticsError::Transport("connection refused".into())
            .to_string()
            .contains("connection refused"));
    }

    #[test]
    fn sink_is_object_safe() {
        fn assert_object_safe(_: &dyn AnalyticsSink) {}
        let _ = assert_object_safe;
    }
}
