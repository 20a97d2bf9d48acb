// SPDX-License-Identifier: MPL-2.0
//! Failure categories and message sanitization.
//!
//! This module provides:
//! - The [`FailureKind`] taxonomy used to tag every logged failure
//! - Message sanitization to keep visitor PII out of the logs

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// =============================================================================
// Failure Kinds
// =============================================================================

/// Categories of failures the subsystem can run into.
///
/// Every contact failure drives the same error toast; the kind is what keeps
/// them apart in the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The analytics collaborator could not record a view. Never user-facing.
    AnalyticsDelivery,
    /// The contact collaborator rejected the payload.
    ContactValidation,
    /// No response was received from the contact collaborator.
    ContactTransport,
    /// A response arrived but signalled an application-level failure.
    ContactServer,
}

impl FailureKind {
    /// Stable label used as the `kind` field of log records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::AnalyticsDelivery => "analytics_delivery",
            FailureKind::ContactValidation => "contact_validation",
            FailureKind::ContactTransport => "contact_transport",
            FailureKind::ContactServer => "contact_server",
        }
    }
}

// =============================================================================
// Message Sanitization
// =============================================================================

/// Matches e-mail addresses, the one piece of PII that routinely shows up in
/// collaborator error details ("value is not a valid email address: ...").
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}")
        .expect("email regex should compile")
});

/// Sanitizes a message before it is written to a log.
///
/// E-mail addresses are replaced with an `<email>` placeholder so the
/// message keeps its structure.
///
/// # Examples
///
/// ```
/// use portfolio_telemetry::diagnostics::sanitize_message;
///
/// let msg = "ada.lovelace@example.com is not deliverable";
/// assert_eq!(sanitize_message(msg), "<email> is not deliverable");
///
/// let msg = "Internal server error";
/// assert_eq!(sanitize_message(msg), "Internal server error");
/// ```
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    EMAIL_PATTERN.replace_all(message, "<email>").into_owned()
}
