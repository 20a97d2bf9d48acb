// SPDX-License-Identifier: MPL-2.0
//! Contact collaborator port.
//!
//! This module defines the [`ContactApi`] trait the submission coordinator
//! sends messages through, and the [`ContactError`] taxonomy every adapter
//! has to classify its failures into.

use crate::config::CONTACT_FALLBACK_MESSAGE;
use crate::diagnostics::FailureKind;
use crate::domain::contact::ContactFields;
use async_trait::async_trait;
use thiserror::Error;

// =============================================================================
// ContactReceipt
// =============================================================================

/// Acknowledgement of a stored contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    /// Confirmation text supplied by the collaborator, shown to the visitor.
    pub message: String,
    /// Identifier the collaborator assigned to the message, if it sent one.
    pub id: Option<String>,
}

// =============================================================================
// ContactError
// =============================================================================

/// Why a contact message was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    /// The collaborator refused the payload (HTTP 4xx).
    #[error("contact message rejected (HTTP {status})")]
    ValidationRejected {
        status: u16,
        detail: Option<String>,
    },

    /// No response was received.
    #[error("contact request failed: {0}")]
    TransportFailure(String),

    /// A response arrived but reports an application-level failure.
    #[error("contact endpoint failed (HTTP {status})")]
    ServerFailure {
        status: u16,
        detail: Option<String>,
    },
}

impl ContactError {
    /// Diagnostic category of this failure.
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            ContactError::ValidationRejected { .. } => FailureKind::ContactValidation,
            ContactError::TransportFailure(_) => FailureKind::ContactTransport,
            ContactError::ServerFailure { .. } => FailureKind::ContactServer,
        }
    }

    /// Structured detail string from the error payload, if any.
    ///
    /// Blank details count as absent.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            ContactError::ValidationRejected { detail, .. }
            | ContactError::ServerFailure { detail, .. } => {
                detail.as_deref().filter(|d| !d.trim().is_empty())
            }
            ContactError::TransportFailure(_) => None,
        }
    }

    /// Message to show the visitor: the payload detail when present,
    /// otherwise the generic fallback. Never empty.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.detail()
            .unwrap_or(CONTACT_FALLBACK_MESSAGE)
            .to_string()
    }
}

// =============================================================================
// ContactApi Trait
// =============================================================================

/// Collaborator that stores contact messages.
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Submits the four form fields as given.
    async fn submit_contact_message(
        &self,
        fields: &ContactFields,
    ) -> Result<ContactReceipt, ContactError>;
}

// =============================================================================
// Tests
// =============================================================================
