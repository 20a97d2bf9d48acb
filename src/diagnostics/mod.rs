// SPDX-License-Identifier: MPL-2.0
//! Diagnostics helpers shared by the tracker and the contact form.
//!
//! Diagnostics here means structured `tracing` records, not a user-facing
//! surface. Collaborator failures are tagged with a [`FailureKind`] and their
//! messages are run through [`sanitize_message`] first.
//!
//! # Privacy
//!
//! Contact payloads carry the visitor's e-mail address, and the backend
//! echoes it back in validation details. Addresses are redacted before they
//! reach a log record.

mod sanitizer;

pub use sanitizer::{sanitize_message, FailureKind};
