// SPDX-License-Identifier: MPL-2.0
//! Engagement event types.

use std::fmt;

/// Identifier of a page section (`"about"`, `"projects"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SectionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A section has been viewed long enough to be recorded.
///
/// Created per observed transition and handed straight to the analytics
/// collaborator; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionViewEvent {
    pub section: SectionId,
    /// Free-form description of the client, sent as the user agent.
    pub client_context: String,
}

impl SectionViewEvent {
    pub fn new(section: impl Into<SectionId>, client_context: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            client_context: client_context.into(),
        }
    }
}
