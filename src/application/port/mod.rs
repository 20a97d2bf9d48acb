// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces of the two backend collaborators.
//! The traits use only domain types, so the tracker and the contact form can
//! be driven by the HTTP adapter in production and by in-memory fakes in
//! tests.
//!
//! # Available Ports
//!
//! - [`analytics`]: Section view recording
//! - [`contact`]: Contact message submission
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `reqwest` types)
//! - Traits are `Send + Sync` and object safe, used behind `Arc<dyn _>`
//! - Methods are `async` via `async_trait`
//! - Errors are classified by the adapter, not by the callers
//!
//! # Example
//!
//! ```ignore
//! use portfolio_telemetry::application::port::{AnalyticsSink, AnalyticsError};
//! use portfolio_telemetry::domain::analytics::SectionViewEvent;
//!
//! struct Discard;
//!
//! #[async_trait::async_trait]
//! impl AnalyticsSink for Discard {
//!     async fn record_event(&self, _: &SectionViewEvent) -> Result<(), AnalyticsError> {
//!         Ok(())
//!     }
//! }
//! ```

pub mod analytics;
pub mod contact;

// Re-export main types for convenience
pub use analytics::{AnalyticsError, AnalyticsSink};
pub use contact::{ContactApi, ContactError, ContactReceipt};
