// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Portfolio backend over HTTP (implements [`AnalyticsSink`] and
//!   [`ContactApi`])
//!
//! [`AnalyticsSink`]: crate::application::port::AnalyticsSink
//! [`ContactApi`]: crate::application::port::ContactApi

pub mod http;

// Re-export main types for convenience
pub use http::{Endpoints, HttpBackend};
