// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the portfolio backend.
//!
//! [`HttpBackend`] implements both [`AnalyticsSink`] and [`ContactApi`] on a
//! single `reqwest::Client`. All response classification happens here so the
//! ports only ever see domain errors.
//!
//! [`AnalyticsSink`]: crate::application::port::AnalyticsSink
//! [`ContactApi`]: crate::application::port::ContactApi

mod client;
mod endpoints;

pub use client::{HttpBackend, CONTACT_SUCCESS_FALLBACK};
pub use endpoints::Endpoints;
