// SPDX-License-Identifier: MPL-2.0
//! `portfolio_telemetry` is the client-side runtime behind a portfolio site.
//!
//! It records which sections a visitor actually reads, sends contact form
//! messages to the site backend, and drives the toast surface that reports
//! the outcome.
//!
//! - [`engagement`]: debounced section view tracking
//! - [`contact`]: serialized contact form submission
//! - [`notifications`]: single-slot toast lifecycle
//! - [`infrastructure`]: HTTP adapter for the portfolio backend
//!
//! Everything runs on the caller's tokio runtime. The crate logs through
//! `tracing` and never installs a subscriber.

#![doc(html_root_url = "https://docs.rs/portfolio_telemetry/0.3.0")]

pub mod application;
pub mod config;
pub mod contact;
pub mod diagnostics;
pub mod domain;
pub mod engagement;
pub mod error;
pub mod infrastructure;
pub mod notifications;
