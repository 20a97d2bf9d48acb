// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Backend**: Base address and client identification
//! - **Engagement**: Section dwell window before a view is recorded
//! - **Toast**: Auto-dismiss and fade timings of the notification surface
//! - **Requests**: HTTP timeout bounds

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Base address used when neither the settings file nor the environment
/// provides one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";

/// Environment variable that overrides the configured base address.
pub const BACKEND_URL_ENV: &str = "PORTFOLIO_BACKEND_URL";

/// Client context sent with every analytics event when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("portfolio_telemetry/", env!("CARGO_PKG_VERSION"));

// ==========================================================================
// Engagement Defaults
// ==========================================================================

/// Default dwell window before a section view is recorded (in milliseconds).
pub const DEFAULT_SECTION_DWELL_MS: u64 = 1000;

/// Minimum dwell window (in milliseconds).
pub const MIN_SECTION_DWELL_MS: u64 = 100;

/// Maximum dwell window (in milliseconds).
pub const MAX_SECTION_DWELL_MS: u64 = 10_000;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays visible before auto-dismissing (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Minimum toast duration (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Maximum toast duration (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Default fade-out delay between Hiding and Hidden (in milliseconds).
pub const DEFAULT_TOAST_FADE_MS: u64 = 300;

/// Maximum fade-out delay (in milliseconds). Zero hides immediately.
pub const MAX_TOAST_FADE_MS: u64 = 2000;

// ==========================================================================
// Request Defaults
// ==========================================================================

/// Default HTTP request timeout (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum HTTP request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum HTTP request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

// ==========================================================================
// Contact Form
// ==========================================================================

/// Message shown when a failed submission carries no usable detail.
pub const CONTACT_FALLBACK_MESSAGE: &str = "Failed to send message. Please try again later.";
