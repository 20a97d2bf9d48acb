// SPDX-License-Identifier: MPL-2.0
//! Engagement tracking.
//!
//! A section counts as viewed once it has held the visitor's attention for
//! the dwell window (one second by default). Rapid scrolling past a section
//! records nothing.
//!
//! - [`EngagementTracker`] - per-section debounced observations and
//!   immediate tracking
//! - [`SectionObservation`] - scoped guard; releasing it cancels the timer
//! - [`SectionFocus`] - keeps exactly one observation for the section in view
//!
//! Delivery is fire-and-forget. A failing analytics backend is logged at
//! `debug` level and otherwise ignored.

mod focus;
mod tracker;

pub use focus::SectionFocus;
pub use tracker::{EngagementTracker, SectionObservation};
