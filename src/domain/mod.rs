// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure value objects shared by the engagement tracker,
//! the notification controller and the contact form. It depends on nothing
//! but `std` so every type can be built and checked without a runtime.
//!
//! # Modules
//!
//! - [`analytics`]: Engagement types ([`SectionId`](analytics::SectionId),
//!   [`SectionViewEvent`](analytics::SectionViewEvent))
//! - [`contact`]: Contact form types ([`ContactFields`](contact::ContactFields),
//!   [`Field`](contact::Field), [`SubmissionPhase`](contact::SubmissionPhase))
//! - [`timing`]: Clamped delays ([`DwellDelay`](timing::DwellDelay),
//!   [`ToastDuration`](timing::ToastDuration), [`FadeDelay`](timing::FadeDelay),
//!   [`RequestTimeout`](timing::RequestTimeout))

pub mod analytics;
pub mod contact;
pub mod timing;
