// SPDX-License-Identifier: MPL-2.0
//! Contact form submission.
//!
//! [`ContactForm`] holds the four form fields and the submission phase,
//! forwards submissions to a [`ContactApi`](crate::application::port::ContactApi)
//! one at a time, and reports every outcome through a toast.

mod coordinator;

pub use coordinator::{ContactForm, SubmitError};
