// SPDX-License-Identifier: MPL-2.0
//! Application layer - Collaborator interfaces.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The tracker and the contact form only ever see the ports

pub mod port;
