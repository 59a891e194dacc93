// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports and shared state between the viewer and its host.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`upload_state`]: Observable upload progress owned by the host
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer (the viewer) talks to ports, never to adapters

pub mod port;
pub mod upload_state;

pub use upload_state::SharedUploadState;
