// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── photo      - Per-item loading, spinner, failures
//!     ├── selection  - Selection mode and selected indices
//!     ├── reconcile  - Identity-based removal (pure functions)
//!     └── upload     - Shared progress tracking and auto-dismiss
//! ```

pub mod photo;
pub mod reconcile;
pub mod selection;
pub mod upload;
