//! # Keiro - Journey Graph and Prefill Mapping Engine
//!
//! **Keiro** models the editing core of a journey builder: a node graph of
//! form-driven workflow steps where each node's form fields can be prefilled
//! from forms upstream in the graph or from a fixed set of global variables.
//! Keiro computes the upstream dependencies, encodes/decodes the mapping
//! reference strings, and keeps the per-node prefill configuration. It does
//! not execute workflows and does not prescribe a rendering technology.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical internal model
//! of a journey. The primary workflow is:
//!
//! 1.  **Load Your Data**: Fetch your graph payload (the built-in
//!     `api::GraphResponse` covers the common JSON shape, or parse your own
//!     format into your own structs).
//! 2.  **Convert to Keiro's Model**: Implement the `IntoJourney` trait for
//!     your structs (already implemented for `GraphResponse`).
//! 3.  **Open a Session**: A `JourneySession` owns the loaded graph and the
//!     committed prefill store, and hands out editing drafts per node.
//! 4.  **Edit and Save**: Drive a `PrefillDraft` through select / map /
//!     submit operations and save it back through the session.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut session = JourneySession::new();
//!
//!     // One-time graph fetch; a failure is logged and leaves the session
//!     // in a valid "no data" state.
//!     let source = JsonFileSource::new("data/graph.json");
//!     if !session.load(&source) {
//!         return Ok(());
//!     }
//!
//!     // A node was clicked: list what its fields can be mapped from.
//!     let deps = session.dependencies("node_d");
//!     println!(
//!         "{} direct / {} transitive upstream forms",
//!         deps.direct.len(),
//!         deps.transitive.len()
//!     );
//!
//!     // Edit the node's prefill configuration.
//!     if let Some(mut draft) = session.open_prefill("node_d") {
//!         draft.select_field("email")?;
//!         draft.apply_mapping("global.currentUser")?;
//!         let (node_id, values) = session.save_prefill(draft);
//!         println!("saved {} field(s) for {}", values.len(), node_id);
//!     }
//!
//!     // Stored references label themselves for display.
//!     let info = session.describe("global.currentUser");
//!     assert_eq!(info.form_name, "Global Data");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod journey;
pub mod mapping;
pub mod prefill;
pub mod prelude;
pub mod resolver;
pub mod session;
