//! # Fluxo - Generative Scaffold Reconciliation Engine
//!
//! **Fluxo** turns untrusted, free-form generative-model output into
//! structurally valid scaffolds a form builder or workflow engine can trust
//! unconditionally: a flat list of form-field descriptors repaired to an
//! exact count, or a directed graph of workflow stages repaired to an exact
//! count *and* referential closure.
//!
//! ## Core Workflow
//!
//! The engine treats the model as a black box that was asked for a JSON
//! array and may have answered with anything. The primary workflow is:
//!
//! 1.  **Obtain a raw response**: call your model through the
//!     [`CompletionModel`](service::CompletionModel) seam (or any other way).
//! 2.  **Strip the fence**: [`extract::extract_json_block`] removes the
//!     ```` ```json ```` wrapper models like to add.
//! 3.  **Reconcile**: [`reconcile::reconcile_fields`] or
//!     [`reconcile::reconcile_stages`] repair the payload to the requested
//!     cardinality, regenerating identifiers and relinking dangling
//!     transitions as needed. Every repair is reported; none is fatal.
//! 4.  **Ship it**: the returned records are valid by construction, whatever
//!     the model answered. A non-empty diagnostic maps to a warning status,
//!     never to a failure.
//!
//! ## Quick Start
//!
//! ```rust
//! use fluxo::prelude::*;
//!
//! // A model answer with a bad id, a missing stage and a dangling edge.
//! let raw = r#"[
//!     {"id": "zz", "taskTitle": "Aprovação", "actions": [{"stageDestinationId": "bad"}]}
//! ]"#;
//!
//! let result = reconcile_stages(raw, 2);
//!
//! // Exactly two stages, all ids valid, every edge resolvable.
//! assert_eq!(result.items.len(), 2);
//! assert!(result.items.iter().all(|s| StageId::is_valid_format(s.id.as_str())));
//! assert_eq!(
//!     result.items[0].actions[0].stage_destination_id,
//!     result.items[1].id,
//! );
//! assert!(result.diagnostic().is_some());
//! ```
//!
//! The field reconciler follows the same contract over flat lists:
//!
//! ```rust
//! use fluxo::prelude::*;
//!
//! let result = reconcile_fields("definitely not json", 2);
//! assert_eq!(result.items.len(), 2);
//! assert_eq!(result.items[0].identifier, "nome");
//! ```

pub mod coerce;
pub mod error;
pub mod extract;
pub mod ident;
pub mod model;
pub mod prelude;
pub mod prompt;
pub mod reconcile;
pub mod service;
