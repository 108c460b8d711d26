//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so callers can pull
//! in the whole reconciliation surface with one `use`.
//!
//! # Example
//!
//! ```rust
//! use fluxo::prelude::*;
//!
//! let repaired = reconcile_stages("[]", 3);
//! assert_eq!(repaired.items.len(), 3);
//! ```

// Reconciliation core
pub use crate::reconcile::{
    Reconciled, Repair, SuggestionPayload, reconcile_fields, reconcile_stages,
};

// Data model
pub use crate::ident::StageId;
pub use crate::model::{Action, FieldDescriptor, FieldOption, FieldType, STAGE_TYPE, Stage};

// Generation pipeline seams
pub use crate::service::{
    CaseIndex, CompletionModel, Generated, GeneratorConfig, RankedCase, ScaffoldGenerator,
};

// Markdown fence stripping
pub use crate::extract::extract_json_block;

// Error types
pub use crate::error::{GenerateError, IdFormatError, ParseFailure};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, GenerateError>;
