//! The reconciliation core.
//!
//! Both reconcilers share one contract: take an untrusted payload and a
//! required count, return exactly that many valid records plus the list of
//! repairs performed. Malformed input is never an error here; the worst
//! case is a fully synthetic fallback result. Every repair is surfaced in
//! the diagnostic, in both reconcilers alike.

use crate::error::ParseFailure;
use itertools::Itertools;
use serde_json::Value;
use std::fmt;

mod fields;
mod stages;

pub use fields::reconcile_fields;
pub use stages::reconcile_stages;

/// The raw material handed to a reconciler: either model output text or a
/// value the caller already parsed.
#[derive(Debug, Clone)]
pub enum SuggestionPayload {
    Text(String),
    Parsed(Value),
}

impl From<&str> for SuggestionPayload {
    fn from(text: &str) -> Self {
        SuggestionPayload::Text(text.to_string())
    }
}

impl From<String> for SuggestionPayload {
    fn from(text: String) -> Self {
        SuggestionPayload::Text(text)
    }
}

impl From<Value> for SuggestionPayload {
    fn from(value: Value) -> Self {
        SuggestionPayload::Parsed(value)
    }
}

/// Resolves a payload into the expected JSON array of candidates.
///
/// The failure is a value, not an exception: the reconcilers branch on it
/// to select their fallback path, and it never escapes them.
pub fn parse_array(payload: SuggestionPayload) -> Result<Vec<Value>, ParseFailure> {
    let root = match payload {
        SuggestionPayload::Text(text) => serde_json::from_str::<Value>(text.trim())
            .map_err(|e| ParseFailure::NotJson(e.to_string()))?,
        SuggestionPayload::Parsed(value) => value,
    };
    match root {
        Value::Array(items) => Ok(items),
        other => Err(ParseFailure::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A single repair performed during reconciliation. Indices in messages are
/// 1-based, matching how the records are presented to users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// The payload was unusable; the result is fully synthetic.
    Fallback,
    /// The candidate list was longer than requested.
    Truncated { from: usize, to: usize },
    /// Synthetic entries were appended to reach the requested count.
    Padded { added: usize },
    /// A stage id was invalid or collided with an earlier one.
    IdRegenerated { index: usize },
    /// An array entry was not an object and was replaced by a stub stage.
    StageRebuilt { index: usize },
    /// A stage's `actions` value was missing or not an array.
    ActionsReset { index: usize },
    /// An action entry was not an object and was rebuilt from defaults.
    ActionRebuilt { stage: usize, action: usize },
    /// An action destination resolved to no stage and was relinked.
    Relinked { stage: usize, action: usize },
    /// Duplicate field identifiers were dropped, first occurrence kept.
    DuplicatesDropped { count: usize },
    /// A field entry had no usable identifier.
    IdentifierSynthesized { index: usize },
    /// A field declared an unknown type and was coerced to LineText.
    TypeCoerced { identifier: String },
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::Fallback => {
                write!(f, "model response unusable; fallback structure generated")
            }
            Repair::Truncated { from, to } => {
                write!(f, "truncated {} entries to the requested {}", from, to)
            }
            Repair::Padded { added } => write!(
                f,
                "padded with {} synthetic entries to reach the requested count",
                added
            ),
            Repair::IdRegenerated { index } => write!(
                f,
                "invalid or duplicate id at stage {}; generated a new one",
                index
            ),
            Repair::StageRebuilt { index } => write!(
                f,
                "entry {} was not an object; replaced with a stub stage",
                index
            ),
            Repair::ActionsReset { index } => write!(
                f,
                "'actions' missing or not a list at stage {}; reset to empty",
                index
            ),
            Repair::ActionRebuilt { stage, action } => write!(
                f,
                "action {} of stage {} was not an object; rebuilt from defaults",
                action, stage
            ),
            Repair::Relinked { stage, action } => write!(
                f,
                "action {} of stage {} pointed at no known stage; relinked to the default destination",
                action, stage
            ),
            Repair::DuplicatesDropped { count } => write!(
                f,
                "dropped {} duplicated field identifiers, keeping first occurrences",
                count
            ),
            Repair::IdentifierSynthesized { index } => {
                write!(f, "entry {} had no usable identifier; one was synthesized", index)
            }
            Repair::TypeCoerced { identifier } => {
                write!(f, "unknown field type on '{}'; coerced to LineText", identifier)
            }
        }
    }
}

/// The result of a reconciliation: exactly the requested number of items,
/// plus every repair that was needed to get there.
#[derive(Debug)]
pub struct Reconciled<T> {
    pub items: Vec<T>,
    pub repairs: Vec<Repair>,
}

impl<T> Reconciled<T> {
    /// The repair events joined into one human-readable message, or `None`
    /// when the input needed no repair at all. Callers map `Some` to a
    /// warning status, never to a failure.
    pub fn diagnostic(&self) -> Option<String> {
        if self.repairs.is_empty() {
            None
        } else {
            Some(self.repairs.iter().join("; "))
        }
    }

    pub fn is_clean(&self) -> bool {
        self.repairs.is_empty()
    }
}
