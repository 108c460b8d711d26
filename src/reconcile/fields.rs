//! Field list reconciliation: repair a flat list of form-field candidates
//! to an exact count.

use super::{Reconciled, Repair, SuggestionPayload, parse_array};
use crate::coerce::scalar_string;
use crate::model::{FieldDescriptor, FieldOption, FieldType};
use itertools::Itertools;
use serde_json::Value;
use tracing::{debug, warn};

/// A field candidate after per-entry normalization, before dedup and
/// cardinality fixing.
struct Candidate {
    identifier: String,
    field_type: FieldType,
    label: String,
    options: Option<Vec<FieldOption>>,
}

/// Repairs an untrusted field-suggestion payload into exactly `required`
/// materialized descriptors.
///
/// Candidates are deduplicated by identifier (first occurrence wins), their
/// types normalized, the list truncated or padded to size, and positions
/// assigned from final order. An unusable payload falls back to a built-in
/// seed list. No input can make this fail or panic.
pub fn reconcile_fields(
    payload: impl Into<SuggestionPayload>,
    required: usize,
) -> Reconciled<FieldDescriptor> {
    let mut repairs = Vec::new();

    let candidates = match parse_array(payload.into()) {
        Ok(entries) => collect_candidates(entries, &mut repairs),
        Err(failure) => {
            warn!(%failure, "field response unusable; using seed fallback");
            repairs.push(Repair::Fallback);
            seed_candidates()
        }
    };

    let before = candidates.len();
    let mut kept: Vec<Candidate> = candidates
        .into_iter()
        .unique_by(|c| c.identifier.clone())
        .collect();
    let dropped = before - kept.len();
    if dropped > 0 {
        repairs.push(Repair::DuplicatesDropped { count: dropped });
    }

    if kept.len() > required {
        let from = kept.len();
        kept.truncate(required);
        repairs.push(Repair::Truncated {
            from,
            to: required,
        });
    } else if kept.len() < required {
        let missing = required - kept.len();
        for k in 1..=missing {
            kept.push(Candidate {
                identifier: format!("campo_extra_{}", k),
                field_type: FieldType::LineText,
                label: format!("Campo Extra {}", k),
                options: None,
            });
        }
        repairs.push(Repair::Padded { added: missing });
    }

    let items = kept
        .into_iter()
        .enumerate()
        .map(|(i, c)| {
            FieldDescriptor::new(c.identifier, c.field_type, (i + 1) as u32, c.label, c.options)
        })
        .collect();

    let result = Reconciled { items, repairs };
    if let Some(msg) = result.diagnostic() {
        debug!(repairs = %msg, "field response repaired");
    }
    result
}

fn collect_candidates(entries: Vec<Value>, repairs: &mut Vec<Repair>) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let obj = entry.as_object();

        let identifier = match obj
            .and_then(|o| o.get("identifier"))
            .and_then(scalar_string)
            .filter(|s| !s.is_empty())
        {
            Some(id) => id,
            None => {
                repairs.push(Repair::IdentifierSynthesized { index: i + 1 });
                format!("campo_{}", i + 1)
            }
        };

        let (field_type, coerced) = match obj.and_then(|o| o.get("type")).and_then(Value::as_str) {
            Some(raw) => FieldType::normalize(raw),
            None => (FieldType::LineText, true),
        };
        if coerced {
            repairs.push(Repair::TypeCoerced {
                identifier: identifier.clone(),
            });
        }

        let label = obj
            .and_then(|o| o.get("label"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| capitalize(&identifier));

        let options = obj
            .and_then(|o| o.get("options"))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(parse_option).collect::<Vec<_>>())
            .filter(|list| !list.is_empty());

        out.push(Candidate {
            identifier,
            field_type,
            label,
            options,
        });
    }
    out
}

fn parse_option(value: &Value) -> Option<FieldOption> {
    let obj = value.as_object()?;
    Some(FieldOption {
        text: obj.get("text").and_then(scalar_string)?,
        value: obj.get("value").and_then(scalar_string)?,
    })
}

/// The built-in seeds used when the payload cannot be parsed at all.
fn seed_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            identifier: "nome".to_string(),
            field_type: FieldType::LineText,
            label: "Nome Completo".to_string(),
            options: None,
        },
        Candidate {
            identifier: "CPF".to_string(),
            field_type: FieldType::LineText,
            label: "CPF".to_string(),
            options: None,
        },
    ]
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
