//! Unit tests for the leaf utilities.
use fluxo::coerce::{to_bool, to_bool_or};
use fluxo::extract::extract_json_block;
use fluxo::prelude::*;
use serde_json::json;
use std::collections::HashSet;

#[test]
fn test_to_bool_accepted_strings() {
    for truthy in ["1", "true", "t", "yes", "y", "sim", "SIM", "  True  "] {
        assert!(to_bool(&json!(truthy)), "expected '{}' to be true", truthy);
    }
    for falsy in ["", "0", "false", "não", "no", "talvez"] {
        assert!(!to_bool(&json!(falsy)), "expected '{}' to be false", falsy);
    }
}

#[test]
fn test_to_bool_numbers_and_misc() {
    assert!(to_bool(&json!(true)));
    assert!(to_bool(&json!(1)));
    assert!(to_bool(&json!(-2.5)));
    assert!(!to_bool(&json!(0)));
    assert!(!to_bool(&json!(0.0)));
    assert!(!to_bool(&json!(null)));
    assert!(!to_bool(&json!([true])));
    assert!(!to_bool(&json!({"value": true})));
}

#[test]
fn test_to_bool_or_defaults_only_when_absent() {
    assert!(to_bool_or(None, true));
    assert!(!to_bool_or(None, false));
    // A present null is coerced, not defaulted.
    assert!(!to_bool_or(Some(&json!(null)), true));
}

#[test]
fn test_stage_id_format_validation() {
    assert!(StageId::is_valid_format("5f8d0d55b54764421b7156c1"));
    assert!(!StageId::is_valid_format("5f8d0d55b54764421b7156c"));
    assert!(!StageId::is_valid_format("5f8d0d55b54764421b7156c12"));
    assert!(!StageId::is_valid_format("5F8D0D55B54764421B7156C1"));
    assert!(!StageId::is_valid_format("zf8d0d55b54764421b7156c1"));
    assert!(!StageId::is_valid_format(""));

    assert!(StageId::parse("5f8d0d55b54764421b7156c1").is_ok());
    let err = StageId::parse("nope").expect_err("invalid format must be rejected");
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_generated_ids_are_valid_and_distinct() {
    let ids: HashSet<String> = (0..64)
        .map(|_| StageId::generate().as_str().to_string())
        .collect();
    assert_eq!(ids.len(), 64);
    for id in &ids {
        assert!(StageId::is_valid_format(id));
    }
}

#[test]
fn test_stage_id_serde_round_trip() {
    let id: StageId = serde_json::from_str("\"5f8d0d55b54764421b7156c1\"").expect("valid id");
    assert_eq!(id.as_str(), "5f8d0d55b54764421b7156c1");
    assert_eq!(
        serde_json::to_string(&id).expect("serializes"),
        "\"5f8d0d55b54764421b7156c1\""
    );
    assert!(serde_json::from_str::<StageId>("\"not-hex\"").is_err());
}

#[test]
fn test_extract_json_block_strips_fence() {
    let fenced = "Claro! Aqui está o resultado:\n```json\n[{\"id\": 1}]\n```\nEspero que ajude.";
    assert_eq!(extract_json_block(fenced), "[{\"id\": 1}]");

    let object = "```json\n{\"stages\": []}\n```";
    assert_eq!(extract_json_block(object), "{\"stages\": []}");
}

#[test]
fn test_extract_json_block_passes_through_without_fence() {
    assert_eq!(extract_json_block("[1, 2, 3]"), "[1, 2, 3]");
    assert_eq!(extract_json_block("plain prose"), "plain prose");
    // A fence without JSON brackets inside is not a JSON block.
    assert_eq!(
        extract_json_block("```json\nnada aqui\n```"),
        "```json\nnada aqui\n```"
    );
}

#[test]
fn test_repair_display_messages() {
    let truncated = Repair::Truncated { from: 5, to: 2 };
    assert!(truncated.to_string().contains('5'));
    assert!(truncated.to_string().contains('2'));

    let relinked = Repair::Relinked { stage: 1, action: 3 };
    assert!(relinked.to_string().contains("relinked"));

    let fallback = Repair::Fallback;
    assert!(fallback.to_string().contains("fallback"));
}

#[test]
fn test_diagnostic_joins_repairs_in_order() {
    let reconciled = Reconciled::<Stage> {
        items: Vec::new(),
        repairs: vec![
            Repair::Truncated { from: 4, to: 3 },
            Repair::IdRegenerated { index: 2 },
        ],
    };
    let diagnostic = reconciled.diagnostic().expect("repairs present");
    let truncated_at = diagnostic.find("truncated").expect("first repair present");
    let id_at = diagnostic.find("invalid or duplicate").expect("second repair present");
    assert!(truncated_at < id_at);
    assert!(diagnostic.contains("; "));
}
