//! Behavior tests for the stage graph reconciler.
mod common;
use common::*;
use fluxo::prelude::*;
use serde_json::json;

/// Every output id must be 24 lowercase hex chars and pairwise distinct.
fn assert_ids_valid_and_distinct(stages: &[Stage]) {
    for stage in stages {
        assert!(
            StageId::is_valid_format(stage.id.as_str()),
            "id '{}' is not hex-24",
            stage.id
        );
    }
    let mut ids: Vec<&str> = stages.iter().map(|s| s.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), stages.len(), "stage ids are not pairwise distinct");
}

/// Every action destination must name a stage in the same output.
fn assert_referential_closure(stages: &[Stage]) {
    let ids: Vec<&StageId> = stages.iter().map(|s| &s.id).collect();
    for stage in stages {
        for action in &stage.actions {
            assert!(
                ids.contains(&&action.stage_destination_id),
                "action of stage '{}' points at unknown id '{}'",
                stage.id,
                action.stage_destination_id
            );
        }
    }
}

#[test]
fn test_cardinality_for_arbitrary_inputs() {
    let junk = [
        "",
        "not json",
        "null",
        "{}",
        "\"just a string\"",
        "{\"stages\": []}",
        "[]",
        "[1, 2, 3, 4, 5, 6, 7]",
    ];
    for raw in junk {
        let result = reconcile_stages(raw, 3);
        assert_eq!(result.items.len(), 3, "wrong cardinality for input {:?}", raw);
        assert!(result.diagnostic().is_some(), "no diagnostic for input {:?}", raw);
        assert_ids_valid_and_distinct(&result.items);
        assert_referential_closure(&result.items);
    }
}

#[test]
fn test_fallback_topology_is_a_linear_chain() {
    let result = reconcile_stages("O modelo não retornou JSON.", 4);

    assert_eq!(result.items.len(), 4);
    assert!(result.diagnostic().is_some());
    for i in 0..3 {
        assert_eq!(result.items[i].actions.len(), 1);
        assert_eq!(
            result.items[i].actions[0].stage_destination_id,
            result.items[i + 1].id,
            "fallback stage {} does not advance to its successor",
            i + 1
        );
        assert_eq!(result.items[i].actions[0].label_button, "Próximo");
    }
    // The terminal stage of the fallback chain has no outgoing actions.
    assert!(result.items[3].actions.is_empty());
    assert_ids_valid_and_distinct(&result.items);
}

#[test]
fn test_invalid_and_duplicate_ids_are_regenerated() {
    let raw = json!([
        well_formed_stage("zzz-not-hex", "A", &test_id(2)),
        well_formed_stage(&test_id(2), "B", &test_id(2)),
        well_formed_stage(&test_id(2), "C", &test_id(2)),
    ]);
    let result = reconcile_stages(raw, 3);

    assert_eq!(result.items.len(), 3);
    assert_ids_valid_and_distinct(&result.items);
    // The first valid occurrence of the duplicate keeps its id.
    assert_eq!(result.items[1].id.as_str(), test_id(2));
    assert_ne!(result.items[0].id.as_str(), "zzz-not-hex");
    assert_ne!(result.items[2].id.as_str(), test_id(2));
    assert_referential_closure(&result.items);
    let diagnostic = result.diagnostic().expect("id repairs must be surfaced");
    assert!(diagnostic.contains("id"));
}

#[test]
fn test_valid_edges_survive_neighbouring_repairs() {
    // Stage 1 has a broken id but a valid edge; stage 2 points at the id
    // that is about to be regenerated.
    let raw = json!([
        well_formed_stage("broken", "A", &test_id(2)),
        well_formed_stage(&test_id(2), "B", "broken"),
    ]);
    let result = reconcile_stages(raw, 2);

    // The edge to the surviving valid id is untouched.
    assert_eq!(
        result.items[0].actions[0].stage_destination_id.as_str(),
        test_id(2)
    );
    // The edge to the regenerated id cannot resolve; the owner is the last
    // stage, so it relinks to a terminal self-loop.
    assert_eq!(
        result.items[1].actions[0].stage_destination_id,
        result.items[1].id
    );
}

#[test]
fn test_dangling_edge_relinks_to_next_stage() {
    let raw = json!([
        well_formed_stage(&test_id(1), "A", "ffffffffffffffffffffffff"),
        well_formed_stage(&test_id(2), "B", &test_id(2)),
    ]);
    let result = reconcile_stages(raw, 2);

    // Format-valid but unresolvable: relinked to the successor.
    assert_eq!(
        result.items[0].actions[0].stage_destination_id,
        result.items[1].id
    );
    assert!(result.diagnostic().expect("relink is surfaced").contains("relinked"));
}

#[test]
fn test_truncation_keeps_earliest_stages() {
    let result = reconcile_stages(well_formed_stage_array(5), 2);

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].id.as_str(), test_id(1));
    assert_eq!(result.items[1].id.as_str(), test_id(2));
    let diagnostic = result.diagnostic().expect("truncation must be surfaced");
    assert!(diagnostic.contains("truncated"));
    // Stage 2's chain edge pointed at the now-dropped stage 3.
    assert_referential_closure(&result.items);
}

#[test]
fn test_padding_appends_stubs_after_supplied_stages() {
    let raw = json!([well_formed_stage(&test_id(1), "Única", &test_id(1))]);
    let result = reconcile_stages(raw, 3);

    assert_eq!(result.items.len(), 3);
    // The supplied stage is preserved in position 0, self-loop intact.
    assert_eq!(result.items[0].id.as_str(), test_id(1));
    assert_eq!(
        result.items[0].actions[0].stage_destination_id.as_str(),
        test_id(1)
    );
    // Stubs carry templated titles and fresh ids.
    assert_eq!(result.items[1].task_reference, "Tarefa 2");
    assert_eq!(result.items[2].task_title, "Título 3");
    assert_ids_valid_and_distinct(&result.items);
    let diagnostic = result.diagnostic().expect("padding must be surfaced");
    assert!(diagnostic.contains("padded"));
}

#[test]
fn test_idempotence_on_well_formed_input() {
    let input = well_formed_stage_array(3);
    let result = reconcile_stages(input.clone(), 3);

    assert!(result.is_clean());
    assert_eq!(result.diagnostic(), None);
    let round_tripped = serde_json::to_value(&result.items).expect("stages serialize");
    assert_eq!(round_tripped, input);
}

#[test]
fn test_spec_example_invalid_single_stage() {
    let raw = r#"[{"id": "zz", "taskTitle": "A", "actions": [{"stageDestinationId": "bad"}]}]"#;
    let result = reconcile_stages(raw, 2);

    assert_eq!(result.items.len(), 2);
    assert_ne!(result.items[0].id.as_str(), "zz");
    assert!(StageId::is_valid_format(result.items[0].id.as_str()));
    // The dangling action now targets the padded second stage.
    assert_eq!(result.items[0].actions.len(), 1);
    assert_eq!(
        result.items[0].actions[0].stage_destination_id,
        result.items[1].id
    );
    // Missing taskReference falls back to the title.
    assert_eq!(result.items[0].task_reference, "A");
    let diagnostic = result.diagnostic().expect("repairs must be surfaced");
    assert!(diagnostic.contains("id"));
    assert!(diagnostic.contains("padded"));
}

#[test]
fn test_type_is_forced_and_booleans_coerced() {
    let raw = json!([{
        "id": test_id(1),
        "type": "task-robot",
        "taskReference": "  Revisão  ",
        "taskTitle": "",
        "description": "   ",
        "isConcentrator": "sim",
        "isNonTransferable": 1,
        "isMobileAllowed": "não",
        "notification": "yes",
        "implementAprovation": 0,
        "actions": []
    }]);
    let result = reconcile_stages(raw, 1);
    let stage = &result.items[0];

    assert_eq!(stage.stage_type, STAGE_TYPE);
    assert_eq!(stage.task_reference, "Revisão");
    // Blank title falls back to the normalized reference; blank description
    // to a generated label.
    assert_eq!(stage.task_title, "Revisão");
    assert_eq!(stage.description, "Descrição 1");
    assert!(stage.is_concentrator);
    assert!(stage.is_non_transferable);
    assert!(!stage.is_mobile_allowed);
    assert!(stage.notification);
    assert!(!stage.implement_aprovation);
    // Absent entirely: communicationEmail false, per-field default.
    assert!(!stage.communication_email);
}

#[test]
fn test_mobile_allowed_defaults_true_when_absent() {
    let raw = json!([{ "id": test_id(1), "taskTitle": "A", "actions": [] }]);
    let result = reconcile_stages(raw, 1);
    assert!(result.items[0].is_mobile_allowed);
}

#[test]
fn test_malformed_actions_value_resets_to_empty() {
    let raw = json!([{
        "id": test_id(1),
        "taskTitle": "A",
        "actions": "aprovar e finalizar"
    }]);
    let result = reconcile_stages(raw, 1);

    assert!(result.items[0].actions.is_empty());
    let diagnostic = result.diagnostic().expect("actions reset must be surfaced");
    assert!(diagnostic.contains("actions"));
}

#[test]
fn test_action_scalars_get_per_index_defaults() {
    let raw = json!([{
        "id": test_id(1),
        "taskTitle": "A",
        "actions": [
            {"stageDestinationId": test_id(1)},
            {"labelButton": "", "position": 2, "stageDestinationId": test_id(1)},
            "não é um objeto"
        ]
    }]);
    let result = reconcile_stages(raw, 1);
    let actions = &result.items[0].actions;

    assert_eq!(actions.len(), 3);
    // Missing label takes the per-index default; a blank one stays blank.
    assert_eq!(actions[0].label_button, "Ação 1");
    assert_eq!(actions[0].position, "1");
    assert_eq!(actions[1].label_button, "");
    assert_eq!(actions[1].position, "2");
    // The non-object entry is rebuilt and relinked to the self-loop.
    assert_eq!(actions[2].label_button, "Ação 3");
    assert_eq!(actions[2].stage_destination_id, result.items[0].id);
}

#[test]
fn test_non_object_stage_entries_become_stubs() {
    let raw = json!([42, well_formed_stage(&test_id(2), "B", &test_id(2))]);
    let result = reconcile_stages(raw, 2);

    assert_eq!(result.items.len(), 2);
    assert_eq!(result.items[0].task_reference, "Tarefa 1");
    assert!(result.items[0].actions.is_empty());
    assert_eq!(result.items[1].id.as_str(), test_id(2));
    assert_ids_valid_and_distinct(&result.items);
}

#[test]
fn test_pre_parsed_payload_is_accepted() {
    let result = reconcile_stages(well_formed_stage_array(2), 2);
    assert!(result.is_clean());
    assert_eq!(result.items.len(), 2);
}
