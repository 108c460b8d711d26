//! Common test utilities for building raw model responses.
use serde_json::{Value, json};

/// A deterministic valid 24-hex identifier for test fixtures.
#[allow(dead_code)]
pub fn test_id(n: usize) -> String {
    format!("{:024x}", n)
}

/// Builds one fully-populated, well-formed stage object.
///
/// `destination` must point at a stage id present in the same array for the
/// fixture to be referentially closed.
#[allow(dead_code)]
pub fn well_formed_stage(id: &str, title: &str, destination: &str) -> Value {
    json!({
        "id": id,
        "taskReference": format!("Ref {}", title),
        "type": "task-user",
        "taskTitle": title,
        "description": format!("Executa {}", title),
        "isConcentrator": false,
        "isNonTransferable": false,
        "isMobileAllowed": true,
        "notification": false,
        "implementAprovation": false,
        "communicationEmail": false,
        "actions": [{
            "labelButton": "Avançar",
            "textHelp": "Segue para a próxima etapa",
            "position": "1",
            "stageDestinationId": destination,
            "color": "primary",
            "icon": "arrow-right"
        }]
    })
}

/// Builds a referentially-closed array of `n` well-formed stages: a linear
/// chain whose last stage loops back onto itself.
#[allow(dead_code)]
pub fn well_formed_stage_array(n: usize) -> Value {
    let stages: Vec<Value> = (1..=n)
        .map(|i| {
            let destination = if i < n { test_id(i + 1) } else { test_id(i) };
            well_formed_stage(&test_id(i), &format!("Etapa {}", i), &destination)
        })
        .collect();
    Value::Array(stages)
}

/// Builds a well-formed field candidate object.
#[allow(dead_code)]
pub fn field_candidate(identifier: &str, field_type: &str, label: &str) -> Value {
    json!({
        "identifier": identifier,
        "type": field_type,
        "label": label,
    })
}
