//! Stage graph reconciliation: repair a list of stages and their transition
//! actions to an exact count with referential closure.

use super::{Reconciled, Repair, SuggestionPayload, parse_array};
use crate::coerce::{scalar_string, to_bool_or};
use crate::ident::StageId;
use crate::model::{Action, STAGE_TYPE, Stage};
use ahash::AHashSet;
use serde_json::Value;
use tracing::{debug, warn};

/// A stage whose actions still carry unverified destinations. The
/// destination is `Some` only when format-valid; whether it resolves is
/// decided against the final id set.
struct PendingStage {
    stage: Stage,
    actions: Vec<PendingAction>,
}

struct PendingAction {
    label_button: String,
    text_help: String,
    position: String,
    color: String,
    icon: String,
    destination: Option<StageId>,
}

/// Repairs an untrusted stage-suggestion payload into exactly `required`
/// stages whose identifiers are valid, pairwise distinct, and whose action
/// destinations all resolve within the returned list.
///
/// Invalid edges are relinked onto a deterministic linear chain: each stage
/// defaults to the next one, the last stage to itself. Valid edges supplied
/// by the model are preserved untouched, so a well-formed input passes
/// through unchanged. An unusable payload yields the full fallback
/// topology. No input can make this fail or panic.
pub fn reconcile_stages(
    payload: impl Into<SuggestionPayload>,
    required: usize,
) -> Reconciled<Stage> {
    let mut repairs = Vec::new();

    let mut entries = match parse_array(payload.into()) {
        Ok(entries) => entries,
        Err(failure) => {
            warn!(%failure, "stage response unusable; generating fallback topology");
            let items = fallback_chain(required, &mut repairs);
            return Reconciled { items, repairs };
        }
    };

    if entries.len() > required {
        let from = entries.len();
        entries.truncate(required);
        repairs.push(Repair::Truncated {
            from,
            to: required,
        });
    }
    let supplied = entries.len();

    let mut seen = AHashSet::new();
    let mut pending: Vec<PendingStage> = Vec::with_capacity(required);
    for (i, entry) in entries.into_iter().enumerate() {
        match entry.as_object() {
            Some(obj) => pending.push(normalize_stage(obj, i, &mut seen, &mut repairs)),
            None => {
                repairs.push(Repair::StageRebuilt { index: i + 1 });
                let stub = Stage::stub(i + 1);
                seen.insert(stub.id.clone());
                pending.push(PendingStage {
                    stage: stub,
                    actions: Vec::new(),
                });
            }
        }
    }
    if supplied < required {
        for number in (supplied + 1)..=required {
            let stub = Stage::stub(number);
            seen.insert(stub.id.clone());
            pending.push(PendingStage {
                stage: stub,
                actions: Vec::new(),
            });
        }
        repairs.push(Repair::Padded {
            added: required - supplied,
        });
    }

    // Destinations are checked against the post-repair id set, so an edge
    // that pointed at a regenerated id is relinked like any other dangler.
    let ids: Vec<StageId> = pending.iter().map(|p| p.stage.id.clone()).collect();
    let id_set: AHashSet<&StageId> = ids.iter().collect();

    let mut items = Vec::with_capacity(pending.len());
    for (i, p) in pending.into_iter().enumerate() {
        let default_dest = if i + 1 < ids.len() {
            ids[i + 1].clone()
        } else {
            ids[i].clone()
        };
        let mut stage = p.stage;
        stage.actions = p
            .actions
            .into_iter()
            .enumerate()
            .map(|(j, a)| {
                let destination = match a.destination {
                    Some(dest) if id_set.contains(&dest) => dest,
                    _ => {
                        repairs.push(Repair::Relinked {
                            stage: i + 1,
                            action: j + 1,
                        });
                        default_dest.clone()
                    }
                };
                Action {
                    label_button: a.label_button,
                    text_help: a.text_help,
                    position: a.position,
                    stage_destination_id: destination,
                    color: a.color,
                    icon: a.icon,
                }
            })
            .collect();
        items.push(stage);
    }

    let result = Reconciled { items, repairs };
    if let Some(msg) = result.diagnostic() {
        debug!(repairs = %msg, "stage response repaired");
    }
    result
}

fn normalize_stage(
    obj: &serde_json::Map<String, Value>,
    index: usize,
    seen: &mut AHashSet<StageId>,
    repairs: &mut Vec<Repair>,
) -> PendingStage {
    let id = match obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| StageId::parse(s).ok())
    {
        Some(id) if !seen.contains(&id) => id,
        _ => {
            repairs.push(Repair::IdRegenerated { index: index + 1 });
            StageId::generate()
        }
    };
    seen.insert(id.clone());

    let task_reference = obj
        .get("taskReference")
        .and_then(scalar_string)
        .filter(|s| !s.is_empty())
        .or_else(|| {
            obj.get("taskTitle")
                .and_then(scalar_string)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or_else(|| "Tarefa".to_string());
    let task_title = obj
        .get("taskTitle")
        .and_then(scalar_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| task_reference.clone());
    let description = obj
        .get("description")
        .and_then(scalar_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| format!("Descrição {}", index + 1));

    let actions = match obj.get("actions") {
        Some(Value::Array(list)) => normalize_actions(list, index, repairs),
        _ => {
            repairs.push(Repair::ActionsReset { index: index + 1 });
            Vec::new()
        }
    };

    let stage = Stage {
        id,
        task_reference,
        stage_type: STAGE_TYPE.to_string(),
        task_title,
        description,
        is_concentrator: to_bool_or(obj.get("isConcentrator"), false),
        is_non_transferable: to_bool_or(obj.get("isNonTransferable"), false),
        is_mobile_allowed: to_bool_or(obj.get("isMobileAllowed"), true),
        notification: to_bool_or(obj.get("notification"), false),
        implement_aprovation: to_bool_or(obj.get("implementAprovation"), false),
        communication_email: to_bool_or(obj.get("communicationEmail"), false),
        actions: Vec::new(),
    };
    PendingStage { stage, actions }
}

fn normalize_actions(
    list: &[Value],
    stage_index: usize,
    repairs: &mut Vec<Repair>,
) -> Vec<PendingAction> {
    list.iter()
        .enumerate()
        .map(|(j, item)| match item.as_object() {
            Some(o) => PendingAction {
                // A missing label gets the per-index default; a label the
                // model sent blank stays blank.
                label_button: match o.get("labelButton") {
                    None => format!("Ação {}", j + 1),
                    Some(v) => scalar_string(v).unwrap_or_default(),
                },
                text_help: o.get("textHelp").and_then(scalar_string).unwrap_or_default(),
                position: o
                    .get("position")
                    .and_then(scalar_string)
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| (j + 1).to_string()),
                color: o.get("color").and_then(scalar_string).unwrap_or_default(),
                icon: o.get("icon").and_then(scalar_string).unwrap_or_default(),
                destination: o
                    .get("stageDestinationId")
                    .and_then(Value::as_str)
                    .and_then(|s| StageId::parse(s).ok()),
            },
            None => {
                repairs.push(Repair::ActionRebuilt {
                    stage: stage_index + 1,
                    action: j + 1,
                });
                PendingAction {
                    label_button: format!("Ação {}", j + 1),
                    text_help: String::new(),
                    position: (j + 1).to_string(),
                    color: String::new(),
                    icon: String::new(),
                    destination: None,
                }
            }
        })
        .collect()
}

/// The deterministic replacement topology for unusable payloads: `required`
/// stub stages wired into a single linear chain, each stage advancing to
/// the next, the last one left without actions.
fn fallback_chain(required: usize, repairs: &mut Vec<Repair>) -> Vec<Stage> {
    repairs.push(Repair::Fallback);
    let mut stages: Vec<Stage> = (1..=required).map(Stage::stub).collect();
    let ids: Vec<StageId> = stages.iter().map(|s| s.id.clone()).collect();
    for i in 0..required.saturating_sub(1) {
        stages[i].actions = vec![Action {
            label_button: "Próximo".to_string(),
            text_help: "Avança para o próximo estágio".to_string(),
            position: "1".to_string(),
            stage_destination_id: ids[i + 1].clone(),
            color: "primary".to_string(),
            icon: "arrow-right".to_string(),
        }];
    }
    stages
}
