use crate::ident::StageId;
use serde::{Deserialize, Serialize};

/// The only stage type the workflow engine currently executes.
pub const STAGE_TYPE: &str = "task-user";

/// An outgoing transition of a stage.
///
/// `stage_destination_id` always resolves to a stage in the same response;
/// the reconciler repairs any edge the model left dangling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub label_button: String,
    pub text_help: String,
    pub position: String,
    pub stage_destination_id: StageId,
    pub color: String,
    pub icon: String,
}

/// A workflow stage node, owning its outgoing actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: StageId,
    pub task_reference: String,
    #[serde(rename = "type")]
    pub stage_type: String,
    pub task_title: String,
    pub description: String,
    pub is_concentrator: bool,
    pub is_non_transferable: bool,
    pub is_mobile_allowed: bool,
    pub notification: bool,
    pub implement_aprovation: bool,
    pub communication_email: bool,
    pub actions: Vec<Action>,
}

impl Stage {
    /// A minimal valid stage inserted to satisfy a required count. `number`
    /// is the stage's 1-based position in the final list.
    pub fn stub(number: usize) -> Self {
        Stage {
            id: StageId::generate(),
            task_reference: format!("Tarefa {}", number),
            stage_type: STAGE_TYPE.to_string(),
            task_title: format!("Título {}", number),
            description: format!("Descrição {}", number),
            is_concentrator: false,
            is_non_transferable: false,
            is_mobile_allowed: true,
            notification: false,
            implement_aprovation: false,
            communication_email: false,
            actions: Vec::new(),
        }
    }
}
