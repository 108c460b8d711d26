//! Prompt assembly for the two generators.
//!
//! Pure string builders; the similar-case context is embedded as JSON so the
//! model sees the same records the caller gets back. Product copy is pt-BR,
//! matching the UI these scaffolds are generated for.

use crate::service::RankedCase;

/// Builds the form-field suggestion prompt.
pub fn fields_prompt(name: &str, quantity: usize, context: &[RankedCase]) -> String {
    let context_json = context_json(context);
    format!(
        r#"Com base nos formulários semelhantes encontrados no dataset, incluindo nomes e descrições:

{context_json}

Sugira EXATAMENTE {quantity} campos para criar um novo formulário de "{name}".
Para cada campo, forneça:
- "identifier": um identificador único e relevante.
- "type": o tipo de campo mais adequado entre: LineText, TextArea, Number, Select, Checkbox, Radio, Toggle, Date.
- "label": um rótulo descritivo para o campo.
- "options": uma lista de opções (com "text" e "value") para campos Select ou Radio; omita para outros tipos.

⚠ Retorne **somente** um array JSON válido com exatamente {quantity} objetos, cada um com "identifier", "type", "label" e, se aplicável, "options".
Não adicione texto explicativo, comentários ou qualquer outro conteúdo.

Exemplo para num_fields=3:
[{{"identifier": "nome", "type": "LineText", "label": "Nome Completo"}}, {{"identifier": "CPF", "type": "LineText", "label": "CPF"}}, {{"identifier": "tipo_pessoa", "type": "Select", "label": "Tipo de Pessoa", "options": [{{"text": "Física", "value": "fisica"}}, {{"text": "Jurídica", "value": "juridica"}}]}}]"#
    )
}

/// Builds the workflow-stage suggestion prompt.
pub fn stages_prompt(name: &str, quantity: usize, context: &[RankedCase]) -> String {
    let context_json = context_json(context);
    let mut prompt = format!(
        r#"Com base nos processos semelhantes encontrados no dataset, incluindo nomes e descrições:

{context_json}

Sugira EXATAMENTE {quantity} estágios para criar um novo processo de "{name}".
Para cada estágio, forneça:
- "id": identificador único (24 chars hex).
- "taskReference": referência da tarefa.
- "type": tipo do estágio (sempre "task-user").
- "taskTitle": título da tarefa.
- "description": descrição do estágio.
- "isConcentrator": se o estágio é concentrador (boolean).
- "isNonTransferable": se o estágio é não-transferível (boolean).
- "isMobileAllowed": se permite acesso mobile (boolean).
- "notification": se terá notificação (boolean).
- "implementAprovation": se implementa aprovação (boolean).
- "communicationEmail": se envia comunicação por e-mail (boolean).
- "actions": lista de ações, cada uma com:
    - "labelButton": rótulo do botão.
    - "textHelp": texto de ajuda.
    - "position": posição (ordem) como string.
    - "stageDestinationId": id destino (24 hex) que deve referenciar um dos estágios do array.
    - "color": cor da ação/botão.
    - "icon": ícone da ação.

⚠ Retorne **somente** um array JSON válido com exatamente {quantity} objetos, cada um com os campos acima. Não adicione texto explicativo, comentários ou qualquer outro conteúdo.

Exemplo para num_stages=2:
"#
    );
    prompt.push_str(STAGES_EXAMPLE);
    prompt
}

const STAGES_EXAMPLE: &str = r#"[
  {
    "id": "5f8d0d55b54764421b7156c1",
    "taskReference": "Tarefa 1",
    "type": "task-user",
    "taskTitle": "Aprovação",
    "description": "Aprovar documento",
    "isConcentrator": true,
    "isNonTransferable": false,
    "isMobileAllowed": true,
    "notification": true,
    "implementAprovation": false,
    "communicationEmail": true,
    "actions": [
      {
        "labelButton": "Aprovar",
        "textHelp": "Aprova o documento",
        "position": "1",
        "stageDestinationId": "5f8d0d55b54764421b7156c2",
        "color": "green",
        "icon": "check"
      }
    ]
  },
  {
    "id": "5f8d0d55b54764421b7156c2",
    "taskReference": "Tarefa 2",
    "type": "task-user",
    "taskTitle": "Finalização",
    "description": "Concluir fluxo",
    "isConcentrator": false,
    "isNonTransferable": false,
    "isMobileAllowed": true,
    "notification": false,
    "implementAprovation": false,
    "communicationEmail": false,
    "actions": []
  }
]"#;

fn context_json(context: &[RankedCase]) -> String {
    serde_json::to_string(context).unwrap_or_else(|_| "[]".to_string())
}
