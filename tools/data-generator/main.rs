use clap::Parser;
use rand::Rng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate corrupted sample model responses for exercising
/// the reconcilers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_responses.json")]
    output: String,

    /// How many sample responses to generate
    #[arg(long, default_value_t = 10)]
    samples: usize,

    /// The stage count each sample pretends was requested
    #[arg(long, default_value_t = 3)]
    count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating {} corrupted stage responses (requested count {})...",
        cli.samples, cli.count
    );

    let samples: Vec<Value> = (0..cli.samples)
        .map(|_| {
            let (label, response) = corrupt_response(&mut rng, cli.count);
            json!({
                "label": label,
                "quantity": cli.count,
                "response": response,
            })
        })
        .collect();

    fs::write(&cli.output, serde_json::to_string_pretty(&samples)?)?;
    println!("Wrote {} samples to '{}'", cli.samples, cli.output);
    println!("Feed one to the CLI with: fluxo-cli stages -n {} -i <file>", cli.count);
    Ok(())
}

/// Picks one corruption shape and renders it as raw response text.
fn corrupt_response(rng: &mut impl Rng, count: usize) -> (&'static str, String) {
    match rng.random_range(0..6) {
        0 => ("well-formed", stage_array(count, false)),
        1 => ("oversized", stage_array(count + rng.random_range(1..4), false)),
        2 => ("undersized", stage_array(count.saturating_sub(1).max(1), false)),
        3 => ("corrupted-ids", stage_array(count, true)),
        4 => (
            "fenced",
            format!("Claro! Aqui está o JSON:\n```json\n{}\n```", stage_array(count, false)),
        ),
        _ => ("not-json", "Desculpe, não consegui gerar os estágios.".to_string()),
    }
}

fn stage_array(count: usize, corrupt_ids: bool) -> String {
    let ids: Vec<String> = (0..count).map(|i| format!("{:024x}", i + 1)).collect();
    let stages: Vec<Value> = (0..count)
        .map(|i| {
            let id = if corrupt_ids && i % 2 == 0 {
                "not-a-valid-id".to_string()
            } else {
                ids[i].clone()
            };
            let destination = if corrupt_ids {
                "ffffffffffffffffffffffff".to_string()
            } else {
                ids[(i + 1) % count].clone()
            };
            json!({
                "id": id,
                "taskReference": format!("Tarefa {}", i + 1),
                "type": "task-user",
                "taskTitle": format!("Etapa {}", i + 1),
                "description": format!("Executa a etapa {}", i + 1),
                "isConcentrator": false,
                "isNonTransferable": false,
                "isMobileAllowed": true,
                "notification": false,
                "implementAprovation": false,
                "communicationEmail": false,
                "actions": [{
                    "labelButton": "Avançar",
                    "textHelp": "Segue o fluxo",
                    "position": "1",
                    "stageDestinationId": destination,
                    "color": "primary",
                    "icon": "arrow-right"
                }]
            })
        })
        .collect();
    serde_json::to_string(&stages).unwrap_or_else(|_| "[]".to_string())
}
