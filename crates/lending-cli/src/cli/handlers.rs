use anyhow::{bail, Context, Result};
use serde_json::{json, Value};
use tracing::debug;

use lending_core::agent::{documents_for, draft_response, loan_summary, respond, ChatContext};
use lending_core::config::CoreConfig;
use lending_core::models::{ActivityEntry, InboxItem};
use lending_core::seed::{pending_arrivals, seed_inbox};
use lending_core::workflow::PROCESSING_STAGES;
use lending_core::{CoreError, Dashboard};

use super::protocol::{CliCommand, SimulateOptions};

/// Run one command and return its JSON result
pub fn execute(command: &CliCommand, config: &CoreConfig) -> Result<Value> {
    debug!(?command, "Executing command");
    match command {
        CliCommand::Inbox => Ok(json!({
            "items": seed_inbox(),
            "pending": pending_arrivals(),
        })),
        CliCommand::Documents { item_id } => {
            let item = find_item(*item_id)?;
            Ok(json!({
                "itemId": item.id,
                "documents": documents_for(item.id, &item.from, &item.loan_account),
                "loanSummary": loan_summary(),
            }))
        }
        CliCommand::Draft { item_id } => {
            let item = find_item(*item_id)?;
            Ok(json!({
                "itemId": item.id,
                "draft": draft_response(item.id, &item.from, &item.loan_account),
            }))
        }
        CliCommand::Ask { item_id, question } => {
            let item = find_item(*item_id)?;
            let documents = documents_for(item.id, &item.from, &item.loan_account);
            let answer = respond(
                question,
                &ChatContext {
                    sender: &item.from,
                    loan_account: &item.loan_account,
                    documents: &documents,
                },
            );
            Ok(json!({
                "itemId": item.id,
                "question": question,
                "answer": answer,
            }))
        }
        CliCommand::Simulate(options) => simulate(options, config),
        CliCommand::Stages => Ok(json!(PROCESSING_STAGES)),
    }
}

/// Serialize a result for stdout
pub fn format_output(value: &Value, pretty: bool) -> Result<String> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    output.context("Failed to serialize output")
}

/// Known requests: the starting inbox plus everything queued to arrive
fn find_item(item_id: u32) -> Result<InboxItem, CoreError> {
    seed_inbox()
        .into_iter()
        .chain(pending_arrivals())
        .find(|item| item.id == item_id)
        .ok_or(CoreError::UnknownItem(item_id))
}

fn simulate(options: &SimulateOptions, config: &CoreConfig) -> Result<Value> {
    if options.ask.is_some() && options.process.is_none() {
        bail!("--ask needs --process to pick the request to chat about");
    }

    let mut dashboard = Dashboard::new(config.clone());
    let mut events = Vec::new();

    dashboard.open_inbox();
    for _ in 0..options.arrivals {
        events.extend(dashboard.advance(config.arrival_interval()));
    }

    if let Some(item_id) = options.process {
        dashboard
            .select_item(item_id)
            .with_context(|| format!("Cannot process request {item_id}"))?;
        dashboard.start_processing();
        for _ in 0..dashboard.processing().stage_count() {
            events.extend(dashboard.advance(config.stage_interval()));
        }

        if let Some(question) = &options.ask {
            dashboard.open_chat();
            dashboard.submit_chat(question);
            events.extend(dashboard.advance(config.chat_reply_delay()));
        }
    }

    let processing = dashboard.processing();
    let draft = dashboard.draft();
    let activity: Vec<&ActivityEntry> = dashboard.activity().entries().collect();

    Ok(json!({
        "elapsedMs": u64::try_from(dashboard.elapsed().as_millis()).unwrap_or(u64::MAX),
        "events": events,
        "items": dashboard.items(),
        "selected": dashboard.selected_id(),
        "processing": {
            "status": processing.status(),
            "stage": processing.stage(),
            "stageCount": processing.stage_count(),
        },
        "draft": draft.has_draft().then(|| draft.text()),
        "chat": dashboard.chat_messages(),
        "activity": activity,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(command: CliCommand) -> Value {
        execute(&command, &CoreConfig::default()).unwrap()
    }

    #[test]
    fn test_inbox_lists_seed_and_pending() {
        let value = run(CliCommand::Inbox);
        assert_eq!(value["items"].as_array().unwrap().len(), 3);
        let pending: Vec<u64> = value["pending"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_u64().unwrap())
            .collect();
        assert_eq!(pending, vec![4, 5, 7]);
    }

    #[test]
    fn test_documents_for_pending_item_use_fallback() {
        let value = run(CliCommand::Documents { item_id: 5 });
        let names: Vec<&str> = value["documents"]
            .as_array()
            .unwrap()
            .iter()
            .map(|doc| doc["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "Loan Agreement - LC-2023-0456.pdf",
                "Credit Report - logistics.com.pdf",
                "Financial Statements - Current.pdf",
            ]
        );
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let err = execute(&CliCommand::Draft { item_id: 99 }, &CoreConfig::default()).unwrap_err();
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_draft_generic_template() {
        let value = run(CliCommand::Draft { item_id: 7 });
        let draft = value["draft"].as_str().unwrap();
        assert!(draft.contains("David Thompson"));
        assert!(draft.contains("LC-2023-0334"));
    }

    #[test]
    fn test_ask_uses_first_matching_rule() {
        let value = run(CliCommand::Ask {
            item_id: 1,
            question: "Payment schedule and credit score?".to_string(),
        });
        assert_eq!(value["answer"]["rule"], "payment_terms");
    }

    #[test]
    fn test_stages() {
        let value = run(CliCommand::Stages);
        assert_eq!(value.as_array().unwrap().len(), 6);
        assert_eq!(value[0], "Analyzing email content");
    }

    #[test]
    fn test_simulate_arrival_and_processing() {
        let value = run(CliCommand::Simulate(SimulateOptions {
            arrivals: 1,
            process: Some(4),
            ask: Some("What's the balance?".to_string()),
        }));
        assert_eq!(value["items"].as_array().unwrap().len(), 4);
        assert_eq!(value["items"][0]["id"], 4);
        assert_eq!(value["processing"]["status"], "completed");
        assert!(value["draft"].as_str().unwrap().contains("Lisa Chen"));
        // Welcome, question, answer
        assert_eq!(value["chat"].as_array().unwrap().len(), 3);
        assert_eq!(value["events"][0]["event"], "item_arrived");
        assert_eq!(value["events"][0]["itemId"], 4);
        assert_eq!(value["elapsedMs"], 15_000 + 6 * 1_000 + 1_500);
    }

    #[test]
    fn test_output_keys_are_camel_case() {
        let value = run(CliCommand::Documents { item_id: 1 });
        assert!(value["loanSummary"]["loanAmount"].is_string());
        assert!(value["loanSummary"].get("loan_amount").is_none());

        let value = run(CliCommand::Inbox);
        let item = &value["items"][0];
        assert_eq!(item["loanAccount"], "LC-2024-0158");
        assert_eq!(item["isNew"], false);
        assert!(item.get("loan_account").is_none());
        assert!(item.get("request_type").is_none());

        let value = run(CliCommand::Ask {
            item_id: 1,
            question: "What's the balance?".to_string(),
        });
        assert!(value["answer"]["relatedDocuments"].is_array());
    }

    #[test]
    fn test_simulate_ask_without_process() {
        let command = CliCommand::Simulate(SimulateOptions {
            ask: Some("hello".to_string()),
            ..SimulateOptions::default()
        });
        assert!(execute(&command, &CoreConfig::default()).is_err());
    }

    #[test]
    fn test_simulate_cannot_process_item_not_yet_arrived() {
        let command = CliCommand::Simulate(SimulateOptions {
            process: Some(7),
            ..SimulateOptions::default()
        });
        assert!(execute(&command, &CoreConfig::default()).is_err());
    }

    #[test]
    fn test_format_output() {
        let value = json!({"a": 1});
        assert_eq!(format_output(&value, false).unwrap(), r#"{"a":1}"#);
        assert_eq!(format_output(&value, true).unwrap(), "{\n  \"a\": 1\n}");
    }
}
