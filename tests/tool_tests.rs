//! Tests for the tool system and the clarification tools.

use std::sync::Arc;

use serde_json::json;

use itinera::error::ItineraError;
use itinera::prompt::ScriptedPrompter;
use itinera::tools::builtin::{clarification_tools, HAND_OFF_TOOL, HUMAN_IN_LOOP_TOOL};
use itinera::tools::tool::{AgentTool, Tool, ToolExecutionContext};
use itinera::tools::*;

#[test]
fn parameter_builder_constructs_schema() {
    let params = AgentToolParameters::object()
        .string("objective", "What the traveller wants", true)
        .any_of_types("extra", "Anything else", &["string", "array"], false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["objective"]["type"], "string");
    assert_eq!(schema["properties"]["extra"]["type"], json!(["string", "array"]));
    assert_eq!(schema["required"], json!(["objective"]));
}

#[test]
fn tool_arguments_get_str() {
    let args = ToolArguments::new(json!({"city": "Munich", "days": 2}));
    assert_eq!(args.get_str("city").unwrap(), "Munich");
    assert!(args.get_str("missing").is_err());
    assert!(args.get_str("days").is_err());
    assert_eq!(args.get_str_opt("days"), None);
}

#[test]
fn tool_arguments_deserialize() {
    #[derive(serde::Deserialize, PartialEq, Debug)]
    struct Params {
        city: String,
        days: Option<u32>,
    }

    let args = ToolArguments::new(json!({"city": "Munich", "days": 2}));
    let params: Params = args.deserialize().unwrap();
    assert_eq!(
        params,
        Params {
            city: "Munich".into(),
            days: Some(2)
        }
    );
}

#[tokio::test]
async fn agent_tool_executes() {
    let tool = AgentTool::new(
        "greet",
        "Greet a traveller",
        AgentToolParameters::object().string("name", "Name", true).build(),
        |args, _ctx| async move {
            let name = args.get_str("name")?;
            Ok(json!({"greeting": format!("Servus, {name}!")}))
        },
    );

    assert_eq!(tool.name(), "greet");
    let result = tool
        .execute(
            &ToolArguments::new(json!({"name": "Ana"})),
            &ToolExecutionContext::default(),
        )
        .await
        .unwrap();
    assert_eq!(result["greeting"], "Servus, Ana!");
}

#[tokio::test]
async fn human_tool_accepts_text() {
    let tools = clarification_tools(Arc::new(ScriptedPrompter::new(["500 euros", "4"])));
    let args = ToolArguments::new(json!({
        "question": "1. What is your budget?\n2. How many days?"
    }));

    let result = tools
        .execute(HUMAN_IN_LOOP_TOOL, &args, &ToolExecutionContext::default())
        .await
        .unwrap();

    assert_eq!(result, json!("What is your budget?\n500 euros\n\nHow many days?\n4"));
}

#[tokio::test]
async fn human_tool_accepts_mapping_and_list() {
    let prompter = Arc::new(ScriptedPrompter::new(["aisle", "yes", "no"]));
    let tools = clarification_tools(prompter.clone());
    let ctx = ToolExecutionContext::default();

    let mapping = ToolArguments::new(json!({"question": {"questions": ["Window or aisle seat?"]}}));
    let result = tools.execute(HUMAN_IN_LOOP_TOOL, &mapping, &ctx).await.unwrap();
    assert_eq!(result, json!("Window or aisle seat?\naisle"));

    let list = ToolArguments::new(json!({"question": ["Museums?", "Parks?"]}));
    let result = tools.execute(HUMAN_IN_LOOP_TOOL, &list, &ctx).await.unwrap();
    assert_eq!(result, json!("Museums?\nyes\n\nParks?\nno"));

    assert_eq!(
        prompter.asked(),
        vec!["[Agent] Window or aisle seat?", "Museums?", "Parks?"]
    );
}

#[tokio::test]
async fn human_tool_requires_question() {
    let tools = clarification_tools(Arc::new(ScriptedPrompter::default()));

    let err = tools
        .execute(
            HUMAN_IN_LOOP_TOOL,
            &ToolArguments::new(json!({})),
            &ToolExecutionContext::default(),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ItineraError::InvalidArgument(ref m) if m.contains("question")));
}

#[tokio::test]
async fn hand_off_passes_text_through() {
    let tools = clarification_tools(Arc::new(ScriptedPrompter::default()));
    let text = "## Objective\nDay plan in Munich\n\n## Preferences\n- espresso";

    let result = tools
        .execute(
            HAND_OFF_TOOL,
            &ToolArguments::new(json!({"objective_and_preferences": text})),
            &ToolExecutionContext::default(),
        )
        .await
        .unwrap();

    assert_eq!(result, json!(text));
}

#[test]
fn schemas_describe_both_tools() {
    let tools = clarification_tools(Arc::new(ScriptedPrompter::default()));
    let schemas = tools.schemas();

    assert_eq!(schemas.len(), 2);
    assert_eq!(schemas[0]["name"], HUMAN_IN_LOOP_TOOL);
    assert_eq!(schemas[0]["parameters"]["required"], json!(["question"]));
    assert_eq!(schemas[1]["name"], HAND_OFF_TOOL);
}
