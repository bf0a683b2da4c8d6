//! Itinera CLI binary entry point.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use itinera::agent::AgentProfile;
use itinera::cli::{format_error_help, Cli, Commands, InputArgs};
use itinera::config::ItineraConfig;
use itinera::error::Result;
use itinera::prompt::{ConsolePrompter, LinePrompter, Prompter};
use itinera::questions::{normalize, RawQuestionInput};
use itinera::tools::builtin::{HAND_OFF_TOOL, HUMAN_IN_LOOP_TOOL};
use itinera::tools::{ToolArguments, ToolExecutionContext};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", format_error_help(&e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = ItineraConfig::resolve(cli.config.as_deref())?;
    tracing::debug!(tracing = config.tracing_enabled(), model = %config.model, "config resolved");

    let clarifier = AgentProfile::objective_clarifier(&config);
    let tools = clarifier.local_toolset(operator());
    let ctx = ToolExecutionContext::for_agent(&clarifier.name);

    match cli.command {
        Commands::Ask(args) => {
            let call = ToolArguments::new(serde_json::json!({ "question": args.read_value()? }));
            let answers = tools.execute(HUMAN_IN_LOOP_TOOL, &call, &ctx).await?;
            println!("{}", answers.as_str().unwrap_or_default());
        }
        Commands::Extract(args) => {
            let batch = extract(&args)?;
            println!("{}", serde_json::to_string_pretty(&batch)?);
        }
        Commands::Handoff(args) => {
            let call = ToolArguments::new(serde_json::json!({
                "objective_and_preferences": args.objective_and_preferences,
            }));
            let text = tools.execute(HAND_OFF_TOOL, &call, &ctx).await?;
            println!("{}", text.as_str().unwrap_or_default());
        }
        Commands::Tools => {
            println!("{}", serde_json::to_string_pretty(&tools.schemas())?);
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
        Commands::Profile(args) => {
            let profile = AgentProfile::by_name(&args.name, &config)?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
    }

    Ok(())
}

/// Line editing on a terminal, plain line reads when input is piped.
fn operator() -> Arc<dyn Prompter> {
    if io::stdin().is_terminal() {
        Arc::new(ConsolePrompter)
    } else {
        Arc::new(LinePrompter::stdio())
    }
}

fn extract(args: &InputArgs) -> Result<itinera::questions::QuestionBatch> {
    normalize(RawQuestionInput::from(args.read_value()?))
}
