//! CLI definitions for Itinera.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::error::{ErrorCategory, ItineraError, Result};

/// Itinera CLI
#[derive(Parser, Debug)]
#[command(name = "itinera", version, about = "Clarification tools for itinerary agents")]
pub struct Cli {
    /// Config file (defaults to ~/.itinera/config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask clarification questions on this terminal and print the answers
    Ask(InputArgs),
    /// Print the questions recovered from the input as JSON
    Extract(InputArgs),
    /// Echo the collected objective and preferences
    Handoff(HandoffArgs),
    /// Print the local tool declarations as JSON
    Tools,
    /// Print the resolved configuration as TOML
    Config,
    /// Print an agent profile's wiring as JSON
    Profile(ProfileArgs),
}

/// Where the raw question input comes from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Question text (numbered list, fenced JSON, or one per line)
    pub text: Option<String>,

    /// Read the input from a file instead
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Treat the input as a JSON value (object or array)
    #[arg(long)]
    pub json: bool,
}

impl InputArgs {
    /// Resolve the input to a JSON value: a string unless `--json` is set.
    pub fn read_value(&self) -> Result<serde_json::Value> {
        let raw = match (&self.text, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => {
                return Err(ItineraError::InvalidArgument(
                    "provide question text or --file".into(),
                ))
            }
        };
        if self.json {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(serde_json::Value::String(raw))
        }
    }
}

/// Arguments for `itinera handoff`.
#[derive(Args, Debug)]
pub struct HandoffArgs {
    /// Objective and preferences, usually markdown
    pub objective_and_preferences: String,
}

/// Arguments for `itinera profile`.
#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// itinerary, macro, day_planner, lodging, or objective_clarifier
    #[arg(default_value = "itinerary")]
    pub name: String,
}

/// Map an [`ItineraError`] to a user-facing help string.
pub fn format_error_help(err: &ItineraError) -> String {
    match err.category() {
        ErrorCategory::Input => format!("{err}. See: itinera --help"),
        ErrorCategory::Configuration => {
            format!("{err}. Check your config file, .env, or ITINERA_* variables")
        }
        _ => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ask_with_text() {
        let cli = Cli::try_parse_from(["itinera", "ask", "1. Budget?\n2. Days?"]).unwrap();
        match cli.command {
            Commands::Ask(args) => {
                assert_eq!(args.text.as_deref(), Some("1. Budget?\n2. Days?"));
                assert!(args.file.is_none());
                assert!(!args.json);
            }
            other => panic!("expected Ask, got {other:?}"),
        }
    }

    #[test]
    fn parse_extract_from_file_as_json() {
        let cli =
            Cli::try_parse_from(["itinera", "extract", "--file", "q.json", "--json"]).unwrap();
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.file, Some(PathBuf::from("q.json")));
                assert!(args.json);
            }
            other => panic!("expected Extract, got {other:?}"),
        }
    }

    #[test]
    fn text_and_file_conflict() {
        assert!(Cli::try_parse_from(["itinera", "ask", "Budget?", "--file", "q.txt"]).is_err());
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["itinera", "tools", "--config", "itinera.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("itinera.toml")));
        assert!(matches!(cli.command, Commands::Tools));
    }

    #[test]
    fn profile_defaults_to_itinerary() {
        let cli = Cli::try_parse_from(["itinera", "profile"]).unwrap();
        match cli.command {
            Commands::Profile(args) => assert_eq!(args.name, "itinerary"),
            other => panic!("expected Profile, got {other:?}"),
        }
    }

    #[test]
    fn parse_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["itinera"]).is_err());
    }

    #[test]
    fn read_value_wraps_text_as_string() {
        let args = InputArgs {
            text: Some("Budget?".into()),
            file: None,
            json: false,
        };
        assert_eq!(args.read_value().unwrap(), serde_json::json!("Budget?"));
    }

    #[test]
    fn read_value_parses_json() {
        let args = InputArgs {
            text: Some(r#"{"questions": ["Window or aisle seat?"]}"#.into()),
            file: None,
            json: true,
        };
        assert_eq!(
            args.read_value().unwrap()["questions"][0],
            "Window or aisle seat?"
        );
    }

    #[test]
    fn read_value_requires_some_input() {
        let args = InputArgs {
            text: None,
            file: None,
            json: false,
        };
        assert!(matches!(
            args.read_value().unwrap_err(),
            ItineraError::InvalidArgument(_)
        ));
    }

    #[test]
    fn help_mentions_config_for_configuration_errors() {
        let help = format_error_help(&ItineraError::Configuration("bad".into()));
        assert!(help.contains("ITINERA_"));
    }
}
