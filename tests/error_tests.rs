//! Tests for the error system.

use itinera::error::*;

#[test]
fn display_messages_are_stable() {
    assert_eq!(
        ItineraError::InvalidInput("no question text could be recovered".into()).to_string(),
        "Invalid input: no question text could be recovered"
    );
    assert_eq!(
        ItineraError::tool("human_in_loop_tool", "prompt thread panicked").to_string(),
        "Tool execution error: human_in_loop_tool — prompt thread panicked"
    );
}

#[test]
fn categories_and_user_facing_flags() {
    let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin");
    let serde_error = serde_json::from_str::<serde_json::Value>("{not-json}").unwrap_err();
    let toml_error = toml::from_str::<toml::Table>("= nope").unwrap_err();

    let cases = [
        (ItineraError::InvalidInput("x".into()), ErrorCategory::Input, true),
        (ItineraError::InvalidArgument("x".into()), ErrorCategory::Input, true),
        (ItineraError::Configuration("x".into()), ErrorCategory::Configuration, true),
        (ItineraError::from(toml_error), ErrorCategory::Configuration, true),
        (ItineraError::from(io_error), ErrorCategory::Io, false),
        (ItineraError::from(serde_error), ErrorCategory::Serialization, false),
        (ItineraError::tool("t", "m"), ErrorCategory::ToolExecution, false),
        (ItineraError::ToolNotFound("t".into()), ErrorCategory::ToolExecution, false),
    ];

    for (error, category, user_facing) in cases {
        assert_eq!(error.category(), category, "{error}");
        assert_eq!(error.is_user_facing(), user_facing, "{error}");
    }
}
