use crate::error::{ParseError, ParseErrorKind};
use crate::types::Template;
use serde_json::Value;

/// Load a YAML or JSON template.
///
/// Performs deserialization and top-level shape checks only. Resource bodies
/// are not validated here; malformed resources are skipped by the rules.
/// YAML short-form intrinsic tags (`!If`, `!Ref`) are not supported; use the
/// long form (`Fn::If`, `Ref`).
pub fn parse(input: &str) -> Result<Template, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Syntax, "empty input"));
    }

    let value = load_value(input)?;

    if !value.is_object() {
        return Err(ParseError::new(
            ParseErrorKind::TypeMismatch,
            "template root must be a mapping",
        ));
    }

    if let Some(resources) = value.get("Resources")
        && !resources.is_object()
    {
        return Err(ParseError {
            path: Some("Resources".to_string()),
            ..ParseError::new(
                ParseErrorKind::TypeMismatch,
                "Resources section must be a mapping",
            )
        });
    }

    serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_json_error(&msg), msg)
    })
}

/// `{`-prefixed input is tried as JSON, then as flow-style YAML. When both
/// fail the JSON error (with its position) is reported.
fn load_value(input: &str) -> Result<Value, ParseError> {
    if !input.trim_start().starts_with('{') {
        return load_yaml(input);
    }
    match serde_json::from_str(input) {
        Ok(value) => Ok(value),
        Err(json_err) => load_yaml(input).map_err(|_| ParseError {
            line: Some(json_err.line()),
            column: Some(json_err.column()),
            ..ParseError::new(ParseErrorKind::Syntax, json_err.to_string())
        }),
    }
}

#[cfg(feature = "yaml")]
fn load_yaml(input: &str) -> Result<Value, ParseError> {
    check_multi_document(input)?;

    serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_saphyr_error(&msg), msg)
    })
}

#[cfg(not(feature = "yaml"))]
fn load_yaml(_input: &str) -> Result<Value, ParseError> {
    Err(ParseError::new(
        ParseErrorKind::Syntax,
        "YAML input requires the `yaml` feature; only JSON templates can be loaded",
    ))
}

/// Check for multiple YAML documents (--- separator).
/// Only matches `---` at column 0, followed by end of line or whitespace
/// (so `--- # comment` counts).
#[cfg(feature = "yaml")]
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for (line_num, line) in input.lines().enumerate() {
        let is_marker = line
            .strip_prefix("---")
            .is_some_and(|rest| rest.is_empty() || rest.starts_with([' ', '\t']));
        if is_marker {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError {
                    line: Some(line_num + 1),
                    column: Some(1),
                    ..ParseError::new(
                        ParseErrorKind::Syntax,
                        "multi-document YAML is not supported",
                    )
                });
            }
        }
    }
    Ok(())
}

#[cfg(feature = "yaml")]
fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("invalid type") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("missing field") || lower.contains("invalid type") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}
