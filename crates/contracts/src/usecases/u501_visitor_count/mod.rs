//! Visitor counter: response parsing and what the footer shows.
//!
//! The endpoint is owned elsewhere. It answers a plain `GET` with one of
//! `42`, `{"count": 42}` or the text `42`.

use serde_json::Value;
use thiserror::Error;

use crate::shared::number_format::format_grouped;

/// Shown whenever no count is available.
pub const PLACEHOLDER: &str = "—";

/// Request is aborted after this long.
pub const REQUEST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisitorCountError {
    #[error("HTTP {0}")]
    Http(u16),
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Network(String),
    #[error("Invalid response")]
    InvalidResponse,
}

/// Extract the count from a response body.
///
/// JSON is tried first; a body that is not JSON is read as plain text.
/// JSON that parses but is neither a number nor an object with a numeric
/// (or numeric-string) `count` is rejected.
pub fn parse_count_body(body: &str) -> Result<f64, VisitorCountError> {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(Value::Number(n)) => n.as_f64(),
        Ok(Value::Object(map)) => match map.get("count") {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => parse_number_text(s),
            _ => None,
        },
        Ok(_) => None,
        Err(_) => parse_number_text(body),
    };
    value
        .filter(|v| v.is_finite())
        .ok_or(VisitorCountError::InvalidResponse)
}

fn parse_number_text(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Footer state of the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitorCountDisplay {
    Loading,
    Loaded { text: String },
    Unavailable { tooltip: String },
}

impl VisitorCountDisplay {
    /// No endpoint configured: nothing is fetched.
    pub fn inactive() -> Self {
        VisitorCountDisplay::Unavailable {
            tooltip: "Visitor counter inactive (no API URL configured)".to_string(),
        }
    }

    pub fn from_result(result: Result<f64, VisitorCountError>) -> Self {
        match result {
            Ok(count) => VisitorCountDisplay::Loaded {
                text: format_grouped(count),
            },
            Err(e) => VisitorCountDisplay::Unavailable {
                tooltip: format!("Visitor counter unavailable ({})", e),
            },
        }
    }

    pub fn text(&self) -> &str {
        match self {
            VisitorCountDisplay::Loaded { text } => text,
            _ => PLACEHOLDER,
        }
    }

    pub fn tooltip(&self) -> Option<&str> {
        match self {
            VisitorCountDisplay::Unavailable { tooltip } => Some(tooltip),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, VisitorCountDisplay::Loaded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json_number() {
        assert_eq!(parse_count_body("42"), Ok(42.0));
        assert_eq!(parse_count_body(" 1234567 \n"), Ok(1234567.0));
    }

    #[test]
    fn test_parse_count_object() {
        assert_eq!(parse_count_body(r#"{"count": 42}"#), Ok(42.0));
        assert_eq!(parse_count_body(r#"{"count": "17", "other": true}"#), Ok(17.0));
    }

    #[test]
    fn test_parse_text_fallback() {
        assert_eq!(parse_count_body("  0099 "), Ok(99.0));
        assert_eq!(parse_count_body("12.5"), Ok(12.5));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for body in [
            "",
            "   ",
            "null",
            "\"42\"",
            "[42]",
            r#"{"visits": 3}"#,
            r#"{"count": null}"#,
            r#"{"count": "lots"}"#,
            "<html>oops</html>",
            "Infinity",
            "NaN",
        ] {
            assert_eq!(
                parse_count_body(body),
                Err(VisitorCountError::InvalidResponse),
                "{:?}",
                body
            );
        }
    }

    #[test]
    fn test_display_loaded_uses_grouping() {
        let display = VisitorCountDisplay::from_result(parse_count_body(r#"{"count": 42}"#));
        assert_eq!(display.text(), "42");
        assert!(display.is_loaded());
        assert_eq!(display.tooltip(), None);

        let display = VisitorCountDisplay::from_result(Ok(12345.0));
        assert_eq!(display.text(), "12,345");
    }

    #[test]
    fn test_display_failures_keep_placeholder_with_diagnostic() {
        let display = VisitorCountDisplay::from_result(Err(VisitorCountError::Http(500)));
        assert_eq!(display.text(), PLACEHOLDER);
        assert_eq!(display.tooltip(), Some("Visitor counter unavailable (HTTP 500)"));

        let display = VisitorCountDisplay::from_result(Err(VisitorCountError::Timeout));
        assert_eq!(display.text(), PLACEHOLDER);
        assert!(display.tooltip().is_some_and(|t| t.contains("timed out")));
    }

    #[test]
    fn test_inactive_display() {
        let display = VisitorCountDisplay::inactive();
        assert_eq!(display.text(), PLACEHOLDER);
        assert!(!display.tooltip().unwrap_or_default().is_empty());
        assert_eq!(VisitorCountDisplay::Loading.text(), PLACEHOLDER);
    }
}
