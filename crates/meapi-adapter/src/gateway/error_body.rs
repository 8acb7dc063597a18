//! Turning failure responses into one displayable line.
//!
//! Preference order: a structured error payload in the body, then the raw
//! body text, then a status-only description. Callers never see the body
//! as an unformatted JSON value.

use reqwest::StatusCode;
use serde_json::Value;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Fields servers commonly use for a human-readable error
const MESSAGE_FIELDS: [&str; 3] = ["detail", "error", "message"];

pub(crate) fn describe_error_body(status: StatusCode, body: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(body) {
        if let Some(message) = describe_json(&value) {
            return message;
        }
    }

    let preview = body_preview(body);
    if preview.is_empty() {
        format!("Request failed with status code {}", status.as_u16())
    } else {
        preview
    }
}

fn describe_json(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Value::Object(fields) => {
            if let Some(message) = MESSAGE_FIELDS
                .iter()
                .find_map(|key| fields.get(*key).and_then(Value::as_str))
                .filter(|message| !message.trim().is_empty())
            {
                return Some(message.trim().to_string());
            }
            let pairs: Vec<String> = fields
                .iter()
                .filter_map(|(key, value)| scalar_text(value).map(|text| format!("{key}: {text}")))
                .collect();
            (!pairs.is_empty()).then(|| pairs.join("; "))
        }
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

/// Text for a value that can sit in one line: strings, numbers, bools and
/// lists of those (validation errors are usually `{"field": ["msg"]}`)
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
