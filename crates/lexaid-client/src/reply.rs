use serde_json::Value;

/// Appended when no candidate envelope shape matches.
pub const UNEXPECTED_REPLY: &str =
    "Sorry, I received an unexpected response format. Please try again.";

/// Unwrap the assistant reply from whichever envelope the chat backend
/// used. The candidate shapes are tried in a fixed order: bare string,
/// `{answer: {answer}}`, `{answer}`, then the first string-valued field
/// among `response`, `message`, `text`, `content`, `result`.
pub fn extract_reply(body: &Value) -> Option<String> {
    if let Value::String(text) = body {
        return Some(text.clone());
    }
    let envelope = body.as_object()?;

    if let Some(answer) = envelope.get("answer") {
        if let Some(nested) = answer.get("answer").and_then(Value::as_str) {
            return Some(nested.to_string());
        }
        if let Some(text) = answer.as_str() {
            return Some(text.to_string());
        }
    }

    for key in ["response", "message", "text", "content", "result"] {
        if let Some(text) = envelope.get(key).and_then(Value::as_str) {
            return Some(text.to_string());
        }
    }

    None
}
