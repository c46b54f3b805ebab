// JSON extraction from free-form model output.
//
// Models often wrap the requested JSON in prose or code fences. We try a
// direct parse first, then scan for the first balanced {...} (or [...])
// substring that parses. Each caller asks for the shape its prompt
// requested, so a stray group of the other kind is skipped. Field helpers
// coerce loosely typed values the way the prompts expect them; missing or
// mistyped fields get defaults instead of failing the whole response.

use serde_json::Value;

use super::traits::FetchError;

/// Extract the first JSON object, skipping any arrays that come before it.
pub fn extract_json_object(text: &str) -> Result<Value, FetchError> {
    extract_shaped(text, '{')
        .ok_or_else(|| FetchError::Malformed("no JSON object found in response".to_string()))
}

/// Extract the first JSON array, skipping any objects that come before it.
pub fn extract_json_array(text: &str) -> Result<Value, FetchError> {
    extract_shaped(text, '[')
        .ok_or_else(|| FetchError::Malformed("no JSON array found in response".to_string()))
}

/// First parseable balanced group opening with `open`.
fn extract_shaped(text: &str, open: char) -> Option<Value> {
    let wanted = |value: &Value| match open {
        '{' => value.is_object(),
        _ => value.is_array(),
    };

    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        if wanted(&value) {
            return Some(value);
        }
    }

    for (start, _) in trimmed.match_indices(open) {
        if let Some(end) = balanced_end(&trimmed[start..]) {
            if let Ok(value) = serde_json::from_str::<Value>(&trimmed[start..start + end]) {
                return Some(value);
            }
        }
    }
    None
}

/// Byte length of the balanced bracket group at the start of `text`.
/// Brackets inside string literals are ignored.
fn balanced_end(text: &str) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => stack.push('}'),
            '[' => stack.push(']'),
            '}' | ']' => {
                if stack.pop() != Some(c) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Numeric coercion: numbers and numeric strings pass through, anything
/// else (including NaN) becomes 0.0. The result is clamped to [0, 1].
pub fn unit_f64(value: Option<&Value>) -> f64 {
    let n = number(value).unwrap_or(0.0);
    if n.is_nan() {
        0.0
    } else {
        n.clamp(0.0, 1.0)
    }
}

/// Numeric coercion without clamping. `None` when the value is not numeric.
pub fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// String coercion. `None` for null, missing, arrays and objects.
pub fn string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Array-of-strings coercion. Non-arrays give an empty list; scalar items
/// are stringified, null and nested structures are skipped.
pub fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().filter_map(|v| string(Some(v))).collect(),
        _ => Vec::new(),
    }
}
