use serde_json::Value;

/// Ids are matched exactly, so only an absent or empty one is rejected.
pub fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Reads a numeric request field. Form bodies deliver numbers as strings, so
/// both shapes are accepted; anything else counts as absent.
pub fn parse_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
