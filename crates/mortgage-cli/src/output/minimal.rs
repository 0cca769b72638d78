use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    let priority_keys = ["monthly_payment", "classification", "recommended_savings"];

    // Unwrap the envelope, or each envelope of a multi-section quote.
    let candidates: Vec<&Value> = match value.as_object() {
        Some(map) if map.contains_key("result") => vec![&map["result"]],
        Some(map) => map
            .values()
            .filter_map(|v| v.as_object())
            .filter_map(|m| m.get("result"))
            .collect(),
        None => Vec::new(),
    };

    for key in &priority_keys {
        for candidate in &candidates {
            if let Some(val) = candidate.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }
    }

    // Fall back to the first field of the first result object.
    if let Some(Value::Object(map)) = candidates.first() {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
