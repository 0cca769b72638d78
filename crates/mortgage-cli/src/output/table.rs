use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as field/value tables using the tabled crate.
///
/// A computation envelope renders as one table followed by its warnings and
/// methodology. The quote command's object of envelopes renders as one
/// titled section per envelope.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("result") => {
            print_envelope(map);
        }
        Value::Object(map)
            if !map.is_empty()
                && map
                    .values()
                    .all(|v| matches!(v, Value::Object(m) if m.contains_key("result"))) =>
        {
            let mut first = true;
            for (section, envelope) in map {
                if !first {
                    println!();
                }
                first = false;
                println!("== {section} ==");
                if let Value::Object(env) = envelope {
                    print_envelope(env);
                }
            }
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_envelope(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Object(result)) = envelope.get("result") {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in result {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
