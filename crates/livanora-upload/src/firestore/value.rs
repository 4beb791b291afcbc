//! Firestore typed-value encoding
//!
//! The REST API does not accept plain JSON documents. Every field value is
//! wrapped in an object with exactly one `*Value` key, and 64-bit integers
//! travel as decimal strings.

use serde_json::{json, Map, Number, Value};

/// Encode a plain JSON object as the `fields` map of a Firestore document
pub fn encode_fields(document: &Map<String, Value>) -> Map<String, Value> {
    document
        .iter()
        .map(|(name, value)| (name.clone(), encode_value(value)))
        .collect()
}

/// Encode one JSON value as a Firestore typed value
pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => encode_number(n),
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => {
            let values: Vec<Value> = items.iter().map(encode_value).collect();
            // An empty array still needs the arrayValue wrapper
            json!({ "arrayValue": { "values": values } })
        },
        Value::Object(fields) => json!({ "mapValue": { "fields": encode_fields(fields) } }),
    }
}

fn encode_number(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        json!({ "integerValue": i.to_string() })
    } else if let Some(u) = n.as_u64() {
        // Above i64::MAX; Firestore integers are signed 64-bit
        json!({ "doubleValue": u as f64 })
    } else {
        json!({ "doubleValue": n.as_f64() })
    }
}
