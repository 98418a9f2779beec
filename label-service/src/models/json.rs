//! Rendering of stored BSON values as response JSON.
//!
//! Documents leave the service the way the upstream Node API emitted them:
//! ObjectIds as hex strings, dates as ISO-8601 strings with millisecond
//! precision, integral doubles as plain integers. Field order is preserved.

use chrono::SecondsFormat;
use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Largest integer a double represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => {
            Value::String(dt.to_chrono().to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        Bson::Double(f) if !f.is_finite() => Value::Null,
        Bson::Double(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
            Value::from(f as i64)
        }
        Bson::Null | Bson::Undefined => Value::Null,
        other => other.into_relaxed_extjson(),
    }
}

pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// Text form of a scalar, as used when composing identifiers.
pub fn display_value(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        other => match bson_to_json(other.clone()) {
            Value::String(s) => s,
            Value::Null => String::new(),
            json => json.to_string(),
        },
    }
}
