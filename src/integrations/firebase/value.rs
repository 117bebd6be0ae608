// src/integrations/firebase/value.rs
//
// Conversion between Firestore typed values and plain JSON.
//
// Firestore encodes every field as a single-key object naming its type:
//   {"name": {"stringValue": "Taj"}, "capacity": {"integerValue": "500"}}

use serde_json::{json, Map, Value};

/// Decode a Firestore `fields` map into a plain JSON object
pub fn decode_fields(fields: &Map<String, Value>) -> Value {
    Value::Object(
        fields
            .iter()
            .map(|(name, typed)| (name.clone(), decode_value(typed)))
            .collect(),
    )
}

/// Decode one typed value. Unknown shapes decode to null.
pub fn decode_value(typed: &Value) -> Value {
    let Some((kind, inner)) = typed.as_object().and_then(|o| o.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => inner.as_bool().map(Value::Bool).unwrap_or(Value::Null),
        // integers travel as strings to keep 64-bit precision
        "integerValue" => match inner {
            Value::String(s) => s.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            Value::Number(n) => Value::Number(n.clone()),
            _ => Value::Null,
        },
        "doubleValue" => inner.as_f64().map(Value::from).unwrap_or(Value::Null),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => {
            inner.as_str().map(Value::from).unwrap_or(Value::Null)
        }
        "geoPointValue" => inner.clone(),
        "mapValue" => match inner.get("fields").and_then(Value::as_object) {
            Some(fields) => decode_fields(fields),
            None => Value::Object(Map::new()),
        },
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}

/// Encode a plain JSON object into a Firestore `fields` map
pub fn encode_fields(object: &Map<String, Value>) -> Value {
    Value::Object(
        object
            .iter()
            .map(|(name, plain)| (name.clone(), encode_value(plain)))
            .collect(),
    )
}

pub fn encode_value(plain: &Value) -> Value {
    match plain {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(object) => json!({ "mapValue": { "fields": encode_fields(object) } }),
    }
}
