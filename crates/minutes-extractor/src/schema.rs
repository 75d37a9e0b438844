//! JSON-schema rendering of the meeting schema for schema-constrained output

use minutes_domain::schema::MOTION_FIELDS;
use minutes_domain::{FieldKind, FieldSpec, MEETING_SCHEMA};
use serde_json::{json, Map, Value};

/// JSON-schema document describing a meeting record
pub fn response_schema() -> Value {
    let mut properties = Map::new();
    for spec in MEETING_SCHEMA {
        properties.insert(spec.name.to_string(), field_schema(spec));
    }
    let required: Vec<&str> = MEETING_SCHEMA
        .iter()
        .filter(|f| f.required)
        .map(|f| f.name)
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn field_schema(spec: &FieldSpec) -> Value {
    let mut schema = match spec.kind {
        FieldKind::Text => json!({ "type": "string" }),
        FieldKind::NullableText => json!({ "type": ["string", "null"] }),
        FieldKind::TextList => json!({ "type": "array", "items": { "type": "string" } }),
        FieldKind::Map => json!({ "type": "object", "additionalProperties": true }),
        FieldKind::MotionList => {
            let props: Map<String, Value> = MOTION_FIELDS
                .iter()
                .map(|name| (name.to_string(), json!({ "type": "string" })))
                .collect();
            json!({
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": props,
                    "required": MOTION_FIELDS,
                }
            })
        }
    };
    schema["description"] = Value::String(spec.description.to_string());
    schema
}
