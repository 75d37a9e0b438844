//! Schema validation of candidate payloads
//!
//! A pure shape check driven by [`MEETING_SCHEMA`]: required fields must be
//! present, and every present, non-null field must have its declared type.
//! Keys outside the schema are ignored.

use crate::error::RejectionReason;
use crate::types::{MeetingRecord, Motion};
use minutes_domain::schema::MOTION_FIELDS;
use minutes_domain::{FieldKind, FieldSpec, MEETING_SCHEMA};
use serde_json::{Map, Value};

/// Validate a candidate payload and convert it into a [`MeetingRecord`]
///
/// The returned record has an empty `original_text`; the caller attaches the
/// segment text.
pub fn validate(payload: &Value) -> Result<MeetingRecord, RejectionReason> {
    let obj = payload
        .as_object()
        .ok_or_else(|| RejectionReason::NotAnObject(json_type(payload)))?;

    for spec in MEETING_SCHEMA {
        check_field(obj, spec)?;
    }

    // Shapes are known to be correct from here on
    Ok(MeetingRecord {
        date: text(obj, "date").unwrap_or_default(),
        location: text(obj, "location").unwrap_or_default(),
        attendance_members: text_list(obj, "attendance_members"),
        attendance_guests: text_list(obj, "attendance_guests"),
        treasurer_report: obj
            .get("treasurer_report")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default(),
        motions: motions(obj),
        key_events: text_list(obj, "key_events"),
        next_meeting_info: text(obj, "next_meeting_info"),
        original_text: String::new(),
    })
}

fn check_field(obj: &Map<String, Value>, spec: &FieldSpec) -> Result<(), RejectionReason> {
    let value = match obj.get(spec.name) {
        None if spec.required => return Err(RejectionReason::MissingField(spec.name.to_string())),
        None => return Ok(()),
        Some(value) => value,
    };

    if value.is_null() {
        return match spec.kind {
            _ if !spec.required => Ok(()),
            FieldKind::NullableText => Ok(()),
            kind => Err(wrong_type(spec.name, kind.expected(), value)),
        };
    }

    let ok = match spec.kind {
        FieldKind::Text | FieldKind::NullableText => value.is_string(),
        FieldKind::Map => value.is_object(),
        FieldKind::TextList => return check_text_list(spec.name, value),
        FieldKind::MotionList => return check_motions(spec.name, value),
    };

    if ok {
        Ok(())
    } else {
        Err(wrong_type(spec.name, spec.kind.expected(), value))
    }
}

fn check_text_list(name: &str, value: &Value) -> Result<(), RejectionReason> {
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(name, FieldKind::TextList.expected(), value))?;

    for (i, item) in items.iter().enumerate() {
        if !item.is_string() {
            return Err(wrong_type(&format!("{}[{}]", name, i), "string", item));
        }
    }
    Ok(())
}

fn check_motions(name: &str, value: &Value) -> Result<(), RejectionReason> {
    let items = value
        .as_array()
        .ok_or_else(|| wrong_type(name, FieldKind::MotionList.expected(), value))?;

    for (i, item) in items.iter().enumerate() {
        let path = format!("{}[{}]", name, i);
        let motion = item
            .as_object()
            .ok_or_else(|| wrong_type(&path, "object", item))?;

        for key in MOTION_FIELDS {
            match motion.get(key) {
                None => return Err(RejectionReason::MissingField(format!("{}.{}", path, key))),
                Some(v) if !v.is_string() => {
                    return Err(wrong_type(&format!("{}.{}", path, key), "string", v));
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}

fn wrong_type(field: &str, expected: &'static str, found: &Value) -> RejectionReason {
    RejectionReason::WrongType {
        field: field.to_string(),
        expected,
        found: json_type(found),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn text_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn motions(obj: &Map<String, Value>) -> Vec<Motion> {
    obj.get("motions")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_object)
                .map(|m| Motion {
                    description: text(m, "description").unwrap_or_default(),
                    proposed_by: text(m, "proposed_by").unwrap_or_default(),
                    result: text(m, "result").unwrap_or_default(),
                })
                .collect()
        })
        .unwrap_or_default()
}
