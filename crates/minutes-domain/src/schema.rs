//! Extraction schema - the acceptance contract for model output
//!
//! The schema is plain data: a list of named fields, each with a kind and a
//! required flag. Validation and provider-specific schema rendering are done
//! by the crates that own JSON handling.

/// The shape a single schema field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A JSON string
    Text,

    /// A JSON string or `null`
    NullableText,

    /// A JSON array of strings
    TextList,

    /// A JSON object with arbitrary values
    Map,

    /// A JSON array of motion objects (`description`, `proposed_by`, `result`)
    MotionList,
}

impl FieldKind {
    /// Human-readable name of the expected JSON shape
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::NullableText => "string or null",
            FieldKind::TextList => "array of strings",
            FieldKind::Map => "object",
            FieldKind::MotionList => "array of motion objects",
        }
    }
}

/// One named, typed field of the extraction schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// JSON key
    pub name: &'static str,

    /// Expected shape of the value
    pub kind: FieldKind,

    /// Whether the key must be present
    pub required: bool,

    /// Guidance passed to the model
    pub description: &'static str,
}

/// Keys every motion object must carry as strings
pub const MOTION_FIELDS: [&str; 3] = ["description", "proposed_by", "result"];

/// The fixed schema for a meeting record
pub const MEETING_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "date",
        kind: FieldKind::Text,
        required: true,
        description: "The date of the meeting, standardized to YYYY-MM-DD",
    },
    FieldSpec {
        name: "location",
        kind: FieldKind::Text,
        required: true,
        description: "The physical location or home where the meeting occurred",
    },
    FieldSpec {
        name: "attendance_members",
        kind: FieldKind::TextList,
        required: false,
        description: "List of full names of members present",
    },
    FieldSpec {
        name: "attendance_guests",
        kind: FieldKind::TextList,
        required: false,
        description: "List of guests, prospective members, or pledges",
    },
    FieldSpec {
        name: "treasurer_report",
        kind: FieldKind::Map,
        required: false,
        description: "Key-value pairs of financial data (e.g. 'checking': 200.00, 'savings': 150.00)",
    },
    FieldSpec {
        name: "motions",
        kind: FieldKind::MotionList,
        required: false,
        description: "List of motions including 'description', 'proposed_by', and 'result' (passed/failed/carried)",
    },
    FieldSpec {
        name: "key_events",
        kind: FieldKind::TextList,
        required: false,
        description: "Bullet points of important discussions, upcoming runs, or club decisions",
    },
    FieldSpec {
        name: "next_meeting_info",
        kind: FieldKind::NullableText,
        required: false,
        description: "Details about when and where the next meeting is held",
    },
];

/// Look up a field of [`MEETING_SCHEMA`] by name
pub fn field(name: &str) -> Option<&'static FieldSpec> {
    MEETING_SCHEMA.iter().find(|f| f.name == name)
}

/// Names of the fields that must be present in every record
pub fn required_fields() -> impl Iterator<Item = &'static str> {
    MEETING_SCHEMA.iter().filter(|f| f.required).map(|f| f.name)
}
