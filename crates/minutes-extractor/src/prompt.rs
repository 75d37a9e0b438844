//! LLM prompt engineering for meeting extraction

use minutes_domain::{FieldSpec, MEETING_SCHEMA};

/// Builds prompts for the LLM to extract a meeting record
pub struct PromptBuilder {
    text: String,
    fields: &'static [FieldSpec],
}

impl PromptBuilder {
    /// Create a new prompt builder for one segment
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fields: MEETING_SCHEMA,
        }
    }

    /// Build the complete extraction prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Role and rules
        prompt.push_str(EXTRACTION_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. Field list
        prompt.push_str("Fields:\n");
        for field in self.fields {
            let marker = if field.required { "required" } else { "optional" };
            prompt.push_str(&format!(
                "- {} ({}, {}): {}\n",
                field.name,
                field.kind.expected(),
                marker,
                field.description
            ));
        }
        prompt.push('\n');

        // 3. The minutes to analyze
        prompt.push_str("Extract the data from these minutes:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        // 4. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are an expert historical archivist for a motorcycle club.
Extract all possible structured data from the meeting minutes below.

Rules:
- Only use what is present in the text. Do not invent names, amounts or decisions.
- Always standardize dates to YYYY-MM-DD.
- If an optional field is not found, use an empty value (empty list, empty object, or null).
- Motions are objects with "description", "proposed_by" and "result" (passed/failed/carried); use an empty string for any part that is not recorded.
- Treasurer report keys are fund names and values are amounts as numbers."#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Remember: Return ONLY one valid JSON object, no markdown code blocks, no explanations.";
