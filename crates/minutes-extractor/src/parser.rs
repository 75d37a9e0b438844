//! Parse raw LLM output into an untrusted JSON payload

use crate::error::RejectionReason;
use serde_json::Value;

/// Parse an LLM response into JSON, unwrapping Markdown code fences
pub fn parse_llm_response(response: &str) -> Result<Value, RejectionReason> {
    let json_str = extract_json(response)?;

    serde_json::from_str(json_str).map_err(|e| RejectionReason::MalformedJson(e.to_string()))
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<&str, RejectionReason> {
    let trimmed = response.trim();

    if trimmed.is_empty() {
        return Err(RejectionReason::MalformedJson("empty response".to_string()));
    }

    let Some(fenced) = trimmed.strip_prefix("```") else {
        return Ok(trimmed);
    };

    // Skip the opening fence line (```json or ```) and the closing fence
    let body = match fenced.find('\n') {
        Some(pos) => &fenced[pos + 1..],
        None => return Err(RejectionReason::MalformedJson("empty code block".to_string())),
    };
    let body = body.trim_end();
    let body = body.strip_suffix("```").unwrap_or(body);

    Ok(body.trim())
}
