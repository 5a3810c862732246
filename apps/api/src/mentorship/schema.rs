//! Output contract for mentor matching and the validate-or-fail boundary.
//!
//! The schema is sent to the provider as the `input_schema` of a forced tool,
//! so decoding is constrained provider-side. `validate_matches` re-checks the
//! payload here anyway: nothing the model returns enters application logic
//! without passing it. There is no repair path.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::ToolDefinition;
use crate::models::mentor::{CandidateProfile, MentorMatchResult};

pub const TOOL_NAME: &str = "record_mentor_matches";

/// The provider returned something that does not satisfy the output contract.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SchemaViolation(pub String);

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchesPayload {
    matches: Vec<MentorMatchResult>,
}

/// JSON Schema for `MentorMatchResult[]`, wrapped in an object because tool
/// inputs must be objects.
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "matches": {
                "type": "array",
                "description": "Matched alumni mentors, sorted by matchScore in descending order.",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "The name of the matched alumnus, copied exactly."
                        },
                        "background": {
                            "type": "string",
                            "description": "The background of the matched alumnus, copied exactly."
                        },
                        "contactInfo": {
                            "type": "string",
                            "description": "The contact information of the matched alumnus, copied exactly."
                        },
                        "matchScore": {
                            "type": "number",
                            "minimum": 0,
                            "maximum": 1,
                            "description": "Strength of the match from 0 to 1, where 1 is a perfect match."
                        },
                        "reason": {
                            "type": "string",
                            "description": "Why this alumnus is a good match for the student."
                        }
                    },
                    "required": ["name", "background", "contactInfo", "matchScore", "reason"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["matches"],
        "additionalProperties": false
    })
}

pub fn output_tool() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_NAME.to_string(),
        description: "Record the scored alumni mentor matches for the student.".to_string(),
        input_schema: output_schema(),
    }
}

/// Validates a provider payload against the contract and the input candidates.
///
/// Rejects: shape/type mismatches (including missing fields and non-numeric
/// scores), scores that are non-finite or outside [0, 1], more results than
/// candidates, and results whose (name, background, contactInfo) does not
/// correspond to an input candidate. Each candidate can back at most one
/// result, so duplicated candidates may each appear once.
pub fn validate_matches(
    payload: Value,
    candidates: &[CandidateProfile],
) -> Result<Vec<MentorMatchResult>, SchemaViolation> {
    let payload: MatchesPayload = serde_json::from_value(payload)
        .map_err(|e| SchemaViolation(format!("payload does not match output schema: {e}")))?;
    let matches = payload.matches;

    if matches.len() > candidates.len() {
        return Err(SchemaViolation(format!(
            "{} matches returned for {} candidates",
            matches.len(),
            candidates.len()
        )));
    }

    for (index, m) in matches.iter().enumerate() {
        if !m.match_score.is_finite() || !(0.0..=1.0).contains(&m.match_score) {
            return Err(SchemaViolation(format!(
                "matches[{index}].matchScore = {} is outside [0, 1]",
                m.match_score
            )));
        }
    }

    let mut used = vec![false; candidates.len()];
    for (index, m) in matches.iter().enumerate() {
        let slot = candidates
            .iter()
            .enumerate()
            .position(|(i, c)| !used[i] && m.echoes(c));

        match slot {
            Some(i) => used[i] = true,
            None => {
                return Err(SchemaViolation(format!(
                    "matches[{index}] ('{}') does not correspond to any remaining input candidate",
                    m.name
                )))
            }
        }
    }

    Ok(matches)
}
