// All LLM prompt text for mentor matching.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::{STRUCTURED_OUTPUT_SYSTEM, VERBATIM_ECHO_INSTRUCTION};
use crate::mentorship::schema::TOOL_NAME;
use crate::models::mentor::CandidateProfile;

/// System prompt for mentor matching.
pub const MENTOR_MATCH_SYSTEM: &str = STRUCTURED_OUTPUT_SYSTEM;

const ROLE_AND_TASK: &str = "You are a mentor matching assistant for a university alumni network. \
Your task is to match a student with suitable alumni mentors by comparing the student's \
career interests with each alumnus's background.";

const SCORING_RULES: &str = "Evaluate every alumnus listed above against the student's career interests.

SCORING:
- matchScore is a number between 0 and 1 inclusive; 1 means a perfect match, 0 means no overlap
- reason is one or two sentences explaining the score in terms the student will understand
- Score every alumnus listed above, including weak matches; do not invent a connection

OUTPUT:
- Each entry contains the alumnus's name, background, contactInfo, matchScore and reason
- Sort the entries by matchScore in descending order
- Adhere exactly to the output schema";

/// Renders the user prompt. Pure: the same inputs always produce the same text.
///
/// Layout: role/task, the interest text verbatim, every candidate in input
/// order, then scoring and output rules.
pub fn render_prompt(interests: &str, candidates: &[CandidateProfile]) -> String {
    let mut prompt = String::new();

    prompt.push_str(ROLE_AND_TASK);
    prompt.push_str("\n\nSTUDENT CAREER INTERESTS:\n");
    prompt.push_str(interests);
    prompt.push_str("\n\nAVAILABLE ALUMNI MENTORS:\n");

    for (index, candidate) in candidates.iter().enumerate() {
        prompt.push_str(&format!(
            "\nAlumnus {}:\nName: {}\nBackground: {}\nContact Info: {}\n",
            index + 1,
            candidate.name,
            candidate.background,
            candidate.contact_info
        ));
    }

    prompt.push('\n');
    prompt.push_str(SCORING_RULES);
    prompt.push_str(&format!(
        "\n\nReturn your answer by calling the `{TOOL_NAME}` tool.\n\n"
    ));
    prompt.push_str(VERBATIM_ECHO_INSTRUCTION);

    prompt
}
