// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment for forced-tool calls: the tool arguments ARE the answer.
pub const STRUCTURED_OUTPUT_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST answer by calling the provided tool exactly once. \
    The tool arguments must conform exactly to the tool's input schema. \
    Do NOT add fields that are not in the schema. \
    Do NOT include explanations or apologies outside the tool call.";

/// Instruction appended to prompts whose output echoes input records.
pub const VERBATIM_ECHO_INSTRUCTION: &str = "\
    CRITICAL: Copy identifying fields (names, descriptions, contact details) exactly \
    as they appear in the input. Do NOT correct, abbreviate, translate or reformat them. \
    Do NOT invent records that are not in the input.";
