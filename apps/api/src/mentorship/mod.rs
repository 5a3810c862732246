// AI mentor matching: interests + candidate profiles → ranked mentors.
// The model call goes through llm_client::StructuredGenerator — no direct Anthropic calls here.

pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod schema;
