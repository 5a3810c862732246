//! Mentor Matcher — scores candidate profiles against a student's interests.
//!
//! Flow: validate input → render prompt → forced-tool model call →
//!       validate-or-fail → sort by score descending.
//!
//! Stateless: one model call per match, no retries here, no fallback scoring.
//! Dropping the returned future cancels the outstanding provider call.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmError, StructuredGenerator};
use crate::mentorship::prompts::{render_prompt, MENTOR_MATCH_SYSTEM};
use crate::mentorship::schema::{output_tool, validate_matches, SchemaViolation};
use crate::models::mentor::{CandidateProfile, MatchResultSet};

pub const DEFAULT_MIN_INTEREST_CHARS: usize = 10;
pub const DEFAULT_MAX_CANDIDATES: usize = 25;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Model provider failed: {0}")]
    Provider(#[source] LlmError),

    #[error("Model output violated the schema: {0}")]
    SchemaViolation(#[from] SchemaViolation),
}

impl From<LlmError> for MatchError {
    fn from(err: LlmError) -> Self {
        match err {
            // A reply that skipped the forced tool has no structured output at all.
            LlmError::MissingToolUse { tool } => MatchError::SchemaViolation(SchemaViolation(
                format!("model did not return structured output via '{tool}'"),
            )),
            other => MatchError::Provider(other),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MatcherSettings {
    /// Minimum interest length in characters, after trimming.
    pub min_interest_chars: usize,
    pub max_candidates: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            min_interest_chars: DEFAULT_MIN_INTEREST_CHARS,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

pub struct MentorMatcher {
    generator: Arc<dyn StructuredGenerator>,
    settings: MatcherSettings,
}

impl MentorMatcher {
    pub fn new(generator: Arc<dyn StructuredGenerator>, settings: MatcherSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    pub fn settings(&self) -> MatcherSettings {
        self.settings
    }

    /// Ranks `candidates` for `interests`.
    ///
    /// Empty `candidates` short-circuits to an empty set without a model call.
    /// An empty set from the model is a valid outcome, not an error.
    pub async fn match_mentors(
        &self,
        interests: &str,
        candidates: &[CandidateProfile],
    ) -> Result<MatchResultSet, MatchError> {
        self.check_input(interests, candidates)?;

        if candidates.is_empty() {
            info!("No candidates supplied — skipping model call");
            return Ok(MatchResultSet::empty());
        }

        let prompt = render_prompt(interests, candidates);
        let tool = output_tool();

        info!("Scoring {} candidates", candidates.len());
        let payload = self
            .generator
            .generate(&prompt, MENTOR_MATCH_SYSTEM, &tool)
            .await?;

        let raw_for_log = payload.to_string();
        let matches = validate_matches(payload, candidates).map_err(|violation| {
            warn!(
                "Rejected model output ({violation}): {}",
                raw_for_log.chars().take(2000).collect::<String>()
            );
            violation
        })?;

        let results = MatchResultSet::from_results(matches);
        info!(
            "Matched {} of {} candidates (top score {:?})",
            results.len(),
            candidates.len(),
            results.as_slice().first().map(|r| r.match_score)
        );

        Ok(results)
    }

    fn check_input(&self, interests: &str, candidates: &[CandidateProfile]) -> Result<(), MatchError> {
        let length = interests.trim().chars().count();
        if length < self.settings.min_interest_chars {
            return Err(MatchError::InvalidInput(format!(
                "Please describe your career interests in at least {} characters.",
                self.settings.min_interest_chars
            )));
        }

        if candidates.len() > self.settings.max_candidates {
            return Err(MatchError::InvalidInput(format!(
                "At most {} candidate profiles can be matched at once (got {}).",
                self.settings.max_candidates,
                candidates.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted stand-in for the model provider.

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::llm_client::{LlmError, StructuredGenerator, ToolDefinition};
    use crate::models::mentor::CandidateProfile;

    pub enum Reply {
        Payload(Value),
        Error(LlmError),
        Hang,
    }

    #[derive(Default)]
    pub struct ScriptedGenerator {
        replies: Mutex<VecDeque<Reply>>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        pub fn replying(reply: Reply) -> Self {
            let generator = Self::default();
            generator.replies.lock().unwrap().push_back(reply);
            generator
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl StructuredGenerator for ScriptedGenerator {
        async fn generate(
            &self,
            prompt: &str,
            _system: &str,
            _tool: &ToolDefinition,
        ) -> Result<Value, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            let reply = self.replies.lock().unwrap().pop_front();
            match reply {
                Some(Reply::Payload(value)) => Ok(value),
                Some(Reply::Error(err)) => Err(err),
                Some(Reply::Hang) => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(json!({ "matches": [] }))
                }
                None => Ok(json!({ "matches": [] })),
            }
        }
    }

    pub fn entry(candidate: &CandidateProfile, score: f64, reason: &str) -> Value {
        json!({
            "name": candidate.name,
            "background": candidate.background,
            "contactInfo": candidate.contact_info,
            "matchScore": score,
            "reason": reason
        })
    }
}
