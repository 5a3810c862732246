//! Axum route handlers for the Mentorship API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::mentor::{CandidateProfile, MatchResultSet, MatchTier, MentorMatchResult};
use crate::state::AppState;

const MATCHED_MESSAGE: &str = "Successfully found potential mentors!";
const NO_MATCHES_MESSAGE: &str =
    "No suitable mentors found based on your interests. Try refining your search.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    /// Missing reads as empty so the matcher's length rule reports it.
    #[serde(default)]
    pub student_career_interests: String,
    /// Explicit candidate list. Defaults to the directory's opt-in mentors.
    #[serde(default)]
    pub candidates: Option<Vec<CandidateProfile>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Matched,
    NoMatches,
}

/// A match result plus the fields a mentor card renders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorCard {
    #[serde(flatten)]
    pub result: MentorMatchResult,
    pub match_percentage: u8,
    pub tier: MatchTier,
    pub mailto: String,
}

impl From<MentorMatchResult> for MentorCard {
    fn from(result: MentorMatchResult) -> Self {
        Self {
            match_percentage: result.match_percentage(),
            tier: result.tier(),
            mailto: format!("mailto:{}", result.contact_info),
            result,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub match_id: Uuid,
    pub status: MatchStatus,
    pub message: String,
    pub generated_at: DateTime<Utc>,
    pub matches: Vec<MentorCard>,
}

impl MatchResponse {
    fn new(match_id: Uuid, results: MatchResultSet) -> Self {
        let (status, message) = if results.is_empty() {
            (MatchStatus::NoMatches, NO_MATCHES_MESSAGE)
        } else {
            (MatchStatus::Matched, MATCHED_MESSAGE)
        };

        Self {
            match_id,
            status,
            message: message.to_string(),
            generated_at: Utc::now(),
            matches: results.into_inner().into_iter().map(MentorCard::from).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/mentorship/match
///
/// Ranks mentors for the student's interests. Uses the request's candidates
/// when given, otherwise the directory's opt-in mentors, capped at the
/// matcher's candidate limit in directory order.
/// An empty ranking is a 200 with status `no_matches`, never an error.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload?;
    let match_id = Uuid::new_v4();
    let span = info_span!("mentor_match", %match_id);

    let candidates = match request.candidates {
        Some(candidates) => candidates,
        None => {
            let limit = state.matcher.settings().max_candidates;
            let mut mentors = state.directory.mentor_candidates();
            if mentors.len() > limit {
                span.in_scope(|| {
                    warn!(
                        "Directory has {} mentors; matching the first {limit}",
                        mentors.len()
                    )
                });
                mentors.truncate(limit);
            }
            mentors
        }
    };

    let results = state
        .matcher
        .match_mentors(&request.student_career_interests, &candidates)
        .instrument(span.clone())
        .await?;

    span.in_scope(|| info!("Returning {} mentor matches", results.len()));

    Ok(Json(MatchResponse::new(match_id, results)))
}
