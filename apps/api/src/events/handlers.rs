use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EventListParams {
    /// Category slug, e.g. `career_fair`.
    pub category: Option<String>,
    /// Only events that have not started yet.
    #[serde(default)]
    pub upcoming: bool,
}

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub total: usize,
    pub events: Vec<Event>,
}

/// GET /api/v1/events
pub async fn handle_list_events(
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> Json<EventListResponse> {
    let from = params.upcoming.then(Utc::now);
    let events: Vec<Event> = state
        .events
        .list(params.category.as_deref(), from)
        .into_iter()
        .cloned()
        .collect();

    Json(EventListResponse {
        total: events.len(),
        events,
    })
}
