use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::directory::MentorSearchFilters;
use crate::errors::AppError;
use crate::models::alumni::AlumniRecord;
use crate::state::AppState;

/// Query string for mentor search. List filters are comma separated.
#[derive(Debug, Default, Deserialize)]
pub struct MentorSearchParams {
    pub query: Option<String>,
    pub industry: Option<String>,
    pub skills: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MentorSearchResponse {
    pub filters: MentorSearchFilters,
    pub total: usize,
    pub mentors: Vec<AlumniRecord>,
}

/// GET /api/v1/mentors
pub async fn handle_search_mentors(
    State(state): State<AppState>,
    Query(params): Query<MentorSearchParams>,
) -> Json<MentorSearchResponse> {
    let filters = MentorSearchFilters::from_params(
        params.query.as_deref(),
        params.industry.as_deref(),
        params.skills.as_deref(),
    );
    let mentors: Vec<AlumniRecord> = state
        .directory
        .search(&filters)
        .into_iter()
        .cloned()
        .collect();

    Json(MentorSearchResponse {
        total: mentors.len(),
        filters,
        mentors,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct NotableParams {
    pub department: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NotableResponse {
    pub department: Option<String>,
    pub total: usize,
    pub alumni: Vec<AlumniRecord>,
}

/// GET /api/v1/alumni/notable
pub async fn handle_notable_alumni(
    State(state): State<AppState>,
    Query(params): Query<NotableParams>,
) -> Json<NotableResponse> {
    let alumni: Vec<AlumniRecord> = state
        .directory
        .notable(params.department.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Json(NotableResponse {
        department: params.department,
        total: alumni.len(),
        alumni,
    })
}

/// GET /api/v1/alumni/:id
pub async fn handle_get_alumnus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AlumniRecord>, AppError> {
    state
        .directory
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Alumnus {id} not found")))
}
