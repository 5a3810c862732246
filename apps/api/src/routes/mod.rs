pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::directory::handlers as directory;
use crate::events::handlers as events;
use crate::mentorship::handlers as mentorship;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Mentorship API
        .route(
            "/api/v1/mentorship/match",
            post(mentorship::handle_match),
        )
        // Directory API
        .route("/api/v1/mentors", get(directory::handle_search_mentors))
        .route("/api/v1/alumni/notable", get(directory::handle_notable_alumni))
        .route("/api/v1/alumni/:id", get(directory::handle_get_alumnus))
        // Events API
        .route("/api/v1/events", get(events::handle_list_events))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::directory::AlumniDirectory;
    use crate::errors::MATCH_FAILURE_MESSAGE;
    use crate::events::EventCalendar;
    use crate::models::alumni::AlumniRecord;
    use crate::mentorship::matcher::testing::{entry, Reply, ScriptedGenerator};
    use crate::mentorship::matcher::{MatcherSettings, MentorMatcher};

    fn app(generator: Arc<ScriptedGenerator>) -> Router {
        app_with_directory(generator, AlumniDirectory::seeded())
    }

    fn app_with_directory(generator: Arc<ScriptedGenerator>, directory: AlumniDirectory) -> Router {
        build_router(AppState {
            matcher: Arc::new(MentorMatcher::new(generator, MatcherSettings::default())),
            directory: Arc::new(directory),
            events: Arc::new(EventCalendar::seeded()),
        })
    }

    fn mentor(n: usize) -> AlumniRecord {
        AlumniRecord {
            id: format!("alum-{n}"),
            name: format!("Mentor {n}"),
            email: format!("mentor{n}@example.com"),
            graduation_year: 2010,
            major: "Computer Science".to_string(),
            current_role: Some("Research Scientist".to_string()),
            company: None,
            industry: None,
            skills: vec![],
            interests: vec![],
            bio: None,
            achievements: None,
            background: None,
            contact_info: None,
            linkedin_profile: None,
            is_notable: false,
            willing_to_mentor: true,
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_match(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/mentorship/match")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(Arc::default()), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_match_against_directory_returns_ranked_cards() {
        let mentors = AlumniDirectory::seeded().mentor_candidates();
        let marcus = &mentors[1];
        let priya = &mentors[6];
        let generator = Arc::new(ScriptedGenerator::replying(Reply::Payload(json!({
            "matches": [
                entry(priya, 0.4, "Security analytics overlaps with data work."),
                entry(marcus, 0.95, "Predictive modeling and big data are exactly this path."),
            ]
        }))));

        let (status, body) = send(
            app(generator.clone()),
            post_match(json!({ "studentCareerInterests": "data science and big data engineering" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "matched");
        assert_eq!(body["message"], "Successfully found potential mentors!");
        let matches = body["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["name"], "Marcus Chen");
        assert_eq!(matches[0]["matchPercentage"], 95);
        assert_eq!(matches[1]["name"], "Priya Sharma");

        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("Name: Dr. Eleanor Vance"));
        assert!(prompt.contains("Name: Priya Sharma"));
    }

    #[tokio::test]
    async fn test_short_interests_are_rejected_before_model_call() {
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, body) = send(
            app(generator.clone()),
            post_match(json!({ "studentCareerInterests": "AI" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_candidate_list_is_no_matches() {
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, body) = send(
            app(generator.clone()),
            post_match(json!({
                "studentCareerInterests": "sustainable urban planning",
                "candidates": []
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "no_matches");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_oversized_directory_is_capped_for_default_matches() {
        let directory = AlumniDirectory::new((1..=26).map(mentor).collect()).unwrap();
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, body) = send(
            app_with_directory(generator.clone(), directory),
            post_match(json!({ "studentCareerInterests": "machine learning research careers" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "no_matches");
        assert_eq!(generator.calls(), 1);
        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("Name: Mentor 25\n"));
        assert!(!prompt.contains("Name: Mentor 26\n"));
    }

    #[tokio::test]
    async fn test_explicit_candidates_above_limit_are_rejected() {
        let candidates: Vec<Value> = (1..=26)
            .map(|n| json!({ "name": format!("M{n}"), "background": "Engineer", "contactInfo": "m@example.com" }))
            .collect();
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, body) = send(
            app(generator.clone()),
            post_match(json!({
                "studentCareerInterests": "machine learning research careers",
                "candidates": candidates
            })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_interests_is_validation_error() {
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, body) = send(app(generator.clone()), post_match(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_malformed_match_body_is_validation_error() {
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, body) = send(
            app(generator.clone()),
            post_match(json!({ "studentCareerInterests": 42 })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_schema_violation_is_reported_without_details() {
        let generator = Arc::new(ScriptedGenerator::replying(Reply::Payload(json!({
            "matches": [{ "name": "Nobody", "matchScore": 0.5 }]
        }))));
        let (status, body) = send(
            app(generator),
            post_match(json!({ "studentCareerInterests": "gene editing research careers" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "SCHEMA_VIOLATION");
        assert_eq!(body["error"]["message"], MATCH_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_explicit_candidates_override_directory() {
        let generator = Arc::new(ScriptedGenerator::default());
        let (status, _) = send(
            app(generator.clone()),
            post_match(json!({
                "studentCareerInterests": "full-stack web development with React",
                "candidates": [{
                    "name": "Grace Park",
                    "background": "Frontend engineer",
                    "contactInfo": "grace@example.com"
                }]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("Name: Grace Park"));
        assert!(!prompt.contains("Marcus Chen"));
    }

    #[tokio::test]
    async fn test_mentor_search_filters_by_industry() {
        let (status, body) = send(
            app(Arc::default()),
            get("/api/v1/mentors?industry=healthcare"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["mentors"][0]["name"], "Dr. Ben Carter");
    }

    #[tokio::test]
    async fn test_notable_alumni_by_department() {
        let (status, body) = send(app(Arc::default()), get("/api/v1/alumni/notable")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);

        let (status, body) = send(
            app(Arc::default()),
            get("/api/v1/alumni/notable?department=computer_science"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["department"], "computer_science");
        assert_eq!(body["total"], 1);
        assert_eq!(body["alumni"][0]["name"], "Aisha Khan");
        assert_eq!(body["alumni"][0]["isNotable"], true);
    }

    #[tokio::test]
    async fn test_list_events() {
        let (status, body) = send(app(Arc::default()), get("/api/v1/events")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 5);
        assert_eq!(body["events"][0]["category"], "Alumni Meetup");

        let (status, body) = send(
            app(Arc::default()),
            get("/api/v1/events?category=career_fair"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["events"][0]["title"], "Alumni Career Fair");
    }

    #[tokio::test]
    async fn test_get_alumnus() {
        let (status, body) = send(app(Arc::default()), get("/api/v1/alumni/alum-james-lee")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["company"], "UrbanScape Designs");

        let (status, body) = send(app(Arc::default()), get("/api/v1/alumni/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
