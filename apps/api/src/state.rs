use std::sync::Arc;

use crate::directory::AlumniDirectory;
use crate::events::EventCalendar;
use crate::mentorship::matcher::MentorMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Matcher over the pluggable provider. Production: `LlmClient`.
    pub matcher: Arc<MentorMatcher>,
    /// Read-only after startup.
    pub directory: Arc<AlumniDirectory>,
    pub events: Arc<EventCalendar>,
}
