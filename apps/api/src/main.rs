mod config;
mod directory;
mod errors;
mod events;
mod llm_client;
mod mentorship;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::directory::AlumniDirectory;
use crate::events::EventCalendar;
use crate::llm_client::LlmClient;
use crate::mentorship::matcher::{MatcherSettings, MentorMatcher};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nexus API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(
        config.anthropic_api_key.clone(),
        Duration::from_secs(config.llm_timeout_secs),
    )
    .context("Failed to build HTTP client")?
    .with_api_url(config.anthropic_api_url.clone())
    .with_max_attempts(config.llm_max_attempts);
    info!(
        "LLM client initialized (model: {}, attempts: {})",
        llm_client::MODEL,
        config.llm_max_attempts
    );

    // Initialize mentor matcher
    let settings = MatcherSettings {
        min_interest_chars: config.match_min_interest_chars,
        max_candidates: config.match_max_candidates,
    };
    let matcher = MentorMatcher::new(Arc::new(llm), settings);
    info!(
        "Mentor matcher ready (min interest chars: {}, max candidates: {})",
        matcher.settings().min_interest_chars,
        matcher.settings().max_candidates
    );

    // Load alumni directory
    let directory = match &config.alumni_directory_path {
        Some(path) => AlumniDirectory::from_path(path)
            .await
            .with_context(|| format!("Failed to load alumni directory from {}", path.display()))?,
        None => {
            info!("ALUMNI_DIRECTORY_PATH not set — using built-in alumni seed");
            AlumniDirectory::seeded()
        }
    };

    let mentor_count = directory.mentors().count();
    if mentor_count > settings.max_candidates {
        warn!(
            "Directory has {mentor_count} mentors but MATCH_MAX_CANDIDATES is {}; \
             default matches will use the first {} in directory order",
            settings.max_candidates, settings.max_candidates
        );
    }

    let events = EventCalendar::seeded();
    info!("Events calendar ready ({} events)", events.len());

    // Build app state
    let state = AppState {
        matcher: Arc::new(matcher),
        directory: Arc::new(directory),
        events: Arc::new(events),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the web app's origin once it has a fixed domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
