//! Alumni directory — the source of mentor candidates and the mentor search page.
//!
//! Loaded once at startup (JSON file or built-in seed) and read-only afterwards,
//! so `AppState` shares it behind an `Arc` without locking.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::models::alumni::{slugify, AlumniRecord};
use crate::models::mentor::CandidateProfile;

pub mod handlers;
pub mod search;
mod seed;

pub use search::MentorSearchFilters;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Failed to read alumni directory {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Alumni directory is not a valid JSON array of records: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate alumni id '{0}' in directory")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default)]
pub struct AlumniDirectory {
    records: Vec<AlumniRecord>,
}

impl AlumniDirectory {
    pub fn new(records: Vec<AlumniRecord>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(DirectoryError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// The illustrative directory shipped with the service.
    pub fn seeded() -> Self {
        Self {
            records: seed::seed_records(),
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, DirectoryError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DirectoryError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let records: Vec<AlumniRecord> = serde_json::from_str(&raw)?;
        let directory = Self::new(records)?;
        info!(
            "Loaded {} alumni ({} mentors) from {}",
            directory.len(),
            directory.mentors().count(),
            path.display()
        );
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: &str) -> Option<&AlumniRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records that opted in to mentoring, in directory order.
    pub fn mentors(&self) -> impl Iterator<Item = &AlumniRecord> {
        self.records.iter().filter(|r| r.willing_to_mentor)
    }

    /// Opt-in mentors projected for the matcher, in directory order.
    pub fn mentor_candidates(&self) -> Vec<CandidateProfile> {
        self.mentors().map(AlumniRecord::to_candidate).collect()
    }

    pub fn search(&self, filters: &MentorSearchFilters) -> Vec<&AlumniRecord> {
        self.mentors().filter(|r| filters.matches(r)).collect()
    }

    /// Notable alumni, mentors or not. `department` compares as a slug
    /// against the record's major, so `Computer Science` and
    /// `computer_science` select the same records.
    pub fn notable(&self, department: Option<&str>) -> Vec<&AlumniRecord> {
        let department = department.map(slugify).filter(|d| !d.is_empty());
        self.records
            .iter()
            .filter(|r| r.is_notable)
            .filter(|r| match &department {
                Some(slug) => slugify(&r.major) == *slug,
                None => true,
            })
            .collect()
    }
}
