//! Mentor search over the opt-in directory.
//!
//! `query` is a case-insensitive substring match over name, major, industry,
//! company, skills and interests. `industry` and `skills` hold slugs
//! (`non_profit`, `machine_learning`); a record passes the skills filter when
//! any of its skills or interests slugifies to a requested value.

use serde::{Deserialize, Serialize};

use crate::models::alumni::{slugify, AlumniRecord};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MentorSearchFilters {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub industry: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl MentorSearchFilters {
    /// Builds filters from query-string style values, where list filters are
    /// comma separated (`industry=technology,healthcare`).
    pub fn from_params(query: Option<&str>, industry: Option<&str>, skills: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or_default().trim().to_string(),
            industry: split_slugs(industry),
            skills: split_slugs(skills),
        }
    }

    pub fn matches(&self, record: &AlumniRecord) -> bool {
        self.matches_query(record) && self.matches_industry(record) && self.matches_skills(record)
    }

    fn matches_query(&self, record: &AlumniRecord) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        let contains = |value: &str| value.to_lowercase().contains(&needle);

        contains(&record.name)
            || contains(&record.major)
            || record.industry.as_deref().is_some_and(contains)
            || record.company.as_deref().is_some_and(contains)
            || record.skills.iter().any(|s| contains(s))
            || record.interests.iter().any(|i| contains(i))
    }

    fn matches_industry(&self, record: &AlumniRecord) -> bool {
        if self.industry.is_empty() {
            return true;
        }
        record
            .industry_slug()
            .is_some_and(|slug| self.industry.contains(&slug))
    }

    fn matches_skills(&self, record: &AlumniRecord) -> bool {
        if self.skills.is_empty() {
            return true;
        }
        record
            .skills
            .iter()
            .chain(record.interests.iter())
            .any(|value| self.skills.contains(&slugify(value)))
    }
}

fn split_slugs(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(slugify)
        .filter(|s| !s.is_empty())
        .collect()
}
