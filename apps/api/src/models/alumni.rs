use serde::{Deserialize, Serialize};

use crate::models::mentor::CandidateProfile;

/// An alumni directory entry. Only records with `willing_to_mentor` set are
/// ever offered to the matcher or returned by mentor search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlumniRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub graduation_year: u16,
    pub major: String,
    #[serde(default)]
    pub current_role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub achievements: Option<String>,
    /// Curated summary used verbatim as the candidate background when present.
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub linkedin_profile: Option<String>,
    #[serde(default)]
    pub is_notable: bool,
    #[serde(default)]
    pub willing_to_mentor: bool,
}

impl AlumniRecord {
    /// Projects the record onto the three fields the matcher sees.
    pub fn to_candidate(&self) -> CandidateProfile {
        CandidateProfile {
            name: self.name.clone(),
            background: self.background_summary(),
            contact_info: self
                .contact_info
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| self.email.clone()),
        }
    }

    /// "Role at Company. Bio. Skills: a, b." — whichever parts exist.
    fn background_summary(&self) -> String {
        if let Some(background) = self.background.as_deref().filter(|b| !b.trim().is_empty()) {
            return background.to_string();
        }

        let mut parts = Vec::new();

        match (self.current_role.as_deref(), self.company.as_deref()) {
            (Some(role), Some(company)) => parts.push(format!("{role} at {company}.")),
            (Some(role), None) => parts.push(format!("{role}.")),
            (None, Some(company)) => parts.push(format!("Works at {company}.")),
            (None, None) => parts.push(format!(
                "{} graduate ({}).",
                self.major, self.graduation_year
            )),
        }

        if let Some(bio) = self.bio.as_deref().filter(|b| !b.trim().is_empty()) {
            parts.push(bio.trim().to_string());
        }

        if !self.skills.is_empty() {
            parts.push(format!("Skills: {}.", self.skills.join(", ")));
        }

        parts.join(" ")
    }

    /// Industry as a filter slug: lower-cased, whitespace runs become `_`.
    pub fn industry_slug(&self) -> Option<String> {
        self.industry.as_deref().map(slugify)
    }
}

pub fn slugify(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> AlumniRecord {
        AlumniRecord {
            id: "alum-1".to_string(),
            name: "Grace Park".to_string(),
            email: "grace.park@example.com".to_string(),
            graduation_year: 2015,
            major: "Computer Science".to_string(),
            current_role: Some("Staff Frontend Engineer".to_string()),
            company: Some("Brightlane".to_string()),
            industry: Some("Technology".to_string()),
            skills: vec!["React".to_string(), "TypeScript".to_string()],
            interests: vec![],
            bio: Some("Builds design systems.".to_string()),
            achievements: None,
            background: None,
            contact_info: None,
            linkedin_profile: None,
            is_notable: false,
            willing_to_mentor: true,
        }
    }

    #[test]
    fn test_candidate_background_is_composed_from_profile() {
        let candidate = record().to_candidate();
        assert_eq!(
            candidate.background,
            "Staff Frontend Engineer at Brightlane. Builds design systems. Skills: React, TypeScript."
        );
    }

    #[test]
    fn test_candidate_contact_falls_back_to_email() {
        assert_eq!(record().to_candidate().contact_info, "grace.park@example.com");

        let mut with_contact = record();
        with_contact.contact_info = Some("grace@brightlane.dev".to_string());
        assert_eq!(with_contact.to_candidate().contact_info, "grace@brightlane.dev");
    }

    #[test]
    fn test_curated_background_wins() {
        let mut r = record();
        r.background = Some("Frontend lead, React specialist.".to_string());
        assert_eq!(r.to_candidate().background, "Frontend lead, React specialist.");
    }

    #[test]
    fn test_background_without_role_uses_major() {
        let mut r = record();
        r.current_role = None;
        r.company = None;
        r.bio = None;
        r.skills.clear();
        assert_eq!(r.to_candidate().background, "Computer Science graduate (2015).");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Arts  Entertainment"), "arts_entertainment");
        assert_eq!(slugify("Technology"), "technology");
        assert_eq!(record().industry_slug().as_deref(), Some("technology"));
    }

    #[test]
    fn test_record_deserializes_camel_case_with_defaults() {
        let record: AlumniRecord = serde_json::from_str(
            r#"{
                "id": "a-9",
                "name": "Tom Reyes",
                "email": "tom@example.com",
                "graduationYear": 2009,
                "major": "Civil Engineering",
                "willingToMentor": true
            }"#,
        )
        .unwrap();
        assert!(record.willing_to_mentor);
        assert!(record.skills.is_empty());
        assert!(!record.is_notable);
    }
}
