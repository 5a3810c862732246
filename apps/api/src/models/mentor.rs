use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// An alumnus offered to the matcher as a possible mentor.
/// Duplicates are allowed and treated as distinct candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub background: String,
    pub contact_info: String,
}

/// One scored candidate as returned by the model.
///
/// Deserialization is strict: every field is required and unknown fields are
/// rejected, so a payload missing `reason` never turns into an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MentorMatchResult {
    pub name: String,
    pub background: String,
    pub contact_info: String,
    /// 0.0 – 1.0, where 1.0 is a perfect match
    pub match_score: f64,
    pub reason: String,
}

impl MentorMatchResult {
    /// Whether this result echoes `candidate` field-for-field.
    pub fn echoes(&self, candidate: &CandidateProfile) -> bool {
        self.name == candidate.name
            && self.background == candidate.background
            && self.contact_info == candidate.contact_info
    }

    /// Score as a whole percentage, the way match cards display it.
    pub fn match_percentage(&self) -> u8 {
        (self.match_score * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn tier(&self) -> MatchTier {
        MatchTier::from_percentage(self.match_percentage())
    }
}

/// Display band for a match card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Strong, // > 85%
    Good,   // > 60%
    Fair,
}

impl MatchTier {
    pub fn from_percentage(percentage: u8) -> Self {
        if percentage > 85 {
            MatchTier::Strong
        } else if percentage > 60 {
            MatchTier::Good
        } else {
            MatchTier::Fair
        }
    }
}

/// Ranked match results, always sorted by `match_score` descending.
///
/// The only constructor sorts, so the ordering never depends on the model
/// having honoured the "sort descending" instruction. Ties keep model order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchResultSet(Vec<MentorMatchResult>);

impl MatchResultSet {
    pub fn from_results(mut results: Vec<MentorMatchResult>) -> Self {
        results.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(Ordering::Equal)
        });
        Self(results)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MentorMatchResult> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[MentorMatchResult] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<MentorMatchResult> {
        self.0
    }
}

impl<'a> IntoIterator for &'a MatchResultSet {
    type Item = &'a MentorMatchResult;
    type IntoIter = std::slice::Iter<'a, MentorMatchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
