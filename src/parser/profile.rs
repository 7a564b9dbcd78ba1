//! Structured profile data produced by a single parse call

use serde::{Deserialize, Serialize};

/// Aggregate result of parsing one exported profile document.
///
/// Every field defaults to an empty string or empty sequence; a field is
/// never absent. Serialized with camelCase keys so downstream ingestion
/// pipelines see the same wire shape regardless of language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProfile {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub websites: Vec<String>,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub confidence: u8,
}

/// One work-history entry recovered from the experience section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub summary: String,
}

/// One education entry recovered from the education section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub duration: String,
    pub summary: String,
}

/// Contact fields pattern-matched from the document's leading lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub headline: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub websites: Vec<String>,
}

/// Count how many of the four key signals were recovered.
///
/// A crude completeness heuristic, not a quality measure. Callers should
/// treat this score, not errors, as the signal of extraction quality.
pub fn score_confidence(first_name: &str, headline: &str, summary: &str, has_skills: bool) -> u8 {
    [
        !first_name.is_empty(),
        !headline.is_empty(),
        !summary.is_empty(),
        has_skills,
    ]
    .iter()
    .filter(|present| **present)
    .count() as u8
}
