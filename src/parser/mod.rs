//! Heuristic profile text parsing
//!
//! Turns the plain text of an exported professional profile into a
//! [`ParsedProfile`]. Extraction is best-effort: steps that find nothing
//! leave their field empty, and the `confidence` count is the only signal
//! of how much was recovered. Parsing never fails and holds no state
//! across calls.

pub mod contact;
pub mod document;
pub mod entries;
pub mod profile;
pub mod skills;

pub use profile::{ContactInfo, EducationEntry, ExperienceEntry, ParsedProfile};

use contact::ContactExtractor;
use document::{non_blank, NormalizedDocument};
use profile::score_confidence;

/// Stateless parser; holds only compiled patterns.
pub struct ProfileParser {
    contact: ContactExtractor,
}

impl Default for ProfileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileParser {
    pub fn new() -> Self {
        Self {
            contact: ContactExtractor::new(),
        }
    }

    /// Parse one document's text into a structured profile.
    pub fn parse(&self, text: &str) -> ParsedProfile {
        if text.replace('\u{a0}', " ").trim().is_empty() {
            return ParsedProfile::default();
        }

        let doc = NormalizedDocument::from_text(text);
        let sections = doc.section_index();
        let text_lines = doc.non_blank_lines();
        let contact = self.contact.extract(&text_lines);

        let name = text_lines.first().copied().unwrap_or_default().to_string();
        let mut name_tokens = name.split_whitespace();
        let first_name = name_tokens.next().unwrap_or_default().to_string();
        let last_name = name_tokens.collect::<Vec<_>>().join(" ");

        let summary = non_blank(doc.slice_section("about", &sections)).join(" ");
        let skills = skills::extract_skills(&non_blank(doc.slice_section("skills", &sections)));
        let experience = entries::build_experience(doc.slice_section("experience", &sections));
        let education = entries::build_education(doc.slice_section("education", &sections));

        let confidence =
            score_confidence(&first_name, &contact.headline, &summary, !skills.is_empty());

        ParsedProfile {
            name,
            first_name,
            last_name,
            headline: contact.headline,
            location: contact.location,
            email: contact.email,
            phone: contact.phone,
            linkedin_url: contact.linkedin_url,
            websites: contact.websites,
            summary,
            skills,
            experience,
            education,
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\nSenior Engineer\nSan Francisco, CA\njane@example.com\n\nAbout\nBuilds reliable systems.\n\nSkills\nPython, Go, Rust\n\nExperience\nSenior Engineer\nAcme Corp\n2021 - Present\nLed platform rewrite.\n";

    #[test]
    fn test_parses_sample_profile() {
        let profile = ProfileParser::new().parse(SAMPLE);

        assert_eq!(profile.name, "Jane Doe");
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.last_name, "Doe");
        assert_eq!(profile.headline, "Senior Engineer");
        assert_eq!(profile.location, "San Francisco, CA");
        assert_eq!(profile.email, "jane@example.com");
        assert!(profile.summary.contains("Builds reliable systems."));
        assert_eq!(profile.skills, vec!["Python", "Go", "Rust"]);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].role, "Senior Engineer");
        assert_eq!(profile.experience[0].organization, "Acme Corp");
        assert!(profile.experience[0].duration.contains("2021"));
        assert_eq!(profile.confidence, 4);
    }

    #[test]
    fn test_empty_and_whitespace_input_short_circuit() {
        let parser = ProfileParser::new();

        for text in ["", "   ", "\n\n\t", "\u{a0}\u{a0}"] {
            let profile = parser.parse(text);
            assert_eq!(profile.confidence, 0);
            assert!(profile.skills.is_empty());
            assert_eq!(profile, ParsedProfile::default());
        }
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = ProfileParser::new();
        assert_eq!(parser.parse(SAMPLE), parser.parse(SAMPLE));
    }

    #[test]
    fn test_single_token_name_has_empty_last_name() {
        let profile = ProfileParser::new().parse("Madonna\nArtist\n");
        assert_eq!(profile.first_name, "Madonna");
        assert_eq!(profile.last_name, "");
    }

    #[test]
    fn test_multiple_experience_entries_split_on_blank_lines() {
        let text = "Jane Doe\nEngineer\n\nExperience\nSenior Engineer\nAcme Corp\n2021 - Present\n\nEngineer\nGlobex\n2018 - 2021\n\nEducation\nState University\nBSc\n2014 - 2018\n";
        let profile = ProfileParser::new().parse(text);

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].organization, "Acme Corp");
        assert_eq!(profile.experience[1].organization, "Globex");
        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].institution, "State University");
    }

    #[test]
    fn test_confidence_degrades_with_missing_sections() {
        let profile = ProfileParser::new().parse("Jane Doe\nSenior Engineer\n");
        // Name and headline only: no summary, no skills.
        assert_eq!(profile.confidence, 2);
        assert!(profile.summary.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_unmatched_patterns_degrade_to_defaults() {
        let profile = ProfileParser::new().parse("short\n???\n--\n");
        assert!(profile.email.is_empty());
        assert!(profile.phone.is_empty());
        assert!(profile.websites.is_empty());
    }

    #[test]
    fn test_odd_unicode_input_does_not_panic() {
        let parser = ProfileParser::new();
        let _ = parser.parse("名前\n🚀 engineer\n\u{a0}über, café\nSkills\nRüst, Gó\n");
        let _ = parser.parse(&"é".repeat(1000));
    }
}
