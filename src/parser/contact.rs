//! Pattern-based contact extraction from the document's leading lines

use crate::parser::document::is_section_header;
use crate::parser::profile::ContactInfo;
use regex::Regex;

/// Number of leading lines searched for contact details.
const CONTACT_WINDOW: usize = 12;

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    url_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"\+?\d[\d\s().-]{7,}").expect("Invalid phone regex");

        let linkedin_regex = Regex::new(r"(?i)(?:https?://)?[\w.-]*linkedin\.com/[\w/-]+")
            .expect("Invalid LinkedIn URL regex");

        let url_regex = Regex::new(r"(?i)https?://\S+").expect("Invalid URL regex");

        Self {
            email_regex,
            phone_regex,
            linkedin_regex,
            url_regex,
        }
    }

    /// Search the first `CONTACT_WINDOW` text lines for contact fields.
    ///
    /// Every field degrades to an empty string or empty sequence when no
    /// pattern matches.
    pub fn extract(&self, lines: &[&str]) -> ContactInfo {
        let block = &lines[..lines.len().min(CONTACT_WINDOW)];
        let joined = block.join("\n");

        let email = self.first_match(&self.email_regex, &joined);
        // The phone pattern matches whitespace, so a match at the end of a
        // line drags the separator along. Trim it off the captured text.
        let phone = self
            .first_match(&self.phone_regex, &joined)
            .trim()
            .to_string();
        let linkedin_url = self.first_match(&self.linkedin_regex, &joined);
        let websites = self
            .url_regex
            .find_iter(&joined)
            .map(|m| m.as_str().to_string())
            .collect();

        let headline = block
            .get(1)
            .filter(|line| !is_section_header(line))
            .map(|line| line.to_string())
            .unwrap_or_default();

        let location = block
            .iter()
            .find(|line| line.contains(',') && !line.to_lowercase().contains("linkedin"))
            .map(|line| line.to_string())
            .unwrap_or_default();

        ContactInfo {
            headline,
            location,
            email,
            phone,
            linkedin_url,
            websites,
        }
    }

    fn first_match(&self, pattern: &Regex, text: &str) -> String {
        pattern
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}
