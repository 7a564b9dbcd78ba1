//! Chunk-based construction of experience and education entries

use crate::parser::profile::{EducationEntry, ExperienceEntry};
use regex::Regex;
use std::sync::OnceLock;

/// Caps on entry counts, earliest chunks win.
const MAX_EXPERIENCE_ENTRIES: usize = 6;
const MAX_EDUCATION_ENTRIES: usize = 5;

/// Four-digit run marking a duration line, compiled once.
fn year_regex() -> &'static Regex {
    static YEAR_REGEX: OnceLock<Regex> = OnceLock::new();
    YEAR_REGEX.get_or_init(|| Regex::new(r"\d{4}").expect("Invalid year regex"))
}

/// Common field layout of one section chunk before it is mapped onto an
/// experience or education entry.
struct EntryParts {
    heading: String,
    subheading: String,
    duration: String,
    summary: String,
}

/// Group consecutive non-blank lines into chunks separated by blank markers.
fn chunk_by_blank_lines<'a>(lines: &'a [String]) -> Vec<Vec<&'a str>> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        if line.is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.as_str());
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Map each chunk to entry fields: first line becomes the heading, second
/// the subheading, the first line containing a four-digit run becomes the
/// duration, and everything from the third line on joins into the summary.
fn collect_entries(lines: &[String], cap: usize) -> Vec<EntryParts> {
    if lines.is_empty() {
        return Vec::new();
    }

    chunk_by_blank_lines(lines)
        .into_iter()
        .take(cap)
        .map(|chunk| {
            let duration = chunk
                .iter()
                .find(|line| year_regex().is_match(line))
                .map(|line| line.to_string())
                .unwrap_or_default();

            EntryParts {
                heading: chunk.first().map(|line| line.to_string()).unwrap_or_default(),
                subheading: chunk.get(1).map(|line| line.to_string()).unwrap_or_default(),
                duration,
                summary: chunk.get(2..).unwrap_or(&[]).join(" "),
            }
        })
        .collect()
}

/// Build at most six experience entries from the sliced experience section.
pub fn build_experience(lines: &[String]) -> Vec<ExperienceEntry> {
    collect_entries(lines, MAX_EXPERIENCE_ENTRIES)
        .into_iter()
        .map(|parts| ExperienceEntry {
            role: parts.heading,
            organization: parts.subheading,
            duration: parts.duration,
            summary: parts.summary,
        })
        .collect()
}

/// Build at most five education entries from the sliced education section.
pub fn build_education(lines: &[String]) -> Vec<EducationEntry> {
    collect_entries(lines, MAX_EDUCATION_ENTRIES)
        .into_iter()
        .map(|parts| EducationEntry {
            institution: parts.heading,
            degree: parts.subheading,
            duration: parts.duration,
            summary: parts.summary,
        })
        .collect()
}
