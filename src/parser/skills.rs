//! Skill list extraction from the sliced skills section

use std::collections::HashSet;

/// Upper bound on extracted skills per document.
const MAX_SKILLS: usize = 20;

/// Split the skills section into individual skills.
///
/// The section text is split on commas, bullets, and hyphens; fragments of
/// one character or less are noise from the splitting and dropped. The cap
/// is applied before deduplication, matching the reference behavior, so a
/// document with duplicate skills can yield fewer than 20 entries.
pub fn extract_skills(lines: &[&str]) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let combined = lines.join(" ");
    let pieces = combined
        .split(|c: char| matches!(c, ',' | '•' | '-'))
        .map(str::trim)
        .filter(|piece| piece.chars().count() > 1)
        .take(MAX_SKILLS);

    let mut seen = HashSet::new();
    pieces
        .filter(|piece| seen.insert(piece.to_lowercase()))
        .map(str::to_string)
        .collect()
}
