//! Line normalization and section discovery

/// Closed vocabulary of section titles, recognized only as an entire line.
pub const SECTION_HEADERS: &[&str] = &[
    "about",
    "summary",
    "experience",
    "education",
    "skills",
    "projects",
    "publications",
    "certifications",
    "licenses",
    "volunteer experience",
    "honors & awards",
    "organizations",
    "languages",
];

/// A recognized section header and the line it sits on.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionMarker {
    /// Lowercased header text.
    pub header: String,
    /// Position in the normalized line list.
    pub index: usize,
}

/// Cleaned lines of one document, built once per parse call.
///
/// Blank lines are kept as empty strings so section slices preserve the
/// blank separators between entries. Consumers that only care about text
/// lines go through [`non_blank`].
#[derive(Debug, Clone, Default)]
pub struct NormalizedDocument {
    lines: Vec<String>,
}

/// Replace non-breaking spaces, collapse whitespace runs, trim.
pub fn clean_line(line: &str) -> String {
    line.replace('\u{a0}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the line exactly matches a recognized section header.
///
/// Full-line equality only: decorated headers (trailing punctuation, extra
/// words) are not matched.
pub fn is_section_header(line: &str) -> bool {
    SECTION_HEADERS.contains(&line.to_lowercase().as_str())
}

/// Drop blank markers from a slice of normalized lines.
pub fn non_blank(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|line| !line.is_empty())
        .collect()
}

impl NormalizedDocument {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .replace('\r', "")
            .split('\n')
            .map(clean_line)
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text lines in document order, blank markers removed.
    pub fn non_blank_lines(&self) -> Vec<&str> {
        non_blank(&self.lines)
    }

    /// Locate every line that exactly matches the header vocabulary, in
    /// document order. Repeated headers produce repeated markers.
    pub fn section_index(&self) -> Vec<SectionMarker> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_section_header(line))
            .map(|(index, line)| SectionMarker {
                header: line.to_lowercase(),
                index,
            })
            .collect()
    }

    /// Lines strictly between the first marker for `header` and the next
    /// marker of any kind; empty when the header is absent.
    pub fn slice_section<'a>(&'a self, header: &str, index: &[SectionMarker]) -> &'a [String] {
        let key = header.to_lowercase();
        let position = match index.iter().position(|marker| marker.header == key) {
            Some(position) => position,
            None => return &[],
        };

        let start = index[position].index + 1;
        let end = index
            .get(position + 1)
            .map(|next| next.index)
            .unwrap_or(self.lines.len());
        &self.lines[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_collapses_whitespace_and_nbsp() {
        assert_eq!(clean_line("  Jane\u{a0}\u{a0}Doe \t"), "Jane Doe");
        assert_eq!(clean_line("\u{a0}"), "");
        assert_eq!(clean_line(""), "");
    }

    #[test]
    fn test_normalization_keeps_blank_markers_in_place() {
        let doc = NormalizedDocument::from_text("Jane Doe\r\n\r\nExperience\nAcme\n");

        assert_eq!(doc.lines(), &["Jane Doe", "", "Experience", "Acme", ""]);
        assert_eq!(doc.non_blank_lines(), vec!["Jane Doe", "Experience", "Acme"]);
    }

    #[test]
    fn test_empty_input_yields_no_text_lines() {
        let doc = NormalizedDocument::from_text("");
        assert!(doc.non_blank_lines().is_empty());
    }

    #[test]
    fn test_section_index_preserves_document_order() {
        let doc = NormalizedDocument::from_text("Jane\nABOUT\nbio\nSkills\nRust\nExperience\n");
        let index = doc.section_index();

        let headers: Vec<&str> = index.iter().map(|m| m.header.as_str()).collect();
        assert_eq!(headers, vec!["about", "skills", "experience"]);
        assert!(index.windows(2).all(|pair| pair[0].index < pair[1].index));
    }

    #[test]
    fn test_decorated_headers_are_not_matched() {
        let doc = NormalizedDocument::from_text("Skills:\nWork Experience\nEducation history\n");
        assert!(doc.section_index().is_empty());
    }

    #[test]
    fn test_repeated_headers_appear_twice() {
        let doc = NormalizedDocument::from_text("Skills\nRust\nSkills\nGo\n");
        let index = doc.section_index();
        assert_eq!(index.len(), 2);
        assert_eq!(index[0].header, index[1].header);
    }

    #[test]
    fn test_slice_between_headers_excludes_both_boundaries() {
        let doc = NormalizedDocument::from_text("About\nline one\nline two\nSkills\nRust\n");
        let index = doc.section_index();

        let about = doc.slice_section("about", &index);
        assert_eq!(about, &["line one", "line two"]);
    }

    #[test]
    fn test_last_section_runs_to_document_end() {
        let doc = NormalizedDocument::from_text("Skills\nRust\nGo\n");
        let index = doc.section_index();

        let skills = doc.slice_section("skills", &index);
        assert_eq!(non_blank(skills), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_absent_header_slices_empty() {
        let doc = NormalizedDocument::from_text("Jane Doe\nSome line\n");
        let index = doc.section_index();
        assert!(doc.slice_section("education", &index).is_empty());
    }

    #[test]
    fn test_slice_lookup_is_case_insensitive() {
        let doc = NormalizedDocument::from_text("EXPERIENCE\nAcme\n");
        let index = doc.section_index();
        assert_eq!(non_blank(doc.slice_section("Experience", &index)), vec!["Acme"]);
    }
}
