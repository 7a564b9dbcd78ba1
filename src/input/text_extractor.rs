//! Text extraction from supported document formats

use crate::error::{ProfileExtractorError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ProfileExtractorError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ProfileExtractorError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(ProfileExtractorError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path)
            .await
            .map_err(ProfileExtractorError::Io)?;
        Ok(self.markdown_to_text(&markdown))
    }
}

impl MarkdownExtractor {
    /// Flatten markdown to plain text, keeping the line structure the
    /// parser's section heuristics rely on.
    fn markdown_to_text(&self, markdown: &str) -> String {
        let mut text = String::new();

        for event in Parser::new(markdown) {
            match event {
                Event::Text(content) | Event::Code(content) => text.push_str(&content),
                Event::SoftBreak | Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item) => {
                    text.push('\n');
                }
                _ => {}
            }
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_flattens_to_plain_lines() {
        let markdown = "# Jane Doe\n\n**Senior Engineer**\n\n## Skills\n\n- Python\n- Rust\n";
        let text = MarkdownExtractor.markdown_to_text(markdown);

        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["Jane Doe", "Senior Engineer", "Skills", "Python", "Rust"]);
        assert!(!text.contains('#'));
        assert!(!text.contains("**"));
    }
}
