//! Output formatters for extracted profiles

use crate::config::OutputFormat;
use crate::error::Result;
use crate::parser::ParsedProfile;
use colored::Colorize;

/// Trait for rendering a parsed profile into text.
pub trait ProfileFormatter {
    fn format_profile(&self, profile: &ParsedProfile) -> Result<String>;
}

/// Console formatter with colors and a field-per-line layout.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for piping into downstream ingestion pipelines.
pub struct JsonFormatter {
    pretty: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn paint(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn field(&self, out: &mut String, label: &str, value: &str) {
        if !value.is_empty() {
            out.push_str(&format!("{}: {}\n", label, value));
        }
    }
}

impl ProfileFormatter for ConsoleFormatter {
    fn format_profile(&self, profile: &ParsedProfile) -> Result<String> {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.paint(&profile.name)));
        self.field(&mut out, "Headline", &profile.headline);
        self.field(&mut out, "Location", &profile.location);
        self.field(&mut out, "Email", &profile.email);
        self.field(&mut out, "Phone", &profile.phone);
        self.field(&mut out, "LinkedIn", &profile.linkedin_url);
        for website in &profile.websites {
            self.field(&mut out, "Website", website);
        }
        self.field(&mut out, "Summary", &profile.summary);

        if !profile.skills.is_empty() {
            out.push_str(&format!("\n{}\n", self.paint("Skills")));
            out.push_str(&format!("{}\n", profile.skills.join(", ")));
        }

        if !profile.experience.is_empty() {
            out.push_str(&format!("\n{}\n", self.paint("Experience")));
            for entry in &profile.experience {
                out.push_str(&format!("- {}", entry.role));
                if !entry.organization.is_empty() {
                    out.push_str(&format!(" @ {}", entry.organization));
                }
                if !entry.duration.is_empty() {
                    out.push_str(&format!(" ({})", entry.duration));
                }
                out.push('\n');
            }
        }

        if !profile.education.is_empty() {
            out.push_str(&format!("\n{}\n", self.paint("Education")));
            for entry in &profile.education {
                out.push_str(&format!("- {}", entry.institution));
                if !entry.degree.is_empty() {
                    out.push_str(&format!(", {}", entry.degree));
                }
                if !entry.duration.is_empty() {
                    out.push_str(&format!(" ({})", entry.duration));
                }
                out.push('\n');
            }
        }

        out.push_str(&format!("\nConfidence: {}/4\n", profile.confidence));

        Ok(out)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ProfileFormatter for JsonFormatter {
    fn format_profile(&self, profile: &ParsedProfile) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(profile)?
        } else {
            serde_json::to_string(profile)?
        };
        Ok(json)
    }
}

/// Pick the formatter for the requested output format.
pub fn format_profile(
    profile: &ParsedProfile,
    format: &OutputFormat,
    use_colors: bool,
    pretty_json: bool,
) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter::new(use_colors).format_profile(profile),
        OutputFormat::Json => JsonFormatter::new(pretty_json).format_profile(profile),
    }
}
