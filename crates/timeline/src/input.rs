//! Event data and template sources.
use crate::error::TimelineError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tessella_source::{EventFormat, read_events_file, read_events_str};

/// A line of three or more dashes separating inline data from the template.
static BREAK_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-{3,}\s*$").expect("valid break-line regex"));

/// Splits inline content at the first break line into `(data, template)`.
/// Without a break line everything is data and the template is empty.
pub fn split_inline(content: &str) -> (String, String) {
    let mut data = Vec::new();
    let mut template = Vec::new();
    let mut in_template = false;
    for line in content.lines() {
        if in_template {
            template.push(line);
        } else if BREAK_LINE.is_match(line) {
            in_template = true;
        } else {
            data.push(line);
        }
    }
    (data.join("\n"), template.join("\n"))
}

/// Raw event data with the template to render each event with.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineInput {
    pub data: Value,
    pub template: String,
}

impl TimelineInput {
    /// Reads inline content: event data, a break line, then the template.
    pub fn from_inline(content: &str, format: EventFormat) -> Result<Self, TimelineError> {
        let (data, template) = split_inline(content);
        let data = read_events_str(&data, format)?;
        Ok(Self { data, template })
    }

    /// Reads event data from a file; `template` is the whole inline content.
    pub fn from_events_file(path: &Path, format: EventFormat, template: &str) -> Result<Self, TimelineError> {
        let data = read_events_file(path, format)?;
        Ok(Self { data, template: template.to_string() })
    }

    /// Replaces the template with the contents of a file.
    pub fn with_template_file(mut self, path: &Path) -> Result<Self, TimelineError> {
        log::debug!("Reading timeline template from {}", path.display());
        self.template = fs::read_to_string(path)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_split_at_first_break_line() {
        let content = "- start: 2021-01-01\n  ----  \n{{e.start}}\n---\nmore";
        let (data, template) = split_inline(content);
        assert_eq!(data, "- start: 2021-01-01");
        assert_eq!(template, "{{e.start}}\n---\nmore");
    }

    #[test]
    fn test_short_dashes_are_not_a_break() {
        let (data, template) = split_inline("a: b\n--\nc");
        assert_eq!(data, "a: b\n--\nc");
        assert_eq!(template, "");
    }

    #[test]
    fn test_from_inline_yaml() {
        let input = TimelineInput::from_inline(
            "- start: 2021-02-03\n  name: Launch\n---\n{{e.name}}",
            EventFormat::Yaml,
        )
        .unwrap();
        assert_eq!(input.data, json!([{"start": "2021-02-03", "name": "Launch"}]));
        assert_eq!(input.template, "{{e.name}}");
    }

    #[test]
    fn test_from_inline_csv() {
        let input =
            TimelineInput::from_inline("start,name\n2021-02-03,Launch\n---\n{{e.name}}", EventFormat::Csv).unwrap();
        assert_eq!(input.data, json!([{"start": "2021-02-03", "name": "Launch"}]));
    }

    #[test]
    fn test_files_override_inline_sources() {
        let mut events = NamedTempFile::new().unwrap();
        write!(events, r#"[{{"start": "2021-02-03"}}]"#).unwrap();
        let mut template = NamedTempFile::new().unwrap();
        write!(template, "From file: {{{{dt}}}}").unwrap();

        let input = TimelineInput::from_events_file(events.path(), EventFormat::Json, "inline")
            .unwrap()
            .with_template_file(template.path())
            .unwrap();
        assert_eq!(input.data, json!([{"start": "2021-02-03"}]));
        assert_eq!(input.template, "From file: {{dt}}");
    }

    #[test]
    fn test_missing_template_file() {
        let input = TimelineInput { data: Value::Null, template: String::new() };
        let result = input.with_template_file(Path::new("/no/such/template.txt"));
        assert!(matches!(result, Err(TimelineError::Io(_))));
    }
}
