use crate::error::SourceError;
use crate::format::EventFormat;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads event data from `reader` in the given format.
///
/// YAML and JSON are converted as-is; validation of the shape (a list of
/// mappings with a `start` key) is left to the timeline. CSV rows become
/// objects keyed by the header row, with every field as a string.
pub fn read_events<R: Read>(reader: R, format: EventFormat) -> Result<Value, SourceError> {
    let value = match format {
        EventFormat::Yaml => serde_yaml::from_reader(reader)?,
        EventFormat::Json => serde_json::from_reader(reader)?,
        EventFormat::Csv => read_csv(reader)?,
    };
    Ok(value)
}

/// Reads event data from an in-memory string.
pub fn read_events_str(input: &str, format: EventFormat) -> Result<Value, SourceError> {
    if format == EventFormat::Yaml && input.trim().is_empty() {
        // An empty YAML document is null; keep that instead of an EOF error.
        return Ok(Value::Null);
    }
    read_events(input.as_bytes(), format)
}

/// Reads event data from a file.
pub fn read_events_file(path: &Path, format: EventFormat) -> Result<Value, SourceError> {
    log::debug!("Reading {:?} events from {}", format, path.display());
    let file = File::open(path)?;
    read_events(BufReader::new(file), format)
}

fn read_csv<R: Read>(reader: R) -> Result<Value, SourceError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, field)| (key.to_string(), Value::String(field.to_string())))
            .collect();
        rows.push(Value::Object(row));
    }
    log::debug!("Read {} CSV event rows", rows.len());
    Ok(Value::Array(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_events() {
        let input = "- start: 2021-02-03\n  name: Launch\n- start: 2021-03-01 10:00\n  duration: 2 days\n";
        let events = read_events_str(input, EventFormat::Yaml).unwrap();
        assert_eq!(
            events,
            json!([
                {"start": "2021-02-03", "name": "Launch"},
                {"start": "2021-03-01 10:00", "duration": "2 days"}
            ])
        );
    }

    #[test]
    fn test_yaml_keeps_non_string_values() {
        let events = read_events_str("- start: 2021\n  count: 3\n", EventFormat::Yaml).unwrap();
        assert_eq!(events, json!([{"start": 2021, "count": 3}]));
    }

    #[test]
    fn test_empty_yaml_is_null() {
        assert_eq!(read_events_str("  \n", EventFormat::Yaml).unwrap(), Value::Null);
    }

    #[test]
    fn test_json_events() {
        let events = read_events_str(r#"[{"start": "2021-02-03"}]"#, EventFormat::Json).unwrap();
        assert_eq!(events, json!([{"start": "2021-02-03"}]));
        assert!(matches!(
            read_events_str("[{", EventFormat::Json),
            Err(SourceError::Json(_))
        ));
    }

    #[test]
    fn test_csv_rows_become_string_maps() {
        let input = "start, duration, name\n2021-02-03, 1 day, Launch\n2021-04-01,,Review\n";
        let events = read_events_str(input, EventFormat::Csv).unwrap();
        assert_eq!(
            events,
            json!([
                {"start": "2021-02-03", "duration": "1 day", "name": "Launch"},
                {"start": "2021-04-01", "duration": "", "name": "Review"}
            ])
        );
    }

    #[test]
    fn test_csv_header_only_is_empty_list() {
        let events = read_events_str("start,name\n", EventFormat::Csv).unwrap();
        assert_eq!(events, json!([]));
    }

    #[test]
    fn test_read_events_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[{{\"start\": \"2022-01-01\", \"name\": \"New year\"}}]").unwrap();
        let events = read_events_file(file.path(), EventFormat::Json).unwrap();
        assert_eq!(events, json!([{"start": "2022-01-01", "name": "New year"}]));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_events_file(Path::new("/definitely/not/here.yaml"), EventFormat::Yaml);
        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
