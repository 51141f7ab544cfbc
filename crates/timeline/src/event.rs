//! Validation of raw event data into typed events.
use crate::error::TimelineError;
use serde_json::{Map, Value};
use tessella_dtime::{CalendarDuration, DateRange, DateTimeError, Instant, parse_duration, parse_instant};

/// One validated timeline event.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Position of the event in the source data.
    pub index: usize,
    pub start: Instant,
    pub duration: Option<CalendarDuration>,
    /// All fields of the event as given, including `start` and `duration`.
    pub fields: Map<String, Value>,
}

impl Event {
    /// The span covered by the event.
    pub fn range(&self) -> Result<DateRange, DateTimeError> {
        DateRange::new(self.start, self.duration)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<&'a str>, TimelineError> {
    match fields.get(field) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(TimelineError::FieldType { index, field, found: type_name(other) }),
    }
}

/// Validates event data: a non-empty list of mappings, each with a parseable
/// `start` and, optionally, a parseable `duration`.
pub fn parse_events(data: Value) -> Result<Vec<Event>, TimelineError> {
    let Value::Array(items) = data else {
        return Err(TimelineError::NotAList);
    };
    if items.is_empty() {
        return Err(TimelineError::EmptyData);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(TimelineError::NotAMapping { index });
            };
            let start = string_field(&fields, index, "start")?
                .ok_or(TimelineError::MissingStart { index })?;
            let start = parse_instant(start)
                .map_err(|source| TimelineError::InvalidField { index, field: "start", source })?;
            let duration = string_field(&fields, index, "duration")?
                .map(parse_duration)
                .transpose()
                .map_err(|source| TimelineError::InvalidField { index, field: "duration", source })?;
            Ok(Event { index, start, duration, fields })
        })
        .collect()
}

/// Orders events newest first, or oldest first when `reversed`, and keeps at
/// most `max_items` of them (0 keeps all). Events with equal starts keep
/// their source order.
pub fn order_events(mut events: Vec<Event>, reversed: bool, max_items: usize) -> Vec<Event> {
    if reversed {
        events.sort_by_key(|event| event.start.to_utc());
    } else {
        events.sort_by(|a, b| b.start.to_utc().cmp(&a.start.to_utc()));
    }
    if max_items > 0 {
        events.truncate(max_items);
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn starts(events: &[Event]) -> Vec<usize> {
        events.iter().map(|event| event.index).collect()
    }

    #[test]
    fn test_parse_valid_events() {
        let events = parse_events(json!([
            {"start": "2021-02-03", "name": "Launch"},
            {"start": "2021-03-01 10:00 (Europe/Paris)", "duration": "2 days"}
        ]))
        .unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].duration, None);
        assert_eq!(events[0].fields["name"], "Launch");
        assert_eq!(events[1].duration.unwrap().days, 2);
        assert_eq!(
            events[1].range().unwrap().to_string(),
            "Mon 1st, 10:00 AM - Wed 3rd Mar 2021, 10:00 AM (CET)"
        );
    }

    #[test]
    fn test_data_shape_errors() {
        assert!(matches!(parse_events(json!({"start": "2021"})), Err(TimelineError::NotAList)));
        assert!(matches!(parse_events(json!(null)), Err(TimelineError::NotAList)));
        assert!(matches!(parse_events(json!([])), Err(TimelineError::EmptyData)));
        assert!(matches!(
            parse_events(json!([{"start": "2021-01-01"}, "text"])),
            Err(TimelineError::NotAMapping { index: 1 })
        ));
        assert!(matches!(
            parse_events(json!([{"name": "x"}])),
            Err(TimelineError::MissingStart { index: 0 })
        ));
    }

    #[test]
    fn test_field_errors_name_the_item() {
        let err = parse_events(json!([{"start": "2021-01-01"}, {"start": "not a date"}])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "item 1: error parsing 'start' value: Invalid date/time: 'not a date'"
        );
        assert!(matches!(
            parse_events(json!([{"start": 2021}])),
            Err(TimelineError::FieldType { index: 0, field: "start", found: "a number" })
        ));
        assert!(matches!(
            parse_events(json!([{"start": "2021-01-01", "duration": 3}])),
            Err(TimelineError::FieldType { index: 0, field: "duration", found: "a number" })
        ));
    }

    #[test]
    fn test_order_newest_first_by_default() {
        let events = parse_events(json!([
            {"start": "2021-02-03"},
            {"start": "2022-01-01"},
            {"start": "2020-06-01"},
            {"start": "2022-01-01"}
        ]))
        .unwrap();
        assert_eq!(starts(&order_events(events.clone(), false, 0)), vec![1, 3, 0, 2]);
        assert_eq!(starts(&order_events(events.clone(), true, 0)), vec![2, 0, 1, 3]);
        assert_eq!(starts(&order_events(events, false, 2)), vec![1, 3]);
    }

    #[test]
    fn test_order_compares_across_zones() {
        let events = parse_events(json!([
            {"start": "2021-02-03T10:00+02:00"},
            {"start": "2021-02-03T09:00Z"}
        ]))
        .unwrap();
        // 10:00+02:00 is 08:00 UTC, before 09:00 UTC.
        assert_eq!(starts(&order_events(events, false, 0)), vec![1, 0]);
    }
}
