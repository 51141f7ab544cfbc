//! Timelines: chronological event lists rendered through a template.
//!
//! Event data (YAML, JSON or CSV) is validated into [`Event`]s, ordered
//! newest first (or oldest first when reversed), optionally truncated, and
//! each event is rendered with a Handlebars [`EventTemplate`]. The result is
//! a [`Timeline`] ready for any renderer.

mod error;
pub mod event;
pub mod input;
mod options;
pub mod template;

pub use error::TimelineError;
pub use event::{Event, order_events, parse_events};
pub use input::{TimelineInput, split_inline};
pub use options::TimelineOptions;
pub use template::{EventTemplate, event_context};
pub use tessella_render_core::Timeline;

/// Builds a timeline from raw event data and a template source.
pub fn build_timeline(
    input: &TimelineInput,
    options: &TimelineOptions,
) -> Result<Timeline, TimelineError> {
    options.validate()?;
    let events = parse_events(input.data.clone())?;
    let template = EventTemplate::new(&input.template)?;

    let total = events.len();
    let events = order_events(events, options.reversed, options.max_items);
    log::debug!("Rendering {} of {} timeline events", events.len(), total);

    let items = events
        .iter()
        .map(|event| template.render(event))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Timeline {
        height: options.height,
        item_width: options.width_item,
        style: options.style,
        classes: options.classes.clone(),
        item_classes: options.item_classes.clone(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessella_style::Length;

    fn input(template: &str) -> TimelineInput {
        TimelineInput {
            data: json!([
                {"start": "2021-02-03", "name": "Launch"},
                {"start": "2022-05-01", "name": "Review"},
                {"start": "2020-11-20", "name": "Kickoff"}
            ]),
            template: template.to_string(),
        }
    }

    #[test]
    fn test_build_newest_first() {
        let timeline = build_timeline(&input("{{e.name}}"), &TimelineOptions::default()).unwrap();
        assert_eq!(timeline.items, vec!["Review", "Launch", "Kickoff"]);
    }

    #[test]
    fn test_build_reversed_and_truncated() {
        let options = TimelineOptions { reversed: true, max_items: 2, ..Default::default() };
        let timeline = build_timeline(&input("{{e.name}}: {{dt}}"), &options).unwrap();
        assert_eq!(
            timeline.items,
            vec!["Kickoff: Fri 20th Nov 2020", "Launch: Wed 3rd Feb 2021"]
        );
    }

    #[test]
    fn test_build_carries_presentation_options() {
        let options = TimelineOptions {
            height: Some(Length::parse("300px").unwrap()),
            classes: vec!["wide".to_string()],
            ..Default::default()
        };
        let timeline = build_timeline(&input("x"), &options).unwrap();
        assert_eq!(timeline.height, options.height);
        assert_eq!(timeline.classes, vec!["wide"]);
        assert_eq!(timeline.items.len(), 3);
    }

    #[test]
    fn test_data_is_validated_before_template() {
        let bad = TimelineInput { data: json!([]), template: String::new() };
        assert!(matches!(
            build_timeline(&bad, &TimelineOptions::default()),
            Err(TimelineError::EmptyData)
        ));
        assert!(matches!(
            build_timeline(&input(" "), &TimelineOptions::default()),
            Err(TimelineError::EmptyTemplate)
        ));
    }
}
