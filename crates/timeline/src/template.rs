//! Handlebars rendering of single events.
use crate::error::TimelineError;
use crate::event::Event;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason, no_escape,
};
use serde_json::{Map, Value, json};
use tessella_dtime::{DateRange, DateTimeError, RangeFormat, fmt_daterange, parse_duration, parse_instant};

const TEMPLATE_NAME: &str = "event";

fn helper_error(message: String) -> RenderErrorReason {
    RenderErrorReason::Other(message)
}

/// `{{daterange start [duration] day_name=false clock12=false ...}}`
///
/// Formats a range from string values, taking [`RangeFormat`] fields as hash
/// options.
fn daterange_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let start = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| helper_error("daterange: first parameter must be a date string".to_string()))?;
    let start = parse_instant(start).map_err(|e| helper_error(format!("daterange: {}", e)))?;

    let duration = match h.param(1).map(|v| v.value()) {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => {
            Some(parse_duration(text).map_err(|e| helper_error(format!("daterange: {}", e)))?)
        }
        Some(other) => {
            return Err(helper_error(format!("daterange: duration must be a string, found {}", other)).into());
        }
    };

    let options: Map<String, Value> = h
        .hash()
        .iter()
        .map(|(key, value)| (key.to_string(), value.value().clone()))
        .collect();
    let format: RangeFormat = serde_json::from_value(Value::Object(options))
        .map_err(|e| helper_error(format!("daterange: invalid options: {}", e)))?;

    let text = fmt_daterange(start, duration, &format).map_err(|e| helper_error(format!("daterange: {}", e)))?;
    out.write(&text)?;
    Ok(())
}

/// The values an event template can refer to:
///
/// - `e`: the event's fields as given in the data
/// - `dt`: the start, formatted on its own
/// - `dtrange`: the start-to-end range
/// - `duration`: the duration in words, empty without one
pub fn event_context(event: &Event) -> Result<Value, DateTimeError> {
    let range = event.range()?;
    Ok(json!({
        "e": event.fields,
        "dt": DateRange::instant(event.start).to_string(),
        "dtrange": range.to_string(),
        "duration": event.duration.map(|d| d.to_string()).unwrap_or_default(),
    }))
}

/// A compiled event template. Output is not escaped; templates produce the
/// markup of the target document.
pub struct EventTemplate {
    engine: Handlebars<'static>,
}

impl EventTemplate {
    pub fn new(source: &str) -> Result<Self, TimelineError> {
        if source.trim().is_empty() {
            return Err(TimelineError::EmptyTemplate);
        }
        let mut engine = Handlebars::new();
        engine.set_strict_mode(false);
        engine.register_escape_fn(no_escape);
        engine.register_helper("daterange", Box::new(daterange_helper));
        engine.register_template_string(TEMPLATE_NAME, source)?;
        Ok(Self { engine })
    }

    pub fn render(&self, event: &Event) -> Result<String, TimelineError> {
        let index = event.index;
        let context = event_context(event)
            .map_err(|source| TimelineError::InvalidField { index, field: "duration", source })?;
        self.engine
            .render(TEMPLATE_NAME, &context)
            .map_err(|source| TimelineError::Render { index, source })
    }
}
