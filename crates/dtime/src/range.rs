//! Date ranges with adaptive elision of shared fields.
use crate::duration::CalendarDuration;
use crate::error::DateTimeError;
use crate::format::{Pattern, RangeFormat};
use crate::instant::Instant;
use chrono::Datelike;
use std::fmt;

/// A span from `start` to `start + duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: Instant,
    duration: Option<CalendarDuration>,
    end: Instant,
}

impl DateRange {
    pub fn new(start: Instant, duration: Option<CalendarDuration>) -> Result<Self, DateTimeError> {
        let end = match &duration {
            Some(duration) => start.checked_add(duration)?,
            None => start,
        };
        Ok(Self { start, duration, end })
    }

    /// A range covering a single instant.
    pub fn instant(start: Instant) -> Self {
        Self { start, duration: None, end: start }
    }

    pub fn start(&self) -> &Instant {
        &self.start
    }

    pub fn end(&self) -> &Instant {
        &self.end
    }

    pub fn duration(&self) -> Option<&CalendarDuration> {
        self.duration.as_ref()
    }

    /// Formats the range, dropping whatever the two endpoints share:
    ///
    /// - a single instant is printed once, without a time at midnight;
    /// - only the end carries the zone;
    /// - on the same day the end shows only its time;
    /// - if both ends are at midnight, times are dropped;
    /// - with long dates, a shared year (and then month) is dropped from the start.
    pub fn format(&self, options: &RangeFormat) -> String {
        let (start, end) = (&self.start, &self.end);

        if start == end {
            let pattern = if start.is_midnight() {
                Pattern::FULL.without_time()
            } else {
                Pattern::FULL
            };
            return options.render(start, pattern);
        }

        let mut start_pattern = Pattern::FULL.without_zone();
        let mut end_pattern = Pattern::FULL;

        if start.date() == end.date() {
            end_pattern = end_pattern.time_only();
            return format!(
                "{} - {}",
                options.render(start, start_pattern),
                options.render(end, end_pattern)
            );
        }

        if start.is_midnight() && end.is_midnight() {
            start_pattern = start_pattern.without_time();
            end_pattern = end_pattern.without_time();
        }

        if !options.short_date && start.date().year() == end.date().year() {
            start_pattern.year = false;
            if start.date().month() == end.date().month() {
                start_pattern.month = false;
            }
        }

        format!(
            "{} - {}",
            options.render(start, start_pattern),
            options.render(end, end_pattern)
        )
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&RangeFormat::default()))
    }
}

/// Formats the span from `start` over `duration` (see [`DateRange::format`]).
pub fn fmt_daterange(
    start: Instant,
    duration: Option<CalendarDuration>,
    options: &RangeFormat,
) -> Result<String, DateTimeError> {
    Ok(DateRange::new(start, duration)?.format(options))
}
