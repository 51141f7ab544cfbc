//! Calendar durations parsed from free text.
use crate::error::DateTimeError;
use chrono::{Months, NaiveDateTime, TimeDelta};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar-relative offset: months and years move along the calendar
/// (clamping to the end of shorter months), the rest is a fixed span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarDuration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

#[derive(Clone, Copy)]
enum Field {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Years => "years",
            Field::Months => "months",
            Field::Days => "days",
            Field::Hours => "hours",
            Field::Minutes => "minutes",
            Field::Seconds => "seconds",
        }
    }
}

/// An integer, at most one whitespace character, then the unit prefix.
static FIELD_PATTERNS: Lazy<Vec<(Field, Regex)>> = Lazy::new(|| {
    [
        (Field::Years, "y"),
        (Field::Months, "mon"),
        (Field::Days, "d"),
        (Field::Hours, "h"),
        (Field::Minutes, "min"),
        (Field::Seconds, "s"),
    ]
    .into_iter()
    .map(|(field, unit)| {
        let regex = Regex::new(&format!(r"(\d+)\s?{}", unit)).expect("valid duration regex");
        (field, regex)
    })
    .collect()
});

/// Parses a duration such as `"1 year 2mon 3 days"` or `"1y 2mon 3d 4h 5min 6s"`.
///
/// Each unit is matched independently (first occurrence wins), in any order;
/// units that do not appear are zero. Text without any match yields a zero
/// duration.
pub fn parse_duration(value: &str) -> Result<CalendarDuration, DateTimeError> {
    let mut duration = CalendarDuration::default();
    for (field, regex) in FIELD_PATTERNS.iter() {
        let Some(caps) = regex.captures(value) else {
            continue;
        };
        let digits = &caps[1];
        let amount: u32 = digits.parse().map_err(|_| DateTimeError::DurationOverflow {
            field: field.name(),
            value: digits.to_string(),
        })?;
        *duration.field_mut(*field) = amount;
    }
    Ok(duration)
}

impl CalendarDuration {
    fn field_mut(&mut self, field: Field) -> &mut u32 {
        match field {
            Field::Years => &mut self.years,
            Field::Months => &mut self.months,
            Field::Days => &mut self.days,
            Field::Hours => &mut self.hours,
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Adds the duration to a wall-clock time: years and months first, then
    /// the fixed part. Returns `None` on overflow.
    pub fn add_to(&self, local: NaiveDateTime) -> Option<NaiveDateTime> {
        let months = u32::try_from(u64::from(self.years) * 12 + u64::from(self.months)).ok()?;
        let shifted = local.checked_add_months(Months::new(months))?;
        let span = TimeDelta::try_days(self.days.into())?
            .checked_add(&TimeDelta::try_hours(self.hours.into())?)?
            .checked_add(&TimeDelta::try_minutes(self.minutes.into())?)?
            .checked_add(&TimeDelta::try_seconds(self.seconds.into())?)?;
        shifted.checked_add_signed(span)
    }
}

/// Human-readable form, e.g. `"1 Year 2 Months 3 Days"`. Zero fields are
/// skipped, so a zero duration renders as an empty string.
impl fmt::Display for CalendarDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            (self.years, "Year"),
            (self.months, "Month"),
            (self.days, "Day"),
            (self.hours, "Hour"),
            (self.minutes, "Minute"),
            (self.seconds, "Second"),
        ];
        let text = parts
            .iter()
            .filter(|(amount, _)| *amount != 0)
            .map(|(amount, unit)| {
                let plural = if *amount == 1 { "" } else { "s" };
                format!("{} {}{}", amount, unit, plural)
            })
            .collect::<Vec<_>>()
            .join(" ");
        f.write_str(&text)
    }
}
