//! Rendering of single endpoints of a date range.
use crate::instant::Instant;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Options controlling how a date range is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeFormat {
    /// Include the day name, e.g. `Mon`.
    pub day_name: bool,
    /// Numeric dates (`03/02/2021`) instead of `3rd Feb 2021`.
    pub short_date: bool,
    /// Separator for numeric dates.
    pub short_delim: String,
    /// Abbreviated day and month names.
    pub abbr: bool,
    /// 12-hour clock with AM/PM.
    pub clock12: bool,
}

impl Default for RangeFormat {
    fn default() -> Self {
        Self {
            day_name: true,
            short_date: false,
            short_delim: "/".to_string(),
            abbr: true,
            clock12: true,
        }
    }
}

/// Ordinal suffix for a day of the month: `1st`, `2nd`, `3rd`, `11th`...
pub fn ordinal_suffix(n: u32) -> &'static str {
    if (11..=13).contains(&(n % 100)) {
        return "th";
    }
    match n % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Which parts of an endpoint are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pattern {
    pub date: bool,
    pub month: bool,
    pub year: bool,
    pub time: bool,
    pub zone: bool,
}

impl Pattern {
    pub const FULL: Pattern = Pattern {
        date: true,
        month: true,
        year: true,
        time: true,
        zone: true,
    };

    pub fn without_zone(self) -> Self {
        Self { zone: false, ..self }
    }

    pub fn without_time(self) -> Self {
        Self { time: false, zone: false, ..self }
    }

    pub fn time_only(self) -> Self {
        Self { date: false, ..self }
    }
}

impl RangeFormat {
    /// Renders `instant` with the parts selected by `pattern`, e.g.
    /// `Wed 3rd Feb 2021, 10:00 PM (UTC)`.
    pub(crate) fn render(&self, instant: &Instant, pattern: Pattern) -> String {
        let local = instant.local();
        let mut out = String::new();

        if pattern.date {
            if self.day_name {
                let code = if self.abbr { "%a" } else { "%A" };
                let _ = write!(out, "{} ", local.format(code));
            }
            if self.short_date {
                let delim = &self.short_delim;
                let _ = write!(
                    out,
                    "{:02}{}{:02}{}{}",
                    local.day(),
                    delim,
                    local.month(),
                    delim,
                    local.year()
                );
            } else {
                let _ = write!(out, "{}{}", local.day(), ordinal_suffix(local.day()));
                if pattern.month {
                    let code = if self.abbr { "%b" } else { "%B" };
                    let _ = write!(out, " {}", local.format(code));
                }
                if pattern.year {
                    let _ = write!(out, " {}", local.year());
                }
            }
        }

        if pattern.time {
            if pattern.date {
                out.push_str(", ");
            }
            let code = if self.clock12 { "%I:%M %p" } else { "%H:%M" };
            let _ = write!(out, "{}", local.format(code));
            if pattern.zone {
                let _ = write!(out, " ({})", instant.zone_abbreviation());
            }
        }

        out
    }
}
