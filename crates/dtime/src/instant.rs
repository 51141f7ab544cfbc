//! Timezone-aware instants.
use crate::duration::CalendarDuration;
use crate::error::DateTimeError;
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A trailing parenthesised IANA zone name, e.g. `2021-02-03 (Europe/Paris)`.
static ZONE_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<dt>.+)\((?P<tz>[^)]+)\)\s*$").expect("valid zone regex"));

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The timezone an [`Instant`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Utc,
    Fixed(FixedOffset),
    Named(Tz),
}

/// The offset of a named zone at a wall-clock time. Ambiguous times take the
/// first occurrence; times inside a DST gap take the offset in effect before
/// the gap.
fn named_offset(tz: Tz, local: &NaiveDateTime) -> Option<<Tz as TimeZone>::Offset> {
    tz.offset_from_local_datetime(local)
        .earliest()
        .or_else(|| tz.offset_from_local_datetime(&(*local - TimeDelta::days(1))).earliest())
}

fn shift_to_utc(local: &NaiveDateTime, offset: FixedOffset) -> NaiveDateTime {
    *local - TimeDelta::seconds(offset.local_minus_utc() as i64)
}

impl Zone {
    /// Resolves a wall-clock time in this zone to UTC.
    fn to_utc(self, local: &NaiveDateTime) -> DateTime<Utc> {
        Utc.from_utc_datetime(&shift_to_utc(local, self.offset(local)))
    }

    fn offset(self, local: &NaiveDateTime) -> FixedOffset {
        match self {
            Zone::Utc => Utc.fix(),
            Zone::Fixed(offset) => offset,
            Zone::Named(tz) => named_offset(tz, local).map_or_else(|| Utc.fix(), |offset| offset.fix()),
        }
    }

    /// The zone name shown in formatted ranges: `UTC`, `UTC+01:00`, or the
    /// abbreviation in effect for a named zone (`EST`, `CEST`, ...).
    pub fn abbreviation(self, local: &NaiveDateTime) -> String {
        match self {
            Zone::Utc => "UTC".to_string(),
            Zone::Fixed(offset) => {
                let seconds = offset.local_minus_utc();
                if seconds == 0 {
                    return "UTC".to_string();
                }
                let sign = if seconds < 0 { '-' } else { '+' };
                let minutes = seconds.abs() / 60;
                format!("UTC{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
            }
            Zone::Named(tz) => match named_offset(tz, local) {
                Some(offset) => {
                    let utc = shift_to_utc(local, offset.fix());
                    DateTime::<Tz>::from_naive_utc_and_offset(utc, offset)
                        .format("%Z")
                        .to_string()
                }
                None => tz.name().to_string(),
            },
        }
    }
}

/// A wall-clock date and time in a known zone.
///
/// Calendar arithmetic and comparisons of start/end fields operate on the
/// wall clock; [`Instant::to_utc`] gives the absolute point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    local: NaiveDateTime,
    zone: Zone,
}

impl Instant {
    pub fn new(local: NaiveDateTime, zone: Zone) -> Self {
        Self { local, zone }
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.local.time()
    }

    pub fn is_midnight(&self) -> bool {
        self.local.time() == NaiveTime::MIN
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.zone.to_utc(&self.local)
    }

    pub fn zone_abbreviation(&self) -> String {
        self.zone.abbreviation(&self.local)
    }

    /// Adds a calendar duration to the wall clock, keeping the zone.
    pub fn checked_add(&self, duration: &CalendarDuration) -> Result<Instant, DateTimeError> {
        let local = duration
            .add_to(self.local)
            .ok_or_else(|| DateTimeError::OutOfRange(format!("{} + {}", self, duration)))?;
        Ok(Instant::new(local, self.zone))
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Instant::new(date.and_time(NaiveTime::MIN), Zone::Utc)
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(local: NaiveDateTime) -> Self {
        Instant::new(local, Zone::Utc)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Instant::new(dt.naive_utc(), Zone::Utc)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Instant::new(dt.naive_local(), Zone::Fixed(*dt.offset()))
    }
}

impl From<DateTime<Tz>> for Instant {
    fn from(dt: DateTime<Tz>) -> Self {
        Instant::new(dt.naive_local(), Zone::Named(dt.timezone()))
    }
}

impl FromStr for Instant {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_instant(s)
    }
}

/// ISO-8601 with an explicit offset, followed by the zone name for named
/// zones: `2021-02-03T22:00:00+00:00`, `2021-07-01T09:30:00+02:00 (Europe/Paris)`.
impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.zone.offset(&self.local);
        write!(
            f,
            "{}{}",
            self.local.format("%Y-%m-%dT%H:%M:%S%.f"),
            offset
        )?;
        if let Zone::Named(tz) = self.zone {
            write!(f, " ({})", tz.name())?;
        }
        Ok(())
    }
}

/// Parses a date or date-time literal with an optional `(Area/City)` suffix.
///
/// Date-only values become midnight. Values without an offset or zone are
/// read as UTC. A named zone takes precedence over an explicit offset in the
/// literal; the wall-clock fields are kept as written.
pub fn parse_instant(value: &str) -> Result<Instant, DateTimeError> {
    if let Some(caps) = ZONE_SUFFIX.captures(value) {
        let zone_name = &caps["tz"];
        let tz: Tz = zone_name
            .parse()
            .map_err(|_| DateTimeError::UnknownTimezone(zone_name.to_string()))?;
        let (local, offset) = parse_literal(caps["dt"].trim())?;
        if let Some(offset) = offset {
            log::debug!("Zone {} replaces offset {} in '{}'", tz.name(), offset, value);
        }
        return Ok(Instant::new(local, Zone::Named(tz)));
    }

    let (local, offset) = parse_literal(value.trim())?;
    let zone = offset.map_or(Zone::Utc, Zone::Fixed);
    Ok(Instant::new(local, zone))
}

fn parse_literal(text: &str) -> Result<(NaiveDateTime, Option<FixedOffset>), DateTimeError> {
    let normalized = match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => text.to_string(),
    };

    for fmt in AWARE_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
            return Ok((dt.naive_local(), Some(*dt.offset())));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(local) = NaiveDateTime::parse_from_str(&normalized, fmt) {
            return Ok((local, None));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
        return Ok((date.and_time(NaiveTime::MIN), None));
    }

    Err(DateTimeError::Parse(text.to_string()))
}
