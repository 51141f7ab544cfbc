//! Date-time parsing and compact, human-readable date-range formatting.
//!
//! - [`parse_instant`] reads ISO-style date/time literals with an optional
//!   `(Area/City)` timezone suffix.
//! - [`parse_duration`] reads free text such as `"1 year 2mon 3 days"`.
//! - [`DateRange`] / [`fmt_daterange`] render a span, eliding the fields the
//!   two endpoints share, e.g. `"Wed 3rd - Thu 4th Feb 2021"`.
//!
//! Day and month names are always English.

pub mod duration;
mod error;
pub mod format;
pub mod instant;
pub mod range;

pub use duration::{CalendarDuration, parse_duration};
pub use error::DateTimeError;
pub use format::{RangeFormat, ordinal_suffix};
pub use instant::{Instant, Zone, parse_instant};
pub use range::{DateRange, fmt_daterange};
