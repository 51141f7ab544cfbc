//! Event data sources for timelines.
//!
//! Events are read from YAML (a sequence of mappings), JSON (an array of
//! objects) or CSV (a header row followed by records). Every format is
//! normalized to a [`serde_json::Value`], so later stages only deal with one
//! data model. CSV fields are always strings.
//!
//! ## Example
//!
//! ```ignore
//! use tessella_source::{EventFormat, read_events_str};
//!
//! let events = read_events_str("- start: 2021-02-03\n  title: Launch\n", EventFormat::Yaml)?;
//! assert!(events.is_array());
//! ```

mod error;
mod format;
mod reader;

pub use error::SourceError;
pub use format::EventFormat;
pub use reader::{read_events, read_events_file, read_events_str};
