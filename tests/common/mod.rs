#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use tessella::{Figure, RenderTarget, TessellaError, Timeline};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Event data shared by the timeline tests, in source order.
pub const EVENTS_YAML: &str = "\
- start: 2021-02-03
  name: Launch
- start: 2021-02-03 22:00
  duration: 1 day
  name: Party
- start: 2022-06-01 (Europe/London)
  duration: 1 year
  name: Anniversary
";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Writes `content` to a temporary file that lives as long as the handle.
pub fn temp_file(content: &str) -> Result<NamedTempFile, std::io::Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn render_figure(figure: &Figure, target: RenderTarget) -> Result<String, TessellaError> {
    Ok(target.renderer().render_figure(figure)?)
}

pub fn render_timeline(timeline: &Timeline, target: RenderTarget) -> Result<String, TessellaError> {
    Ok(target.renderer().render_timeline(timeline)?)
}
