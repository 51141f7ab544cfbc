//! Layout and date-range micro-benchmarks
//!
//! Measures layout parsing, validation and flattening for growing grids, and
//! formatting of date ranges.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tessella::dtime::{RangeFormat, fmt_daterange, parse_duration, parse_instant};
use tessella::layout::{flatten_progression, parse_layout};

/// A template of `rows` rows, each a two-column-wide area followed by one
/// single-column area, e.g. `AAB|CCD`.
fn progression_template(rows: usize) -> (String, usize) {
    let mut labels = (b'A'..=b'Z').map(char::from);
    let template = (0..rows)
        .filter_map(|_| {
            let wide = labels.next()?;
            let narrow = labels.next()?;
            Some(format!("{}{}{}", wide, wide, narrow))
        })
        .collect::<Vec<_>>();
    let items = template.len() * 2;
    (template.join("|"), items)
}

fn benchmark_parse_column_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_columns");

    for items in [4, 12, 26] {
        group.bench_with_input(BenchmarkId::new("items", items), &items, |b, &items| {
            b.iter(|| parse_layout(black_box("3"), items).expect("Failed to parse layout"));
        });
    }

    group.finish();
}

fn benchmark_parse_template_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_templates");

    for rows in [2, 6, 13] {
        let (template, items) = progression_template(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &rows, |b, _| {
            b.iter(|| {
                let layout = parse_layout(black_box(&template), items).expect("Failed to parse layout");
                flatten_progression(&layout).expect("Layout is a progression")
            });
        });
    }

    group.finish();
}

fn benchmark_format_ranges(c: &mut Criterion) {
    let mut group = c.benchmark_group("daterange");
    let options = RangeFormat::default();
    let cases = [
        ("date", "2021-02-03", ""),
        ("datetime", "2021-02-03 22:00", "1 day"),
        ("named_zone", "2021-02-03 09:00 (Europe/Paris)", "1 year 2mon"),
    ];

    for (name, start, duration) in cases {
        group.bench_function(name, |b| {
            b.iter(|| {
                let start = parse_instant(black_box(start)).expect("Failed to parse instant");
                let duration = parse_duration(black_box(duration)).expect("Failed to parse duration");
                fmt_daterange(start, Some(duration), &options).expect("Failed to format range")
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_column_layouts,
    benchmark_parse_template_layouts,
    benchmark_format_ranges
);
criterion_main!(benches);
