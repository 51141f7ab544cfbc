use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tessella::{
    Breakpoint, RenderTarget, SubfigureBuilder, TessellaError, TimelineBuilder,
};

/// Renders grid-layout subfigures and templated timelines.
#[derive(Parser)]
#[command(name = "tessella", version)]
struct Cli {
    /// Output format: html, latex, man or text
    #[arg(long, short, default_value = "html", global = true)]
    target: String,

    /// Write the output to a file instead of stdout
    #[arg(long, short, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a figure of images placed on a grid layout
    Subfigure(SubfigureArgs),
    /// Render a list of events through a template
    Timeline(TimelineArgs),
}

#[derive(Args)]
struct SubfigureArgs {
    /// Content file with Markdown images and an optional caption ("-" for stdin)
    #[arg(default_value = "-")]
    content: PathBuf,

    /// Column count or area template, e.g. "3" or "AAB|AAC"
    #[arg(long)]
    layout: Option<String>,
    #[arg(long = "layout-sm")]
    layout_sm: Option<String>,
    #[arg(long = "layout-lg")]
    layout_lg: Option<String>,
    #[arg(long = "layout-xl")]
    layout_xl: Option<String>,
    #[arg(long = "layout-xxl")]
    layout_xxl: Option<String>,

    /// Show alt texts as subcaptions: above or below
    #[arg(long)]
    subcaptions: Option<String>,
    #[arg(long)]
    width: Option<String>,
    /// left, center or right
    #[arg(long)]
    align: Option<String>,
    #[arg(long)]
    gap: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    class: Option<String>,
    #[arg(long = "class-grid")]
    class_grid: Option<String>,
    #[arg(long = "class-area")]
    class_area: Option<String>,
}

#[derive(Args)]
struct TimelineArgs {
    /// Inline content: event data, a "---" line, then the template ("-" for stdin)
    #[arg(default_value = "-")]
    content: PathBuf,

    /// Read event data from this file; the content is then the template
    #[arg(long)]
    events: Option<PathBuf>,
    /// Read the template from this file
    #[arg(long)]
    template: Option<PathBuf>,
    /// yaml, json or csv
    #[arg(long = "events-format", default_value = "yaml")]
    events_format: String,
    /// Show at most this many events (0 shows all)
    #[arg(long = "max-items", default_value_t = 0)]
    max_items: usize,
    /// Show the oldest event first
    #[arg(long)]
    reversed: bool,
    #[arg(long)]
    height: Option<String>,
    #[arg(long = "width-item")]
    width_item: Option<String>,
    /// default or none
    #[arg(long, default_value = "default")]
    style: String,
    #[arg(long)]
    class: Option<String>,
    #[arg(long = "class-item")]
    class_item: Option<String>,
}

fn read_content(path: &Path) -> Result<String, TessellaError> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    Ok(fs::read_to_string(path)?)
}

fn subfigure(args: SubfigureArgs) -> Result<tessella::Figure, TessellaError> {
    let mut builder = SubfigureBuilder::from_content(&read_content(&args.content)?)?;
    let layouts = [
        (Breakpoint::Default, args.layout),
        (Breakpoint::Sm, args.layout_sm),
        (Breakpoint::Lg, args.layout_lg),
        (Breakpoint::Xl, args.layout_xl),
        (Breakpoint::Xxl, args.layout_xxl),
    ];
    for (breakpoint, spec) in layouts {
        if let Some(spec) = spec {
            builder = builder.with_breakpoint_layout(breakpoint, &spec);
        }
    }
    if let Some(placement) = args.subcaptions {
        builder = builder.with_subcaptions(placement.parse()?);
    }
    if let Some(align) = args.align {
        builder = builder.with_align(align.parse()?);
    }
    if let Some(name) = args.name {
        builder = builder.with_name(&name);
    }
    if let Some(width) = args.width {
        builder = builder.with_width(&width)?;
    }
    if let Some(gap) = args.gap {
        builder = builder.with_gap(&gap)?;
    }
    if let Some(class) = args.class {
        builder = builder.with_classes(&class)?;
    }
    if let Some(class) = args.class_grid {
        builder = builder.with_grid_classes(&class)?;
    }
    if let Some(class) = args.class_area {
        builder = builder.with_area_classes(&class)?;
    }
    builder.build()
}

fn timeline(args: TimelineArgs) -> Result<tessella::Timeline, TessellaError> {
    let mut builder = TimelineBuilder::new()
        .with_content(&read_content(&args.content)?)
        .with_events_format(args.events_format.parse()?)
        .with_max_items(args.max_items)
        .with_reversed(args.reversed)
        .with_style(args.style.parse()?);
    if let Some(path) = args.events {
        builder = builder.with_events_file(path)?;
    }
    if let Some(path) = args.template {
        builder = builder.with_template_file(path)?;
    }
    if let Some(height) = args.height {
        builder = builder.with_height(&height)?;
    }
    if let Some(width) = args.width_item {
        builder = builder.with_item_width(&width)?;
    }
    if let Some(class) = args.class {
        builder = builder.with_classes(&class)?;
    }
    if let Some(class) = args.class_item {
        builder = builder.with_item_classes(&class)?;
    }
    builder.build()
}

fn main() -> Result<(), TessellaError> {
    env_logger::init();
    let cli = Cli::parse();
    let target: RenderTarget = cli.target.parse()?;
    let renderer = target.renderer();

    let rendered = match cli.command {
        Commands::Subfigure(args) => renderer.render_figure(&subfigure(args)?)?,
        Commands::Timeline(args) => renderer.render_timeline(&timeline(args)?)?,
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            log::info!("Wrote {} output to {}", target, path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }
    Ok(())
}
