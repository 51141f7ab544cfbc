//! LaTeX output using the `subcaption` package.
use crate::error::RenderError;
use crate::ir::{Figure, FigureItem, Timeline};
use crate::traits::Renderer;
use crate::utils::{element_id, escape_latex, latex_path};
use std::fmt::Write;
use tessella_layout::{FlattenedRun, Progression, flatten_progression};
use tessella_style::{Align, CaptionPlacement};

/// Renders figures as `figure` environments and timelines as `enumerate` lists.
///
/// Figures whose default layout is a progression become one `subfigure` per
/// image, sized by the image's column span. Any other layout has no row-based
/// equivalent, so its images are placed one after another.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexRenderer;

impl LatexRenderer {
    fn write_subfigure(
        out: &mut String,
        figure: &Figure,
        item: &FigureItem,
        progression: &Progression,
        run: &FlattenedRun,
    ) -> Result<(), RenderError> {
        writeln!(out, "\\begin{{subfigure}}{{{}\\textwidth}}", progression.run_width(run))?;
        out.push_str("\\centering\n");
        let subcaption = figure.subcaption(item);
        if let Some((CaptionPlacement::Above, text)) = subcaption {
            writeln!(out, "\\caption{{{}}}", escape_latex(text))?;
        }
        writeln!(out, "\\includegraphics[width=\\linewidth]{{{}}}", latex_path(&item.uri)?)?;
        if let Some((CaptionPlacement::Below, text)) = subcaption {
            writeln!(out, "\\caption{{{}}}", escape_latex(text))?;
        }
        out.push_str("\\end{subfigure}\n");
        if run.new_row {
            out.push('\n');
        }
        Ok(())
    }
}

impl Renderer for LatexRenderer {
    fn render_figure(&self, figure: &Figure) -> Result<String, RenderError> {
        let layout = figure.default_layout().ok_or(RenderError::MissingLayout)?;
        let mut out = String::from("\\begin{figure}[htbp]\n");
        out.push_str(match figure.options.align {
            Some(Align::Left) => "\\raggedright\n",
            Some(Align::Right) => "\\raggedleft\n",
            Some(Align::Center) | None => "\\centering\n",
        });

        match flatten_progression(layout) {
            Some(progression) => {
                for (index, item) in figure.items.iter().enumerate() {
                    let run = progression
                        .runs()
                        .iter()
                        .find(|run| run.label == item.area)
                        .ok_or(RenderError::UnknownArea { index, area: item.area })?;
                    Self::write_subfigure(&mut out, figure, item, &progression, run)?;
                }
            }
            None => {
                log::debug!("Layout '{}' is not a row progression; placing images sequentially", layout);
                for item in &figure.items {
                    writeln!(out, "\\includegraphics{{{}}}", latex_path(&item.uri)?)?;
                }
            }
        }

        if let Some(caption) = &figure.caption {
            writeln!(out, "\\caption{{{}}}", escape_latex(caption))?;
        }
        if let Some(name) = &figure.options.name {
            writeln!(out, "\\label{{{}}}", element_id(name))?;
        }
        out.push_str("\\end{figure}\n");
        Ok(out)
    }

    fn render_timeline(&self, timeline: &Timeline) -> Result<String, RenderError> {
        let mut out = String::from("\\begin{enumerate}\n");
        for content in &timeline.items {
            let text = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(escape_latex)
                .collect::<Vec<_>>()
                .join("\n");
            writeln!(out, "\\item {}", text)?;
        }
        out.push_str("\\end{enumerate}\n");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Breakpoint, FigureOptions};
    use std::collections::BTreeMap;
    use tessella_layout::parse_layout;

    fn figure(spec: &str, items: usize, options: FigureOptions) -> Figure {
        let mut layouts = BTreeMap::new();
        layouts.insert(Breakpoint::Default, parse_layout(spec, items).unwrap());
        Figure {
            items: (0..items)
                .map(|i| FigureItem {
                    area: (b'A' + i as u8) as char,
                    uri: format!("img{}.png", i),
                    alt: Some(format!("Image {}", i)),
                })
                .collect(),
            caption: Some("Growth of 50%".to_string()),
            layouts,
            options,
        }
    }

    #[test]
    fn test_progression_becomes_subfigures() {
        let latex = LatexRenderer.render_figure(&figure("AAB|C..", 3, FigureOptions::default())).unwrap();
        assert_eq!(
            latex,
            "\\begin{figure}[htbp]\n\\centering\n\
             \\begin{subfigure}{0.66\\textwidth}\n\\centering\n\\includegraphics[width=\\linewidth]{img0.png}\n\\end{subfigure}\n\
             \\begin{subfigure}{0.33\\textwidth}\n\\centering\n\\includegraphics[width=\\linewidth]{img1.png}\n\\end{subfigure}\n\n\
             \\begin{subfigure}{0.33\\textwidth}\n\\centering\n\\includegraphics[width=\\linewidth]{img2.png}\n\\end{subfigure}\n\
             \\caption{Growth of 50\\%}\n\\end{figure}\n"
        );
    }

    #[test]
    fn test_subcaptions_and_label() {
        let options = FigureOptions {
            subcaptions: Some(CaptionPlacement::Below),
            name: Some("fig growth".to_string()),
            align: Some(Align::Left),
            ..Default::default()
        };
        let latex = LatexRenderer.render_figure(&figure("1", 1, options)).unwrap();
        assert!(latex.contains("\\raggedright\n"));
        assert!(latex.contains("{0.99\\textwidth}"));
        assert!(latex.contains("{img0.png}\n\\caption{Image 0}\n\\end{subfigure}"));
        assert!(latex.contains("\\label{fig-growth}\n\\end{figure}"));
    }

    #[test]
    fn test_non_progression_falls_back_to_images() {
        let latex = LatexRenderer.render_figure(&figure("AB|AC", 3, FigureOptions::default())).unwrap();
        assert!(!latex.contains("subfigure"));
        assert!(latex.contains("\\includegraphics{img0.png}\n\\includegraphics{img1.png}\n\\includegraphics{img2.png}\n"));
    }

    #[test]
    fn test_unsafe_image_paths_are_rejected() {
        for spec in ["1", "AB|AC"] {
            let mut fig = figure(spec, 3, FigureOptions::default());
            fig.items[2].uri = "plots/50%.png".to_string();
            let err = LatexRenderer.render_figure(&fig).unwrap_err();
            assert!(matches!(err, RenderError::UnsafePath(ref uri) if uri == "plots/50%.png"), "{}", spec);
        }
    }

    #[test]
    fn test_render_timeline_escapes_text() {
        let timeline = Timeline {
            items: vec!["Launch & party\n\n100%".to_string(), "Review".to_string()],
            ..Default::default()
        };
        let latex = LatexRenderer.render_timeline(&timeline).unwrap();
        assert_eq!(
            latex,
            "\\begin{enumerate}\n\\item Launch \\& party\n100\\%\n\\item Review\n\\end{enumerate}\n"
        );
    }
}
