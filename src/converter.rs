use crate::front_matter::strip_front_matter;
use crate::headings::assign_heading_ids;
use crate::image;
use crate::markdown::render_markdown;
use crate::outline::Outline;
use crate::page::Page;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_reader.html";

/// Settings for one conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    /// Defaults to [`default_output_path`] of the input.
    pub output: Option<PathBuf>,
    /// Defaults to the input's file name.
    pub title: Option<String>,
    pub lang: String,
    pub inline_images: bool,
}

impl ConvertOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            title: None,
            lang: "en".to_string(),
            inline_images: true,
        }
    }
}

/// What went into a rendered page.
#[derive(Debug, Default)]
pub struct PageStats {
    pub headings: usize,
    pub inlined_images: usize,
    pub missing_images: Vec<PathBuf>,
}

#[derive(Debug)]
pub struct RenderedPage {
    pub html: String,
    pub stats: PageStats,
}

#[derive(Debug)]
pub struct ConversionReport {
    pub output: PathBuf,
    pub stats: PageStats,
}

pub fn convert(options: &ConvertOptions) -> Result<ConversionReport> {
    let source = fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read input file: {}", options.input.display()))?;

    let output_path = match options.output {
        Some(ref path) => path.clone(),
        None => default_output_path(&options.input)?,
    };
    let title = match options.title {
        Some(ref title) => title.clone(),
        None => options
            .input
            .file_name()
            .context("Input file has no name")?
            .to_string_lossy()
            .into_owned(),
    };

    let page = render_page(
        &source,
        document_dir(&options.input),
        &title,
        &options.lang,
        options.inline_images,
    )?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(&output_path, &page.html)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    log::info!(
        "Wrote {} ({} headings{})",
        output_path.display(),
        page.stats.headings,
        if page.stats.inlined_images > 0 {
            format!(", {} images embedded", page.stats.inlined_images)
        } else {
            String::new()
        }
    );

    Ok(ConversionReport {
        output: output_path,
        stats: page.stats,
    })
}

/// Run the whole pipeline on already-loaded Markdown.
///
/// Local image paths are resolved against `base_dir`.
pub fn render_page(
    source: &str,
    base_dir: &Path,
    title: &str,
    lang: &str,
    inline_images: bool,
) -> Result<RenderedPage> {
    let body = render_markdown(strip_front_matter(source));
    let (body, headings) = assign_heading_ids(&body);
    let outline = Outline::build(&headings);

    let (body, inlined_images, missing_images) = if inline_images {
        let images = image::inline_images(&body, base_dir)?;
        (images.html, images.inlined, images.missing)
    } else {
        (body, 0, Vec::new())
    };

    let html = Page {
        title,
        lang,
        outline: &outline.to_html(),
        body: &body,
    }
    .render();

    Ok(RenderedPage {
        html,
        stats: PageStats {
            headings: headings.len(),
            inlined_images,
            missing_images,
        },
    })
}

/// `<dir>/<stem>_reader.html` for an input at `<dir>/<stem>.<ext>`.
pub fn default_output_path(input: &Path) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .context("Input file has no name")?
        .to_string_lossy();
    Ok(input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX)))
}

fn document_dir(input: &Path) -> &Path {
    input
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}
