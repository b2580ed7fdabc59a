//! Command-line front end: load a shape from a share link or a profile file
//! and print it in one of the export formats.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use corner_shaper::{Configurable, ShapeEditor, ShapeProfile, ShareQuery, export};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "corner-shaper",
    version,
    about = "Generate outlines for rectangles with rounded or notched corners"
)]
struct Cli {
    /// Share link or query string to load the shape from.
    #[arg(long, conflicts_with = "profile")]
    query: Option<String>,

    /// JSON profile file to load the shape from.
    #[arg(long)]
    profile: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write to this file instead of stdout. `svg-file` defaults to
    /// `corner-shape.svg`.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Absolute URL the `url` format attaches the query to.
    #[arg(long)]
    base: Option<String>,

    /// Parse the generated SVG document before writing anything.
    #[arg(long)]
    check: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Fill path data.
    Path,
    /// Outer border path data.
    BorderPath,
    Svg,
    /// SVG document with an XML prolog.
    SvgFile,
    CssMask,
    ClipPath,
    /// Share link, or its bare query without `--base`.
    Url,
    /// JSON profile.
    Json,
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load(cli: &Cli) -> Result<ShapeEditor> {
    if let Some(path) = &cli.profile {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?;
        let profile = ShapeProfile::from_json(&json)
            .with_context(|| format!("failed to parse profile {}", path.display()))?;
        let mut editor = ShapeEditor::new();
        editor
            .apply_profile(&profile)
            .with_context(|| format!("invalid profile {}", path.display()))?;
        debug!(path = %path.display(), "loaded profile");
        return Ok(editor);
    }

    if let Some(query) = &cli.query {
        debug!(query, "decoding share query");
        return Ok(ShapeEditor::from_share_query(query));
    }

    Ok(ShapeEditor::new())
}

fn render(editor: &ShapeEditor, format: Format, base: Option<&str>) -> Result<String> {
    Ok(match format {
        Format::Path => editor.fill_path().to_string(),
        Format::BorderPath => editor.border_path().to_string(),
        Format::Svg => editor.svg_document(),
        Format::SvgFile => editor.svg_file(),
        Format::CssMask => editor.css_mask(),
        Format::ClipPath => editor.css_clip_path(),
        Format::Url => match base {
            Some(base) => ShareQuery::to_url(base, editor.params(), editor.colors())
                .with_context(|| format!("cannot build a link on {base:?}"))?
                .to_string(),
            None => format!("?{}", editor.share_query()),
        },
        Format::Json => editor
            .export_profile()
            .to_json_pretty()
            .context("failed to serialize profile")?,
    })
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let editor = load(&cli)?;
    let params = editor.params();
    info!(
        width = params.canvas.width,
        height = params.canvas.height,
        ratio = %editor.aspect_ratio(),
        border = params.border_width,
        "shape loaded"
    );

    if cli.check {
        let (width, height) = export::validate_svg(&editor.svg_document())
            .context("generated SVG document did not parse")?;
        info!(width, height, "SVG document is valid");
    }

    let text = render(&editor, cli.format, cli.base.as_deref())?;
    let output = match cli.format {
        Format::SvgFile => Some(
            cli.output
                .clone()
                .unwrap_or_else(|| PathBuf::from(export::SVG_FILE_NAME)),
        ),
        _ => cli.output.clone(),
    };
    match &output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), format = ?cli.format, "written");
        }
        None => println!("{text}"),
    }

    Ok(())
}
