//! qr-vector CLI
//!
//! Usage:
//!   qr-vector [OPTIONS] [VALUE]
//!   qr-vector --matrix symbol.txt [OPTIONS]
//!
//! Encodes VALUE (or reads a `#`/`.` module matrix) and writes an SVG.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use base64::Engine;
use clap::Parser;
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use qr_vector::{
    encode, render_with_config, EccLevel, ModuleMatrix, OverlaySpec, QrOptions, RenderConfig,
    RenderError, Settings, SettingsError, SvgConfig,
};

#[derive(Parser)]
#[command(name = "qr-vector")]
#[command(about = "Render QR symbols as compact SVG paths")]
struct Cli {
    /// Payload to encode (omit when using --matrix)
    value: Option<String>,

    /// Read a module matrix from a text file instead of encoding ("-" for stdin)
    #[arg(short, long, conflicts_with = "value")]
    matrix: Option<PathBuf>,

    /// Settings file (TOML); flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output edge length
    #[arg(long, allow_negative_numbers = true)]
    size: Option<f64>,

    /// Error correction level: L, M, Q or H
    #[arg(short, long)]
    level: Option<EccLevel>,

    /// Smallest symbol version to consider (1-40)
    #[arg(long)]
    min_version: Option<u8>,

    /// Background color
    #[arg(long)]
    bg: Option<String>,

    /// Foreground color
    #[arg(long)]
    fg: Option<String>,

    /// Add the standard 4-module quiet zone
    #[arg(long)]
    include_margin: bool,

    /// Explicit margin in modules (overrides --include-margin)
    #[arg(long, allow_negative_numbers = true)]
    margin: Option<f64>,

    /// Accessible title
    #[arg(long)]
    title: Option<String>,

    /// Overlay image reference, emitted unchanged
    #[arg(long, conflicts_with = "overlay_file")]
    overlay_src: Option<String>,

    /// Overlay image file, embedded as a base64 data URI
    #[arg(long)]
    overlay_file: Option<PathBuf>,

    /// Overlay width in output units
    #[arg(long, allow_negative_numbers = true)]
    overlay_width: Option<f64>,

    /// Overlay height in output units
    #[arg(long, allow_negative_numbers = true)]
    overlay_height: Option<f64>,

    /// Overlay left edge in output units (centered if omitted)
    #[arg(long, allow_negative_numbers = true)]
    overlay_x: Option<f64>,

    /// Overlay top edge in output units (centered if omitted)
    #[arg(long, allow_negative_numbers = true)]
    overlay_y: Option<f64>,

    /// Overlay opacity in [0, 1]
    #[arg(long, allow_negative_numbers = true)]
    overlay_opacity: Option<f64>,

    /// Clear the modules beneath the overlay
    #[arg(long)]
    excavate: bool,

    /// Emit a single line without the XML declaration
    #[arg(long)]
    compact: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("settings: {0}")]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose { "qr_vector=debug" } else { "qr_vector=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    let options = apply_flags(&cli, settings.into_options())?;

    let matrix = match (&cli.matrix, &cli.value) {
        (Some(path), _) => ModuleMatrix::parse(&read_matrix_text(path, io::stdin())?)?,
        (None, Some(value)) => encode(value, options.level, options.min_version)
            .map_err(RenderError::from)?,
        (None, None) => {
            return Err(CliError::Usage(
                "nothing to render: pass a VALUE or --matrix FILE".to_string(),
            ))
        }
    };
    tracing::info!(modules = matrix.size(), "rendering symbol");

    let svg_config = SvgConfig::new()
        .with_standalone(!cli.compact)
        .with_pretty_print(!cli.compact);
    let config = RenderConfig::new().with_options(options).with_svg(svg_config);
    let svg = render_with_config(&matrix, &config)?;

    match &cli.output {
        Some(path) => fs::write(path, format!("{}\n", svg)).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?,
        None => println!("{}", svg),
    }
    Ok(())
}

/// Command-line flags take precedence over the settings file
fn apply_flags(cli: &Cli, mut options: QrOptions) -> Result<QrOptions, CliError> {
    if let Some(size) = cli.size {
        options.size = size;
    }
    if let Some(level) = cli.level {
        options.level = level;
    }
    if let Some(version) = cli.min_version {
        options.min_version = version;
    }
    if let Some(bg) = &cli.bg {
        options.background_color = bg.clone();
    }
    if let Some(fg) = &cli.fg {
        options.foreground_color = fg.clone();
    }
    if cli.include_margin {
        options.include_margin = true;
    }
    if let Some(margin) = cli.margin {
        options.margin_modules = Some(margin);
    }
    if let Some(title) = &cli.title {
        options.title = Some(title.clone());
    }

    let source = match (&cli.overlay_file, &cli.overlay_src) {
        (Some(path), _) => Some(data_uri(path)?),
        (None, Some(src)) => Some(src.clone()),
        (None, None) => None,
    };
    let tweaks_overlay = cli.overlay_width.is_some()
        || cli.overlay_height.is_some()
        || cli.overlay_x.is_some()
        || cli.overlay_y.is_some()
        || cli.overlay_opacity.is_some()
        || cli.excavate;

    let mut overlay = match (source, options.overlay.take()) {
        (Some(src), Some(mut existing)) => {
            existing.source = src;
            Some(existing)
        }
        (Some(src), None) => Some(OverlaySpec::new(src)),
        (None, existing) => existing,
    };

    match overlay.as_mut() {
        Some(spec) => {
            if cli.overlay_width.is_some() {
                spec.width = cli.overlay_width;
            }
            if cli.overlay_height.is_some() {
                spec.height = cli.overlay_height;
            }
            if cli.overlay_x.is_some() {
                spec.x = cli.overlay_x;
            }
            if cli.overlay_y.is_some() {
                spec.y = cli.overlay_y;
            }
            if cli.overlay_opacity.is_some() {
                spec.opacity = cli.overlay_opacity;
            }
            if cli.excavate {
                spec.excavate = true;
            }
        }
        None if tweaks_overlay => {
            return Err(CliError::Usage(
                "overlay options need --overlay-src, --overlay-file or an [overlay] table".to_string(),
            ))
        }
        None => {}
    }
    options.overlay = overlay;

    Ok(options)
}

/// Read matrix text from `path`, or from `stdin` when the path is "-"
fn read_matrix_text(path: &Path, mut stdin: impl Read) -> Result<String, CliError> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        stdin
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(buffer);
    }
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Embed a local image as a `data:` URI
fn data_uri(path: &Path) -> Result<String, CliError> {
    let bytes = fs::read(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    tracing::debug!(path = %path.display(), bytes = encoded.len(), "embedded overlay image");
    Ok(format!("data:{};base64,{}", mime_for(path), encoded))
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
