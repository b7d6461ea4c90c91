use anyhow::{Context, Result};
use canvas_art::config::{CanvasVariant, Config};
use canvas_art::draw::{CairoSurface, CanvasSurface};
use canvas_art::draw::cairo_surface::MAX_SIDE;
use canvas_art::export::{FileExportConfig, FileExporter};
use canvas_art::input::UiEvent;
use canvas_art::session::{DrawingSession, RecordingSink, SessionOptions};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CANVAS_ART_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "canvas-art")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand and shape drawing canvas with PNG export"
)]
struct Cli {
    /// Replay UI events from a JSON file (an array of events)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Directory exported images are written to (overrides config)
    #[arg(long, short = 'o', value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Initial canvas side length in pixels, 1-8192 (overrides config)
    #[arg(
        long,
        value_name = "PIXELS",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SIDE))
    )]
    size: Option<u32>,

    /// Mode controls to offer: shapes or text (overrides config)
    #[arg(long, value_name = "VARIANT")]
    variant: Option<CanvasVariant>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let events = load_script(script)?;
    log::info!("Replaying {} event(s) from {}", events.len(), script.display());

    let mut options = SessionOptions::from_config(&config);
    if let Some(size) = cli.size {
        options.default_size = size;
    }
    if let Some(variant) = cli.variant {
        options.variant = variant;
    }

    let mut export_config = FileExportConfig::from(&config.export);
    if let Some(dir) = cli.output_dir {
        export_config.directory = dir;
    }

    let surface = CairoSurface::new(1).context("Failed to create canvas surface")?;
    let errors = RecordingSink::default();
    let mut session = DrawingSession::new(
        options,
        surface,
        Box::new(FileExporter::new(export_config)),
        Box::new(errors.clone()),
    );

    for event in events {
        session.handle(event);
    }

    let failures = errors.count();
    if failures > 0 {
        log::warn!("{failures} operation(s) failed during replay");
    }
    log::info!(
        "Replay finished: {}x{} canvas, {} mode",
        session.surface().side(),
        session.surface().side(),
        session.controller().mode()
    );

    Ok(())
}

fn load_script(path: &Path) -> Result<Vec<UiEvent>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script from {}", path.display()))?;
    let events = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse script from {}", path.display()))?;
    Ok(events)
}

fn print_usage() {
    println!("canvas-art: Freehand and shape drawing canvas with PNG export");
    println!();
    println!("Usage:");
    println!("  canvas-art --script events.json   Replay UI events and export on 'save'");
    println!("  canvas-art --help                 Show help");
    println!();
    println!("Script format (JSON array):");
    println!(r#"  [{{"type": "set-mode", "mode": "circle"}},"#);
    println!(r#"   {{"type": "pointer-down", "x": 50, "y": 50}},"#);
    println!(r#"   {{"type": "pointer-up", "x": 80, "y": 50}},"#);
    println!(r#"   {{"type": "save"}}]"#);
    println!();
    println!("Events: set-mode, pointer-down, pointer-move, pointer-up, canvas-offset,");
    println!("        clear, save, resize, brush-width, brush-color, text");
}
