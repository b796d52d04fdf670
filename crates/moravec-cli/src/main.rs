//! Command-line front end for the Moravec detector.
//!
//! Wires an optional JSON config and per-flag overrides into the `moravec`
//! facade. The process-exit decision lives here and only here; every layer
//! below returns typed errors.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{debug, info, LevelFilter};

use moravec::core::init_with_level;
use moravec::detect::{detect_points, load_gray, DetectError, LoadImageError};
use moravec::io::{write_points, DetectConfig, DetectReport, MoravecIoError};
use moravec::overlay::save_overlay;

#[derive(Parser, Debug)]
#[command(
    name = "moravec",
    version,
    about = "Detect Moravec interest points in an image"
)]
struct Cli {
    /// Path to the input image; overrides `image_path` from `--config`.
    image: Option<PathBuf>,

    /// JSON config file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the square sampling window (odd, >= 3).
    #[arg(long)]
    window_size: Option<u32>,

    /// Minimum corner response for a pixel to be reported.
    #[arg(long)]
    threshold: Option<f32>,

    /// Drop repeated window offsets before scanning.
    #[arg(long)]
    dedup_offsets: bool,

    /// Where to write the `col, row` point list (default: output.txt).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Render the detections on the source image and save the result here.
    #[arg(long)]
    overlay: Option<PathBuf>,

    /// Write a JSON detection report here.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("no input image: pass IMAGE or --config with an image_path")]
    NoImage,

    #[error(transparent)]
    Config(#[from] MoravecIoError),

    #[error(transparent)]
    Load(#[from] LoadImageError),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error("cannot write overlay image: {0}")]
    Overlay(#[from] image::ImageError),
}

fn build_config(cli: &Cli) -> Result<DetectConfig, CliError> {
    let mut cfg = match &cli.config {
        Some(path) => DetectConfig::load_json(path)?,
        None => {
            let image = cli.image.as_ref().ok_or(CliError::NoImage)?;
            DetectConfig::new(image.to_string_lossy())
        }
    };

    if let Some(image) = &cli.image {
        cfg.image_path = image.to_string_lossy().into_owned();
    }
    if let Some(size) = cli.window_size {
        cfg.params.window_size = size;
    }
    if let Some(threshold) = cli.threshold {
        cfg.params.threshold = threshold;
    }
    if cli.dedup_offsets {
        cfg.params.dedup_offsets = true;
    }
    if let Some(path) = &cli.output {
        cfg.output_path = Some(path.to_string_lossy().into_owned());
    }
    if let Some(path) = &cli.overlay {
        cfg.overlay_path = Some(path.to_string_lossy().into_owned());
    }
    if let Some(path) = &cli.report {
        cfg.report_path = Some(path.to_string_lossy().into_owned());
    }

    Ok(cfg)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let cfg = build_config(cli)?;

    let img = load_gray(&cfg.image_path)?;
    debug!(
        "loaded {} ({}x{})",
        cfg.image_path,
        img.width(),
        img.height()
    );

    let mut report = DetectReport::new(&cfg, img.width(), img.height());

    let started = Instant::now();
    let points = match detect_points(&img, &cfg.params) {
        Ok(points) => points,
        Err(err) => {
            report.set_error(&err);
            if let Some(path) = &cfg.report_path {
                report.write_json(path)?;
            }
            return Err(err.into());
        }
    };
    info!(
        "detected {} points in {:.1} ms",
        points.len(),
        started.elapsed().as_secs_f64() * 1e3
    );

    let output_path = cfg.output_path();
    write_points(&output_path, &points)?;
    println!("wrote {} points to {}", points.len(), output_path.display());

    if let Some(path) = &cfg.overlay_path {
        save_overlay(path, &img, &points)?;
        println!("wrote overlay to {path}");
    }

    if let Some(path) = &cfg.report_path {
        report.set_points(points);
        report.write_json(path)?;
        println!("wrote report JSON to {path}");
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
