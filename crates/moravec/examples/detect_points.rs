use std::{env, path::PathBuf, time::Instant};

use moravec::detect::{detect_points, load_gray};
use moravec::io::{write_points, DetectConfig, DetectReport};
use moravec::overlay::save_overlay;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("moravec_config.json"));
    let cfg = DetectConfig::load_json(&config_path)?;

    let img = load_gray(&cfg.image_path)?;
    let mut report = DetectReport::new(&cfg, img.width(), img.height());

    let started = Instant::now();
    let points = detect_points(&img, &cfg.params)?;
    println!(
        "{} points in {:.1} ms",
        points.len(),
        started.elapsed().as_secs_f64() * 1e3
    );

    let output_path = cfg.output_path();
    write_points(&output_path, &points)?;
    println!("wrote points to {}", output_path.display());

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
