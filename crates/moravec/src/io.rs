//! JSON configuration/report helpers and the plain-text point sink.

use moravec_core::{CornerPoint, MoravecParams};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum MoravecIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("malformed point line `{0}`")]
    MalformedLine(String),
}

/// Configuration for a detection run.
///
/// Every knob of the run is explicit here; the algorithm itself carries no
/// defaults beyond `MoravecParams::default()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectConfig {
    pub image_path: String,
    #[serde(default)]
    pub params: MoravecParams,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub overlay_path: Option<String>,
    #[serde(default)]
    pub report_path: Option<String>,
}

impl DetectConfig {
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            params: MoravecParams::default(),
            output_path: None,
            overlay_path: None,
            report_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, MoravecIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), MoravecIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the point-list output path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("output.txt"))
    }
}

/// Summary of a detection run, serializable as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectReport {
    pub image_path: String,
    pub width: u32,
    pub height: u32,
    pub params: MoravecParams,
    pub num_points: usize,
    pub points: Vec<CornerPoint>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DetectReport {
    /// Build a base report from the input config and image dimensions.
    pub fn new(cfg: &DetectConfig, width: u32, height: u32) -> Self {
        Self {
            image_path: cfg.image_path.clone(),
            width,
            height,
            params: cfg.params.clone(),
            num_points: 0,
            points: Vec::new(),
            error: None,
        }
    }

    /// Populate report fields from a successful detection.
    pub fn set_points(&mut self, points: Vec<CornerPoint>) {
        self.num_points = points.len();
        self.points = points;
        self.error = None;
    }

    /// Record a detection error.
    pub fn set_error(&mut self, err: impl std::fmt::Display) {
        self.error = Some(err.to_string());
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, MoravecIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), MoravecIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Write detected points as `col, row` lines, one point per line.
pub fn write_points(path: impl AsRef<Path>, points: &[CornerPoint]) -> Result<(), MoravecIoError> {
    let mut out = String::new();
    for p in points {
        out.push_str(&format!("{}, {}\n", p.col, p.row));
    }
    fs::write(path, out)?;
    Ok(())
}

/// Parse a point list previously written by [`write_points`].
pub fn read_points(path: impl AsRef<Path>) -> Result<Vec<CornerPoint>, MoravecIoError> {
    let raw = fs::read_to_string(path)?;
    let mut points = Vec::new();
    for line in raw.lines() {
        let parsed = line.split_once(',').and_then(|(col, row)| {
            let col = col.trim().parse().ok()?;
            let row = row.trim().parse().ok()?;
            Some(CornerPoint { col, row })
        });
        match parsed {
            Some(p) => points.push(p),
            None => return Err(MoravecIoError::MalformedLine(line.to_owned())),
        }
    }
    Ok(points)
}
