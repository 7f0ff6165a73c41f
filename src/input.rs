//! Reading detector output from JSON.
//!
//! Accepts either a bare array of detections or an object with a `faces`
//! array. Landmarks may be `{"x": .., "y": ..}` objects or `[x, y]` pairs.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use facescore_core::FaceDetection;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Faces(Vec<FaceDetection>),
    Wrapped { faces: Vec<FaceDetection> },
}

pub fn parse_detections(raw: &str) -> Result<Vec<FaceDetection>> {
    let doc: Document = serde_json::from_str(raw).context("parsing detections")?;
    match doc {
        Document::Faces(faces) | Document::Wrapped { faces } => Ok(faces),
    }
}

/// Load detections from a file, or from stdin when `path` is `-`.
pub fn load_detections(path: &Path) -> Result<Vec<FaceDetection>> {
    let raw = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading detections from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading detections from {}", path.display()))?
    };
    parse_detections(&raw).with_context(|| format!("in {}", path.display()))
}
