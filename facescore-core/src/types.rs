use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, Result};

/// A landmark position in image pixel coordinates.
///
/// Deserializes from either `{"x": .., "y": ..}` or an `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PointRepr")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRepr {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

impl From<PointRepr> for Point {
    fn from(p: PointRepr) -> Self {
        match p {
            PointRepr::Object { x, y } => Point::new(x, y),
            PointRepr::Pair([x, y]) => Point::new(x, y),
        }
    }
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Face region reported by the detector: top-left corner, width, and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// NaN sizes count as invalid.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.height / self.width
    }
}

/// One detected face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetection {
    #[serde(rename = "box", alias = "bbox")]
    pub bbox: BoundingBox,
    pub landmarks: Vec<Point>,
    /// Detector confidence, carried through but never used for scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl FaceDetection {
    pub fn new(bbox: BoundingBox, landmarks: Vec<Point>) -> Self {
        Self {
            bbox,
            landmarks,
            score: None,
        }
    }

    /// Check landmark count and box size.
    pub fn validate(&self, expected_landmarks: usize) -> Result<()> {
        if self.landmarks.len() != expected_landmarks {
            return Err(InvalidInput::LandmarkCount {
                expected: expected_landmarks,
                actual: self.landmarks.len(),
            }
            .into());
        }
        if !self.bbox.is_valid() {
            return Err(InvalidInput::NonPositiveBox {
                width: self.bbox.width,
                height: self.bbox.height,
            }
            .into());
        }
        Ok(())
    }
}
