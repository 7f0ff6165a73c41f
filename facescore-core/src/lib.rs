//! Facial proportion scoring from 68-point landmark detections.
//!
//! A [`FaceDetection`] (bounding box plus 68 ordered landmarks, as produced by
//! an external detector) is turned into a [`ScoreResult`] holding three
//! sub-scores on a nominal 0-10 scale and their mean:
//!
//! 1. face height/width ratio against the golden ratio (1.6),
//! 2. equality of the three vertical facial thirds,
//! 3. eye width against the gap between the eyes.
//!
//! ```rust
//! use facescore_core::{BoundingBox, FaceDetection, Point, ProportionScorer};
//!
//! let mut landmarks = vec![Point::zero(); 68];
//! for p in &mut landmarks[36..=47] {
//!     p.y = 30.0;
//! }
//! landmarks[33].y = 60.0;
//! landmarks[8].y = 90.0;
//! landmarks[36].x = 0.0;
//! landmarks[39].x = 20.0;
//! landmarks[42].x = 40.0;
//! landmarks[45].x = 60.0;
//!
//! let face = FaceDetection::new(BoundingBox::new(0.0, 0.0, 100.0, 160.0), landmarks);
//! let result = ProportionScorer::default().score(&face).unwrap();
//! assert_eq!(result.overall_display(), "10.00");
//! ```

mod error;
pub mod landmarks;
mod measure;
mod score;
mod types;

// Re-export commonly used types
pub use error::{DegenerateGeometry, InvalidInput, Result, ScoreError};
pub use landmarks::{LandmarkScheme, LANDMARK_COUNT};
pub use measure::Measurement;
pub use score::{
    eye_spacing_score, golden_ratio_score, score, thirds_score, FaceScore, ProportionScorer,
    ScoreResult, GOLDEN_RATIO, MAX_SCORE,
};
pub use types::{BoundingBox, FaceDetection, Point};
