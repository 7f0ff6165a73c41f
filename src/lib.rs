pub mod config;
pub mod input;
pub mod report;

// Re-export core types for convenience
pub use facescore_core::{FaceDetection, FaceScore, ProportionScorer, ScoreError, ScoreResult};
