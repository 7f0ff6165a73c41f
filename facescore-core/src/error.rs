use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] DegenerateGeometry),

    #[error("invalid landmark scheme: {0}")]
    InvalidScheme(String),
}

/// Malformed detection record. The detection should be discarded or re-run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("expected {expected} landmarks, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    #[error("bounding box must have positive size, got {width}x{height}")]
    NonPositiveBox { width: f64, height: f64 },
}

/// A scoring denominator derived from the landmarks is not positive.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DegenerateGeometry {
    #[error("distance between the eyes is not positive ({eye_gap})")]
    NonPositiveEyeGap { eye_gap: f64 },

    #[error("largest facial third is not positive ({max})")]
    NonPositiveThirds { max: f64 },
}

impl ScoreError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ScoreError::InvalidInput(_))
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, ScoreError::DegenerateGeometry(_))
    }
}

pub type Result<T> = std::result::Result<T, ScoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_reasons() {
        let err: ScoreError = InvalidInput::LandmarkCount {
            expected: 68,
            actual: 5,
        }
        .into();
        assert!(err.is_invalid_input());
        assert!(!err.is_degenerate());
        assert_eq!(
            err.to_string(),
            "invalid input: expected 68 landmarks, got 5"
        );

        let err: ScoreError = DegenerateGeometry::NonPositiveEyeGap { eye_gap: -2.0 }.into();
        assert!(err.is_degenerate());
        assert_eq!(
            err.to_string(),
            "degenerate geometry: distance between the eyes is not positive (-2)"
        );
    }
}
