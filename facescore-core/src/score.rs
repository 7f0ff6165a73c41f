//! The proportion scorer: three sub-scores and their mean.
//!
//! None of the sub-scores are clamped. `score1` goes negative once the
//! height/width ratio passes 3.2 and `score3` has no upper bound when the eyes
//! sit close together. Callers that need a bounded display value can check
//! [`ScoreResult::is_within_nominal_range`] and clamp themselves.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{DegenerateGeometry, Result};
use crate::landmarks::LandmarkScheme;
use crate::measure::Measurement;
use crate::types::FaceDetection;

pub const GOLDEN_RATIO: f64 = 1.6;
pub const MAX_SCORE: f64 = 10.0;

/// Score 1: face height/width ratio against [`GOLDEN_RATIO`].
///
/// Triangular with its peak of 10 at 1.6, falling linearly by the same slope
/// on both sides. Reaches 0 at a ratio of 0 and at 3.2, negative beyond.
pub fn golden_ratio_score(ratio: f64) -> f64 {
    if ratio <= GOLDEN_RATIO {
        ratio / GOLDEN_RATIO * MAX_SCORE
    } else {
        (GOLDEN_RATIO - (ratio - GOLDEN_RATIO)) / GOLDEN_RATIO * MAX_SCORE
    }
}

/// Score 2: how equal the three vertical facial thirds are.
///
/// 10 when all thirds match, 0 when the smallest one is zero. A NaN third
/// gives a NaN score.
pub fn thirds_score(thirds: [f64; 3]) -> Result<f64> {
    if thirds.iter().any(|t| t.is_nan()) {
        return Ok(f64::NAN);
    }
    let max = thirds.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = thirds.iter().copied().fold(f64::INFINITY, f64::min);
    if max <= 0.0 {
        return Err(DegenerateGeometry::NonPositiveThirds { max }.into());
    }
    let spread = max - min;
    Ok((max - spread) / max * MAX_SCORE)
}

/// Score 3: average eye width over the gap between the eyes.
///
/// 10 when the gap is exactly one eye wide.
pub fn eye_spacing_score(eye_width: f64, eye_gap: f64) -> Result<f64> {
    if eye_gap <= 0.0 {
        return Err(DegenerateGeometry::NonPositiveEyeGap { eye_gap }.into());
    }
    Ok(eye_width / eye_gap * MAX_SCORE)
}

/// Scores for a single face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score1: f64,
    pub score2: f64,
    pub score3: f64,
    /// Unrounded mean of the three sub-scores
    pub overall: f64,
    pub measurements: Measurement,
}

impl ScoreResult {
    pub fn new(score1: f64, score2: f64, score3: f64, measurements: Measurement) -> Self {
        Self {
            score1,
            score2,
            score3,
            overall: (score1 + score2 + score3) / 3.0,
            measurements,
        }
    }

    pub fn sub_scores(&self) -> [f64; 3] {
        [self.score1, self.score2, self.score3]
    }

    /// `overall` rounded to two decimals, half away from zero.
    pub fn overall_rounded(&self) -> f64 {
        (self.overall * 100.0).round() / 100.0
    }

    /// `overall` formatted with exactly two decimals, e.g. `"7.33"`.
    pub fn overall_display(&self) -> String {
        format!("{:.2}", self.overall_rounded())
    }

    pub fn is_within_nominal_range(&self) -> bool {
        self.sub_scores()
            .iter()
            .all(|s| (0.0..=MAX_SCORE).contains(s))
    }
}

/// Outcome for one face of a multi-face image, tagged with its input position.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceScore {
    pub index: usize,
    pub result: Result<ScoreResult>,
}

/// Scores detections against a landmark scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionScorer {
    scheme: LandmarkScheme,
}

impl ProportionScorer {
    pub fn new(scheme: LandmarkScheme) -> Result<Self> {
        scheme.validate()?;
        Ok(Self { scheme })
    }

    pub fn scheme(&self) -> &LandmarkScheme {
        &self.scheme
    }

    /// Score one face.
    ///
    /// Fails with [`ScoreError::InvalidInput`](crate::ScoreError::InvalidInput) for a wrong landmark count or a
    /// non-positive box, and with [`ScoreError::DegenerateGeometry`](crate::ScoreError::DegenerateGeometry) when the
    /// eye gap or the largest facial third is not positive.
    pub fn score(&self, face: &FaceDetection) -> Result<ScoreResult> {
        let m = Measurement::from_detection(face, &self.scheme)?;
        debug!("measurements: {:?}", m);

        let score3 = eye_spacing_score(m.eye_width, m.eye_gap)?;
        let score2 = thirds_score(m.thirds())?;
        let score1 = golden_ratio_score(m.height_to_width);

        let result = ScoreResult::new(score1, score2, score3, m);
        if !result.is_within_nominal_range() {
            debug!(
                "sub-scores outside 0-10: {:.3} {:.3} {:.3}",
                score1, score2, score3
            );
        }
        Ok(result)
    }

    /// Score every face independently, keeping input order.
    ///
    /// A failing face yields an error entry and does not affect the others.
    pub fn score_all(&self, faces: &[FaceDetection]) -> Vec<FaceScore> {
        faces
            .iter()
            .enumerate()
            .map(|(index, face)| FaceScore {
                index,
                result: self.score(face),
            })
            .collect()
    }
}

/// Score one face with the 68-point iBUG scheme.
pub fn score(face: &FaceDetection) -> Result<ScoreResult> {
    ProportionScorer::default().score(face)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn golden_ratio_peak_and_zeros() {
        assert_eq!(golden_ratio_score(1.6), 10.0);
        assert_eq!(golden_ratio_score(0.0), 0.0);
        assert!(approx(golden_ratio_score(3.2), 0.0));
        assert!(approx(golden_ratio_score(0.8), 5.0));
        assert!(approx(golden_ratio_score(2.4), 5.0));
    }

    #[test]
    fn golden_ratio_goes_negative_past_twice_the_ratio() {
        assert!(approx(golden_ratio_score(4.0), -5.0));
    }

    #[test]
    fn thirds_equal_is_ten() {
        assert_eq!(thirds_score([30.0, 30.0, 30.0]).unwrap(), 10.0);
    }

    #[test]
    fn thirds_is_min_over_max() {
        assert!(approx(thirds_score([20.0, 40.0, 30.0]).unwrap(), 5.0));
        assert_eq!(thirds_score([0.0, 40.0, 30.0]).unwrap(), 0.0);
    }

    #[test]
    fn thirds_negative_segment_scores_below_zero() {
        // max stays positive, so this is scored rather than rejected
        assert!(thirds_score([-10.0, 40.0, 30.0]).unwrap() < 0.0);
    }

    #[test]
    fn thirds_non_positive_max_is_degenerate() {
        let err = thirds_score([0.0, -1.0, -5.0]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::DegenerateGeometry(DegenerateGeometry::NonPositiveThirds { max: 0.0 })
        );
    }

    #[test]
    fn thirds_nan_is_not_skipped() {
        assert!(thirds_score([30.0, f64::NAN, 30.0]).unwrap().is_nan());
        assert!(thirds_score([f64::NAN; 3]).unwrap().is_nan());
    }

    #[test]
    fn eye_spacing() {
        assert_eq!(eye_spacing_score(20.0, 20.0).unwrap(), 10.0);
        assert_eq!(eye_spacing_score(40.0, 10.0).unwrap(), 40.0);
        assert!(eye_spacing_score(20.0, 0.0).unwrap_err().is_degenerate());
        assert!(eye_spacing_score(20.0, -4.0).unwrap_err().is_degenerate());
    }

    #[test]
    fn overall_display_rounds_to_two_decimals() {
        let m = Measurement {
            height_to_width: 1.6,
            forehead_to_eyes: 1.0,
            eyes_to_nose: 1.0,
            nose_to_chin: 1.0,
            eye_width: 1.0,
            eye_gap: 1.0,
        };
        let result = ScoreResult::new(10.0, 10.0, 2.0, m);
        assert!(approx(result.overall, 22.0 / 3.0));
        assert_eq!(result.overall_rounded(), 7.33);
        assert_eq!(result.overall_display(), "7.33");
        assert!(result.is_within_nominal_range());

        let result = ScoreResult::new(10.0, 10.0, 12.5, m);
        assert!(!result.is_within_nominal_range());
    }
}
