//! Named indices into the 68-point iBUG landmark layout.
//!
//! Left/right are image-left and image-right, so `LEFT_EYE_*` is the eye that
//! appears on the left side of the picture.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

pub const LANDMARK_COUNT: usize = 68;

/// Bottom of the chin
pub const CHIN: usize = 8;
pub const NOSE_TIP: usize = 33;

pub const LEFT_EYE_OUTER: usize = 36;
pub const LEFT_EYE_INNER: usize = 39;
pub const RIGHT_EYE_INNER: usize = 42;
pub const RIGHT_EYE_OUTER: usize = 45;

/// Both eye contours (six points each)
pub const EYES: RangeInclusive<usize> = 36..=47;

/// The landmark positions the scorer reads, for one detector layout.
///
/// [`LandmarkScheme::IBUG_68`] matches dlib and face-api.js style detectors.
/// Another detector can be supported by building a scheme with its own
/// indices; [`LandmarkScheme::validate`] checks it before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkScheme {
    pub count: usize,
    pub chin: usize,
    pub nose_tip: usize,
    pub left_eye_outer: usize,
    pub left_eye_inner: usize,
    pub right_eye_inner: usize,
    pub right_eye_outer: usize,
    /// First and last index (inclusive) of the eye contour points
    pub eyes: (usize, usize),
}

impl LandmarkScheme {
    pub const IBUG_68: LandmarkScheme = LandmarkScheme {
        count: LANDMARK_COUNT,
        chin: CHIN,
        nose_tip: NOSE_TIP,
        left_eye_outer: LEFT_EYE_OUTER,
        left_eye_inner: LEFT_EYE_INNER,
        right_eye_inner: RIGHT_EYE_INNER,
        right_eye_outer: RIGHT_EYE_OUTER,
        eyes: (*EYES.start(), *EYES.end()),
    };

    pub fn eye_range(&self) -> RangeInclusive<usize> {
        self.eyes.0..=self.eyes.1
    }

    pub fn validate(&self) -> Result<()> {
        let named = [
            ("chin", self.chin),
            ("nose tip", self.nose_tip),
            ("left eye outer", self.left_eye_outer),
            ("left eye inner", self.left_eye_inner),
            ("right eye inner", self.right_eye_inner),
            ("right eye outer", self.right_eye_outer),
            ("eye range end", self.eyes.1),
        ];
        for (name, idx) in named {
            if idx >= self.count {
                return Err(ScoreError::InvalidScheme(format!(
                    "{} index {} out of range for {} landmarks",
                    name, idx, self.count
                )));
            }
        }
        if self.eyes.0 > self.eyes.1 {
            return Err(ScoreError::InvalidScheme(format!(
                "empty eye range {}..={}",
                self.eyes.0, self.eyes.1
            )));
        }
        Ok(())
    }
}

impl Default for LandmarkScheme {
    fn default() -> Self {
        Self::IBUG_68
    }
}
