use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::landmarks::LandmarkScheme;
use crate::types::FaceDetection;

/// Distances derived from one detection, in pixels unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Box height over box width (unitless)
    pub height_to_width: f64,
    /// Top of the box down to the mean eye line
    pub forehead_to_eyes: f64,
    /// Mean eye line down to the nose tip
    pub eyes_to_nose: f64,
    /// Nose tip down to the bottom of the chin
    pub nose_to_chin: f64,
    /// Mean horizontal width of the two eyes
    pub eye_width: f64,
    /// Horizontal gap between the inner eye corners
    pub eye_gap: f64,
}

impl Measurement {
    pub fn from_detection(face: &FaceDetection, scheme: &LandmarkScheme) -> Result<Self> {
        scheme.validate()?;
        face.validate(scheme.count)?;

        let lm = &face.landmarks;
        let eyes = &lm[scheme.eye_range()];
        let eye_line_y = eyes.iter().map(|p| p.y).sum::<f64>() / eyes.len() as f64;

        let nose_y = lm[scheme.nose_tip].y;
        let chin_y = lm[scheme.chin].y;

        let left_eye_width = lm[scheme.left_eye_inner].x - lm[scheme.left_eye_outer].x;
        let right_eye_width = lm[scheme.right_eye_outer].x - lm[scheme.right_eye_inner].x;

        Ok(Self {
            height_to_width: face.bbox.aspect_ratio(),
            forehead_to_eyes: eye_line_y - face.bbox.y,
            eyes_to_nose: nose_y - eye_line_y,
            nose_to_chin: chin_y - nose_y,
            eye_width: (left_eye_width + right_eye_width) / 2.0,
            eye_gap: lm[scheme.right_eye_inner].x - lm[scheme.left_eye_inner].x,
        })
    }

    /// The three vertical thirds, top to bottom.
    pub fn thirds(&self) -> [f64; 3] {
        [self.forehead_to_eyes, self.eyes_to_nose, self.nose_to_chin]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, Point};

    #[test]
    fn eye_line_is_mean_of_all_contour_points() {
        let mut landmarks = vec![Point::zero(); 68];
        // Six points at y=20 and six at y=40 average to 30
        for (i, p) in landmarks[36..=47].iter_mut().enumerate() {
            p.y = if i % 2 == 0 { 20.0 } else { 40.0 };
        }
        landmarks[33].y = 55.0;
        landmarks[8].y = 95.0;
        landmarks[36].x = 10.0;
        landmarks[39].x = 30.0;
        landmarks[42].x = 50.0;
        landmarks[45].x = 80.0;

        let face = FaceDetection::new(BoundingBox::new(0.0, 5.0, 100.0, 150.0), landmarks);
        let m = Measurement::from_detection(&face, &LandmarkScheme::IBUG_68).unwrap();

        assert!((m.height_to_width - 1.5).abs() < 1e-12);
        assert_eq!(m.forehead_to_eyes, 25.0);
        assert_eq!(m.eyes_to_nose, 25.0);
        assert_eq!(m.nose_to_chin, 40.0);
        assert_eq!(m.eye_width, 25.0);
        assert_eq!(m.eye_gap, 20.0);
        assert_eq!(m.thirds(), [25.0, 25.0, 40.0]);
    }

    #[test]
    fn rejects_short_landmark_list() {
        let face = FaceDetection::new(
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            vec![Point::zero(); 5],
        );
        let err = Measurement::from_detection(&face, &LandmarkScheme::IBUG_68).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
