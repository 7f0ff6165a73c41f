use std::fmt::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use facescore_core::{FaceScore, ScoreResult, MAX_SCORE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// One JSON entry per face, in input order.
#[derive(Debug, Serialize)]
struct FaceEntry<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<&'a ScoreResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render(scores: &[FaceScore], format: OutputFormat, clamp_display: bool) -> Result<String> {
    match format {
        OutputFormat::Text => render_text(scores, clamp_display),
        OutputFormat::Json => render_json(scores),
    }
}

/// Clamping only affects what is printed.
fn display_score(score: f64, clamp: bool) -> f64 {
    if clamp {
        score.clamp(0.0, MAX_SCORE)
    } else {
        score
    }
}

pub fn render_text(scores: &[FaceScore], clamp_display: bool) -> Result<String> {
    if scores.is_empty() {
        return Ok("No face detected\n".to_string());
    }

    let mut out = String::new();
    for face in scores {
        write_face(&mut out, face, clamp_display)?;
    }
    Ok(out)
}

fn write_face(out: &mut String, face: &FaceScore, clamp: bool) -> fmt::Result {
    let label = face.index + 1;
    let r = match &face.result {
        Ok(r) => r,
        Err(e) => return writeln!(out, "Face #{}: {}", label, e),
    };
    let m = &r.measurements;

    writeln!(out, "Face #{}", label)?;
    writeln!(
        out,
        "  golden ratio  (height/width {:.2}):        {:>6.2}",
        m.height_to_width,
        display_score(r.score1, clamp)
    )?;
    writeln!(
        out,
        "  facial thirds ({:.1} / {:.1} / {:.1}):  {:>6.2}",
        m.forehead_to_eyes,
        m.eyes_to_nose,
        m.nose_to_chin,
        display_score(r.score2, clamp)
    )?;
    writeln!(
        out,
        "  eye spacing   (width {:.1}, gap {:.1}):   {:>6.2}",
        m.eye_width,
        m.eye_gap,
        display_score(r.score3, clamp)
    )?;
    writeln!(out, "  overall: {}", r.overall_display())
}

pub fn render_json(scores: &[FaceScore]) -> Result<String> {
    let entries: Vec<FaceEntry> = scores
        .iter()
        .map(|face| match &face.result {
            Ok(r) => FaceEntry {
                index: face.index,
                result: Some(r),
                error: None,
            },
            Err(e) => FaceEntry {
                index: face.index,
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facescore_core::{DegenerateGeometry, Measurement};

    fn measurement() -> Measurement {
        Measurement {
            height_to_width: 4.0,
            forehead_to_eyes: 30.0,
            eyes_to_nose: 30.0,
            nose_to_chin: 30.0,
            eye_width: 20.0,
            eye_gap: 20.0,
        }
    }

    fn scores() -> Vec<FaceScore> {
        vec![
            FaceScore {
                index: 0,
                result: Ok(ScoreResult::new(-5.0, 10.0, 10.0, measurement())),
            },
            FaceScore {
                index: 1,
                result: Err(DegenerateGeometry::NonPositiveEyeGap { eye_gap: 0.0 }.into()),
            },
        ]
    }

    #[test]
    fn text_lists_every_face() -> Result<()> {
        let text = render_text(&scores(), false)?;
        assert!(text.contains("Face #1\n"));
        assert!(text.contains(" -5.00"));
        assert!(text.contains("overall: 5.00"));
        assert!(text.contains("Face #2: degenerate geometry"));
        Ok(())
    }

    #[test]
    fn clamping_is_display_only() -> Result<()> {
        let scores = scores();
        let text = render_text(&scores, true)?;
        assert!(!text.contains("-5.00"));
        assert!(text.contains("  0.00"));
        // overall still reflects the unclamped mean
        assert!(text.contains("overall: 5.00"));
        assert_eq!(scores[0].result.as_ref().unwrap().score1, -5.0);
        Ok(())
    }

    #[test]
    fn no_faces() -> Result<()> {
        assert_eq!(render_text(&[], false)?, "No face detected\n");
        assert_eq!(render_json(&[])?, "[]");
        Ok(())
    }

    #[test]
    fn text_output_goes_through_render() -> Result<()> {
        let text = render(&scores(), OutputFormat::Text, false)?;
        assert_eq!(text, render_text(&scores(), false)?);
        assert_eq!(text.lines().count(), 6);
        Ok(())
    }

    #[test]
    fn json_entries_carry_index() -> Result<()> {
        let json: serde_json::Value = serde_json::from_str(&render_json(&scores())?)?;
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["index"], 0);
        assert_eq!(entries[0]["result"]["score1"], -5.0);
        assert!(entries[0].get("error").is_none());
        assert_eq!(entries[1]["index"], 1);
        assert!(entries[1]["error"]
            .as_str()
            .unwrap()
            .starts_with("degenerate geometry"));
        Ok(())
    }
}
