//! Synthetic landmark fixture builders for testing.

use focus_sense_core::domain::{mesh, Frame, Landmark, LandmarkSet, Recording};

/// Builder for creating synthetic landmark fixtures.
///
/// Provides convenience methods for generating faces with specific
/// characteristics (exact eye openness, averted gaze, degenerate
/// geometry, etc.).
pub struct SyntheticFaceBuilder;

impl SyntheticFaceBuilder {
    // === Single Faces ===

    /// Creates a face whose two eyes both measure exactly `ear`.
    ///
    /// Eye corners are one unit apart, lid pairs centered between
    /// them; head pose is forward (looking at screen).
    #[must_use]
    pub fn face_with_ear(ear: f32) -> LandmarkSet {
        let mut face = Self::eyes_only(ear);
        Self::add_nose(&mut face, -0.01);
        face
    }

    /// Creates an open-eyed, forward-looking face (EAR 0.3).
    #[must_use]
    pub fn open_face() -> LandmarkSet {
        Self::face_with_ear(0.3)
    }

    /// Creates a closed-eyed, forward-looking face (EAR 0.05).
    #[must_use]
    pub fn closed_face() -> LandmarkSet {
        Self::face_with_ear(0.05)
    }

    /// Creates a face with the given eye openness turned away from
    /// the screen (nose depth component dominating the vertical).
    #[must_use]
    pub fn averted_face(ear: f32) -> LandmarkSet {
        let mut face = Self::eyes_only(ear);
        Self::add_nose(&mut face, -0.2);
        face
    }

    /// Creates a face whose eye corners coincide (zero horizontal
    /// distance), exercising the degenerate-geometry default.
    #[must_use]
    pub fn degenerate_eye_face() -> LandmarkSet {
        let mut face = LandmarkSet::new();
        for indices in [mesh::LEFT_EYE, mesh::RIGHT_EYE] {
            for index in indices {
                face.insert(index, Landmark::new(0.5, 0.5));
            }
        }
        Self::add_nose(&mut face, -0.01);
        face
    }

    /// Creates a face missing its nose landmarks (pose check falls
    /// back to looking-at-screen).
    #[must_use]
    pub fn noseless_face(ear: f32) -> LandmarkSet {
        Self::eyes_only(ear)
    }

    fn eyes_only(ear: f32) -> LandmarkSet {
        let mut face = LandmarkSet::new();
        for indices in [mesh::LEFT_EYE, mesh::RIGHT_EYE] {
            let [outer, upper_a, upper_b, inner, lower_b, lower_a] = indices;
            face.insert(outer, Landmark::new(0.0, 0.0));
            face.insert(inner, Landmark::new(1.0, 0.0));
            for (upper, lower, x) in [(upper_a, lower_a, 0.3), (upper_b, lower_b, 0.7)] {
                face.insert(upper, Landmark::new(x, -ear / 2.0));
                face.insert(lower, Landmark::new(x, ear / 2.0));
            }
        }
        face
    }

    fn add_nose(face: &mut LandmarkSet, tip_z: f32) {
        face.insert(mesh::NOSE_BRIDGE, Landmark::with_depth(0.5, 0.4, 0.0));
        face.insert(mesh::NOSE_TIP, Landmark::with_depth(0.5, 0.5, tip_z));
    }

    // === Frames ===

    /// Frame containing no faces.
    #[must_use]
    pub fn faceless_frame() -> Frame {
        Frame::new(vec![])
    }

    /// Frame containing two faces (classification must be skipped).
    #[must_use]
    pub fn crowd_frame() -> Frame {
        Frame::new(vec![Self::open_face(), Self::open_face()])
    }

    // === Recordings ===

    /// Recording of `frames` identical open-eyed, forward-looking
    /// frames: dominates focused once past warm-up.
    #[must_use]
    pub fn steady_recording(name: &str, frames: usize) -> Recording {
        let frames = (0..frames)
            .map(|_| Frame::single(Self::open_face()))
            .collect();
        Recording::new(format!("synthetic://{name}"), frames)
    }

    /// Recording alternating open frames with shallow lid dips (EAR
    /// 0.2): each dip crosses the blink threshold without entering the
    /// drowsy band, so a long run drives the rate into the stressed
    /// band while the eyes read open.
    #[must_use]
    pub fn rapid_blink_recording(name: &str, frames: usize) -> Recording {
        let frames = (0..frames)
            .map(|i| {
                if i % 2 == 0 {
                    Frame::single(Self::open_face())
                } else {
                    Frame::single(Self::face_with_ear(0.2))
                }
            })
            .collect();
        Recording::new(format!("synthetic://{name}"), frames)
    }

    /// Recording with no faces in any frame.
    #[must_use]
    pub fn faceless_recording(name: &str, frames: usize) -> Recording {
        let frames = (0..frames).map(|_| Self::faceless_frame()).collect();
        Recording::new(format!("synthetic://{name}"), frames)
    }

    /// Serializes a recording to its JSON Lines wire form.
    ///
    /// # Panics
    ///
    /// Panics if a frame fails to serialize; synthetic fixtures never
    /// do.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn to_jsonl(recording: &Recording) -> String {
        recording
            .frames
            .iter()
            .map(|f| serde_json::to_string(f).unwrap())
            .fold(String::new(), |mut acc, line| {
                acc.push_str(&line);
                acc.push('\n');
                acc
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use focus_sense_core::classifier::{eye_metrics, is_looking_at_screen};

    #[test]
    fn test_face_with_ear_is_exact() {
        for target in [0.1, 0.21, 0.3] {
            let metrics = eye_metrics(&SyntheticFaceBuilder::face_with_ear(target));
            assert!(
                (metrics.average_ear - target).abs() < 1e-5,
                "target {target} got {}",
                metrics.average_ear
            );
        }
    }

    #[test]
    fn test_averted_face_fails_gaze_check() {
        let face = SyntheticFaceBuilder::averted_face(0.3);
        assert!(!is_looking_at_screen(&face, 0.5));

        let forward = SyntheticFaceBuilder::open_face();
        assert!(is_looking_at_screen(&forward, 0.5));
    }

    #[test]
    fn test_degenerate_face_defaults_open() {
        let metrics = eye_metrics(&SyntheticFaceBuilder::degenerate_eye_face());
        assert!((metrics.average_ear - 0.3).abs() < f32::EPSILON);
    }

    #[test]
    fn test_recording_shapes() {
        let steady = SyntheticFaceBuilder::steady_recording("a", 7);
        assert_eq!(steady.frames.len(), 7);
        assert_eq!(steady.path, "synthetic://a");

        let crowd = SyntheticFaceBuilder::crowd_frame();
        assert_eq!(crowd.faces.len(), 2);
    }

    #[test]
    fn test_jsonl_roundtrip() {
        let recording = SyntheticFaceBuilder::steady_recording("wire", 3);
        let jsonl = SyntheticFaceBuilder::to_jsonl(&recording);

        assert_eq!(jsonl.lines().count(), 3);
        for line in jsonl.lines() {
            let frame: Frame = serde_json::from_str(line).unwrap();
            assert_eq!(frame.faces.len(), 1);
        }
    }
}
