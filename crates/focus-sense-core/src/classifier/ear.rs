//! Eye aspect ratio computation.
//!
//! EAR is the mean vertical eyelid separation over the horizontal
//! eye-corner distance. An open eye sits near 0.3; the ratio drops
//! toward 0 as the lid closes.

use crate::domain::{mesh, EyeMetrics, LandmarkSet};

/// EAR reported for an open eye when the geometry cannot be measured.
pub const OPEN_EYE_EAR: f32 = 0.3;

/// Landmark layout of one eye within the mesh topology.
struct EyeIndices {
    outer_corner: u32,
    inner_corner: u32,
    lid_pairs: [(u32, u32); 2],
}

impl EyeIndices {
    /// Builds the layout from a `[outer, upper_a, upper_b, inner,
    /// lower_b, lower_a]` index array, pairing each upper-lid point
    /// with the lower-lid point beneath it.
    const fn from_mesh(indices: [u32; 6]) -> Self {
        Self {
            outer_corner: indices[0],
            inner_corner: indices[3],
            lid_pairs: [(indices[1], indices[5]), (indices[2], indices[4])],
        }
    }
}

const LEFT: EyeIndices = EyeIndices::from_mesh(mesh::LEFT_EYE);
const RIGHT: EyeIndices = EyeIndices::from_mesh(mesh::RIGHT_EYE);

/// Computes the aspect ratio of one eye.
///
/// Missing landmarks or a degenerate (zero) corner distance yield
/// [`OPEN_EYE_EAR`] rather than an error or a non-finite value: a
/// single malformed frame should not disturb the windowed signal.
fn eye_aspect_ratio(face: &LandmarkSet, eye: &EyeIndices) -> f32 {
    let (Some(outer), Some(inner)) = (face.get(eye.outer_corner), face.get(eye.inner_corner))
    else {
        return OPEN_EYE_EAR;
    };

    let horizontal = outer.plane_distance(inner);
    if horizontal <= f32::EPSILON {
        return OPEN_EYE_EAR;
    }

    let mut vertical_sum = 0.0;
    for (upper, lower) in &eye.lid_pairs {
        let (Some(top), Some(bottom)) = (face.get(*upper), face.get(*lower)) else {
            return OPEN_EYE_EAR;
        };
        vertical_sum += top.plane_distance(bottom);
    }

    #[allow(clippy::cast_precision_loss)]
    let vertical_mean = vertical_sum / eye.lid_pairs.len() as f32;

    vertical_mean / horizontal
}

/// Computes both eyes' aspect ratios and their mean for one face.
#[must_use]
pub fn eye_metrics(face: &LandmarkSet) -> EyeMetrics {
    EyeMetrics::from_eyes(
        eye_aspect_ratio(face, &LEFT),
        eye_aspect_ratio(face, &RIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Landmark;

    /// Builds a left eye with the given vertical lid separation and
    /// horizontal corner distance.
    fn left_eye_face(vertical: f32, horizontal: f32) -> LandmarkSet {
        let [outer, upper_a, upper_b, inner, lower_b, lower_a] = mesh::LEFT_EYE;
        let mut face = LandmarkSet::new();
        face.insert(outer, Landmark::new(0.0, 0.0));
        face.insert(inner, Landmark::new(horizontal, 0.0));
        for (upper, lower, x) in [(upper_a, lower_a, 0.3), (upper_b, lower_b, 0.7)] {
            face.insert(upper, Landmark::new(x * horizontal, -vertical / 2.0));
            face.insert(lower, Landmark::new(x * horizontal, vertical / 2.0));
        }
        face
    }

    #[test]
    fn test_open_eye_ratio() {
        let face = left_eye_face(0.3, 1.0);
        let ear = eye_aspect_ratio(&face, &LEFT);
        assert!((ear - 0.3).abs() < 1e-6, "got {ear}");
    }

    #[test]
    fn test_closed_eye_ratio() {
        let face = left_eye_face(0.0, 1.0);
        let ear = eye_aspect_ratio(&face, &LEFT);
        assert!(ear.abs() < 1e-6, "got {ear}");
    }

    #[test]
    fn test_zero_corner_distance_defaults_open() {
        // Both corners at the same point: horizontal distance is zero.
        let face = left_eye_face(0.3, 0.0);
        let ear = eye_aspect_ratio(&face, &LEFT);
        assert!(ear.is_finite());
        assert!((ear - OPEN_EYE_EAR).abs() < f32::EPSILON);
    }

    #[test]
    fn test_missing_landmarks_default_open() {
        let ear = eye_aspect_ratio(&LandmarkSet::new(), &LEFT);
        assert!((ear - OPEN_EYE_EAR).abs() < f32::EPSILON);
    }

    #[test]
    fn test_metrics_average_missing_right_eye() {
        // Left eye closed, right eye absent (defaults open at 0.3).
        let face = left_eye_face(0.0, 1.0);
        let metrics = eye_metrics(&face);

        assert!(metrics.left_ear.abs() < 1e-6);
        assert!((metrics.right_ear - OPEN_EYE_EAR).abs() < f32::EPSILON);
        assert!((metrics.average_ear - 0.15).abs() < 1e-6);
    }
}
