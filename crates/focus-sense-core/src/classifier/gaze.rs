//! Coarse head-pose screen-direction check.

use crate::domain::{mesh, LandmarkSet};

/// Judges whether the face is oriented toward the screen.
///
/// Compares the depth component of the nose bridge-to-tip vector
/// against its vertical component: a head turned away from the screen
/// tilts that vector out of the image plane. Missing landmarks, a
/// provider without depth, or a degenerate vertical span all default
/// to looking-at-screen, matching the open-eye default elsewhere.
#[must_use]
pub fn is_looking_at_screen(face: &LandmarkSet, max_depth_ratio: f32) -> bool {
    let (Some(bridge), Some(tip)) = (face.get(mesh::NOSE_BRIDGE), face.get(mesh::NOSE_TIP)) else {
        return true;
    };
    let (Some(bridge_z), Some(tip_z)) = (bridge.z, tip.z) else {
        return true;
    };

    let dy = (tip.y - bridge.y).abs();
    if dy <= f32::EPSILON {
        return true;
    }
    let dz = (tip_z - bridge_z).abs();

    dz / dy <= max_depth_ratio
}
