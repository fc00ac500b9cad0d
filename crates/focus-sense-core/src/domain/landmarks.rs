//! Facial landmark types and the mesh index contract.
//!
//! Landmarks are produced upstream by a facial-mesh detector and
//! consumed here as plain indexed 2D/3D points. The detector itself is
//! out of scope; any provider that emits points keyed by the standard
//! 468-point mesh topology can feed this crate.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fixed landmark indices of the 468-point facial-mesh topology.
///
/// Per eye: outer corner, two upper-lid points, inner corner, two
/// lower-lid points. The nose bridge/tip pair drives the head-pose
/// check.
pub mod mesh {
    /// Left eye: `[outer, upper_a, upper_b, inner, lower_b, lower_a]`.
    pub const LEFT_EYE: [u32; 6] = [33, 160, 158, 133, 153, 144];
    /// Right eye: `[outer, upper_a, upper_b, inner, lower_b, lower_a]`.
    pub const RIGHT_EYE: [u32; 6] = [362, 385, 387, 263, 373, 380];
    /// Nose bridge.
    pub const NOSE_BRIDGE: u32 = 168;
    /// Nose tip.
    pub const NOSE_TIP: u32 = 1;
}

/// A single facial keypoint. Coordinates are in the provider's frame
/// space; `z` is depth when the provider supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
    /// Depth, if the provider emits 3D points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f32>,
}

impl Landmark {
    /// Creates a 2D landmark.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None }
    }

    /// Creates a 3D landmark.
    #[must_use]
    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Euclidean distance to another landmark in the image plane.
    #[must_use]
    pub fn plane_distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// Wire form of one keypoint: the mesh index plus its position.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LandmarkEntry {
    index: u32,
    x: f32,
    y: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    z: Option<f32>,
}

/// One detected face's keypoints, keyed by mesh index.
///
/// Read-only input to the classifier; lookups for indices the provider
/// did not emit return `None` and are absorbed by documented defaults
/// downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<LandmarkEntry>", into = "Vec<LandmarkEntry>")]
pub struct LandmarkSet {
    points: HashMap<u32, Landmark>,
}

impl LandmarkSet {
    /// Creates an empty landmark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the landmark at `index`.
    pub fn insert(&mut self, index: u32, landmark: Landmark) {
        self.points.insert(index, landmark);
    }

    /// Removes the landmark at `index`, if present.
    pub fn remove(&mut self, index: u32) -> Option<Landmark> {
        self.points.remove(&index)
    }

    /// Looks up the landmark at `index`.
    #[must_use]
    pub fn get(&self, index: u32) -> Option<&Landmark> {
        self.points.get(&index)
    }

    /// Number of keypoints present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no keypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(u32, Landmark)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (u32, Landmark)>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<LandmarkEntry>> for LandmarkSet {
    fn from(entries: Vec<LandmarkEntry>) -> Self {
        entries
            .into_iter()
            .map(|e| (e.index, Landmark { x: e.x, y: e.y, z: e.z }))
            .collect()
    }
}

impl From<LandmarkSet> for Vec<LandmarkEntry> {
    fn from(set: LandmarkSet) -> Self {
        let mut entries: Self = set
            .points
            .into_iter()
            .map(|(index, lm)| LandmarkEntry {
                index,
                x: lm.x,
                y: lm.y,
                z: lm.z,
            })
            .collect();
        // Stable wire order regardless of map iteration order
        entries.sort_by_key(|e| e.index);
        entries
    }
}

/// One sampled video frame's detections: zero, one, or many faces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frame {
    /// Capture time in milliseconds, when the recorder kept it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<f64>,
    /// Landmark sets for every detected face.
    #[serde(default)]
    pub faces: Vec<LandmarkSet>,
}

impl Frame {
    /// Creates a frame with the given faces and no timestamp.
    #[must_use]
    pub fn new(faces: Vec<LandmarkSet>) -> Self {
        Self {
            timestamp_ms: None,
            faces,
        }
    }

    /// Creates a frame containing a single face.
    #[must_use]
    pub fn single(face: LandmarkSet) -> Self {
        Self::new(vec![face])
    }
}

/// An ordered landmark-frame stream loaded from disk, the offline
/// analogue of one monitoring session.
#[derive(Debug, Clone)]
pub struct Recording {
    /// Source path (or synthetic identifier in tests).
    pub path: String,
    /// Frames in capture order.
    pub frames: Vec<Frame>,
}

impl Recording {
    /// Creates a recording from in-memory frames.
    #[must_use]
    pub fn new(path: impl Into<String>, frames: Vec<Frame>) -> Self {
        Self {
            path: path.into(),
            frames,
        }
    }
}
