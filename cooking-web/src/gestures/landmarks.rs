//! Hand landmark snapshot (MediaPipe hand model, 21 points)
//!
//! Coordinates are normalized to the video frame: x grows to the right,
//! y grows downwards. z is carried through but never used for distances.

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_MCP: usize = 2;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_TIP: usize = 20;

/// (tip, base) pairs for thumb, index, middle, ring, pinky
pub(crate) const FINGER_PAIRS: [(usize, usize); 5] = [
    (THUMB_TIP, THUMB_MCP),
    (INDEX_TIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_MCP),
    (RING_TIP, RING_MCP),
    (PINKY_TIP, PINKY_MCP),
];

/// Fingertips other than the thumb
pub(crate) const NON_THUMB_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandLandmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl HandLandmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Planar Euclidean distance
    pub fn distance(&self, other: &HandLandmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One detected hand. Always holds exactly 21 points; a missing hand is
/// represented by `None` at the call site, never by a zeroed snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct HandSnapshot {
    points: [HandLandmark; LANDMARK_COUNT],
}

impl HandSnapshot {
    /// Build from a landmark list. Fewer than 21 points, or a NaN/infinite
    /// x or y, means "no hand"; anything past index 20 is ignored.
    pub fn from_points(points: &[HandLandmark]) -> Option<Self> {
        let points: [HandLandmark; LANDMARK_COUNT] =
            points.get(..LANDMARK_COUNT)?.try_into().ok()?;
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return None;
        }
        Some(Self { points })
    }

    /// Build from a flat `[x, y, z, x, y, z, ...]` (stride 3) or
    /// `[x, y, x, y, ...]` (stride 2) buffer.
    pub fn from_flat(flat: &[f32], stride: usize) -> Option<Self> {
        if !(2..=3).contains(&stride) || flat.len() < LANDMARK_COUNT * stride {
            return None;
        }

        let mut points = [HandLandmark::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            let base = i * stride;
            *point = HandLandmark {
                x: flat[base],
                y: flat[base + 1],
                z: if stride == 3 { flat[base + 2] } else { 0.0 },
            };
        }

        Self::from_points(&points)
    }

    pub fn point(&self, index: usize) -> HandLandmark {
        self.points[index]
    }

    pub fn points(&self) -> &[HandLandmark; LANDMARK_COUNT] {
        &self.points
    }

    /// Distance between two landmarks by index
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.points[a].distance(&self.points[b])
    }

    /// Midpoint of wrist and middle-finger base. Steadier than the raw
    /// wrist while the fingers move.
    pub fn center(&self) -> (f32, f32) {
        let wrist = self.points[WRIST];
        let middle = self.points[MIDDLE_MCP];
        ((wrist.x + middle.x) / 2.0, (wrist.y + middle.y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_is_no_hand() {
        let points = vec![HandLandmark::new(0.5, 0.5); 20];
        assert!(HandSnapshot::from_points(&points).is_none());
        assert!(HandSnapshot::from_flat(&[0.5; 62], 3).is_none());
    }

    #[test]
    fn test_extra_points_ignored() {
        let mut points = vec![HandLandmark::new(0.1, 0.2); 22];
        points[21] = HandLandmark::new(0.9, 0.9);
        let hand = HandSnapshot::from_points(&points).unwrap();
        assert_eq!(hand.points().len(), LANDMARK_COUNT);
        assert_eq!(hand.point(20), HandLandmark::new(0.1, 0.2));
    }

    #[test]
    fn test_from_flat_strides() {
        let mut flat = vec![0.0; 63];
        flat[WRIST * 3] = 0.4;
        flat[WRIST * 3 + 1] = 0.6;
        flat[WRIST * 3 + 2] = -0.1;
        let hand = HandSnapshot::from_flat(&flat, 3).unwrap();
        assert_eq!(hand.point(WRIST), HandLandmark { x: 0.4, y: 0.6, z: -0.1 });

        let flat2 = vec![0.25; 42];
        let hand = HandSnapshot::from_flat(&flat2, 2).unwrap();
        assert_eq!(hand.point(PINKY_TIP), HandLandmark::new(0.25, 0.25));

        assert!(HandSnapshot::from_flat(&flat, 4).is_none());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut flat = vec![0.5; 63];
        flat[10] = f32::NAN;
        assert!(HandSnapshot::from_flat(&flat, 3).is_none());
    }

    #[test]
    fn test_non_finite_points_rejected() {
        let mut points = vec![HandLandmark::new(0.5, 0.5); LANDMARK_COUNT];
        assert!(HandSnapshot::from_points(&points).is_some());
        points[THUMB_TIP].x = f32::NAN;
        assert!(HandSnapshot::from_points(&points).is_none());
        points[THUMB_TIP].x = 0.5;
        points[PINKY_TIP].y = f32::NEG_INFINITY;
        assert!(HandSnapshot::from_points(&points).is_none());
    }

    #[test]
    fn test_center_is_wrist_middle_midpoint() {
        let mut points = vec![HandLandmark::default(); 21];
        points[WRIST] = HandLandmark::new(0.4, 0.8);
        points[MIDDLE_MCP] = HandLandmark::new(0.6, 0.4);
        let hand = HandSnapshot::from_points(&points).unwrap();
        let (x, y) = hand.center();
        assert!((x - 0.5).abs() < 1e-6);
        assert!((y - 0.6).abs() < 1e-6);
    }
}
