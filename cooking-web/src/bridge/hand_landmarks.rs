//! MediaPipe hand landmark parsing
//!
//! JS hands over every detected hand as one flat Float32Array:
//! hand-major, 21 landmarks per hand, `x, y, z` per landmark.

use crate::gestures::{HandSnapshot, LANDMARK_COUNT};

/// Floats per landmark in the MediaPipe buffer
pub const LANDMARK_STRIDE: usize = 3;

/// Floats per hand
pub const HAND_STRIDE: usize = LANDMARK_COUNT * LANDMARK_STRIDE;

/// First hand of the frame, if there is one. Later hands are ignored.
pub fn parse_hand(flat_data: &[f32], num_hands: usize) -> Option<HandSnapshot> {
    if num_hands == 0 {
        return None;
    }
    HandSnapshot::from_flat(flat_data.get(..HAND_STRIDE)?, LANDMARK_STRIDE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gestures::{INDEX_TIP, WRIST};

    fn flat_hand(offset: f32) -> Vec<f32> {
        (0..LANDMARK_COUNT)
            .flat_map(|i| [offset + i as f32 * 0.01, 0.5, -0.02])
            .collect()
    }

    #[test]
    fn test_no_hands() {
        assert!(parse_hand(&flat_hand(0.1), 0).is_none());
        assert!(parse_hand(&[], 1).is_none());
    }

    #[test]
    fn test_short_buffer() {
        let flat = flat_hand(0.1);
        assert!(parse_hand(&flat[..HAND_STRIDE - 1], 1).is_none());
    }

    #[test]
    fn test_first_hand_wins() {
        let mut flat = flat_hand(0.1);
        flat.extend(flat_hand(0.6));
        let hand = parse_hand(&flat, 2).unwrap();
        assert!((hand.point(WRIST).x - 0.1).abs() < 1e-6);
        assert!((hand.point(INDEX_TIP).x - 0.18).abs() < 1e-6);
        assert_eq!(hand.point(WRIST).z, -0.02);
    }

    #[test]
    fn test_nan_is_no_hand() {
        let mut flat = flat_hand(0.1);
        flat[4] = f32::NAN;
        assert!(parse_hand(&flat, 1).is_none());
    }
}
