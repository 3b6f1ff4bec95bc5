//! Static hand pose classifiers
//!
//! All comparisons use the wrist as the common reference point.

use super::config::GestureConfig;
use super::landmarks::{HandSnapshot, FINGER_PAIRS, INDEX_TIP, NON_THUMB_TIPS, THUMB_TIP, WRIST};

/// Thumb tip and index tip touching. Strict: a distance equal to the
/// threshold is not a pinch.
pub fn is_pinching(hand: &HandSnapshot, config: &GestureConfig) -> bool {
    hand.distance(THUMB_TIP, INDEX_TIP) < config.pinch_threshold
}

/// Enough fingers extended: tip well past its base, seen from the wrist
pub fn is_open_palm(hand: &HandSnapshot, config: &GestureConfig) -> bool {
    let extended = FINGER_PAIRS
        .iter()
        .filter(|&&(tip, base)| {
            hand.distance(tip, WRIST) > hand.distance(base, WRIST) * config.extended_ratio
        })
        .count();
    extended >= config.open_palm_min_fingers
}

/// Thumb clearly the longest reach and at least some fingers curled in
pub fn is_thumbs_up(hand: &HandSnapshot, config: &GestureConfig) -> bool {
    let thumb = hand.distance(THUMB_TIP, WRIST);
    if thumb <= config.thumbs_up_min_thumb {
        return false;
    }

    let folded = NON_THUMB_TIPS
        .iter()
        .filter(|&&tip| hand.distance(tip, WRIST) < thumb * config.thumbs_up_folded_ratio)
        .count();
    folded >= config.thumbs_up_min_folded
}

/// Enough fingertips pulled in closer to the wrist than their bases
pub fn is_fist(hand: &HandSnapshot, config: &GestureConfig) -> bool {
    let folded = FINGER_PAIRS
        .iter()
        .filter(|&&(tip, base)| {
            hand.distance(tip, WRIST) < hand.distance(base, WRIST) * config.folded_ratio
        })
        .count();
    folded >= config.fist_min_fingers
}

// ============================================================================
// TEST HELPERS
// ============================================================================
