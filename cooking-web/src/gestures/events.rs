//! Gesture events emitted by the engine

/// Swipe direction. The engine only emits `Up` and `Down`: a horizontal
/// pinch-drag is reported as `PinchFlick`. `Left`/`Right` stay reserved so
/// the JS tag set (`swipe-left`, `swipe-right`) keeps all four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Horizontal pinch-drag flick direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlickDirection {
    Left,
    Right,
}

/// Discrete and progress outputs of one engine update.
///
/// Progress values are in `[0, 1)`. A progress of exactly `0.0` means the
/// hold was cancelled and any indicator should be cleared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Swipe(SwipeDirection),
    PinchFlick(FlickDirection),
    /// Live drag feedback. `dx`/`dy` are relative to the pinch start,
    /// `x`/`y` are the absolute hand center. All zero deltas on release.
    PinchDragProgress { dx: f32, dy: f32, x: f32, y: f32 },
    OpenPalmProgress(f32),
    OpenPalm,
    /// Fired once when a thumbs-up is first seen.
    ThumbsUp,
    ThumbsUpProgress(f32),
    ThumbsUpHold,
    FistProgress(f32),
    Fist,
}

impl GestureEvent {
    /// Stable tag used on the JS side
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Swipe(SwipeDirection::Left) => "swipe-left",
            Self::Swipe(SwipeDirection::Right) => "swipe-right",
            Self::Swipe(SwipeDirection::Up) => "swipe-up",
            Self::Swipe(SwipeDirection::Down) => "swipe-down",
            Self::PinchFlick(FlickDirection::Left) => "pinch-flick-left",
            Self::PinchFlick(FlickDirection::Right) => "pinch-flick-right",
            Self::PinchDragProgress { .. } => "pinch-drag-progress",
            Self::OpenPalmProgress(_) => "open-palm-progress",
            Self::OpenPalm => "open-palm",
            Self::ThumbsUp => "thumbs-up",
            Self::ThumbsUpProgress(_) => "thumbs-up-progress",
            Self::ThumbsUpHold => "thumbs-up-hold",
            Self::FistProgress(_) => "fist-progress",
            Self::Fist => "fist",
        }
    }

    /// Progress value for the hold-progress variants
    pub fn progress(&self) -> Option<f32> {
        match *self {
            Self::OpenPalmProgress(p) | Self::ThumbsUpProgress(p) | Self::FistProgress(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_reset(&self) -> bool {
        match *self {
            Self::PinchDragProgress { dx, dy, .. } => dx == 0.0 && dy == 0.0,
            _ => self.progress() == Some(0.0),
        }
    }
}
