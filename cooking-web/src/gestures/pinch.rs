//! Pinch-drag with flick-on-release
//!
//! The drag reports live deltas every frame while the pinch is held; the
//! flick decision is only made when the fingers separate.

use super::config::GestureConfig;
use super::events::{FlickDirection, GestureEvent, SwipeDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragPhase {
    Idle,
    Dragging {
        started_at: f64,
        start: (f32, f32),
        last: (f32, f32),
    },
}

/// Result of letting go of a pinch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchRelease {
    pub flick: Option<GestureEvent>,
    /// Zero-delta progress that clears the drag indicator
    pub reset: GestureEvent,
}

#[derive(Debug, Clone)]
pub struct PinchDrag {
    phase: DragPhase,
}

impl PinchDrag {
    pub fn new() -> Self {
        Self { phase: DragPhase::Idle }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Feed a pinching frame. The onset frame only records the start;
    /// later frames return drag progress.
    pub fn hold(&mut self, now: f64, center: (f32, f32)) -> Option<GestureEvent> {
        if let DragPhase::Dragging { start, last, .. } = &mut self.phase {
            *last = center;
            return Some(GestureEvent::PinchDragProgress {
                dx: center.0 - start.0,
                dy: center.1 - start.1,
                x: center.0,
                y: center.1,
            });
        }

        self.phase = DragPhase::Dragging {
            started_at: now,
            start: center,
            last: center,
        };
        None
    }

    /// Feed a non-pinching frame. Returns `None` if no drag was running.
    pub fn release(&mut self, now: f64, config: &GestureConfig) -> Option<PinchRelease> {
        let DragPhase::Dragging { started_at, start, last } = self.phase else {
            return None;
        };
        self.phase = DragPhase::Idle;

        let flick = classify_flick(
            last.0 - start.0,
            last.1 - start.1,
            now - started_at,
            config,
        );
        Some(PinchRelease {
            flick,
            reset: GestureEvent::PinchDragProgress {
                dx: 0.0,
                dy: 0.0,
                x: last.0,
                y: last.1,
            },
        })
    }

    pub fn reset(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

impl Default for PinchDrag {
    fn default() -> Self {
        Self::new()
    }
}

/// Only the dominant axis is considered; horizontal is checked first and
/// wins ties. y grows downwards in frame coordinates.
fn classify_flick(dx: f32, dy: f32, elapsed_ms: f64, config: &GestureConfig) -> Option<GestureEvent> {
    if elapsed_ms <= config.flick_min_ms || elapsed_ms >= config.flick_max_ms {
        return None;
    }

    let horizontal = dx.abs() >= dy.abs();
    if horizontal && dx.abs() > config.flick_min_distance {
        let direction = if dx > 0.0 { FlickDirection::Right } else { FlickDirection::Left };
        Some(GestureEvent::PinchFlick(direction))
    } else if !horizontal && dy.abs() > config.flick_min_distance {
        let direction = if dy > 0.0 { SwipeDirection::Down } else { SwipeDirection::Up };
        Some(GestureEvent::Swipe(direction))
    } else {
        None
    }
}
