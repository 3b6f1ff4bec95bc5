//! Gesture engine - per-frame state machine over hand snapshots
//!
//! Frame order:
//! 1. no hand: cancel open-palm and fist holds, nothing else
//! 2. static poses (palm, thumbs-up, fist) when not pinching and past the
//!    shared pose cooldown
//! 3. pinch cancels every pose hold
//! 4. pinch-drag, gated only by its own cooldown

use log::debug;

use super::config::GestureConfig;
use super::events::GestureEvent;
use super::hold::{HoldOutcome, HoldPhase, HoldTracker};
use super::landmarks::HandSnapshot;
use super::pinch::PinchDrag;
use super::pose::{is_fist, is_open_palm, is_pinching, is_thumbs_up};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pose {
    OpenPalm,
    ThumbsUp,
    Fist,
}

impl Pose {
    fn progress(self, value: f32) -> GestureEvent {
        match self {
            Pose::OpenPalm => GestureEvent::OpenPalmProgress(value),
            Pose::ThumbsUp => GestureEvent::ThumbsUpProgress(value),
            Pose::Fist => GestureEvent::FistProgress(value),
        }
    }

    fn completed(self) -> GestureEvent {
        match self {
            Pose::OpenPalm => GestureEvent::OpenPalm,
            Pose::ThumbsUp => GestureEvent::ThumbsUpHold,
            Pose::Fist => GestureEvent::Fist,
        }
    }

    /// Extra event on the first frame of a hold
    fn on_start(self) -> Option<GestureEvent> {
        match self {
            Pose::ThumbsUp => Some(GestureEvent::ThumbsUp),
            Pose::OpenPalm | Pose::Fist => None,
        }
    }
}

/// `now` is past the deadline, or there is none
fn cooldown_passed(deadline: Option<f64>, now: f64) -> bool {
    deadline.map_or(true, |until| now > until)
}

/// Gesture recognizer for a single hand stream. One instance per session.
pub struct GestureEngine {
    config: GestureConfig,
    pinch: PinchDrag,
    open_palm: HoldTracker,
    thumbs_up: HoldTracker,
    fist: HoldTracker,
    pinch_cooldown_until: Option<f64>,
    pose_cooldown_until: Option<f64>,
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            pinch: PinchDrag::new(),
            open_palm: HoldTracker::new(config.open_palm_delay_ms, config.open_palm_hold_ms),
            thumbs_up: HoldTracker::new(0.0, config.thumbs_up_hold_ms),
            fist: HoldTracker::new(0.0, config.fist_hold_ms),
            pinch_cooldown_until: None,
            pose_cooldown_until: None,
            config,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Forget all tracking and cooldowns. No events are emitted.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config.clone());
    }

    pub fn open_palm_phase(&self) -> HoldPhase {
        self.open_palm.phase()
    }

    pub fn thumbs_up_phase(&self) -> HoldPhase {
        self.thumbs_up.phase()
    }

    pub fn fist_phase(&self) -> HoldPhase {
        self.fist.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.pinch.is_dragging()
    }

    /// Process one camera frame. `timestamp_ms` must not decrease between
    /// calls. Events are handed to `emit` in the order they occur.
    pub fn update<F>(&mut self, hand: Option<&HandSnapshot>, timestamp_ms: f64, mut emit: F)
    where
        F: FnMut(GestureEvent),
    {
        let now = timestamp_ms;

        let Some(hand) = hand else {
            if self.open_palm.cancel() {
                emit(Pose::OpenPalm.progress(0.0));
            }
            if self.fist.cancel() {
                emit(Pose::Fist.progress(0.0));
            }
            return;
        };

        let pinching = is_pinching(hand, &self.config);

        if pinching {
            for (tracker, pose) in [
                (&mut self.open_palm, Pose::OpenPalm),
                (&mut self.thumbs_up, Pose::ThumbsUp),
                (&mut self.fist, Pose::Fist),
            ] {
                if tracker.cancel() {
                    emit(pose.progress(0.0));
                }
            }
        } else if cooldown_passed(self.pose_cooldown_until, now) {
            let detected = [
                (Pose::OpenPalm, is_open_palm(hand, &self.config)),
                (Pose::ThumbsUp, is_thumbs_up(hand, &self.config)),
                (Pose::Fist, is_fist(hand, &self.config)),
            ];
            for (pose, present) in detected {
                self.track_pose(pose, present, now, &mut emit);
            }
        }

        self.track_pinch(hand, pinching, now, &mut emit);
    }

    /// `update` returning the events instead of calling back
    pub fn update_collect(&mut self, hand: Option<&HandSnapshot>, timestamp_ms: f64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.update(hand, timestamp_ms, |event| events.push(event));
        events
    }

    fn tracker_mut(&mut self, pose: Pose) -> &mut HoldTracker {
        match pose {
            Pose::OpenPalm => &mut self.open_palm,
            Pose::ThumbsUp => &mut self.thumbs_up,
            Pose::Fist => &mut self.fist,
        }
    }

    fn track_pose<F>(&mut self, pose: Pose, present: bool, now: f64, emit: &mut F)
    where
        F: FnMut(GestureEvent),
    {
        let tracker = self.tracker_mut(pose);

        if !present {
            if tracker.cancel() {
                emit(pose.progress(0.0));
            }
            return;
        }

        let update = tracker.advance(now);
        if update.started {
            if let Some(event) = pose.on_start() {
                emit(event);
            }
        }

        match update.outcome {
            HoldOutcome::Progress(value) => emit(pose.progress(value)),
            HoldOutcome::Completed => {
                let event = pose.completed();
                debug!("gesture fired: {} at {:.0}ms", event.as_str(), now);
                emit(event);
                self.pose_cooldown_until = Some(now + self.config.pose_cooldown_ms);
            }
            HoldOutcome::Waiting | HoldOutcome::Done => {}
        }
    }

    fn track_pinch<F>(&mut self, hand: &HandSnapshot, pinching: bool, now: f64, emit: &mut F)
    where
        F: FnMut(GestureEvent),
    {
        if pinching {
            if self.pinch.is_dragging() || cooldown_passed(self.pinch_cooldown_until, now) {
                if let Some(progress) = self.pinch.hold(now, hand.center()) {
                    emit(progress);
                }
            }
            return;
        }

        if let Some(release) = self.pinch.release(now, &self.config) {
            if let Some(flick) = release.flick {
                debug!("gesture fired: {} at {:.0}ms", flick.as_str(), now);
                emit(flick);
                self.pinch_cooldown_until = Some(now + self.config.pinch_cooldown_ms);
            }
            emit(release.reset);
        }
    }
}

impl Default for GestureEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
