//! Long-press state machine shared by the static pose gestures
//!
//! Idle -> Tracking (pose first seen) -> Triggered (held long enough).
//! Triggered stays put until the pose is released, so a completion fires
//! at most once per continuous hold.

/// Floor for in-progress values. `0.0` is reserved for "cancelled", so a
/// hold that has only just started reports this instead.
pub const MIN_PROGRESS: f32 = 0.01;

const MAX_PROGRESS: f32 = 1.0 - f32::EPSILON;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldPhase {
    Idle,
    Tracking { started_at: f64 },
    Triggered,
}

/// What one qualifying frame did to the hold
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldOutcome {
    /// Still inside the grace delay, nothing to report yet
    Waiting,
    Progress(f32),
    /// Reached the required duration on this frame
    Completed,
    /// Already completed earlier in this hold
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldUpdate {
    /// This frame moved the tracker out of Idle
    pub started: bool,
    pub outcome: HoldOutcome,
}

#[derive(Debug, Clone)]
pub struct HoldTracker {
    phase: HoldPhase,
    delay_ms: f64,
    required_ms: f64,
}

impl HoldTracker {
    pub fn new(delay_ms: f64, required_ms: f64) -> Self {
        Self {
            phase: HoldPhase::Idle,
            delay_ms,
            required_ms,
        }
    }

    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == HoldPhase::Idle
    }

    /// Feed a frame in which the pose is present
    pub fn advance(&mut self, now: f64) -> HoldUpdate {
        let started = self.is_idle();
        if started {
            self.phase = HoldPhase::Tracking { started_at: now };
        }

        let outcome = match self.phase {
            HoldPhase::Tracking { started_at } => {
                let elapsed = (now - started_at).max(0.0);
                if elapsed >= self.required_ms {
                    self.phase = HoldPhase::Triggered;
                    HoldOutcome::Completed
                } else if elapsed < self.delay_ms {
                    HoldOutcome::Waiting
                } else {
                    let ratio = (elapsed - self.delay_ms) / (self.required_ms - self.delay_ms);
                    HoldOutcome::Progress((ratio as f32).clamp(MIN_PROGRESS, MAX_PROGRESS))
                }
            }
            HoldPhase::Triggered | HoldPhase::Idle => HoldOutcome::Done,
        };

        HoldUpdate { started, outcome }
    }

    /// Drop the hold. Returns true if there was anything to drop, i.e. the
    /// caller owes the UI a reset.
    pub fn cancel(&mut self) -> bool {
        let was_active = !self.is_idle();
        self.phase = HoldPhase::Idle;
        was_active
    }
}
