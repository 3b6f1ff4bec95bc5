//! Kitchen countdown timer
//!
//! Driven by the caller's frame timestamps (`performance.now()`), so the
//! animation loop stays in JS and the countdown itself is plain state.

use log::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerTick {
    pub remaining_secs: f64,
    /// True only on the tick that reached zero
    pub finished: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CountdownTimer {
    remaining_secs: f64,
    running: bool,
    last_ms: f64,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Adjust by `delta` seconds; never goes below zero
    pub fn add_seconds(&mut self, delta: f64) {
        self.remaining_secs = (self.remaining_secs + delta).max(0.0);
    }

    pub fn set_time(&mut self, total_secs: f64) {
        self.remaining_secs = total_secs.max(0.0);
    }

    pub fn start(&mut self, now_ms: f64) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_ms = now_ms;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn stop(&mut self) {
        self.pause();
        self.remaining_secs = 0.0;
    }

    /// Count down by the time since the previous tick (or `start`)
    pub fn tick(&mut self, now_ms: f64) -> TimerTick {
        let mut finished = false;

        if self.running {
            let dt = ((now_ms - self.last_ms) / 1000.0).max(0.0);
            self.last_ms = now_ms;

            if self.remaining_secs > 0.0 {
                self.remaining_secs = (self.remaining_secs - dt).max(0.0);
                if self.remaining_secs == 0.0 {
                    finished = true;
                    info!("countdown finished");
                }
            }
        }

        TimerTick {
            remaining_secs: self.remaining_secs,
            finished,
        }
    }

    /// `MM:SS` of the whole seconds left
    pub fn display(&self) -> String {
        let secs = self.remaining_secs.floor() as u64;
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}
