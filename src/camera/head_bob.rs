use std::f32::consts::PI;

use crate::config::HeadBobConfig;

/// Footstep oscillation. The timer only ever advances up to the next
/// multiple of `PI / frequency`, where the bob deactivates until movement
/// re-triggers it, so the offset moves in half-wave steps.
#[derive(Debug, Clone, Copy)]
pub struct HeadBob {
    config: HeadBobConfig,
    active: bool,
    timer: f32,
}

impl HeadBob {
    pub fn new(config: HeadBobConfig) -> Self {
        Self {
            config,
            active: false,
            timer: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn trigger(&mut self) {
        self.active = true;
    }

    /// Next quantized boundary strictly after the current timer
    pub fn next_step_time(&self) -> f32 {
        let frequency = self.config.frequency;
        let next_step = 1.0 + (((self.timer + 0.00001) * frequency) / PI).floor();
        next_step * PI / frequency
    }

    pub fn advance(&mut self, delta_time: f32) {
        if !self.active || !delta_time.is_finite() || delta_time < 0.0 {
            return;
        }

        let next_step_time = self.next_step_time();
        self.timer = (self.timer + delta_time).min(next_step_time);

        // TODO: deactivate on "not moving" instead of at each half wave
        if self.timer == next_step_time {
            self.active = false;
        }
    }

    /// Vertical camera offset for the current timer
    pub fn offset(&self) -> f32 {
        (self.timer * self.config.frequency).sin() * self.config.amplitude
    }
}

impl Default for HeadBob {
    fn default() -> Self {
        Self::new(HeadBobConfig::default())
    }
}
