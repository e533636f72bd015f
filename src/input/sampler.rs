use std::collections::BTreeSet;

use super::keys::{Key, KeyState, MouseButton};

/// Per-frame view of the input devices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Pointer motion since the previous `update()`, in pixels
    pub mouse_delta_x: f32,
    pub mouse_delta_y: f32,
    /// Running total of all pointer motion
    pub mouse_absolute_x: f32,
    pub mouse_absolute_y: f32,
    pub keys_down: BTreeSet<Key>,
    pub primary_button_down: bool,
    pub secondary_button_down: bool,
}

impl KeyState for InputSnapshot {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

/// Accumulates raw pointer-lock deltas and key state between frames.
///
/// Deltas are computed against a baseline captured at the end of each
/// `update()`, so motion from frames where `update()` was skipped is summed
/// into the next call rather than lost.
#[derive(Debug, Clone, Default)]
pub struct InputSampler {
    accumulated: (f32, f32),
    baseline: Option<(f32, f32)>,
    delta: (f32, f32),
    keys_down: BTreeSet<Key>,
    primary_button_down: bool,
    secondary_button_down: bool,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_pointer_move(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.accumulated.0 += dx;
            self.accumulated.1 += dy;
        }
    }

    pub fn on_key_down(&mut self, key: Key) {
        self.keys_down.insert(key);
    }

    pub fn on_key_up(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn on_button_down(&mut self, button: MouseButton) {
        self.set_button(button, true);
    }

    pub fn on_button_up(&mut self, button: MouseButton) {
        self.set_button(button, false);
    }

    fn set_button(&mut self, button: MouseButton, down: bool) {
        match button {
            MouseButton::Primary => self.primary_button_down = down,
            MouseButton::Secondary => self.secondary_button_down = down,
        }
    }

    /// Releases every key and button, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys_down.clear();
        self.primary_button_down = false;
        self.secondary_button_down = false;
    }

    /// Call once per frame before reading the snapshot
    pub fn update(&mut self) {
        self.delta = match self.baseline {
            Some((bx, by)) => (self.accumulated.0 - bx, self.accumulated.1 - by),
            None => (0.0, 0.0),
        };
        self.baseline = Some(self.accumulated);
    }

    /// True once a baseline exists; deltas read before that are zero
    pub fn is_ready(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn mouse_delta(&self) -> (f32, f32) {
        self.delta
    }

    pub fn mouse_absolute(&self) -> (f32, f32) {
        self.accumulated
    }

    pub fn primary_button_down(&self) -> bool {
        self.primary_button_down
    }

    pub fn secondary_button_down(&self) -> bool {
        self.secondary_button_down
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            mouse_delta_x: self.delta.0,
            mouse_delta_y: self.delta.1,
            mouse_absolute_x: self.accumulated.0,
            mouse_absolute_y: self.accumulated.1,
            keys_down: self.keys_down.clone(),
            primary_button_down: self.primary_button_down,
            secondary_button_down: self.secondary_button_down,
        }
    }
}

impl KeyState for InputSampler {
    fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}
