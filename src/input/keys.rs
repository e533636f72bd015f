/// Keyboard keys the walkthrough reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    W,
    A,
    S,
    D,
    R,
    Escape,
}

/// Mouse buttons tracked by the sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// Read access to held keys
pub trait KeyState {
    /// Check if key is currently down
    fn is_key_down(&self, key: Key) -> bool;

    /// Net direction from a pair of opposing keys: +1, -1, or 0 when both or
    /// neither are held
    fn axis(&self, positive: Key, negative: Key) -> f32 {
        match (self.is_key_down(positive), self.is_key_down(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
