use winit::event::{DeviceEvent, ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::keys::{Key, MouseButton};
use super::sampler::InputSampler;

/// Signals the host forwards to the controller as direct calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// Primary click: request pointer lock if needed, then check interaction
    InteractionTrigger,
    /// Escape pressed or focus lost while the pointer was locked
    PointerLockLost,
}

/// Adapter that bridges Winit events to the InputSampler
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    sampler: InputSampler,
    pointer_locked: bool,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sampler(&self) -> &InputSampler {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut InputSampler {
        &mut self.sampler
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Record whether the host currently holds the cursor grab
    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
    }

    /// Process a Winit WindowEvent and update the sampler
    pub fn process_window_event(&mut self, event: &WindowEvent) -> Option<HostSignal> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let key = keycode_to_key(keycode)?;
                match event.state {
                    ElementState::Pressed => {
                        self.sampler.on_key_down(key);
                        if key == Key::Escape {
                            return self.lose_pointer_lock();
                        }
                    }
                    ElementState::Released => self.sampler.on_key_up(key),
                }
                None
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = mouse_button_to_button(*button)?;
                match state {
                    ElementState::Pressed => {
                        self.sampler.on_button_down(button);
                        (button == MouseButton::Primary).then_some(HostSignal::InteractionTrigger)
                    }
                    ElementState::Released => {
                        self.sampler.on_button_up(button);
                        None
                    }
                }
            }
            WindowEvent::Focused(false) => {
                self.sampler.release_all();
                self.lose_pointer_lock()
            }
            _ => None,
        }
    }

    /// Raw device motion is only meaningful while the pointer is locked
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.pointer_locked {
                self.sampler.on_pointer_move(delta.0 as f32, delta.1 as f32);
            }
        }
    }

    fn lose_pointer_lock(&mut self) -> Option<HostSignal> {
        if self.pointer_locked {
            self.pointer_locked = false;
            Some(HostSignal::PointerLockLost)
        } else {
            None
        }
    }
}

/// Map Winit KeyCode to Key
pub fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
    match keycode {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyR => Some(Key::R),
        KeyCode::Escape => Some(Key::Escape),
        _ => None,
    }
}

/// Map Winit MouseButton to MouseButton
pub fn mouse_button_to_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Primary),
        WinitMouseButton::Right => Some(MouseButton::Secondary),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Winit keyboard events carry platform fields that cannot be built in
    // tests; device motion and focus events can.

    #[test]
    fn test_key_mapping() {
        assert_eq!(keycode_to_key(KeyCode::KeyW), Some(Key::W));
        assert_eq!(keycode_to_key(KeyCode::KeyR), Some(Key::R));
        assert_eq!(keycode_to_key(KeyCode::Escape), Some(Key::Escape));
        assert_eq!(keycode_to_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_mouse_button_mapping() {
        assert_eq!(mouse_button_to_button(WinitMouseButton::Left), Some(MouseButton::Primary));
        assert_eq!(mouse_button_to_button(WinitMouseButton::Right), Some(MouseButton::Secondary));
        assert_eq!(mouse_button_to_button(WinitMouseButton::Middle), None);
    }

    #[test]
    fn test_motion_ignored_while_unlocked() {
        let mut input = WinitInput::new();
        input.sampler_mut().update();
        input.process_device_event(&DeviceEvent::MouseMotion { delta: (10.0, 4.0) });
        input.sampler_mut().update();
        assert_eq!(input.sampler().mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_motion_accumulates_while_locked() {
        let mut input = WinitInput::new();
        input.set_pointer_locked(true);
        input.sampler_mut().update();
        input.process_device_event(&DeviceEvent::MouseMotion { delta: (10.0, 4.0) });
        input.process_device_event(&DeviceEvent::MouseMotion { delta: (-2.0, 1.0) });
        input.sampler_mut().update();
        assert_eq!(input.sampler().mouse_delta(), (8.0, 5.0));
    }

    #[test]
    fn test_focus_loss_releases_lock_once() {
        let mut input = WinitInput::new();
        input.set_pointer_locked(true);
        assert_eq!(
            input.process_window_event(&WindowEvent::Focused(false)),
            Some(HostSignal::PointerLockLost)
        );
        assert!(!input.pointer_locked());
        assert_eq!(input.process_window_event(&WindowEvent::Focused(false)), None);
    }
}
