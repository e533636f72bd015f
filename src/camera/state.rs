/// Which mode the controller is in. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// Mouse-look and WASD movement
    #[default]
    Free,
    /// Camera snapped to the inspection pose of the named target
    ZoomedToTarget(String),
    /// Pointer lock was lost while free; waits for an explicit reset
    InMenu,
}

impl ControllerState {
    pub fn is_free(&self) -> bool {
        matches!(self, ControllerState::Free)
    }

    pub fn zoomed_target(&self) -> Option<&str> {
        match self {
            ControllerState::ZoomedToTarget(name) => Some(name),
            _ => None,
        }
    }
}

/// Result of an interaction trigger
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    Zoomed(String),
    /// Nothing registered under the crosshair
    Miss,
    /// Looking at a target that is too far away
    OutOfRange { target: String, distance: f32 },
    /// Not in free mode
    Ignored,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_free() {
        assert!(ControllerState::default().is_free());
    }

    #[test]
    fn zoomed_target_name() {
        let state = ControllerState::ZoomedToTarget("scroll".to_string());
        assert_eq!(state.zoomed_target(), Some("scroll"));
        assert!(!state.is_free());
        assert_eq!(ControllerState::InMenu.zoomed_target(), None);
    }
}
