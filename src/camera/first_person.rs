use glam::{Quat, Vec3};
use log::{debug, info};

use super::head_bob::HeadBob;
use super::pose::{look_rotation, CameraPose};
use super::state::{ControllerState, InteractionOutcome};
use crate::config::ControllerConfig;
use crate::error::ControllerResult;
use crate::input::{InputSnapshot, Key, KeyState};
use crate::interaction::{
    AabbRaycaster, InteractableTarget, ProximityTracker, RaycastService, RegistrationReport,
    TargetRegistry, Toggle, UiEvent, UiSink,
};
use crate::math::{clamp, Ray};

/// Registered target under the crosshair
#[derive(Debug, Clone)]
struct LookHit {
    name: String,
    distance: f32,
    radius: f32,
    inspection: CameraPose,
}

impl LookHit {
    fn in_range(&self) -> bool {
        self.distance < self.radius
    }
}

/// First-person camera with mouse-look, bounded WASD movement, head-bob and
/// a zoom-to-target inspection mode.
///
/// Drive it once per frame with the sampler's snapshot:
///
/// ```
/// use walkthrough::camera::FirstPersonController;
/// use walkthrough::config::ControllerConfig;
/// use walkthrough::input::InputSampler;
///
/// let mut sampler = InputSampler::new();
/// let mut controller = FirstPersonController::with_defaults(ControllerConfig::default()).unwrap();
///
/// sampler.update();
/// controller.update(&sampler.snapshot(), 1.0 / 60.0);
/// let pose = controller.pose();
/// assert!(pose.position.is_finite());
/// ```
pub struct FirstPersonController<R = AabbRaycaster, U = Vec<UiEvent>> {
    config: ControllerConfig,
    raycaster: R,
    ui: U,
    registry: TargetRegistry,
    state: ControllerState,
    translation: Vec3,
    phi: f32,
    theta: f32,
    pose: CameraPose,
    saved_pose: Option<CameraPose>,
    head_bob: HeadBob,
    viewport: (f32, f32),
    prompt: Toggle,
    controls_hint: Toggle,
    escape_hint: Toggle,
    proximity: ProximityTracker,
    look_target: Option<String>,
    frames: u64,
}

impl FirstPersonController {
    /// Box raycaster and an in-memory event sink
    pub fn with_defaults(config: ControllerConfig) -> ControllerResult<Self> {
        Self::new(config, AabbRaycaster, Vec::new())
    }
}

impl<R: RaycastService, U: UiSink> FirstPersonController<R, U> {
    pub fn new(config: ControllerConfig, raycaster: R, ui: U) -> ControllerResult<Self> {
        config.validate()?;

        let translation = config.bounds.constrain(config.spawn_position());
        let pose = CameraPose::new(translation, Quat::IDENTITY);

        Ok(Self {
            raycaster,
            ui,
            registry: TargetRegistry::new(),
            state: ControllerState::Free,
            translation,
            phi: 0.0,
            theta: 0.0,
            pose,
            saved_pose: None,
            head_bob: HeadBob::new(config.head_bob),
            viewport: (config.viewport[0], config.viewport[1]),
            prompt: Toggle::default(),
            controls_hint: Toggle::default(),
            escape_hint: Toggle::default(),
            proximity: ProximityTracker::new(config.stations.clone()),
            look_target: None,
            frames: 0,
            config,
        })
    }

    /// Replace the interactable set. Bad entries are skipped and reported.
    pub fn register_interactable_targets(&mut self, targets: Vec<InteractableTarget>) -> RegistrationReport {
        self.registry.replace(
            targets,
            &self.config.inspection_poses,
            self.config.interaction_radius,
        )
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    /// Advance one frame. Look, movement and head-bob only run while free.
    pub fn update(&mut self, input: &InputSnapshot, delta_time: f32) {
        if self.state.is_free() {
            self.update_rotation(input);
            self.update_translation(input, delta_time);
            self.head_bob.advance(delta_time);
            self.pose = CameraPose::new(
                self.translation + Vec3::Y * self.head_bob.offset(),
                look_rotation(self.phi, self.theta),
            );
            self.proximity.update(self.pose.position, &mut self.ui);
        }

        self.update_prompt();
        self.update_hints();

        if input.is_key_down(Key::R) && !self.state.is_free() {
            self.reset_view();
        }

        self.frames += 1;
    }

    fn update_rotation(&mut self, input: &InputSnapshot) {
        let (width, height) = self.viewport;
        if !(width > 0.0 && height > 0.0) {
            return;
        }

        let xh = input.mouse_delta_x / width;
        let yh = input.mouse_delta_y / height;
        let limit = self.config.pitch_limit;

        self.phi += -xh * self.config.phi_speed;
        self.theta = clamp(self.theta - yh * self.config.theta_speed, -limit, limit);
    }

    fn update_translation(&mut self, input: &InputSnapshot, delta_time: f32) {
        if !delta_time.is_finite() || delta_time < 0.0 {
            return;
        }

        let forward_velocity = input.axis(Key::W, Key::S);
        let strafe_velocity = input.axis(Key::A, Key::D);
        let step = delta_time * self.config.move_speed;

        // Ground movement follows yaw only
        let heading = Quat::from_rotation_y(self.phi);
        let forward = heading * Vec3::NEG_Z * (forward_velocity * step);
        let left = heading * Vec3::NEG_X * (strafe_velocity * step);

        self.translation = self.config.bounds.constrain(self.translation + forward + left);

        if forward_velocity != 0.0 || strafe_velocity != 0.0 {
            self.head_bob.trigger();
        }
    }

    fn probe(&self) -> Option<LookHit> {
        if self.registry.is_empty() {
            return None;
        }

        let ray = Ray::new(self.pose.position, self.pose.forward());
        let hit = self.raycaster.test_all(&ray, self.registry.targets())?;
        let resolved = self.registry.resolve(&hit)?;

        Some(LookHit {
            name: resolved.target.name.clone(),
            distance: self.pose.position.distance(resolved.target.world_position),
            radius: resolved.radius,
            inspection: resolved.inspection,
        })
    }

    fn update_prompt(&mut self) {
        self.look_target = if self.state.is_free() {
            self.probe().filter(LookHit::in_range).map(|hit| hit.name)
        } else {
            None
        };
        self.set_prompt(self.look_target.is_some());
    }

    fn set_prompt(&mut self, visible: bool) {
        if self.prompt.set(visible) {
            self.ui.notify(if visible {
                UiEvent::ShowPrompt
            } else {
                UiEvent::HidePrompt
            });
        }
    }

    fn update_hints(&mut self) {
        let free = self.state.is_free();
        let controls = free && self.frames <= self.config.controls_hint_frames;
        if self.controls_hint.set(controls) {
            self.ui.notify(UiEvent::ControlsHint(controls));
        }
        if self.escape_hint.set(free) {
            self.ui.notify(UiEvent::EscapeHint(free));
        }
    }

    /// Zoom to the target under the crosshair if it is within range
    pub fn on_interaction_trigger(&mut self) -> InteractionOutcome {
        if !self.state.is_free() {
            return InteractionOutcome::Ignored;
        }

        let Some(hit) = self.probe() else {
            return InteractionOutcome::Miss;
        };

        if !hit.in_range() {
            debug!("{} is out of reach ({:.2} >= {:.2})", hit.name, hit.distance, hit.radius);
            return InteractionOutcome::OutOfRange {
                target: hit.name,
                distance: hit.distance,
            };
        }

        info!("Zooming to {}", hit.name);
        self.saved_pose = Some(self.pose);
        self.pose = hit.inspection;
        self.state = ControllerState::ZoomedToTarget(hit.name.clone());
        self.look_target = None;
        self.set_prompt(false);
        self.ui.notify(UiEvent::PointerLock(false));
        self.ui.notify(UiEvent::ShowContent(hit.name.clone()));
        InteractionOutcome::Zoomed(hit.name)
    }

    /// Escape or focus loss; only opens the menu from free mode
    pub fn on_pointer_lock_lost(&mut self) {
        if !self.state.is_free() {
            return;
        }
        info!("Pointer lock lost, opening menu");
        self.state = ControllerState::InMenu;
        self.look_target = None;
        self.set_prompt(false);
        self.ui.notify(UiEvent::ShowMenu);
    }

    /// Re-locking the pointer while zoomed counts as a reset
    pub fn on_pointer_lock_acquired(&mut self) {
        if self.state.zoomed_target().is_some() {
            self.reset_view();
        }
    }

    /// Leave zoom or menu and return to free mode. Returns false when
    /// already free.
    pub fn reset_view(&mut self) -> bool {
        match &self.state {
            ControllerState::Free => return false,
            ControllerState::ZoomedToTarget(_) => {
                if let Some(saved) = self.saved_pose.take() {
                    self.translation = Vec3::new(saved.position.x, self.config.eye_height, saved.position.z);
                    self.pose = CameraPose::new(self.translation, saved.orientation);
                }
            }
            ControllerState::InMenu => {}
        }

        info!("Resetting view");
        self.state = ControllerState::Free;
        self.ui.notify(UiEvent::HideAllContent);
        self.ui.notify(UiEvent::PointerLock(true));
        true
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn is_zoomed(&self) -> bool {
        self.state.zoomed_target().is_some()
    }

    /// In-range target under the crosshair as of the last update
    pub fn look_target(&self) -> Option<&str> {
        self.look_target.as_deref()
    }

    /// Yaw in radians, unbounded
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Pitch in radians, within the configured limit
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Ground position without head-bob
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn head_bob(&self) -> &HeadBob {
        &self.head_bob
    }

    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn active_displays(&self) -> impl Iterator<Item = &str> {
        self.proximity.active_displays()
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Bounds;
    use crate::math::Rect;
    use std::f32::consts::FRAC_PI_3;

    fn open_room() -> ControllerConfig {
        ControllerConfig {
            bounds: Bounds::room_only(Rect::centered(14.5)),
            stations: Vec::new(),
            ..ControllerConfig::default()
        }
    }

    fn snapshot(dx: f32, dy: f32, keys: &[Key]) -> InputSnapshot {
        InputSnapshot {
            mouse_delta_x: dx,
            mouse_delta_y: dy,
            keys_down: keys.iter().copied().collect(),
            ..InputSnapshot::default()
        }
    }

    #[test]
    fn spawn_is_pushed_out_of_pedestal() {
        let controller = FirstPersonController::with_defaults(ControllerConfig::default()).unwrap();
        assert_eq!(controller.translation(), Vec3::new(-5.0, 2.5, 0.0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ControllerConfig {
            move_speed: -1.0,
            ..ControllerConfig::default()
        };
        assert!(FirstPersonController::with_defaults(config).is_err());
    }

    #[test]
    fn mouse_right_turns_right() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.update(&snapshot(64.0, 0.0, &[]), 0.016);
        assert!((controller.phi() - (-64.0 / 1280.0 * 8.0)).abs() < 1e-6);
    }

    #[test]
    fn pitch_clamps_at_limit() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        let limit = controller.config().pitch_limit;
        controller.update(&snapshot(0.0, -1.0e6, &[]), 0.016);
        assert_eq!(controller.theta(), limit);
        assert!((limit - FRAC_PI_3).abs() < 1e-6);
        controller.update(&snapshot(0.0, 1.0e6, &[]), 0.016);
        assert_eq!(controller.theta(), -limit);
    }

    #[test]
    fn zero_viewport_skips_rotation() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.set_viewport(0.0, 0.0);
        controller.update(&snapshot(100.0, 100.0, &[]), 0.016);
        assert_eq!(controller.phi(), 0.0);
        assert_eq!(controller.theta(), 0.0);
        assert!(controller.pose().orientation.is_finite());
    }

    #[test]
    fn forward_moves_along_negative_z() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.update(&snapshot(0.0, 0.0, &[Key::W]), 0.1);
        let t = controller.translation();
        assert!(t.x.abs() < 1e-6);
        assert!((t.z - -1.0).abs() < 1e-5);
        assert_eq!(t.y, 2.5);
    }

    #[test]
    fn strafe_left_moves_along_negative_x() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.update(&snapshot(0.0, 0.0, &[Key::A]), 0.1);
        assert!((controller.translation().x - -1.0).abs() < 1e-5);
    }

    #[test]
    fn non_finite_delta_time_is_skipped() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.update(&snapshot(0.0, 0.0, &[Key::W]), f32::NAN);
        assert_eq!(controller.translation(), Vec3::new(0.0, 2.5, 0.0));
        assert!(controller.pose().position.is_finite());
    }

    #[test]
    fn moving_triggers_head_bob() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.update(&snapshot(0.0, 0.0, &[Key::W]), 0.05);
        assert!(controller.head_bob().timer() > 0.0);
        assert!(controller.pose().position.y > 2.5);
    }

    #[test]
    fn menu_blocks_movement_until_reset() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.on_pointer_lock_lost();
        assert_eq!(controller.state(), &ControllerState::InMenu);
        assert!(controller.ui().contains(&UiEvent::ShowMenu));

        controller.update(&snapshot(300.0, 0.0, &[Key::W]), 0.1);
        assert_eq!(controller.translation(), Vec3::new(0.0, 2.5, 0.0));
        assert_eq!(controller.phi(), 0.0);

        // Re-locking alone does not leave the menu
        controller.on_pointer_lock_acquired();
        assert_eq!(controller.state(), &ControllerState::InMenu);

        assert!(controller.reset_view());
        assert!(controller.state().is_free());
    }

    #[test]
    fn reset_key_leaves_menu() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        controller.on_pointer_lock_lost();
        controller.update(&snapshot(0.0, 0.0, &[Key::R]), 0.016);
        assert!(controller.state().is_free());
    }

    #[test]
    fn reset_when_free_is_noop() {
        let mut controller = FirstPersonController::with_defaults(open_room()).unwrap();
        assert!(!controller.reset_view());
        assert!(!controller.ui().contains(&UiEvent::HideAllContent));
    }

    #[test]
    fn hints_follow_state() {
        let config = ControllerConfig {
            controls_hint_frames: 1,
            ..open_room()
        };
        let mut controller = FirstPersonController::with_defaults(config).unwrap();
        let idle = snapshot(0.0, 0.0, &[]);
        controller.update(&idle, 0.016);
        controller.update(&idle, 0.016);
        controller.update(&idle, 0.016);
        assert_eq!(
            controller.ui().as_slice(),
            &[
                UiEvent::ControlsHint(true),
                UiEvent::EscapeHint(true),
                UiEvent::ControlsHint(false),
            ]
        );
    }
}
