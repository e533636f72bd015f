// config.rs - Controller tuning, bounds and scene catalogue
use std::collections::BTreeMap;
use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Bounds, CameraPose};
use crate::error::{ControllerError, ControllerResult};
use crate::math::Rect;

pub const DEFAULT_EYE_HEIGHT: f32 = 2.5;
pub const DEFAULT_MOVE_SPEED: f32 = 10.0;
pub const DEFAULT_PHI_SPEED: f32 = 8.0;
pub const DEFAULT_THETA_SPEED: f32 = 10.0;
pub const DEFAULT_INTERACTION_RADIUS: f32 = 15.0;
pub const DEFAULT_STATION_RADIUS: f32 = 10.0;
pub const DEFAULT_CONTROLS_HINT_FRAMES: u64 = 500;

/// Fixed camera pose used while zoomed in on a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionPose {
    pub position: [f32; 3],
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
    /// Overrides the controller-wide interaction radius for this target
    #[serde(default)]
    pub interaction_radius: Option<f32>,
}

impl InspectionPose {
    pub fn new(position: [f32; 3], yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            interaction_radius: None,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.interaction_radius = Some(radius);
        self
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::from_yaw_pitch(Vec3::from_array(self.position), self.yaw, self.pitch)
    }

    fn is_finite(&self) -> bool {
        self.position.iter().all(|v| v.is_finite())
            && self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.interaction_radius.map_or(true, |r| r.is_finite() && r > 0.0)
    }
}

/// A spot in the room that lights up scene displays while the camera is near
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityStation {
    pub center: [f32; 3],
    #[serde(default = "default_station_radius")]
    pub radius: f32,
    pub displays: Vec<String>,
}

impl ProximityStation {
    pub fn new(center: [f32; 3], displays: &[&str]) -> Self {
        Self {
            center,
            radius: DEFAULT_STATION_RADIUS,
            displays: displays.iter().map(|d| d.to_string()).collect(),
        }
    }
}

fn default_station_radius() -> f32 {
    DEFAULT_STATION_RADIUS
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadBobConfig {
    /// Peak vertical offset in world units
    pub amplitude: f32,
    /// Angular rate applied to the bob timer
    pub frequency: f32,
}

impl Default for HeadBobConfig {
    fn default() -> Self {
        Self {
            amplitude: 0.3,
            frequency: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Ground x/z of the starting position; y is `eye_height`
    pub spawn: [f32; 2],
    pub eye_height: f32,
    pub move_speed: f32,
    pub phi_speed: f32,
    pub theta_speed: f32,
    pub pitch_limit: f32,
    pub interaction_radius: f32,
    pub viewport: [f32; 2],
    pub head_bob: HeadBobConfig,
    pub bounds: Bounds,
    pub inspection_poses: BTreeMap<String, InspectionPose>,
    pub stations: Vec<ProximityStation>,
    pub controls_hint_frames: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let inspection_poses = [
            ("jbox", InspectionPose::new([14.85, 3.0, -14.85], 7.0 * PI / 4.0, 0.0)),
            ("computer", InspectionPose::new([17.0, 3.0, 17.0], 5.0 * PI / 4.0, 0.0)),
            ("scroll", InspectionPose::new([-14.0, 3.0, 14.0], 3.0 * PI / 4.0, 0.0)),
            ("tv1", InspectionPose::new([-14.5, 2.5, -18.0], 0.0, PI / 5.0)),
            ("tv2", InspectionPose::new([-14.5, 6.5, -18.0], 0.0, PI / 5.0)),
        ]
        .into_iter()
        .map(|(name, pose)| (name.to_string(), pose))
        .collect();

        Self {
            spawn: [0.0, 0.0],
            eye_height: DEFAULT_EYE_HEIGHT,
            move_speed: DEFAULT_MOVE_SPEED,
            phi_speed: DEFAULT_PHI_SPEED,
            theta_speed: DEFAULT_THETA_SPEED,
            pitch_limit: PI / 3.0,
            interaction_radius: DEFAULT_INTERACTION_RADIUS,
            viewport: [1280.0, 720.0],
            head_bob: HeadBobConfig::default(),
            bounds: Bounds::new(Rect::centered(14.5), vec![Rect::centered(5.0)]),
            inspection_poses,
            stations: vec![
                ProximityStation::new([14.0, 2.0, 14.0], &["computer"]),
                ProximityStation::new([14.0, 2.0, -14.0], &["jbox"]),
                ProximityStation::new([-14.0, 2.0, 14.0], &["scroll"]),
                ProximityStation::new([-14.0, 2.0, -14.0], &["tv1", "tv2"]),
            ],
            controls_hint_frames: DEFAULT_CONTROLS_HINT_FRAMES,
        }
    }
}

impl ControllerConfig {
    pub fn from_json_str(json: &str) -> ControllerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> ControllerResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> ControllerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn spawn_position(&self) -> Vec3 {
        Vec3::new(self.spawn[0], self.eye_height, self.spawn[1])
    }

    pub fn validate(&self) -> ControllerResult<()> {
        let positive = [
            ("move_speed", self.move_speed),
            ("phi_speed", self.phi_speed),
            ("theta_speed", self.theta_speed),
            ("pitch_limit", self.pitch_limit),
            ("interaction_radius", self.interaction_radius),
            ("viewport width", self.viewport[0]),
            ("viewport height", self.viewport[1]),
            ("head_bob.frequency", self.head_bob.frequency),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ControllerError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !self.eye_height.is_finite()
            || !self.head_bob.amplitude.is_finite()
            || !self.spawn.iter().all(|v| v.is_finite())
        {
            return Err(ControllerError::InvalidConfig(
                "spawn, eye_height and head_bob.amplitude must be finite".to_string(),
            ));
        }

        self.bounds.validate()?;

        if let Some((name, _)) = self.inspection_poses.iter().find(|(_, p)| !p.is_finite()) {
            return Err(ControllerError::InvalidConfig(format!(
                "inspection pose for {name} is not finite"
            )));
        }

        if self
            .stations
            .iter()
            .any(|s| !(s.radius.is_finite() && s.radius > 0.0) || s.center.iter().any(|v| !v.is_finite()))
        {
            return Err(ControllerError::InvalidConfig(
                "proximity station needs a finite centre and positive radius".to_string(),
            ));
        }

        Ok(())
    }
}
