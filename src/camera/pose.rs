use glam::{Quat, Vec3};

/// Camera position and orientation as handed to the render host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl CameraPose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Yaw about world Y, then pitch about the local X axis
    pub fn from_yaw_pitch(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::new(position, look_rotation(yaw, pitch))
    }

    /// Cameras look down their local -Z
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

pub fn look_rotation(yaw: f32, pitch: f32) -> Quat {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn identity_pose_looks_down_negative_z() {
        let pose = CameraPose::default();
        assert!(pose.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn positive_yaw_turns_left() {
        let pose = CameraPose::from_yaw_pitch(Vec3::ZERO, FRAC_PI_2, 0.0);
        assert!(pose.forward().abs_diff_eq(Vec3::NEG_X, 1e-6));
    }

    #[test]
    fn positive_pitch_looks_up() {
        let pose = CameraPose::from_yaw_pitch(Vec3::ZERO, 0.0, 0.3);
        assert!(pose.forward().y > 0.0);
    }

    #[test]
    fn pitch_does_not_change_heading() {
        let level = CameraPose::from_yaw_pitch(Vec3::ZERO, 1.0, 0.0).forward();
        let tilted = CameraPose::from_yaw_pitch(Vec3::ZERO, 1.0, -0.8).forward();
        let flat = Vec3::new(tilted.x, 0.0, tilted.z).normalize();
        assert!(flat.abs_diff_eq(level, 1e-5));
    }
}
