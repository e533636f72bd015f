use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, ControllerResult};
use crate::math::Rect;

/// Walkable area: a room rectangle minus obstacle rectangles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub room: Rect,
    #[serde(default)]
    pub obstacles: Vec<Rect>,
}

impl Bounds {
    pub fn new(room: Rect, obstacles: Vec<Rect>) -> Self {
        Self { room, obstacles }
    }

    pub fn room_only(room: Rect) -> Self {
        Self::new(room, Vec::new())
    }

    /// Obstacles must be well formed, lie inside the room and not overlap
    pub fn validate(&self) -> ControllerResult<()> {
        if !self.room.is_valid() || !self.obstacles.iter().all(Rect::is_valid) {
            return Err(ControllerError::InvalidConfig(
                "bounds contain an inverted or non-finite rectangle".to_string(),
            ));
        }

        for (i, obstacle) in self.obstacles.iter().enumerate() {
            if !self.room.encloses(obstacle) {
                return Err(ControllerError::InvalidConfig(format!(
                    "obstacle {i} extends past the room walls"
                )));
            }
            if let Some(j) = self.obstacles[i + 1..].iter().position(|other| obstacle.overlaps(other)) {
                return Err(ControllerError::InvalidConfig(format!(
                    "obstacles {i} and {} overlap",
                    i + 1 + j
                )));
            }
        }

        Ok(())
    }

    /// Clamp into the room, then push out of every obstacle in order
    pub fn constrain(&self, position: Vec3) -> Vec3 {
        let clamped = self.room.clamp(position);
        self.obstacles
            .iter()
            .fold(clamped, |point, obstacle| obstacle.push_out(point))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::room_only(Rect::centered(14.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constrain_clamps_then_pushes_out() {
        let bounds = Bounds::new(Rect::centered(14.5), vec![Rect::centered(5.0)]);
        assert_eq!(
            bounds.constrain(Vec3::new(-30.0, 2.5, 0.5)),
            Vec3::new(-14.5, 2.5, 0.5)
        );
        assert_eq!(
            bounds.constrain(Vec3::new(0.5, 2.5, 4.0)),
            Vec3::new(0.5, 2.5, 5.0)
        );
    }

    #[test]
    fn default_and_pedestal_bounds_validate() {
        assert!(Bounds::default().validate().is_ok());
        assert!(Bounds::new(Rect::centered(14.5), vec![Rect::centered(5.0)]).validate().is_ok());
    }

    #[test]
    fn room_only_leaves_interior_alone() {
        let bounds = Bounds::room_only(Rect::centered(14.5));
        let p = Vec3::new(1.0, 2.5, -1.0);
        assert_eq!(bounds.constrain(p), p);
    }
}
