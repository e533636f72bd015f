use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle on the ground (XZ) plane. Height is unconstrained.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Rect {
    pub const fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Square of half-width `half` centred on the origin
    pub const fn centered(half: f32) -> Self {
        Self::new(-half, half, -half, half)
    }

    pub fn is_valid(&self) -> bool {
        [self.min_x, self.max_x, self.min_z, self.max_z]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_z <= self.max_z
    }

    /// Clamps x and z into the rectangle, leaving y untouched
    pub fn clamp(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min_x, self.max_x),
            point.y,
            point.z.clamp(self.min_z, self.max_z),
        )
    }

    /// `other` lies within this rectangle; shared edges count as inside
    pub fn encloses(&self, other: &Rect) -> bool {
        other.min_x >= self.min_x && other.max_x <= self.max_x && other.min_z >= self.min_z && other.max_z <= self.max_z
    }

    /// Interiors intersect. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min_x < other.max_x && other.min_x < self.max_x && self.min_z < other.max_z && other.min_z < self.max_z
    }

    /// Strictly inside; a point on an edge is outside
    pub fn contains_interior(&self, point: Vec3) -> bool {
        point.x > self.min_x && point.x < self.max_x && point.z > self.min_z && point.z < self.max_z
    }

    /// Moves an interior point onto the nearest edge. Ties resolve in the
    /// order min x, max x, min z, max z. Points outside are returned as is.
    pub fn push_out(&self, point: Vec3) -> Vec3 {
        if !self.contains_interior(point) {
            return point;
        }

        let faces = [
            (point.x - self.min_x).abs(),
            (point.x - self.max_x).abs(),
            (point.z - self.min_z).abs(),
            (point.z - self.max_z).abs(),
        ];

        let mut nearest = 0;
        for (i, distance) in faces.iter().enumerate().skip(1) {
            if *distance < faces[nearest] {
                nearest = i;
            }
        }

        let mut out = point;
        match nearest {
            0 => out.x = self.min_x,
            1 => out.x = self.max_x,
            2 => out.z = self.min_z,
            _ => out.z = self.max_z,
        }
        out
    }
}
