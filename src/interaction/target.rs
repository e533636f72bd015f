use std::collections::BTreeMap;

use glam::Vec3;
use log::{debug, warn};

use super::raycast::RayHit;
use crate::camera::CameraPose;
use crate::config::InspectionPose;
use crate::error::{ControllerError, ControllerResult};
use crate::math::AABB;

/// Raycast handle for a target: the boxes of every mesh part it owns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TargetGeometry {
    parts: Vec<AABB>,
}

impl TargetGeometry {
    pub fn new(parts: Vec<AABB>) -> Self {
        Self { parts }
    }

    pub fn single(aabb: AABB) -> Self {
        Self::new(vec![aabb])
    }

    pub fn parts(&self) -> &[AABB] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// A clickable scene object, supplied by the scene owner after loading
#[derive(Debug, Clone, PartialEq)]
pub struct InteractableTarget {
    pub name: String,
    pub world_position: Vec3,
    pub geometry: TargetGeometry,
}

impl InteractableTarget {
    pub fn new(name: impl Into<String>, world_position: Vec3, geometry: TargetGeometry) -> Self {
        Self {
            name: name.into(),
            world_position,
            geometry,
        }
    }

    /// Target whose geometry is one box of `size` around its position
    pub fn boxed(name: impl Into<String>, world_position: Vec3, size: Vec3) -> Self {
        Self::new(
            name,
            world_position,
            TargetGeometry::single(AABB::from_center_size(world_position, size)),
        )
    }

    pub fn validate(&self) -> ControllerResult<()> {
        if self.name.trim().is_empty() {
            return Err(ControllerError::EmptyTargetName);
        }
        if !self.world_position.is_finite() {
            return Err(ControllerError::NonFinitePosition(self.name.clone()));
        }
        if self.geometry.is_empty() {
            return Err(ControllerError::MissingGeometry(self.name.clone()));
        }
        if !self.geometry.parts().iter().all(AABB::is_valid) {
            return Err(ControllerError::InvalidGeometry(self.name.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct TargetEntry {
    inspection: CameraPose,
    radius: f32,
}

/// A registered target together with its zoom parameters
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTarget<'a> {
    pub target: &'a InteractableTarget,
    pub inspection: CameraPose,
    pub radius: f32,
}

/// Outcome of a registration call
#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub accepted: usize,
    pub rejected: Vec<ControllerError>,
}

impl RegistrationReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[derive(Debug, Default, Clone)]
pub struct TargetRegistry {
    targets: Vec<InteractableTarget>,
    entries: Vec<TargetEntry>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole registry. Malformed targets and targets without an
    /// inspection pose are skipped and reported; the rest are kept.
    pub fn replace(
        &mut self,
        targets: Vec<InteractableTarget>,
        poses: &BTreeMap<String, InspectionPose>,
        default_radius: f32,
    ) -> RegistrationReport {
        let mut report = RegistrationReport::default();
        self.targets.clear();
        self.entries.clear();

        for target in targets {
            let checked = target.validate().and_then(|()| {
                poses
                    .get(&target.name)
                    .ok_or_else(|| ControllerError::MissingInspectionPose(target.name.clone()))
            });

            match checked {
                Ok(pose) => {
                    self.entries.push(TargetEntry {
                        inspection: pose.pose(),
                        radius: pose.interaction_radius.unwrap_or(default_radius),
                    });
                    self.targets.push(target);
                    report.accepted += 1;
                }
                Err(err) => {
                    warn!("Skipping interactable target: {}", err);
                    report.rejected.push(err);
                }
            }
        }

        debug!(
            "Registered {} interactable targets ({} rejected)",
            report.accepted,
            report.rejected.len()
        );
        report
    }

    pub fn targets(&self) -> &[InteractableTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Walk from a hit part up to the registered target that owns it
    pub fn resolve(&self, hit: &RayHit) -> Option<ResolvedTarget<'_>> {
        let target = self.targets.get(hit.target)?;
        let entry = self.entries.get(hit.target)?;
        if hit.part >= target.geometry.parts().len() {
            return None;
        }
        Some(ResolvedTarget {
            target,
            inspection: entry.inspection,
            radius: entry.radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ControllerConfig;

    fn jbox_at(z: f32) -> InteractableTarget {
        InteractableTarget::boxed("jbox", Vec3::new(0.0, 2.5, z), Vec3::splat(2.0))
    }

    #[test]
    fn validate_rejects_malformed_targets() {
        let empty_name = InteractableTarget::boxed(" ", Vec3::ZERO, Vec3::ONE);
        assert!(matches!(empty_name.validate(), Err(ControllerError::EmptyTargetName)));

        let nan = InteractableTarget::boxed("jbox", Vec3::new(f32::NAN, 0.0, 0.0), Vec3::ONE);
        assert!(matches!(nan.validate(), Err(ControllerError::NonFinitePosition(_))));

        let bare = InteractableTarget::new("jbox", Vec3::ZERO, TargetGeometry::default());
        assert!(matches!(bare.validate(), Err(ControllerError::MissingGeometry(_))));

        let inverted = InteractableTarget::new(
            "jbox",
            Vec3::ZERO,
            TargetGeometry::single(AABB::new(Vec3::ONE, Vec3::ZERO)),
        );
        assert!(matches!(inverted.validate(), Err(ControllerError::InvalidGeometry(_))));
    }

    #[test]
    fn replace_skips_bad_entries_and_keeps_good_ones() {
        let config = ControllerConfig::default();
        let mut registry = TargetRegistry::new();
        let report = registry.replace(
            vec![
                jbox_at(-10.0),
                InteractableTarget::boxed("tv9", Vec3::ZERO, Vec3::ONE),
                InteractableTarget::new("scroll", Vec3::ZERO, TargetGeometry::default()),
            ],
            &config.inspection_poses,
            config.interaction_radius,
        );

        assert_eq!(report.accepted, 1);
        assert_eq!(report.rejected.len(), 2);
        assert!(matches!(report.rejected[0], ControllerError::MissingInspectionPose(_)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.targets()[0].name, "jbox");
    }

    #[test]
    fn replace_is_last_write_wins() {
        let config = ControllerConfig::default();
        let mut registry = TargetRegistry::new();
        registry.replace(vec![jbox_at(-10.0)], &config.inspection_poses, 15.0);
        let report = registry.replace(Vec::new(), &config.inspection_poses, 15.0);
        assert!(report.is_clean());
        assert!(registry.is_empty());
    }

    #[test]
    fn resolve_uses_radius_override() {
        let mut config = ControllerConfig::default();
        config
            .inspection_poses
            .insert("jbox".to_string(), InspectionPose::new([0.0, 3.0, 0.0], 0.0, 0.0).with_radius(8.0));
        let mut registry = TargetRegistry::new();
        registry.replace(vec![jbox_at(-10.0)], &config.inspection_poses, 15.0);

        let hit = RayHit { target: 0, part: 0, distance: 9.0 };
        let resolved = registry.resolve(&hit).unwrap();
        assert_eq!(resolved.radius, 8.0);
        assert_eq!(resolved.target.name, "jbox");
    }

    #[test]
    fn resolve_rejects_stale_hits() {
        let registry = TargetRegistry::new();
        assert!(registry.resolve(&RayHit { target: 0, part: 0, distance: 1.0 }).is_none());
    }
}
