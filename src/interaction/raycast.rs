use super::target::InteractableTarget;
use crate::math::Ray;

/// Nearest intersection reported by a raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Index of the owning target in the candidate slice
    pub target: usize,
    /// Index of the hit part within the target's geometry
    pub part: usize,
    pub distance: f32,
}

/// Hit-testing capability injected into the controller
pub trait RaycastService {
    /// Nearest hit along `ray`, or `None`. When two hits are equally near the
    /// implementation's own ordering decides.
    fn test_all(&self, ray: &Ray, candidates: &[InteractableTarget]) -> Option<RayHit>;
}

/// Slab-tests every part box of every candidate. Equal distances keep the
/// earlier candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbRaycaster;

impl RaycastService for AabbRaycaster {
    fn test_all(&self, ray: &Ray, candidates: &[InteractableTarget]) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;

        for (target, candidate) in candidates.iter().enumerate() {
            for (part, aabb) in candidate.geometry.parts().iter().enumerate() {
                let Some(distance) = ray.intersect(aabb) else {
                    continue;
                };
                if nearest.map_or(true, |hit| distance < hit.distance) {
                    nearest = Some(RayHit {
                        target,
                        part,
                        distance,
                    });
                }
            }
        }

        nearest
    }
}
