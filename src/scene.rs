use glam::Vec3;

use crate::interaction::{InteractableTarget, TargetGeometry};
use crate::math::AABB;

/// Stand-in hit boxes for the room's clickable props, placed where the
/// loaded models sit. Each entry is (name, model origin, parts).
pub fn create_portfolio_targets() -> Vec<InteractableTarget> {
    let jukebox = InteractableTarget::new(
        "jbox",
        Vec3::new(16.0, 0.5, -16.0),
        TargetGeometry::new(vec![
            // Cabinet
            AABB::new(Vec3::new(15.0, 0.5, -17.0), Vec3::new(17.0, 4.0, -15.0)),
            // Dome
            AABB::new(Vec3::new(15.2, 4.0, -16.8), Vec3::new(16.8, 5.0, -15.2)),
        ]),
    );

    let computer = InteractableTarget::new(
        "computer",
        Vec3::new(16.8, 2.0, 16.8),
        TargetGeometry::new(vec![
            // Monitor
            AABB::new(Vec3::new(16.0, 2.4, 16.0), Vec3::new(17.6, 3.8, 17.6)),
            // Keyboard
            AABB::new(Vec3::new(15.8, 2.0, 15.8), Vec3::new(17.2, 2.4, 17.2)),
        ]),
    );

    let scroll = InteractableTarget::new(
        "scroll",
        Vec3::new(-8.5, 2.5, 18.6),
        TargetGeometry::single(AABB::from_center_size(
            Vec3::new(-8.5, 2.5, 18.6),
            Vec3::new(3.0, 2.0, 0.6),
        )),
    );

    let screens = [("tv1", 6.5), ("tv2", 10.0)].map(|(name, y)| {
        let origin = Vec3::new(-25.0, y, -19.0);
        InteractableTarget::new(
            name,
            origin,
            TargetGeometry::single(AABB::from_center_size(origin, Vec3::new(3.6, 3.0, 1.0))),
        )
    });

    let mut targets = vec![jukebox, computer, scroll];
    targets.extend(screens);
    targets
}
