//! Scene construction from the body catalog.

use crate::api::types::BodyId;
use crate::catalog::BODY_COUNT;
use crate::components::body::BodyInstance;
use crate::core::scene::Scene;

/// Spawn one instance per catalog entry, in catalog order.
/// Ids run 1..=BODY_COUNT; texture slots default to catalog order.
/// Called once at startup — the body set never changes afterward.
pub fn spawn_bodies(scene: &mut Scene) {
    for slot in 0..BODY_COUNT {
        scene.spawn(BodyInstance::new(BodyId(slot as u32 + 1), slot));
    }
    log::info!("scene: spawned {} bodies", scene.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::{Appearance, BASE_SCALE};

    #[test]
    fn spawns_every_catalog_entry_once() {
        let mut scene = Scene::new();
        spawn_bodies(&mut scene);
        assert_eq!(scene.len(), BODY_COUNT);
        assert!(scene.find_by_name("sun").is_some());
        assert!(scene.find_by_name("neptune").is_some());
    }

    #[test]
    fn bodies_start_idle_on_the_positive_x_axis() {
        let mut scene = Scene::new();
        spawn_bodies(&mut scene);
        for body in scene.iter() {
            assert_eq!(body.appearance, Appearance::Regular);
            assert_eq!(body.scale, BASE_SCALE);
            assert_eq!(body.pivot_angle, 0.0);
            let pos = body.world_position();
            assert_eq!(pos.x, body.descriptor().orbit_radius);
            assert_eq!(pos.y, 0.0);
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut scene = Scene::new();
        spawn_bodies(&mut scene);
        let mut ids: Vec<u32> = scene.iter().map(|b| b.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), BODY_COUNT);
    }
}
