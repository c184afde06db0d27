use glam::Vec3;

use crate::api::types::BodyId;
use crate::catalog::{BodyDescriptor, CATALOG};

/// Visual material state of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Regular,
    Highlighted,
}

/// The scale every revert restores.
pub const BASE_SCALE: f32 = 1.0;

/// Mutable render state for one catalog entry.
///
/// Owned by the [`Scene`](crate::core::scene::Scene); the picking engine
/// reads it, the interaction state machine and the animation step mutate it.
#[derive(Debug, Clone)]
pub struct BodyInstance {
    pub id: BodyId,
    /// Index into [`CATALOG`].
    pub slot: usize,
    /// Angular position of the orbital pivot about +Z, radians.
    pub pivot_angle: f32,
    /// Angular position about the body's own axis, radians.
    pub spin_angle: f32,
    pub appearance: Appearance,
    /// Uniform scale multiplier on the descriptor radius.
    pub scale: f32,
    /// Texture slot the renderer binds. Defaults to catalog order until a
    /// manifest reassigns it.
    pub texture_slot: u32,
}

impl BodyInstance {
    pub fn new(id: BodyId, slot: usize) -> Self {
        Self {
            id,
            slot,
            pivot_angle: 0.0,
            spin_angle: 0.0,
            appearance: Appearance::Regular,
            scale: BASE_SCALE,
            texture_slot: slot as u32,
        }
    }

    pub fn descriptor(&self) -> &'static BodyDescriptor {
        &CATALOG[self.slot]
    }

    /// World position: the pivot arm rotated about +Z.
    /// The sun's arm has zero length, so it stays at the origin.
    pub fn world_position(&self) -> Vec3 {
        let d = self.descriptor();
        Vec3::new(
            d.orbit_radius * self.pivot_angle.cos(),
            d.orbit_radius * self.pivot_angle.sin(),
            0.0,
        )
    }

    /// Bounding-sphere radius at the current scale.
    pub fn picking_radius(&self) -> f32 {
        self.descriptor().radius * self.scale
    }

    /// Switch to the highlighted material at the given scale factor.
    pub fn highlight(&mut self, scale: f32) {
        self.appearance = Appearance::Highlighted;
        self.scale = scale;
    }

    /// Restore the regular material and base scale. Always both —
    /// appearance and scale never revert separately.
    pub fn revert(&mut self) {
        self.appearance = Appearance::Regular;
        self.scale = BASE_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EARTH, SUN};

    #[test]
    fn new_instance_is_idle_at_base_scale() {
        let body = BodyInstance::new(BodyId(4), EARTH);
        assert_eq!(body.appearance, Appearance::Regular);
        assert_eq!(body.scale, BASE_SCALE);
        assert_eq!(body.descriptor().name, "earth");
    }

    #[test]
    fn world_position_follows_the_pivot() {
        let mut body = BodyInstance::new(BodyId(4), EARTH);
        assert_eq!(body.world_position(), Vec3::new(50.0, 0.0, 0.0));

        body.pivot_angle = std::f32::consts::FRAC_PI_2;
        let pos = body.world_position();
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn sun_stays_at_the_origin_while_its_pivot_turns() {
        let mut sun = BodyInstance::new(BodyId(1), SUN);
        sun.pivot_angle = 1.7;
        assert_eq!(sun.world_position(), Vec3::ZERO);
    }

    #[test]
    fn revert_restores_appearance_and_scale_together() {
        let mut body = BodyInstance::new(BodyId(4), EARTH);
        body.highlight(1.10);
        assert_eq!(body.appearance, Appearance::Highlighted);
        assert_eq!(body.picking_radius(), 3.0 * 1.10);

        body.revert();
        assert_eq!(body.appearance, Appearance::Regular);
        assert_eq!(body.scale, BASE_SCALE);
    }
}
