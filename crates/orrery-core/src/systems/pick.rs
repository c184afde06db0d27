//! Pointer picking — ray construction and nearest-body queries.

use glam::{Vec2, Vec3};

use crate::api::types::BodyId;
use crate::components::body::BodyInstance;
use crate::renderer::camera::OrbitCamera;

/// A world-space ray cast from the camera through a pointer coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    /// Unproject a normalized pointer coordinate ([-1,1] on both axes,
    /// Y up) through the camera's inverse view-projection. The ray runs
    /// from the near-plane point toward the far-plane point.
    pub fn through_pointer(ndc: Vec2, camera: &OrbitCamera) -> Self {
        let inv = camera.view_proj().inverse();
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            dir: (far - near).normalize(),
        }
    }

    /// Distance along the ray to its nearest intersection with a sphere.
    /// None when the ray misses or the sphere lies entirely behind the
    /// origin; the far root is used when the origin is inside the sphere.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t = -b - sqrt_disc;
        if t >= 0.0 {
            return Some(t);
        }
        let t = -b + sqrt_disc;
        if t >= 0.0 {
            Some(t)
        } else {
            None
        }
    }
}

/// Return the body nearest along the pointer ray, if any.
///
/// Pure query — no side effects, no allocation — so it is safe to run on
/// every pointer-move. Strict `<` keeps the first body in iteration order
/// on an exact distance tie.
pub fn pick<'a>(
    ndc: Vec2,
    camera: &OrbitCamera,
    bodies: impl Iterator<Item = &'a BodyInstance>,
) -> Option<BodyId> {
    let ray = Ray::through_pointer(ndc, camera);
    let mut nearest: Option<(BodyId, f32)> = None;
    for body in bodies {
        if let Some(t) = ray.intersect_sphere(body.world_position(), body.picking_radius()) {
            if nearest.map_or(true, |(_, best)| t < best) {
                nearest = Some((body.id, t));
            }
        }
    }
    nearest.map(|(id, _)| id)
}
