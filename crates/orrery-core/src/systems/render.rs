//! Render-buffer construction — flattens the scene for the GPU side.

use crate::components::body::{Appearance, BodyInstance};
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the instance buffer from the scene, in spawn order.
/// Call after the animation step so positions and spin are final for the
/// frame; the JS renderer draws exactly what this buffer holds.
pub fn build_render_buffer<'a>(
    bodies: impl Iterator<Item = &'a BodyInstance>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for body in bodies {
        let pos = body.world_position();
        buffer.push(RenderInstance {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius: body.picking_radius(),
            spin: body.spin_angle,
            highlighted: if body.appearance == Appearance::Highlighted {
                1.0
            } else {
                0.0
            },
            texture: body.texture_slot as f32,
            _pad: 0.0,
        });
    }
}
