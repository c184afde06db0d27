//! Orbital and axial rotation — the per-tick animation step.

use crate::catalog::SPIN_RATE;
use crate::core::scene::Scene;

/// Advance every body's pivot by its orbital rate and its own axis by the
/// uniform spin rate. One call per logic tick. Interaction state is never
/// read here — highlighted bodies orbit and spin like the rest.
pub fn advance_orbits(scene: &mut Scene) {
    for body in scene.iter_mut() {
        body.pivot_angle += body.descriptor().orbit_rate;
        body.spin_angle += SPIN_RATE;
    }
}
