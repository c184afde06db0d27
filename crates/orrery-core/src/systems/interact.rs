//! Hover and selection — the pointer-driven highlight state machine.
//!
//! Three synchronous transitions: pointer-move, click, panel-dismiss. Each
//! runs to completion on the UI thread; within pointer-move, the previous
//! hover is reverted before the new highlight is applied.

use glam::Vec2;

use crate::api::types::BodyId;
use crate::components::body::BodyInstance;
use crate::core::scene::Scene;
use crate::panel::{PanelFields, PanelState};
use crate::renderer::camera::OrbitCamera;
use crate::systems::pick::pick;

/// Scale factor applied to a hovered body.
pub const HOVER_SCALE: f32 = 1.05;
/// Scale factor applied to a selected body.
pub const SELECT_SCALE: f32 = 1.10;

/// Cursor affordance the host page should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Auto,
    Pointer,
}

/// Pointer interaction state. One per viewer, owned by the context that
/// dispatches events — never a module-level global.
#[derive(Debug, Default)]
pub struct InteractionState {
    pub hovered: Option<BodyId>,
    pub selected: Option<BodyId>,
    /// Last known pointer position in normalized device coordinates.
    /// Clicks pick at this position.
    pub pointer_ndc: Vec2,
    pub cursor: CursorIcon,
}

/// The body set is fixed at init, so an interaction id that fails to
/// resolve is a programming error, not a runtime condition.
fn body_mut(scene: &mut Scene, id: BodyId) -> &mut BodyInstance {
    scene
        .get_mut(id)
        .expect("interaction refers to a body missing from the scene")
}

/// Pointer-move transition: update the hover highlight and the cursor.
pub fn pointer_moved(
    state: &mut InteractionState,
    scene: &mut Scene,
    camera: &OrbitCamera,
    ndc: Vec2,
) {
    state.pointer_ndc = ndc;
    let picked = pick(ndc, camera, scene.iter());

    // Revert the previous hover unless it is still under the pointer or is
    // the current selection.
    if let Some(prev) = state.hovered {
        if Some(prev) != picked && Some(prev) != state.selected {
            body_mut(scene, prev).revert();
        }
    }

    match picked {
        Some(id) => {
            // Selection outranks hover; leave a selected body untouched.
            if Some(id) != state.selected {
                body_mut(scene, id).highlight(HOVER_SCALE);
            }
            state.hovered = Some(id);
            state.cursor = CursorIcon::Pointer;
        }
        None => {
            state.hovered = None;
            state.cursor = CursorIcon::Auto;
        }
    }
}

/// Click transition: move the selection to the body under the pointer, or
/// clear it and hide the panel when the click lands on empty space.
pub fn clicked(
    state: &mut InteractionState,
    scene: &mut Scene,
    camera: &OrbitCamera,
    panel: &mut PanelState,
) {
    if let Some(prev) = state.selected.take() {
        body_mut(scene, prev).revert();
    }

    match pick(state.pointer_ndc, camera, scene.iter()) {
        Some(id) => {
            let body = body_mut(scene, id);
            body.highlight(SELECT_SCALE);
            let fields = PanelFields::for_body(body.descriptor());
            state.selected = Some(id);
            panel.show(fields);
            log::debug!("selected {}", fields.name);
        }
        None => {
            state.selected = None;
            panel.hide();
        }
    }
}

/// Panel-dismiss transition: hide the panel and release the selection.
/// Calling twice in a row is the same as calling once.
pub fn panel_dismissed(state: &mut InteractionState, scene: &mut Scene, panel: &mut PanelState) {
    panel.hide();
    if let Some(id) = state.selected.take() {
        body_mut(scene, id).revert();
    }
}
