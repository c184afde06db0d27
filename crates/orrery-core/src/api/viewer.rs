use glam::Vec2;

use crate::api::types::{BodyId, UiEvent};
use crate::assets::manifest::TextureManifest;
use crate::core::scene::Scene;
use crate::input::queue::{InputEvent, InputQueue};
use crate::panel::PanelState;
use crate::renderer::camera::OrbitCamera;
use crate::systems::interact::{self, CursorIcon, InteractionState};
use crate::systems::orbit::advance_orbits;
use crate::systems::spawn::spawn_bodies;

/// UI event kinds forwarded to the host page.
pub const EVENT_HOVER: f32 = 1.0;
pub const EVENT_SELECTION: f32 = 2.0;
pub const EVENT_PANEL: f32 = 3.0;

/// Pointer-drag to orbit-angle conversion, radians per client pixel.
const ROTATE_SPEED: f32 = 0.005;
/// Multiplicative distance change per 100 units of wheel delta.
const ZOOM_PER_NOTCH: f32 = 1.1;

/// Configuration for the viewer, provided once at startup.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Viewport size in client pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    /// Initial camera distance from the sun.
    pub camera_distance: f32,
    /// Maximum number of render instances (default: 16).
    pub max_instances: usize,
    /// Maximum number of UI events per frame (default: 64).
    pub max_events: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y_deg: 75.0,
            z_near: 0.1,
            z_far: 1000.0,
            camera_distance: 150.0,
            max_instances: 16,
            max_events: 64,
        }
    }
}

/// The viewer context: scene, camera, interaction state, and panel.
/// All shared mutable state lives here and is threaded through the
/// systems explicitly.
pub struct Viewer {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub interaction: InteractionState,
    pub panel: PanelState,
    pub events: Vec<UiEvent>,
    fixed_dt: f32,
    viewport: Vec2,
    dragging: bool,
    last_pointer: Vec2,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        let aspect = config.viewport_width / config.viewport_height;
        Self {
            scene: Scene::new(),
            camera: OrbitCamera::new(
                config.fov_y_deg,
                aspect,
                config.z_near,
                config.z_far,
                config.camera_distance,
            ),
            interaction: InteractionState::default(),
            panel: PanelState::new(),
            events: Vec::with_capacity(config.max_events),
            fixed_dt: config.fixed_dt,
            viewport: Vec2::new(config.viewport_width, config.viewport_height),
            dragging: false,
            last_pointer: Vec2::ZERO,
        }
    }

    /// Build the scene. Call once after construction.
    pub fn init(&mut self) {
        spawn_bodies(&mut self.scene);
    }

    /// One logic tick: handle queued input, advance rotations, ease the
    /// camera, emit this frame's UI events.
    pub fn update(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y } => self.on_pointer_move(x, y),
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.last_pointer = Vec2::new(x, y);
                }
                InputEvent::PointerUp { .. } => self.dragging = false,
                InputEvent::Click => interact::clicked(
                    &mut self.interaction,
                    &mut self.scene,
                    &self.camera,
                    &mut self.panel,
                ),
                InputEvent::Wheel { delta } => {
                    self.camera.zoom_by(ZOOM_PER_NOTCH.powf(delta / 100.0));
                }
                InputEvent::Resize { width, height } => self.on_resize(width, height),
                InputEvent::PanelDismiss => interact::panel_dismissed(
                    &mut self.interaction,
                    &mut self.scene,
                    &mut self.panel,
                ),
            }
        }

        advance_orbits(&mut self.scene);
        self.camera.update(self.fixed_dt);
        self.emit_frame_events();
    }

    /// Clear per-frame transient data. The runner calls this once per
    /// animation frame, before any ticks run.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Reassign texture slots from a loader manifest. Bodies the manifest
    /// does not mention keep their catalog-order default.
    pub fn apply_texture_manifest(&mut self, manifest: &TextureManifest) {
        for body in self.scene.iter_mut() {
            match manifest.slot_for(body.descriptor().name) {
                Some(slot) => body.texture_slot = slot,
                None => log::warn!("no texture listed for {}", body.descriptor().name),
            }
        }
    }

    pub fn cursor(&self) -> CursorIcon {
        self.interaction.cursor
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.dragging {
            let delta = Vec2::new(x, y) - self.last_pointer;
            // Dragging right swings the eye left around the scene, so the
            // content appears to follow the pointer.
            self.camera
                .orbit(-delta.x * ROTATE_SPEED, delta.y * ROTATE_SPEED);
            self.last_pointer = Vec2::new(x, y);
        }
        let ndc = self.pointer_ndc(x, y);
        interact::pointer_moved(&mut self.interaction, &mut self.scene, &self.camera, ndc);
    }

    fn on_resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
            self.camera.resize(width, height);
        }
    }

    /// Map client pixels to normalized device coordinates: [-1,1] on both
    /// axes, origin at the viewport center, Y up.
    fn pointer_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.viewport.x) * 2.0 - 1.0,
            -(y / self.viewport.y) * 2.0 + 1.0,
        )
    }

    fn slot_of(&self, id: Option<BodyId>) -> f32 {
        match id {
            Some(id) => {
                self.scene
                    .get(id)
                    .expect("interaction refers to a body missing from the scene")
                    .slot as f32
            }
            None => -1.0,
        }
    }

    fn emit_frame_events(&mut self) {
        let hovered = self.slot_of(self.interaction.hovered);
        let selected = self.slot_of(self.interaction.selected);
        self.events.push(UiEvent {
            kind: EVENT_HOVER,
            a: hovered,
            b: 0.0,
            c: 0.0,
        });
        self.events.push(UiEvent {
            kind: EVENT_SELECTION,
            a: selected,
            b: 0.0,
            c: 0.0,
        });
        self.events.push(UiEvent {
            kind: EVENT_PANEL,
            a: if self.panel.is_visible() { 1.0 } else { 0.0 },
            b: 0.0,
            c: 0.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BODY_COUNT, EARTH};
    use crate::components::body::{Appearance, BASE_SCALE};
    use crate::systems::interact::{HOVER_SCALE, SELECT_SCALE};

    fn viewer() -> Viewer {
        let mut viewer = Viewer::new(&ViewerConfig::default());
        viewer.init();
        viewer
    }

    /// Client-pixel coordinate over a body's projected center.
    fn client_over(viewer: &Viewer, name: &str) -> (f32, f32) {
        let pos = viewer.scene.find_by_name(name).unwrap().world_position();
        let clip = viewer.camera.view_proj().project_point3(pos);
        let config = ViewerConfig::default();
        (
            (clip.x + 1.0) / 2.0 * config.viewport_width,
            (1.0 - clip.y) / 2.0 * config.viewport_height,
        )
    }

    #[test]
    fn init_spawns_the_full_scene() {
        let viewer = viewer();
        assert_eq!(viewer.scene.len(), BODY_COUNT);
    }

    #[test]
    fn viewport_center_maps_to_ndc_origin() {
        let viewer = viewer();
        let ndc = viewer.pointer_ndc(1280.0 / 2.0, 720.0 / 2.0);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);

        let corner = viewer.pointer_ndc(0.0, 0.0);
        assert_eq!(corner, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn pointer_move_then_click_selects_earth() {
        let mut viewer = viewer();
        let (x, y) = client_over(&viewer, "earth");

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x, y });
        input.push(InputEvent::Click);
        viewer.update(&input);

        let earth = viewer.scene.find_by_name("earth").unwrap();
        assert_eq!(viewer.interaction.selected, Some(earth.id));
        assert_eq!(earth.appearance, Appearance::Highlighted);
        assert!((earth.scale - SELECT_SCALE).abs() < 1e-6);
        assert!(viewer.panel.is_visible());
        assert_eq!(viewer.panel.fields().unwrap().name, "Earth");
    }

    #[test]
    fn hover_reports_pointer_cursor_and_event() {
        let mut viewer = viewer();
        let (x, y) = client_over(&viewer, "earth");

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x, y });
        viewer.update(&input);

        assert_eq!(viewer.cursor(), CursorIcon::Pointer);
        let earth = viewer.scene.find_by_name("earth").unwrap();
        assert!((earth.scale - HOVER_SCALE).abs() < 1e-6);

        let hover = viewer
            .events
            .iter()
            .find(|e| e.kind == EVENT_HOVER)
            .unwrap();
        assert_eq!(hover.a, EARTH as f32);
    }

    #[test]
    fn dismiss_event_reverts_the_selection() {
        let mut viewer = viewer();
        let (x, y) = client_over(&viewer, "earth");

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x, y });
        input.push(InputEvent::Click);
        input.push(InputEvent::PanelDismiss);
        viewer.update(&input);

        let earth = viewer.scene.find_by_name("earth").unwrap();
        assert_eq!(viewer.interaction.selected, None);
        assert_eq!(earth.appearance, Appearance::Regular);
        assert_eq!(earth.scale, BASE_SCALE);
        assert!(!viewer.panel.is_visible());
    }

    #[test]
    fn ticks_advance_spin_regardless_of_selection() {
        let mut viewer = viewer();
        let (x, y) = client_over(&viewer, "earth");
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove { x, y });
        input.push(InputEvent::Click);
        viewer.update(&input);

        let empty = InputQueue::new();
        for _ in 0..99 {
            viewer.update(&empty);
        }

        let earth = viewer.scene.find_by_name("earth").unwrap();
        assert!((earth.spin_angle - 1.0).abs() < 1e-4);
        assert!((earth.scale - SELECT_SCALE).abs() < 1e-6);
    }

    #[test]
    fn wheel_zooms_the_camera_in() {
        let mut viewer = viewer();
        let mut input = InputQueue::new();
        input.push(InputEvent::Wheel { delta: -100.0 });
        viewer.update(&input);

        let empty = InputQueue::new();
        for _ in 0..600 {
            viewer.update(&empty);
        }
        assert!(viewer.camera.distance() < 150.0);
    }

    #[test]
    fn resize_updates_normalization_and_aspect() {
        let mut viewer = viewer();
        let mut input = InputQueue::new();
        input.push(InputEvent::Resize {
            width: 1000.0,
            height: 500.0,
        });
        viewer.update(&input);

        assert_eq!(viewer.camera.aspect, 2.0);
        let ndc = viewer.pointer_ndc(500.0, 250.0);
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }

    #[test]
    fn drag_orbits_the_camera() {
        let mut viewer = viewer();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 600.0, y: 400.0 });
        input.push(InputEvent::PointerMove { x: 700.0, y: 400.0 });
        input.push(InputEvent::PointerUp { x: 700.0, y: 400.0 });
        viewer.update(&input);

        let empty = InputQueue::new();
        for _ in 0..600 {
            viewer.update(&empty);
        }
        assert!((viewer.camera.yaw() - (-0.5)).abs() < 1e-2);
    }
}
