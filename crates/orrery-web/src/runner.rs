use orrery_core::{
    build_render_buffer, FixedTimestep, InputEvent, InputQueue, ProtocolLayout, RenderBuffer,
    TextureManifest, Viewer, ViewerConfig,
};

/// Drives the viewer from the browser's animation loop.
///
/// The `#[wasm_bindgen]` exports in lib.rs forward every call here; a
/// `thread_local!` cell holds the single instance because the exports are
/// free functions.
pub struct ViewerRunner {
    viewer: Viewer,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    layout: ProtocolLayout,
    initialized: bool,
}

impl ViewerRunner {
    pub fn new(config: ViewerConfig) -> Self {
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let viewer = Viewer::new(&config);

        Self {
            viewer,
            input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            initialized: false,
        }
    }

    /// Build the scene. Call once after construction.
    pub fn init(&mut self) {
        self.viewer.init();
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one animation frame: whole logic ticks first, then rebuild the
    /// instance buffer the GPU side draws from. Input stays queued until a
    /// tick actually runs, so no event is lost on a short frame.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.viewer.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.viewer.update(&self.input);
        }
        if steps > 0 {
            self.input.drain();
        }

        build_render_buffer(self.viewer.scene.iter(), &mut self.render_buffer);
    }

    /// Reassign texture slots from the loader's manifest JSON.
    pub fn load_textures(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => self.viewer.apply_texture_manifest(&manifest),
            Err(err) => log::warn!("texture manifest rejected: {err}"),
        }
    }

    // ---- Pointer accessors for JS-side reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.viewer.events.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.viewer.events.len() as u32
    }

    /// Panel fields as JSON for the DOM panel; "null" while hidden.
    /// The fields are static strings, so failure here is a programming
    /// error, not a runtime condition.
    pub fn panel_json(&self) -> String {
        self.viewer
            .panel
            .to_json()
            .expect("panel fields serialize to JSON")
    }

    pub fn panel_visible(&self) -> bool {
        self.viewer.panel.is_visible()
    }

    pub fn cursor_pointer(&self) -> bool {
        self.viewer.cursor() == orrery_core::CursorIcon::Pointer
    }

    // ---- Capacity accessors (read by TypeScript once at startup) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::catalog::BODY_COUNT;

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = ViewerRunner::new(ViewerConfig::default());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn tick_fills_the_render_buffer() {
        let mut runner = ViewerRunner::new(ViewerConfig::default());
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.instance_count(), BODY_COUNT as u32);
        assert!(runner.events_len() > 0);
    }

    #[test]
    fn short_frames_keep_input_queued() {
        let mut runner = ViewerRunner::new(ViewerConfig::default());
        runner.init();

        runner.push_input(InputEvent::Click);
        // Not enough accumulated time for a tick — the click must survive.
        runner.tick(0.001);
        assert_eq!(runner.input.len(), 1);

        runner.tick(1.0 / 60.0);
        assert!(runner.input.is_empty());
    }

    #[test]
    fn panel_json_defaults_to_null() {
        let mut runner = ViewerRunner::new(ViewerConfig::default());
        runner.init();
        assert_eq!(runner.panel_json(), "null");
        assert!(!runner.panel_visible());
        assert!(!runner.cursor_pointer());
    }

    #[test]
    fn load_textures_tolerates_bad_json() {
        let mut runner = ViewerRunner::new(ViewerConfig::default());
        runner.init();
        runner.load_textures("not json");

        let json = r#"{"textures": [{ "body": "earth", "path": "img/earth.jpg" }]}"#;
        runner.load_textures(json);
        let earth = runner.viewer.scene.find_by_name("earth").unwrap();
        assert_eq!(earth.texture_slot, 0);
    }
}
