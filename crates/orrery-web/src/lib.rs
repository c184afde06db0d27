pub mod runner;

pub use runner::ViewerRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use orrery_core::{InputEvent, ViewerConfig};

thread_local! {
    static RUNNER: RefCell<Option<ViewerRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut ViewerRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Viewer not initialized. Call viewer_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn viewer_init(viewport_width: f32, viewport_height: f32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = ViewerConfig {
        viewport_width,
        viewport_height,
        ..ViewerConfig::default()
    };
    let mut runner = ViewerRunner::new(config);
    runner.init();

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("orrery: initialized");
}

#[wasm_bindgen]
pub fn viewer_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

#[wasm_bindgen]
pub fn viewer_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn viewer_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn viewer_pointer_up(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
}

/// Click at the last known pointer position, like a window click listener.
#[wasm_bindgen]
pub fn viewer_click() {
    with_runner(|r| r.push_input(InputEvent::Click));
}

#[wasm_bindgen]
pub fn viewer_wheel(delta: f32) {
    with_runner(|r| r.push_input(InputEvent::Wheel { delta }));
}

#[wasm_bindgen]
pub fn viewer_resize(width: f32, height: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height }));
}

/// The DOM panel's close button forwards here.
#[wasm_bindgen]
pub fn viewer_panel_dismiss() {
    with_runner(|r| r.push_input(InputEvent::PanelDismiss));
}

#[wasm_bindgen]
pub fn viewer_load_textures(json: &str) {
    with_runner(|r| r.load_textures(json));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_events_len() -> u32 {
    with_runner(|r| r.events_len())
}

#[wasm_bindgen]
pub fn get_panel_json() -> String {
    with_runner(|r| r.panel_json())
}

#[wasm_bindgen]
pub fn get_panel_visible() -> bool {
    with_runner(|r| r.panel_visible())
}

#[wasm_bindgen]
pub fn get_cursor_pointer() -> bool {
    with_runner(|r| r.cursor_pointer())
}

// ---- Capacity accessors ----

#[wasm_bindgen]
pub fn get_max_instances() -> u32 {
    with_runner(|r| r.max_instances())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
