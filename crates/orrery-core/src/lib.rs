pub mod api;
pub mod assets;
pub mod bridge;
pub mod catalog;
pub mod components;
pub mod core;
pub mod input;
pub mod panel;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::types::{BodyId, UiEvent};
pub use api::viewer::{Viewer, ViewerConfig};
pub use assets::manifest::{TextureEntry, TextureManifest};
pub use bridge::protocol::ProtocolLayout;
pub use catalog::{BodyDescriptor, BodyInfo, BodyKind, CATALOG, SPIN_RATE};
pub use components::body::{Appearance, BodyInstance, BASE_SCALE};
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use panel::{PanelFields, PanelState};
pub use renderer::camera::OrbitCamera;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::interact::{CursorIcon, InteractionState, HOVER_SCALE, SELECT_SCALE};
pub use systems::orbit::advance_orbits;
pub use systems::pick::{pick, Ray};
pub use systems::render::build_render_buffer;
pub use systems::spawn::spawn_bodies;
