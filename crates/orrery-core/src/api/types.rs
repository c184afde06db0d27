use bytemuck::{Pod, Zeroable};

/// Unique identifier for a body instance in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// A UI event communicated from Rust to the host page via linear memory.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct UiEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl UiEvent {
    pub const FLOATS: usize = 4;
}
