use bytemuck::{Pod, Zeroable};

/// Per-body render data read by the JS renderer from wasm linear memory.
/// Must match the TypeScript protocol: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    /// World-space sphere center.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World-space sphere radius, highlight scaling already applied.
    pub radius: f32,
    /// Rotation about the body's own axis, radians.
    pub spin: f32,
    /// 1.0 when the highlighted material should be bound, else 0.0.
    pub highlighted: f32,
    /// Texture slot to bind for this body.
    pub texture: f32,
    pub _pad: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all body instances for one frame, spawn order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for JS-side reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 32);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn push_and_count() {
        let mut buf = RenderBuffer::with_capacity(4);
        buf.push(RenderInstance::default());
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
