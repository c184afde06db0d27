/// Input event types the viewer understands.
/// Pointer coordinates are client pixels; the viewer normalizes them.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// The pointer moved to client pixels (x, y).
    PointerMove { x: f32, y: f32 },
    /// A press began at client pixels (x, y). Starts a camera drag.
    PointerDown { x: f32, y: f32 },
    /// The press ended at client pixels (x, y). Ends the camera drag.
    PointerUp { x: f32, y: f32 },
    /// A click at the last known pointer position.
    Click,
    /// Wheel scroll; positive delta zooms out.
    Wheel { delta: f32 },
    /// The viewport was resized to (width, height) client pixels.
    Resize { width: f32, height: f32 },
    /// The info panel's dismiss affordance was activated.
    PanelDismiss,
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
