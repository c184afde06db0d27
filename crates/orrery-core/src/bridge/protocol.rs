/// Shared-memory layout the TypeScript renderer reads.
/// Must stay in sync with the TS `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Instances: max_instances × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init; TypeScript reads
/// them back to compute section offsets.

use crate::api::viewer::ViewerConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_MAX_INSTANCES: usize = 1;
pub const HEADER_INSTANCE_COUNT: usize = 2;
pub const HEADER_MAX_EVENTS: usize = 3;
pub const HEADER_EVENT_COUNT: usize = 4;
pub const HEADER_CURSOR_POINTER: usize = 5;
pub const HEADER_PANEL_VISIBLE: usize = 6;
pub const HEADER_PROTOCOL_VERSION: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 8;

/// Floats per UI event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum UI events per frame.
    pub max_events: usize,

    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let event_data_offset = instance_data_offset + instance_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_events,
            instance_data_floats,
            event_data_floats,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from a ViewerConfig.
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }
}
