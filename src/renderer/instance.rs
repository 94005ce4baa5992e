//! GPU-ready instance packing

use bytemuck::{Pod, Zeroable};

use super::sink::{RenderItem, RenderSink};

/// Per-instance data (must match the host's vertex layout)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4], // offset 0
    pub tint: [f32; 3],       // offset 64
    pub texture: u32,         // offset 76
}

impl From<&RenderItem> for InstanceRaw {
    fn from(item: &RenderItem) -> Self {
        Self {
            model: item.model.to_cols_array_2d(),
            tint: item.tint.to_array(),
            texture: item.texture.0,
        }
    }
}

/// Sink that collects a frame's instances for a single upload
#[derive(Debug, Default)]
pub struct InstanceBatch {
    instances: Vec<InstanceRaw>,
}

impl InstanceBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[InstanceRaw] {
        &self.instances
    }

    /// Raw bytes, ready for a vertex buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl RenderSink for InstanceBatch {
    fn submit(&mut self, item: RenderItem) {
        self.instances.push(InstanceRaw::from(&item));
    }
}
