//! What the simulation hands to an external renderer

use glam::{Mat4, Quat, Vec3};

use crate::sim::{TextureHandle, Transform};

/// One entity to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    /// translation * rotation(Y) * scale
    pub model: Mat4,
    pub tint: Vec3,
    pub texture: TextureHandle,
}

impl RenderItem {
    pub fn from_transform(t: &Transform) -> Self {
        Self {
            model: model_matrix(t),
            tint: t.colour,
            texture: t.texture,
        }
    }
}

/// Compose translation, then rotation about +Y, then scale
#[inline]
pub fn model_matrix(t: &Transform) -> Mat4 {
    Mat4::from_scale_rotation_translation(t.scale, Quat::from_rotation_y(t.rotation), t.position)
}

/// Receives draw submissions. Implemented by the host renderer.
pub trait RenderSink {
    fn submit(&mut self, item: RenderItem);
}

impl RenderSink for Vec<RenderItem> {
    fn submit(&mut self, item: RenderItem) {
        self.push(item);
    }
}
