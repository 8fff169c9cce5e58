//! Per-body instance records for the drawing layer
//!
//! The renderer reads these after a frame has settled and uploads them as an
//! instance buffer for a unit sphere mesh.

use bytemuck::{Pod, Zeroable};

use crate::sim::Body;

/// One sphere instance: transform and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub translation: [f32; 3],
    /// Radius times squash/stretch
    pub scale: [f32; 3],
    /// Euler angles (radians, XYZ)
    pub rotation: [f32; 3],
    pub color: [f32; 3],
}

impl BodyInstance {
    /// Floats per instance
    pub const STRIDE: usize = std::mem::size_of::<BodyInstance>() / std::mem::size_of::<f32>();

    pub fn from_body(body: &Body) -> Self {
        Self {
            translation: body.position.to_array(),
            scale: (body.visual_scale * body.radius()).to_array(),
            rotation: body.rotation.to_array(),
            color: body.color,
        }
    }
}

/// Raw bytes for GPU upload
pub fn instance_bytes(instances: &[BodyInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

/// Flat float view (12 floats per instance)
pub fn instance_floats(instances: &[BodyInstance]) -> &[f32] {
    bytemuck::cast_slice(instances)
}
