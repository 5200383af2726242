//! 2D orthographic camera over the logical screen

use glam::Mat4;

pub struct Camera {
    pub projection: Mat4,
}

impl Camera {
    /// Screen-space camera: (0, 0) top-left, (width, height) bottom-right
    pub fn screen(width: f32, height: f32) -> Self {
        let projection = Mat4::orthographic_rh(0.0, width, height, 0.0, -1.0, 1.0);
        Self { projection }
    }
}

/// Camera uniform data (matches WGSL struct, 256-byte aligned)
#[repr(C, align(256))]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_proj: [[f32; 4]; 4], // 64 bytes
    _padding: [f32; 48],      // pad to 256
}

impl CameraUniform {
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.projection.to_cols_array_2d(),
            _padding: [0.0; 48],
        }
    }
}
