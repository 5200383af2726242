use crate::camera::{Camera, CameraUniform};
use crate::layout::Quad;
use wgpu::util::DeviceExt;
use wgpu::*;

/// Upper bound on quads per frame; anything beyond is dropped
pub const MAX_QUADS: usize = 256;

pub struct QuadBuffers {
    pub camera: Buffer,
    pub instances: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> QuadBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);
    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instances = device.create_buffer(&BufferDescriptor {
        label: Some("Quad Instance Buffer"),
        size: (std::mem::size_of::<Quad>() * MAX_QUADS) as u64,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    QuadBuffers {
        camera: camera_buffer,
        instances,
    }
}
