//! WebGPU quad renderer
//!
//! One pipeline, one unit-quad mesh and one instance buffer refilled from the
//! layout every frame.

pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::layout::Quad;
use crate::mesh::{create_unit_quad, Mesh};
use resources::QuadBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub quad_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,
    pub buffers: QuadBuffers,
    pub mesh: Mesh,
}

impl Renderer {
    /// `width` x `height` is the logical screen the camera spans
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        width: f32,
        height: f32,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::screen(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);
        let mesh = create_unit_quad(&ctx.device);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            quad_pipeline: pipes.quad_pipeline,
            camera_bind_group,
            buffers,
            mesh,
        })
    }

    pub fn draw(&mut self, quads: &[Quad]) -> Result<(), String> {
        draw::draw_frame(self, quads)
    }
}
